//! Water credit token. The admin manages a set of authorities, authorities
//! mint credits, and holders transfer or burn their own credits.
//!
//! Every state changing entrypoint authenticates the acting address first,
//! then validates everything, and only then writes to storage. A call that
//! returns an error leaves the ledger untouched.
use crate::balance;
use crate::balance::{read_balance, receive_balance, spend_balance, write_balance};
use crate::errors::TokenError;
use crate::interface::{AdminInterface, LedgerInterface, MetadataInterface};
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::management::{MultipleAddressesManagementTrait, SingleAddressManagementTrait};
use access_control::role::{Role, SymbolRepresentation};
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::{require_admin, require_authority};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, Vec};
use soroban_token_sdk::metadata::TokenMetadata;
use utils::bump::bump_instance;

fn check_positive_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 1 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

#[contract]
pub struct WaterCreditToken;

#[contractimpl]
impl WaterCreditToken {
    // Initializes the token.
    //
    // # Arguments
    //
    // * `admin` - The address allowed to manage authorities.
    // * `decimal` - Number of decimals, must fit in a u8.
    // * `name` - Token name.
    // * `symbol` - Token symbol.
    pub fn __constructor(e: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if decimal > u8::MAX.into() {
            panic_with_error!(&e, TokenError::DecimalTooLarge);
        }

        AccessControl::new(&e).set_role_address(&Role::Admin, &admin);
        balance::set_total_supply(&e, &0);
        write_metadata(
            &e,
            TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
    }
}

#[contractimpl]
impl AdminInterface for WaterCreditToken {
    // Replaces the admin. No check that the new admin differs from the current one.
    //
    // # Arguments
    //
    // * `caller` - The current admin.
    // * `new_admin` - The address taking over the admin role.
    fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<bool, TokenError> {
        caller.require_auth();
        require_admin(&e, &caller)?;

        AccessControl::new(&e).transfer_ownership(&Role::Admin, &new_admin);
        log!(
            &e,
            "{} transferred: {} -> {}",
            Role::Admin.as_symbol(&e),
            caller,
            new_admin
        );
        Ok(true)
    }

    // Adds a minting authority.
    //
    // # Arguments
    //
    // * `caller` - The admin.
    // * `new_auth` - Address to grant minting rights to. Must not be an authority yet.
    fn add_authority(e: Env, caller: Address, new_auth: Address) -> Result<bool, TokenError> {
        caller.require_auth();
        require_admin(&e, &caller)?;

        AccessControl::new(&e).add_role_address(&Role::Authority, &new_auth)?;
        log!(
            &e,
            "{} added: {}",
            Role::Authority.as_symbol(&e),
            new_auth
        );
        Ok(true)
    }

    // Removes a minting authority.
    //
    // # Arguments
    //
    // * `caller` - The admin.
    // * `old_auth` - Address to revoke minting rights from. Must be an authority.
    fn remove_authority(e: Env, caller: Address, old_auth: Address) -> Result<bool, TokenError> {
        caller.require_auth();
        require_admin(&e, &caller)?;

        AccessControl::new(&e).remove_role_address(&Role::Authority, &old_auth)?;
        log!(
            &e,
            "{} removed: {}",
            Role::Authority.as_symbol(&e),
            old_auth
        );
        Ok(true)
    }

    fn get_admin(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Admin)
    }

    fn is_admin(e: Env, user: Address) -> bool {
        AccessControl::new(&e).address_has_role(&user, &Role::Admin)
    }

    fn is_authority(e: Env, user: Address) -> bool {
        AccessControl::new(&e).address_has_role(&user, &Role::Authority)
    }

    fn get_authorities(e: Env) -> Vec<Address> {
        AccessControl::new(&e).get_role_addresses(&Role::Authority)
    }
}

#[contractimpl]
impl LedgerInterface for WaterCreditToken {
    // Mints new credits. The admin is not an authority unless added explicitly.
    //
    // # Arguments
    //
    // * `caller` - A minting authority.
    // * `recipient` - Account credited with the new supply.
    // * `amount` - Amount to mint, at least 1.
    fn mint(e: Env, caller: Address, recipient: Address, amount: i128) -> Result<bool, TokenError> {
        caller.require_auth();
        require_authority(&e, &caller)?;
        check_positive_amount(amount)?;

        bump_instance(&e);

        let total_supply = balance::get_total_supply(&e)
            .checked_add(amount)
            .ok_or(TokenError::AmountOverflow)?;
        receive_balance(&e, recipient.clone(), amount)?;
        balance::set_total_supply(&e, &total_supply);

        log!(&e, "mint: {} -> {} ({})", caller, recipient, amount);
        Ok(true)
    }

    // Burns credits from the caller's own balance.
    //
    // # Arguments
    //
    // * `caller` - Holder of the credits being destroyed.
    // * `amount` - Amount to burn, at least 1.
    fn burn(e: Env, caller: Address, amount: i128) -> Result<bool, TokenError> {
        caller.require_auth();
        check_positive_amount(amount)?;

        bump_instance(&e);

        spend_balance(&e, caller.clone(), amount)?;
        balance::decrease_total_supply(&e, amount);

        log!(&e, "burn: {} ({})", caller, amount);
        Ok(true)
    }

    // Moves credits between two different accounts. Total supply is unchanged.
    //
    // # Arguments
    //
    // * `from` - Sender, must authorize the call.
    // * `to` - Receiver, must differ from `from`.
    // * `amount` - Amount to move, at least 1.
    fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<bool, TokenError> {
        from.require_auth();

        if from == to {
            return Err(TokenError::SelfTransferRejected);
        }
        check_positive_amount(amount)?;

        bump_instance(&e);

        let from_balance = read_balance(&e, from.clone());
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance);
        }
        let to_balance = read_balance(&e, to.clone())
            .checked_add(amount)
            .ok_or(TokenError::AmountOverflow)?;

        write_balance(&e, from, from_balance - amount);
        write_balance(&e, to, to_balance);
        Ok(true)
    }

    fn get_balance(e: Env, user: Address) -> i128 {
        read_balance(&e, user)
    }

    fn get_total_supply(e: Env) -> i128 {
        balance::get_total_supply(&e)
    }
}

#[contractimpl]
impl MetadataInterface for WaterCreditToken {
    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }
}
