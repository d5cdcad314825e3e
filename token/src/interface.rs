use crate::errors::TokenError;
use soroban_sdk::{Address, Env, String, Vec};

pub trait AdminInterface {
    // Hand the admin role over to another address
    fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<bool, TokenError>;

    // Grant minting rights
    fn add_authority(e: Env, caller: Address, new_auth: Address) -> Result<bool, TokenError>;

    // Revoke minting rights
    fn remove_authority(e: Env, caller: Address, old_auth: Address) -> Result<bool, TokenError>;

    fn get_admin(e: Env) -> Address;
    fn is_admin(e: Env, user: Address) -> bool;
    fn is_authority(e: Env, user: Address) -> bool;
    fn get_authorities(e: Env) -> Vec<Address>;
}

pub trait LedgerInterface {
    // Create new supply for `recipient`. Authorities only
    fn mint(e: Env, caller: Address, recipient: Address, amount: i128) -> Result<bool, TokenError>;

    // Destroy `amount` of the caller's own tokens
    fn burn(e: Env, caller: Address, amount: i128) -> Result<bool, TokenError>;

    // Move tokens between two distinct accounts
    fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<bool, TokenError>;

    fn get_balance(e: Env, user: Address) -> i128;
    fn get_total_supply(e: Env) -> i128;
}

pub trait MetadataInterface {
    fn decimals(e: Env) -> u32;
    fn name(e: Env) -> String;
    fn symbol(e: Env) -> String;
}
