#![cfg(test)]

use crate::access::{AccessControl, AccessControlTrait};
use crate::errors::AccessControlError;
use crate::management::{MultipleAddressesManagementTrait, SingleAddressManagementTrait};
use crate::role::Role;
use crate::transfer::TransferOwnershipTrait;
use crate::utils::{require_admin, require_authority};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, vec, Address, Env};

#[contract]
pub struct DummyContract;

#[contractimpl]
impl DummyContract {
    pub fn ping(_e: Env) -> u32 {
        1
    }
}

fn with_contract<F: FnOnce(&Env)>(f: F) {
    let e = Env::default();
    let contract_id = e.register(DummyContract, ());
    e.as_contract(&contract_id, || f(&e));
}

#[test]
fn test_admin_role() {
    with_contract(|e| {
        let access_control = AccessControl::new(e);
        let admin = Address::generate(e);
        let user = Address::generate(e);

        assert_eq!(access_control.get_role_safe(&Role::Admin), None);
        assert!(!access_control.address_has_role(&admin, &Role::Admin));

        access_control.set_role_address(&Role::Admin, &admin);
        assert_eq!(access_control.get_role(&Role::Admin), admin);
        assert!(access_control.address_has_role(&admin, &Role::Admin));
        assert_eq!(require_admin(e, &admin), Ok(()));
        assert_eq!(
            require_admin(e, &user),
            Err(AccessControlError::Unauthorized)
        );
    });
}

#[test]
fn test_transfer_ownership() {
    with_contract(|e| {
        let access_control = AccessControl::new(e);
        let admin = Address::generate(e);
        let new_admin = Address::generate(e);

        access_control.set_role_address(&Role::Admin, &admin);
        let previous = access_control.transfer_ownership(&Role::Admin, &new_admin);
        assert_eq!(previous, admin);
        assert_eq!(access_control.get_role(&Role::Admin), new_admin);
        assert!(!access_control.address_has_role(&admin, &Role::Admin));
    });
}

#[test]
fn test_authority_set() {
    with_contract(|e| {
        let access_control = AccessControl::new(e);
        let auth1 = Address::generate(e);
        let auth2 = Address::generate(e);

        assert_eq!(access_control.get_role_addresses(&Role::Authority).len(), 0);
        assert_eq!(
            require_authority(e, &auth1),
            Err(AccessControlError::Unauthorized)
        );

        access_control
            .add_role_address(&Role::Authority, &auth1)
            .unwrap();
        access_control
            .add_role_address(&Role::Authority, &auth2)
            .unwrap();
        assert_eq!(
            access_control.add_role_address(&Role::Authority, &auth1),
            Err(AccessControlError::AlreadyInRole)
        );
        assert_eq!(
            access_control.get_role_addresses(&Role::Authority),
            vec![e, auth1.clone(), auth2.clone()]
        );
        assert_eq!(require_authority(e, &auth2), Ok(()));

        access_control
            .remove_role_address(&Role::Authority, &auth1)
            .unwrap();
        assert_eq!(
            access_control.remove_role_address(&Role::Authority, &auth1),
            Err(AccessControlError::NotInRole)
        );
        assert_eq!(
            access_control.get_role_addresses(&Role::Authority),
            vec![e, auth2.clone()]
        );
        assert!(!access_control.address_has_role(&auth1, &Role::Authority));
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #120)")]
fn test_single_address_api_on_authority() {
    with_contract(|e| {
        let access_control = AccessControl::new(e);
        access_control.get_role_safe(&Role::Authority);
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #501)")]
fn test_missing_admin() {
    with_contract(|e| {
        AccessControl::new(e).get_role(&Role::Admin);
    });
}
