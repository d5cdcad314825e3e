use crate::access::{AccessControl, AccessControlTrait};
use crate::errors::AccessControlError;
use crate::role::Role;
use soroban_sdk::{Address, Env};

pub fn require_admin(e: &Env, address: &Address) -> Result<(), AccessControlError> {
    AccessControl::new(e).assert_address_has_role(address, &Role::Admin)
}

pub fn require_authority(e: &Env, address: &Address) -> Result<(), AccessControlError> {
    AccessControl::new(e).assert_address_has_role(address, &Role::Authority)
}
