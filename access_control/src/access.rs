use crate::errors::AccessControlError;
use crate::management::{MultipleAddressesManagementTrait, SingleAddressManagementTrait};
use crate::role::Role;
use crate::storage::DataKey;
use soroban_sdk::{Address, Env};

#[derive(Clone)]
pub struct AccessControl(pub(crate) Env);

impl AccessControl {
    pub fn new(env: &Env) -> AccessControl {
        AccessControl(env.clone())
    }

    pub(crate) fn get_key(&self, role: &Role) -> DataKey {
        match role {
            Role::Admin => DataKey::Admin,
            Role::Authority => DataKey::Authorities,
        }
    }
}

pub trait AccessControlTrait {
    fn address_has_role(&self, address: &Address, role: &Role) -> bool;
    fn assert_address_has_role(
        &self,
        address: &Address,
        role: &Role,
    ) -> Result<(), AccessControlError>;
}

impl AccessControlTrait for AccessControl {
    fn address_has_role(&self, address: &Address, role: &Role) -> bool {
        if role.has_many_users() {
            return self.get_role_addresses(role).contains(address);
        }

        match self.get_role_safe(role) {
            Some(role_address) => address == &role_address,
            None => false,
        }
    }

    fn assert_address_has_role(
        &self,
        address: &Address,
        role: &Role,
    ) -> Result<(), AccessControlError> {
        match self.address_has_role(address, role) {
            true => Ok(()),
            false => Err(AccessControlError::Unauthorized),
        }
    }
}
