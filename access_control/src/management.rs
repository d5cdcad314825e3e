use crate::access::AccessControl;
use crate::errors::AccessControlError;
use crate::role::Role;
use soroban_sdk::{panic_with_error, Address, Vec};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;

pub trait SingleAddressManagementTrait {
    fn get_role_safe(&self, role: &Role) -> Option<Address>;
    fn get_role(&self, role: &Role) -> Address;
    fn set_role_address(&self, role: &Role, address: &Address);
}

pub trait MultipleAddressesManagementTrait {
    fn get_role_addresses(&self, role: &Role) -> Vec<Address>;
    fn add_role_address(&self, role: &Role, address: &Address) -> Result<(), AccessControlError>;
    fn remove_role_address(&self, role: &Role, address: &Address)
        -> Result<(), AccessControlError>;
}

impl SingleAddressManagementTrait for AccessControl {
    fn get_role_safe(&self, role: &Role) -> Option<Address> {
        if role.has_many_users() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        let key = self.get_key(role);
        bump_instance(&self.0);
        self.0.storage().instance().get(&key)
    }

    // single address roles are written at construction, so a missing one is a broken instance
    fn get_role(&self, role: &Role) -> Address {
        match self.get_role_safe(role) {
            Some(address) => address,
            None => panic_with_error!(&self.0, StorageError::ValueNotInitialized),
        }
    }

    fn set_role_address(&self, role: &Role, address: &Address) {
        if role.has_many_users() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        let key = self.get_key(role);
        bump_instance(&self.0);
        self.0.storage().instance().set(&key, address);
    }
}

impl MultipleAddressesManagementTrait for AccessControl {
    fn get_role_addresses(&self, role: &Role) -> Vec<Address> {
        if !role.has_many_users() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        let key = self.get_key(role);
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .get(&key)
            .unwrap_or(Vec::new(&self.0))
    }

    fn add_role_address(&self, role: &Role, address: &Address) -> Result<(), AccessControlError> {
        let mut addresses = self.get_role_addresses(role);
        if addresses.contains(address) {
            return Err(AccessControlError::AlreadyInRole);
        }

        addresses.push_back(address.clone());
        self.0
            .storage()
            .instance()
            .set(&self.get_key(role), &addresses);
        Ok(())
    }

    fn remove_role_address(
        &self,
        role: &Role,
        address: &Address,
    ) -> Result<(), AccessControlError> {
        let mut addresses = self.get_role_addresses(role);
        let index = match addresses.first_index_of(address) {
            Some(index) => index,
            None => return Err(AccessControlError::NotInRole),
        };

        addresses.remove(index);
        self.0
            .storage()
            .instance()
            .set(&self.get_key(role), &addresses);
        Ok(())
    }
}
