use crate::access::AccessControl;
use crate::errors::AccessControlError;
use crate::management::SingleAddressManagementTrait;
use crate::role::Role;
use soroban_sdk::{panic_with_error, Address};

pub trait TransferOwnershipTrait {
    // Hands a single address role over to `new_address` right away.
    // Returns the address that held the role before.
    fn transfer_ownership(&self, role: &Role, new_address: &Address) -> Address;
}

impl TransferOwnershipTrait for AccessControl {
    fn transfer_ownership(&self, role: &Role, new_address: &Address) -> Address {
        if role.has_many_users() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        let previous = self.get_role(role);
        self.set_role_address(role, new_address);
        previous
    }
}
