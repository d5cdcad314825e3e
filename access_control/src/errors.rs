use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessControlError {
    Unauthorized = 100,
    AlreadyInRole = 102,
    NotInRole = 103,
    BadRoleUsage = 120,
}
