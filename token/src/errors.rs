use access_control::errors::AccessControlError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    Unauthorized = 100,
    InsufficientBalance = 101,
    AlreadyAuthority = 102,
    NotAuthority = 103,
    SelfTransferRejected = 104,
    InvalidAmount = 105,
    AmountOverflow = 106,
    DecimalTooLarge = 107,
    BadRoleUsage = 120,
}

impl From<AccessControlError> for TokenError {
    fn from(err: AccessControlError) -> Self {
        match err {
            AccessControlError::Unauthorized => TokenError::Unauthorized,
            AccessControlError::AlreadyInRole => TokenError::AlreadyAuthority,
            AccessControlError::NotInRole => TokenError::NotAuthority,
            AccessControlError::BadRoleUsage => TokenError::BadRoleUsage,
        }
    }
}
