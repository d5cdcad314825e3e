#![no_std]

mod balance;
mod contract;
mod errors;
mod interface;
mod metadata;
mod test_permissions;
mod testutils;

pub use crate::contract::{WaterCreditToken, WaterCreditTokenClient};
pub use crate::errors::TokenError;
