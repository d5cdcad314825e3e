#![no_std]
pub mod access;
pub mod errors;
pub mod management;
pub mod role;
mod storage;
mod test;
pub mod transfer;
pub mod utils;
