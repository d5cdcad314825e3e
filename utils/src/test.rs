#![cfg(test)]

use crate::bump::{bump_instance, bump_persistent};
use crate::constant::{INSTANCE_BUMP_AMOUNT, PERSISTENT_BUMP_AMOUNT};
use crate::generate_instance_storage_getter_and_setter_with_default;
use soroban_sdk::testutils::storage::{Instance as _, Persistent as _};
use soroban_sdk::{contract, contractimpl, contracttype, Env};

#[contract]
pub struct DummyContract;

#[contractimpl]
impl DummyContract {
    pub fn ping(_e: Env) -> u32 {
        1
    }
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Counter,
    Entry(u32),
}

generate_instance_storage_getter_and_setter_with_default!(counter, DataKey::Counter, u64, 7);

#[test]
fn test_getter_falls_back_to_default() {
    let e = Env::default();
    let contract_id = e.register(DummyContract, ());
    e.as_contract(&contract_id, || {
        assert_eq!(get_counter(&e), 7);
        set_counter(&e, &42);
        assert_eq!(get_counter(&e), 42);
    });
}

#[test]
fn test_bump_instance() {
    let e = Env::default();
    let contract_id = e.register(DummyContract, ());
    e.as_contract(&contract_id, || {
        bump_instance(&e);
        assert_eq!(e.storage().instance().get_ttl(), INSTANCE_BUMP_AMOUNT);
    });
}

#[test]
fn test_bump_persistent() {
    let e = Env::default();
    let contract_id = e.register(DummyContract, ());
    e.as_contract(&contract_id, || {
        let key = DataKey::Entry(1);
        e.storage().persistent().set(&key, &1_u32);
        bump_persistent(&e, &key);
        assert_eq!(e.storage().persistent().get_ttl(&key), PERSISTENT_BUMP_AMOUNT);
    });
}
