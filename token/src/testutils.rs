#![cfg(test)]
extern crate std;

use crate::{WaterCreditToken, WaterCreditTokenClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String, Vec};

pub fn create_token<'a>(e: &Env, admin: &Address) -> WaterCreditTokenClient<'a> {
    WaterCreditTokenClient::new(
        e,
        &e.register(
            WaterCreditToken {},
            (
                admin.clone(),
                7_u32,
                String::from_str(e, "Water Credit"),
                String::from_str(e, "WCT"),
            ),
        ),
    )
}

// Everything a failed call must leave untouched
#[derive(Debug, PartialEq)]
pub(crate) struct LedgerSnapshot {
    pub(crate) admin: Address,
    pub(crate) authorities: Vec<Address>,
    pub(crate) total_supply: i128,
    pub(crate) balances: std::vec::Vec<i128>,
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) authority: Address,
    pub(crate) user1: Address,
    pub(crate) user2: Address,
    pub(crate) token: WaterCreditTokenClient<'a>,
}

impl Default for Setup<'_> {
    // Create token with a single authority registered by the admin
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let authority = Address::generate(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);
        let token = create_token(&env, &admin);
        token.add_authority(&admin, &authority);

        Setup {
            env,
            admin,
            authority,
            user1,
            user2,
            token,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            admin: self.token.get_admin(),
            authorities: self.token.get_authorities(),
            total_supply: self.token.get_total_supply(),
            balances: [&self.admin, &self.authority, &self.user1, &self.user2]
                .iter()
                .map(|user| self.token.get_balance(user))
                .collect(),
        }
    }

    pub(crate) fn sum_of_balances(&self) -> i128 {
        self.snapshot().balances.iter().sum()
    }
}
