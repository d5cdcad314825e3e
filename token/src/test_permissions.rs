#![cfg(test)]

use crate::testutils::Setup;
use crate::TokenError;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{vec, Address, IntoVal, Vec};

// transfer admin
#[test]
fn test_transfer_admin() {
    let setup = Setup::default();
    let token = setup.token;
    let admin_original = setup.admin;
    let admin_new = Address::generate(&setup.env);

    assert_eq!(token.try_transfer_admin(&admin_original, &admin_new), Ok(Ok(true)));
    assert_eq!(token.get_admin(), admin_new);
    assert!(token.is_admin(&admin_new));
    assert!(!token.is_admin(&admin_original));

    // old admin lost every admin-gated call
    assert_eq!(
        token.try_transfer_admin(&admin_original, &admin_original),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        token.try_add_authority(&admin_original, &setup.user1),
        Err(Ok(TokenError::Unauthorized))
    );

    token.add_authority(&admin_new, &setup.user1);
    assert!(token.is_authority(&setup.user1));
}

#[test]
fn test_transfer_admin_to_self() {
    let setup = Setup::default();
    let token = setup.token;

    assert_eq!(token.try_transfer_admin(&setup.admin, &setup.admin), Ok(Ok(true)));
    assert_eq!(token.get_admin(), setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn test_transfer_admin_third_party_user() {
    let setup = Setup::default();
    setup.token.transfer_admin(&setup.user1, &setup.user1);
}

#[test]
fn test_transfer_admin_by_authority() {
    let setup = Setup::default();
    let before = setup.snapshot();
    assert_eq!(
        setup
            .token
            .try_transfer_admin(&setup.authority, &setup.authority),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(setup.snapshot(), before);
}

// authorities
#[test]
fn test_add_authority_third_party_user() {
    let setup = Setup::default();
    let before = setup.snapshot();

    assert_eq!(
        setup.token.try_add_authority(&setup.user1, &setup.user1),
        Err(Ok(TokenError::Unauthorized))
    );
    // authorities can mint but not manage each other
    assert_eq!(
        setup.token.try_add_authority(&setup.authority, &setup.user2),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(setup.snapshot(), before);
}

#[test]
fn test_add_authority_twice() {
    let setup = Setup::default();
    let before = setup.snapshot();

    assert_eq!(
        setup.token.try_add_authority(&setup.admin, &setup.authority),
        Err(Ok(TokenError::AlreadyAuthority))
    );
    assert_eq!(setup.snapshot(), before);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn add_authority_twice() {
    let setup = Setup::default();
    setup.token.add_authority(&setup.admin, &setup.authority);
}

#[test]
fn test_remove_authority() {
    let setup = Setup::default();
    let token = &setup.token;
    token.add_authority(&setup.admin, &setup.user2);
    assert_eq!(
        token.get_authorities(),
        vec![&setup.env, setup.authority.clone(), setup.user2.clone()]
    );

    assert_eq!(
        token.try_remove_authority(&setup.admin, &setup.authority),
        Ok(Ok(true))
    );
    assert!(!token.is_authority(&setup.authority));
    assert_eq!(token.get_authorities(), vec![&setup.env, setup.user2.clone()]);
    assert_eq!(
        token.try_mint(&setup.authority, &setup.user1, &10),
        Err(Ok(TokenError::Unauthorized))
    );

    // re-adding a removed authority restores minting
    token.add_authority(&setup.admin, &setup.authority);
    token.mint(&setup.authority, &setup.user1, &10);
    assert_eq!(token.get_balance(&setup.user1), 10);
}

#[test]
fn test_remove_authority_not_present() {
    let setup = Setup::default();
    let before = setup.snapshot();

    assert_eq!(
        setup.token.try_remove_authority(&setup.admin, &setup.user1),
        Err(Ok(TokenError::NotAuthority))
    );
    assert_eq!(setup.snapshot(), before);
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")]
fn remove_authority_not_present() {
    let setup = Setup::default();
    setup.token.remove_authority(&setup.admin, &setup.user1);
}

#[test]
fn test_remove_authority_third_party_user() {
    let setup = Setup::default();
    let before = setup.snapshot();

    // access check comes first, even for an address that is not an authority
    assert_eq!(
        setup.token.try_remove_authority(&setup.user1, &setup.user2),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        setup
            .token
            .try_remove_authority(&setup.authority, &setup.authority),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(setup.snapshot(), before);
}

// host authentication
#[test]
fn test_admin_call_without_auth() {
    let setup = Setup::default();
    setup.env.set_auths(&[]);

    assert!(setup
        .token
        .try_add_authority(&setup.admin, &setup.user1)
        .is_err());
    assert!(!setup.token.is_authority(&setup.user1));
}

#[test]
fn test_transfer_signed_by_other_user() {
    let setup = Setup::default();
    let token = &setup.token;
    token.mint(&setup.authority, &setup.user1, &100);

    // user2 signs a transfer that debits user1
    assert!(token
        .mock_auths(&[MockAuth {
            address: &setup.user2,
            invoke: &MockAuthInvoke {
                contract: &token.address,
                fn_name: "transfer",
                args: Vec::from_array(
                    &setup.env,
                    [
                        setup.user1.into_val(&setup.env),
                        setup.user2.into_val(&setup.env),
                        50_i128.into_val(&setup.env),
                    ]
                ),
                sub_invokes: &[],
            },
        }])
        .try_transfer(&setup.user1, &setup.user2, &50)
        .is_err());
    assert_eq!(token.get_balance(&setup.user1), 100);
    assert_eq!(token.get_balance(&setup.user2), 0);
}

#[test]
fn test_mint_signed_by_authority() {
    let setup = Setup::default();
    let token = &setup.token;

    token
        .mock_auths(&[MockAuth {
            address: &setup.authority,
            invoke: &MockAuthInvoke {
                contract: &token.address,
                fn_name: "mint",
                args: Vec::from_array(
                    &setup.env,
                    [
                        setup.authority.into_val(&setup.env),
                        setup.user1.into_val(&setup.env),
                        25_i128.into_val(&setup.env),
                    ],
                ),
                sub_invokes: &[],
            },
        }])
        .mint(&setup.authority, &setup.user1, &25);
    assert_eq!(token.get_balance(&setup.user1), 25);
}
