#![cfg(test)]

use crate::errors::Error;
use crate::{FeeTokenContract, FeeTokenContractClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String, Vec};

const DEC: i128 = 1_000_000_000_000_000_000;
const SUPPLY: i128 = 875_000_000 * DEC;

fn setup(env: &Env) -> (FeeTokenContractClient, Address, Address, Address) {
    env.mock_all_auths();

    let contract_id = env.register_contract(None, FeeTokenContract);
    let client = FeeTokenContractClient::new(env, &contract_id);

    let owner = Address::generate(env);
    let fee_receiver = Address::generate(env);
    let multisig = Address::generate(env);

    client.initialize(
        &owner,
        &fee_receiver,
        &multisig,
        &SUPPLY,
        &String::from_str(env, "Zephyr"),
        &String::from_str(env, "ZPH"),
        &Vec::new(env),
    );
    (client, owner, fee_receiver, multisig)
}

// ==================== Initialization ====================

#[test]
fn test_initialize_mints_supply_to_owner() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);

    assert_eq!(client.balance(&owner), SUPPLY);
    assert_eq!(client.total_supply(), SUPPLY);
    assert_eq!(client.transfer_fee(), 0);
    assert_eq!(client.burn_fee(), 0);
    assert_eq!(client.decimals(), 18);
    assert_eq!(client.name(), String::from_str(&env, "Zephyr"));
}

#[test]
fn test_initialize_twice_fails() {
    let env = Env::default();
    let (client, owner, fee_receiver, multisig) = setup(&env);

    let result = client.try_initialize(
        &owner,
        &fee_receiver,
        &multisig,
        &SUPPLY,
        &String::from_str(&env, "Zephyr"),
        &String::from_str(&env, "ZPH"),
        &Vec::new(&env),
    );
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}

#[test]
fn test_initialize_with_seed_blacklist() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register_contract(None, FeeTokenContract);
    let client = FeeTokenContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let listed = Address::generate(&env);
    client.initialize(
        &owner,
        &owner,
        &owner,
        &SUPPLY,
        &String::from_str(&env, "Zephyr"),
        &String::from_str(&env, "ZPH"),
        &vec![&env, listed.clone()],
    );

    assert!(client.is_blacklisted(&listed));
    assert!(!client.is_blacklisted(&owner));
}

// ==================== Transfers & fees ====================

#[test]
fn test_transfer_without_fee() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);
    let recipient = Address::generate(&env);

    client.transfer(&owner, &recipient, &(100 * DEC));

    assert_eq!(client.balance(&recipient), 100 * DEC);
    assert_eq!(client.balance(&owner), SUPPLY - 100 * DEC);
}

#[test]
fn test_transfer_routes_percent_fee() {
    let env = Env::default();
    let (client, owner, fee_receiver, _) = setup(&env);
    let recipient = Address::generate(&env);

    client.update_fee(&owner, &1, &0);
    client.transfer(&owner, &recipient, &(500 * DEC));

    assert_eq!(client.balance(&recipient), 495 * DEC);
    assert_eq!(client.balance(&fee_receiver), 5 * DEC);
    assert_eq!(client.balance(&owner), SUPPLY - 500 * DEC);
    // Fees redistribute value; they never create or destroy it.
    assert_eq!(client.total_supply(), SUPPLY);
}

#[test]
fn test_transfer_insufficient_balance() {
    let env = Env::default();
    let (client, _, _, _) = setup(&env);
    let poor = Address::generate(&env);
    let recipient = Address::generate(&env);

    let result = client.try_transfer(&poor, &recipient, &DEC);
    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
    assert_eq!(client.balance(&recipient), 0);
}

#[test]
fn test_transfer_rejects_non_positive_amount() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);
    let recipient = Address::generate(&env);

    let result = client.try_transfer(&owner, &recipient, &0);
    assert_eq!(result, Err(Ok(Error::InvalidAmount)));
}

// ==================== Burn ====================

#[test]
fn test_burn_reduces_supply() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);

    client.burn(&owner, &(100 * DEC));

    assert_eq!(client.balance(&owner), SUPPLY - 100 * DEC);
    assert_eq!(client.total_supply(), SUPPLY - 100 * DEC);
}

#[test]
fn test_burn_with_fee_conserves_accounting() {
    let env = Env::default();
    let (client, owner, fee_receiver, _) = setup(&env);

    client.update_fee(&owner, &0, &2);
    client.burn(&owner, &(100 * DEC));

    // 2% of the burn goes to the fee receiver, the rest leaves the supply.
    assert_eq!(client.balance(&fee_receiver), 2 * DEC);
    assert_eq!(client.balance(&owner), SUPPLY - 100 * DEC);
    assert_eq!(client.total_supply(), SUPPLY - 98 * DEC);
    assert_eq!(
        client.balance(&owner) + client.balance(&fee_receiver),
        client.total_supply()
    );
}

// ==================== Pause ====================

#[test]
fn test_pause_blocks_transfer_but_not_burn() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);
    let recipient = Address::generate(&env);

    client.pause(&owner);
    assert!(client.paused());

    let result = client.try_transfer(&owner, &recipient, &DEC);
    assert_eq!(result, Err(Ok(Error::Paused)));

    client.burn(&owner, &DEC);
    assert_eq!(client.total_supply(), SUPPLY - DEC);

    client.unpause(&owner);
    client.transfer(&owner, &recipient, &DEC);
    assert_eq!(client.balance(&recipient), DEC);
}

#[test]
fn test_only_owner_can_pause() {
    let env = Env::default();
    let (client, _, _, _) = setup(&env);
    let rogue = Address::generate(&env);

    let result = client.try_pause(&rogue);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    assert!(!client.paused());
}

// ==================== Access lists ====================

#[test]
fn test_blacklisted_sender_cannot_transfer() {
    let env = Env::default();
    let (client, owner, _, multisig) = setup(&env);
    let recipient = Address::generate(&env);

    client.add_blacklist(&multisig, &owner);

    let result = client.try_transfer(&owner, &recipient, &DEC);
    assert_eq!(result, Err(Ok(Error::SenderBlacklisted)));

    client.remove_blacklist(&multisig, &owner);
    client.transfer(&owner, &recipient, &DEC);
    assert_eq!(client.balance(&recipient), DEC);
}

#[test]
fn test_blacklisted_recipient_cannot_receive() {
    let env = Env::default();
    let (client, owner, _, multisig) = setup(&env);
    let recipient = Address::generate(&env);

    client.add_blacklist(&multisig, &recipient);

    let result = client.try_transfer(&owner, &recipient, &DEC);
    assert_eq!(result, Err(Ok(Error::RecipientBlacklisted)));
    assert_eq!(client.balance(&recipient), 0);
}

#[test]
fn test_only_multisig_mutates_lists() {
    let env = Env::default();
    let (client, owner, _, multisig) = setup(&env);
    let account = Address::generate(&env);

    // The owner is not the multisig in this fixture.
    let result = client.try_add_blacklist(&owner, &account);
    assert_eq!(result, Err(Ok(Error::UnauthorizedCaller)));
    assert!(!client.is_blacklisted(&account));

    client.add_blacklist(&multisig, &account);
    // Idempotent.
    client.add_blacklist(&multisig, &account);
    assert!(client.is_blacklisted(&account));

    let result = client.try_remove_blacklist(&owner, &account);
    assert_eq!(result, Err(Ok(Error::UnauthorizedCaller)));
    client.remove_blacklist(&multisig, &account);
    assert!(!client.is_blacklisted(&account));
}

#[test]
fn test_whitelist_is_tracked_and_queryable() {
    let env = Env::default();
    let (client, _, _, multisig) = setup(&env);
    let account = Address::generate(&env);

    assert!(!client.is_whitelisted(&account));
    client.add_whitelist(&multisig, &account);
    assert!(client.is_whitelisted(&account));
    client.remove_whitelist(&multisig, &account);
    assert!(!client.is_whitelisted(&account));
}

#[test]
fn test_multisig_rotation() {
    let env = Env::default();
    let (client, _, _, multisig) = setup(&env);
    let new_multisig = Address::generate(&env);
    let account = Address::generate(&env);

    let result = client.try_update_multisig_wallet(&new_multisig, &new_multisig);
    assert_eq!(result, Err(Ok(Error::UnauthorizedCaller)));

    client.update_multisig_wallet(&multisig, &new_multisig);
    assert_eq!(client.multisig_wallet(), new_multisig);

    // The previous multisig loses its list privileges.
    let result = client.try_add_blacklist(&multisig, &account);
    assert_eq!(result, Err(Ok(Error::UnauthorizedCaller)));
    client.add_blacklist(&new_multisig, &account);
    assert!(client.is_blacklisted(&account));
}

// ==================== Fees & ownership admin ====================

#[test]
fn test_update_fee_bounds() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);

    let result = client.try_update_fee(&owner, &101, &0);
    assert_eq!(result, Err(Ok(Error::InvalidFee)));
    let result = client.try_update_fee(&owner, &0, &101);
    assert_eq!(result, Err(Ok(Error::InvalidFee)));

    client.update_fee(&owner, &100, &100);
    assert_eq!(client.transfer_fee(), 100);
    assert_eq!(client.burn_fee(), 100);
}

#[test]
fn test_only_owner_updates_fee() {
    let env = Env::default();
    let (client, _, _, _) = setup(&env);
    let rogue = Address::generate(&env);

    let result = client.try_update_fee(&rogue, &1, &1);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_transfer_ownership() {
    let env = Env::default();
    let (client, owner, _, _) = setup(&env);
    let new_owner = Address::generate(&env);

    let result = client.try_transfer_ownership(&new_owner, &new_owner);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));

    client.transfer_ownership(&owner, &new_owner);
    assert_eq!(client.owner(), new_owner);

    // The old owner can no longer administer fees.
    let result = client.try_update_fee(&owner, &1, &0);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
    client.update_fee(&new_owner, &1, &0);
    assert_eq!(client.transfer_fee(), 1);
}
