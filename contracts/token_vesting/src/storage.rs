use crate::types::*;
use soroban_sdk::{Address, Env, Vec};

pub fn has_token(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn read_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_obligation(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Obligation)
        .unwrap_or(0)
}

pub fn write_obligation(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::Obligation, &amount);
}

pub fn read_accounts(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Accounts)
        .unwrap_or(Vec::new(env))
}

pub fn write_accounts(env: &Env, accounts: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Accounts, accounts);
}

pub fn read_schedule(env: &Env, beneficiary: &Address) -> Option<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedule(beneficiary.clone()))
}

pub fn write_schedule(env: &Env, beneficiary: &Address, schedule: &VestingSchedule) {
    env.storage()
        .persistent()
        .set(&DataKey::Schedule(beneficiary.clone()), schedule);
}
