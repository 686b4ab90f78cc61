use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_started(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Started)
        .unwrap_or(false)
}

pub fn set_started(env: &Env) {
    env.storage().instance().set(&DataKey::Started, &true);
}

pub fn is_soft_cap_reached(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::SoftCapReached)
        .unwrap_or(false)
}

pub fn set_soft_cap_reached(env: &Env) {
    env.storage().instance().set(&DataKey::SoftCapReached, &true);
}

pub fn is_unsold_recovered(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::UnsoldRecovered)
        .unwrap_or(false)
}

pub fn set_unsold_recovered(env: &Env) {
    env.storage().instance().set(&DataKey::UnsoldRecovered, &true);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn set_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

pub fn read_total_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSold)
        .unwrap_or(0)
}

pub fn write_total_sold(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSold, &amount);
}

pub fn read_contribution(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(contributor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(env: &Env, contributor: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(contributor.clone()), &amount);
}

pub fn read_tokens_purchased(env: &Env, contributor: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TokensPurchased(contributor.clone()))
        .unwrap_or(0)
}

pub fn write_tokens_purchased(env: &Env, contributor: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TokensPurchased(contributor.clone()), &amount);
}
