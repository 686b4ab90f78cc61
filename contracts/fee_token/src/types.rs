use soroban_sdk::{contracttype, Address, String};

#[derive(Clone)]
#[contracttype]
pub struct TokenConfig {
    pub owner: Address,
    pub fee_receiver: Address,
    pub multisig_wallet: Address,
    pub transfer_fee: u32,
    pub burn_fee: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimal: u32,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
pub enum DataKey {
    Config,
    Metadata,
    TotalSupply,
    Paused,
    Balance(Address),
    Blacklisted(Address),
    Whitelisted(Address),
}
