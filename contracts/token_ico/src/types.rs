use soroban_sdk::{contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,
    pub payment_token: Address,
    pub price_feed: Address,
    pub soft_cap: i128,
    pub hard_cap: i128,
    pub start: u64,
    pub end: u64,
    pub project_wallet: Address,
    pub max_price_age: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
    Owner,
    Started,
    SoftCapReached,
    UnsoldRecovered,
    Finalized,
    TotalSold,
    Contribution(Address),
    TokensPurchased(Address),
}
