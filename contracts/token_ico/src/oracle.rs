use soroban_sdk::{contractclient, contracttype, Env};

/// Latest settlement-asset/USD quote, 8 decimal places.
#[derive(Clone)]
#[contracttype]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

/// Interface of the external price feed contract.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_price(env: Env) -> PriceData;
}
