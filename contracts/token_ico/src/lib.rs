#![no_std]

mod contract;
mod errors;
mod oracle;
mod storage;
mod types;


pub use contract::{IcoContract, IcoContractClient};
pub use errors::Error;
pub use oracle::{PriceData, PriceFeed, PriceFeedClient};
pub use types::SaleConfig;
