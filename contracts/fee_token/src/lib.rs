#![no_std]

mod contract;
mod errors;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use contract::{FeeTokenContract, FeeTokenContractClient};
pub use errors::Error;
pub use types::{TokenConfig, TokenMetadata};
