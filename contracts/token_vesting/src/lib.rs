#![no_std]

mod contract;
mod errors;
mod storage;
mod types;


pub use contract::{VestingContract, VestingContractClient};
pub use errors::Error;
pub use types::VestingSchedule;
