use soroban_sdk::{contracttype, Address};

/// One schedule per beneficiary, immutable after creation except through
/// `release` and `revoke_vesting`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub total_amount: i128,
    pub released: i128,
    pub start: u64,
    pub cliff: u64,
    pub end: u64,
    pub revoked: bool,
}

#[contracttype]
pub enum DataKey {
    Token,
    Owner,
    Obligation,
    Accounts,
    Schedule(Address),
}
