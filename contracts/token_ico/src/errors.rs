use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidConfig = 4,
    IcoNotActive = 5,
    IcoNotEnded = 6,
    NotFinalized = 7,
    UnsoldTokensNotRecovered = 8,
    HardcapReached = 9,
    ContributionTooLow = 10,
    ContributionTooHigh = 11,
    SoftcapNotReached = 12,
    SoftCapReached = 13,
    NoContribution = 14,
    StalePrice = 15,
    InvalidAmount = 16,
}
