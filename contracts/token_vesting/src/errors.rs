use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    AmountZero = 4,
    StartDateInPast = 5,
    EndBeforeStart = 6,
    AlreadyVested = 7,
    InsufficientTokensForVesting = 8,
    NothingToRelease = 9,
    ScheduleNotFound = 10,
    CannotWithdrawVestedTokens = 11,
}
