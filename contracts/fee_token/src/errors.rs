use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    UnauthorizedCaller = 4,
    Paused = 5,
    SenderBlacklisted = 6,
    RecipientBlacklisted = 7,
    InsufficientBalance = 8,
    InvalidFee = 9,
    InvalidAmount = 10,
}
