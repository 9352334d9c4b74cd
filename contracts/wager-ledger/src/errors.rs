use soroban_sdk::contracterror;

/// The error codes for the contract, grouped by kind:
/// 1-9 general, 100-199 not-found, 200-299 validation, 300-399 state/eligibility.
#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WagerError {
    InternalError = 1,
    NegativeAmount = 2,
    InsufficientBalance = 3,
    UnauthorizedError = 4,
    InvalidAction = 5,

    WagerNotFound = 100,
    UserNotFound = 101,
    DisputeNotFound = 102,

    StakeTooLow = 200,
    StakeTooHigh = 201,
    InvalidExpiration = 202,
    NoAdminsProposed = 203,
    TooManyAdmins = 204,
    DuplicateAdmin = 205,
    CreatorAsAdmin = 206,
    EmptyDescription = 207,
    EmptyPrediction = 208,
    EmptyReason = 209,

    WagerNotOpen = 300,
    WagerExpired = 301,
    SelfAccept = 302,
    NotCreator = 303,
    WagerNotSettleable = 304,
    AcceptorMissing = 305,
    InvalidWinner = 306,
    WagerNotSettled = 307,
    NotParticipant = 308,
    DisputeWindowClosed = 309,
    DisputeAlreadyOpen = 310,
    WagerNotDisputed = 311,
    DisputeNotOpen = 312,
}
