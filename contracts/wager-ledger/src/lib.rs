#![no_std]

mod accounting;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod types;
mod wager_trait;

pub use contract::{WagerLedgerContract, WagerLedgerContractClient};
pub use errors::WagerError;
pub use types::{
    Dispute, DisputeStatus, PlatformStats, Transaction, TransactionKind, TransactionStatus, User,
    Wager, WagerStatus,
};
pub use wager_trait::{WagerLedger, WagerLedgerClient};
