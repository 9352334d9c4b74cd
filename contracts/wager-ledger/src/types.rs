use soroban_sdk::{contracttype, Address, String, Vec};

/// A ledger account. Created lazily on the first balance-affecting
/// interaction (deposit, wager creation or acceptance) and never deleted.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub address: Address,
    pub balance: i128,
    pub wagers_created: u32,
    pub wagers_accepted: u32,
    pub won: u32,
    pub lost: u32,
}

/// A peer wager. Both sides stake the same amount; the stakes sit in escrow
/// (already debited from the parties' balances) until the wager resolves.
///
/// `agreed_admins` is empty while the wager is Open. On acceptance it becomes
/// a frozen copy of `proposed_admins` and is the sole authorization source for
/// settlement and dispute resolution from that point on; `proposed_admins` is
/// advisory only after acceptance.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wager {
    pub id: u64,
    pub creator: Address,
    pub acceptor: Option<Address>,
    pub description: String,
    pub creator_prediction: String,
    pub acceptor_prediction: Option<String>,
    pub stake_amount: i128,
    pub event_time: u64,
    pub expiration_time: u64,
    pub status: WagerStatus,
    pub winner: Option<Address>,
    pub created_at: u64,
    pub accepted_at: Option<u64>,
    pub settled_at: Option<u64>,
    pub dispute_deadline: Option<u64>,
    pub proposed_admins: Vec<Address>,
    pub agreed_admins: Vec<Address>,
}

/// An immutable ledger entry. Appended on every fund movement and never
/// revised afterwards.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: u64,
    pub user: Address,
    pub wager_id: Option<u64>,
    pub kind: TransactionKind,
    pub amount: i128,
    pub status: TransactionStatus,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispute {
    pub id: u64,
    pub wager_id: u64,
    pub disputing_user: Address,
    pub reason: String,
    pub status: DisputeStatus,
    pub resolution: Option<String>,
    pub created_at: u64,
    pub resolved_at: Option<u64>,
    pub resolved_by: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformStats {
    pub total_wagers: u32,
    pub total_volume: i128,
    pub fees_collected: i128,
    pub active_wagers: u32,
    pub pending_settlements: u32,
}

#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WagerStatus {
    Open,
    Accepted,
    PendingSettlement,
    Settled,
    Cancelled,
    Disputed,
    Refunded,
}

#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Escrow,
    Payout,
    Refund,
    Fee,
}

#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DisputeStatus {
    Open,
    Resolved,
    Rejected,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    User(Address),
    Wager(u64),
    Transaction(u64),
    Dispute(u64),
    WagerIds,
    UserWagers(Address),
    UserTransactions(Address),
    WagerDisputes(u64),
    WagerCount,
    TransactionCount,
    DisputeCount,
}
