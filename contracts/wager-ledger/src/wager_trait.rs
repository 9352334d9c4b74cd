use soroban_sdk::{contractclient, Address, Env, String, Symbol, Vec};

use crate::types::{Dispute, PlatformStats, Transaction, User, Wager};

#[contractclient(name = "WagerLedgerClient")]
pub trait WagerLedger {
    /// Credits a validated external deposit to the user's balance and
    /// returns the new balance.
    fn deposit(env: Env, user: Address, amount: i128) -> i128;

    /// Opens a wager, escrows the creator's stake and returns the wager id.
    fn create_wager(
        env: Env,
        creator: Address,
        description: String,
        prediction: String,
        stake_amount: i128,
        expiration_hours: u32,
        proposed_admins: Vec<Address>,
    ) -> u64;

    /// Matches an open wager, escrows the acceptor's stake and freezes the
    /// admin set.
    fn accept_wager(env: Env, wager_id: u64, acceptor: Address, prediction: String);

    /// Creator-only cancellation of a still-open wager; refunds the escrowed
    /// stake.
    fn cancel_wager(env: Env, wager_id: u64, caller: Address);

    /// Declares a winner and distributes the pool. Admin-only.
    fn settle_wager(env: Env, wager_id: u64, caller: Address, winner: Address);

    /// Declares a tie and refunds both stakes in full. Admin-only.
    fn tie_wager(env: Env, wager_id: u64, caller: Address);

    /// Opens a dispute against a settled wager within the dispute window and
    /// returns the dispute id.
    fn dispute_wager(env: Env, wager_id: u64, caller: Address, reason: String) -> u64;

    /// Closes an open dispute. `action` is "uphold", "reverse" or "refund".
    /// Admin-only.
    fn resolve_dispute(env: Env, dispute_id: u64, caller: Address, action: Symbol);

    /// Permissionless time sweep: refunds expired open wagers and flags
    /// accepted wagers whose event time has passed. Returns
    /// (expired, now_pending) counts.
    fn sweep(env: Env) -> (u32, u32);

    fn get_wager(env: Env, wager_id: u64) -> Wager;
    fn get_dispute(env: Env, dispute_id: u64) -> Dispute;
    fn list_open_wagers(env: Env) -> Vec<Wager>;
    fn list_user_wagers(env: Env, user: Address) -> Vec<Wager>;
    fn list_active_wagers(env: Env, user: Address) -> Vec<Wager>;
    fn get_user_history(env: Env, user: Address) -> Vec<Wager>;
    fn get_user(env: Env, user: Address) -> User;
    fn get_balance(env: Env, user: Address) -> i128;
    fn get_user_transactions(env: Env, user: Address) -> Vec<Transaction>;
    fn get_platform_stats(env: Env) -> PlatformStats;
}
