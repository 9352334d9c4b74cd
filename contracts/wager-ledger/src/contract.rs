use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, Env, String, Symbol, Vec,
};

use crate::accounting;
use crate::constants::{DISPUTE_WINDOW_SECONDS, ONE_HOUR_SECONDS};
use crate::errors::WagerError;
use crate::events::WagerEvents;
use crate::storage;
use crate::types::{
    Dispute, DisputeStatus, PlatformStats, Transaction, TransactionKind, TransactionStatus, User,
    Wager, WagerStatus,
};
use crate::wager_trait::WagerLedger;

#[contract]
pub struct WagerLedgerContract;

#[contractimpl]
impl WagerLedger for WagerLedgerContract {
    fn deposit(env: Env, user: Address, amount: i128) -> i128 {
        user.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, WagerError::NegativeAmount);
        }

        let mut account = storage::get_or_create_user(&env, &user);
        account.balance += amount;
        storage::set_user(&env, &account);

        record_transaction(&env, &user, None, TransactionKind::Deposit, amount);
        WagerEvents::deposit(&env, user, amount, account.balance);
        account.balance
    }

    fn create_wager(
        env: Env,
        creator: Address,
        description: String,
        prediction: String,
        stake_amount: i128,
        expiration_hours: u32,
        proposed_admins: Vec<Address>,
    ) -> u64 {
        creator.require_auth();
        if description.len() == 0 {
            panic_with_error!(&env, WagerError::EmptyDescription);
        }
        if prediction.len() == 0 {
            panic_with_error!(&env, WagerError::EmptyPrediction);
        }
        require_ok(&env, accounting::validate_stake(stake_amount));
        require_ok(&env, accounting::validate_expiration(expiration_hours));
        require_ok(&env, accounting::validate_admins(&creator, &proposed_admins));

        let mut account = storage::get_or_create_user(&env, &creator);
        if account.balance < stake_amount {
            panic_with_error!(&env, WagerError::InsufficientBalance);
        }
        account.balance -= stake_amount;
        account.wagers_created += 1;
        storage::set_user(&env, &account);

        let now = now(&env);
        let expiration_time = now + expiration_hours as u64 * ONE_HOUR_SECONDS;
        let wager = Wager {
            id: storage::next_wager_id(&env),
            creator: creator.clone(),
            acceptor: None,
            description,
            creator_prediction: prediction,
            acceptor_prediction: None,
            stake_amount,
            event_time: expiration_time,
            expiration_time,
            status: WagerStatus::Open,
            winner: None,
            created_at: now,
            accepted_at: None,
            settled_at: None,
            dispute_deadline: None,
            proposed_admins,
            agreed_admins: Vec::new(&env),
        };
        storage::insert_wager(&env, &wager);

        record_transaction(
            &env,
            &creator,
            Some(wager.id),
            TransactionKind::Escrow,
            stake_amount,
        );
        WagerEvents::wager_created(&env, wager.id, creator, stake_amount, expiration_time);
        wager.id
    }

    fn accept_wager(env: Env, wager_id: u64, acceptor: Address, prediction: String) {
        acceptor.require_auth();
        if prediction.len() == 0 {
            panic_with_error!(&env, WagerError::EmptyPrediction);
        }

        let mut wager = load_wager(&env, wager_id);
        let mut account = storage::get_or_create_user(&env, &acceptor);
        require_ok(
            &env,
            accounting::can_accept(&acceptor, &wager, account.balance, now(&env)),
        );

        account.balance -= wager.stake_amount;
        account.wagers_accepted += 1;
        storage::set_user(&env, &account);

        wager.acceptor = Some(acceptor.clone());
        wager.acceptor_prediction = Some(prediction);
        // The admin set freezes here; later edits to the proposal are inert.
        wager.agreed_admins = wager.proposed_admins.clone();
        wager.accepted_at = Some(now(&env));
        wager.status = WagerStatus::Accepted;
        storage::set_wager(&env, &wager);
        storage::add_user_wager(&env, &acceptor, wager.id);

        record_transaction(
            &env,
            &acceptor,
            Some(wager.id),
            TransactionKind::Escrow,
            wager.stake_amount,
        );
        WagerEvents::wager_accepted(&env, wager.id, acceptor, wager.stake_amount * 2);
    }

    fn cancel_wager(env: Env, wager_id: u64, caller: Address) {
        caller.require_auth();
        let mut wager = load_wager(&env, wager_id);
        require_ok(&env, accounting::can_cancel(&caller, &wager));

        let mut account = storage::get_or_create_user(&env, &wager.creator);
        account.balance += wager.stake_amount;
        storage::set_user(&env, &account);

        wager.status = WagerStatus::Cancelled;
        storage::set_wager(&env, &wager);

        record_transaction(
            &env,
            &wager.creator,
            Some(wager.id),
            TransactionKind::Refund,
            wager.stake_amount,
        );
        WagerEvents::wager_cancelled(&env, wager.id);
    }

    fn settle_wager(env: Env, wager_id: u64, caller: Address, winner: Address) {
        caller.require_auth();
        let mut wager = load_wager(&env, wager_id);
        if !accounting::is_wager_admin(&caller, &wager) {
            panic_with_error!(&env, WagerError::UnauthorizedError);
        }
        if wager.status != WagerStatus::Accepted && wager.status != WagerStatus::PendingSettlement {
            panic_with_error!(&env, WagerError::WagerNotSettleable);
        }
        let acceptor = wager
            .acceptor
            .clone()
            .unwrap_or_else(|| panic_with_error!(&env, WagerError::AcceptorMissing));
        if winner != wager.creator && winner != acceptor {
            panic_with_error!(&env, WagerError::InvalidWinner);
        }
        let loser = if winner == wager.creator {
            acceptor
        } else {
            wager.creator.clone()
        };

        let pool = wager.stake_amount * 2;
        let fee = accounting::platform_fee(pool);
        let payout = accounting::winner_payout(pool);

        let mut winner_account = storage::get_or_create_user(&env, &winner);
        winner_account.balance += payout;
        winner_account.won += 1;
        storage::set_user(&env, &winner_account);

        let mut loser_account = storage::get_or_create_user(&env, &loser);
        loser_account.lost += 1;
        storage::set_user(&env, &loser_account);

        let now = now(&env);
        wager.status = WagerStatus::Settled;
        wager.winner = Some(winner.clone());
        wager.settled_at = Some(now);
        wager.dispute_deadline = Some(now + DISPUTE_WINDOW_SECONDS);
        storage::set_wager(&env, &wager);

        record_transaction(
            &env,
            &winner,
            Some(wager.id),
            TransactionKind::Payout,
            payout,
        );
        // The fee entry is bookkeeping only. It is recorded against the winner
        // and no balance moves for it; pool minus payout is simply retained.
        record_transaction(&env, &winner, Some(wager.id), TransactionKind::Fee, fee);
        WagerEvents::wager_settled(&env, wager.id, winner, payout, fee);
    }

    fn tie_wager(env: Env, wager_id: u64, caller: Address) {
        caller.require_auth();
        let mut wager = load_wager(&env, wager_id);
        if !accounting::is_wager_admin(&caller, &wager) {
            panic_with_error!(&env, WagerError::UnauthorizedError);
        }
        if wager.status != WagerStatus::Accepted && wager.status != WagerStatus::PendingSettlement {
            panic_with_error!(&env, WagerError::WagerNotSettleable);
        }
        let acceptor = wager
            .acceptor
            .clone()
            .unwrap_or_else(|| panic_with_error!(&env, WagerError::AcceptorMissing));

        refund_stake(&env, &wager, &wager.creator.clone());
        refund_stake(&env, &wager, &acceptor);

        wager.status = WagerStatus::Cancelled;
        wager.settled_at = Some(now(&env));
        storage::set_wager(&env, &wager);
        WagerEvents::wager_tied(&env, wager.id);
    }

    fn dispute_wager(env: Env, wager_id: u64, caller: Address, reason: String) -> u64 {
        caller.require_auth();
        if reason.len() == 0 {
            panic_with_error!(&env, WagerError::EmptyReason);
        }

        let mut wager = load_wager(&env, wager_id);
        require_ok(
            &env,
            accounting::can_dispute(
                &caller,
                &wager,
                now(&env),
                storage::has_open_dispute(&env, wager.id),
            ),
        );

        let dispute = Dispute {
            id: storage::next_dispute_id(&env),
            wager_id: wager.id,
            disputing_user: caller.clone(),
            reason,
            status: DisputeStatus::Open,
            resolution: None,
            created_at: now(&env),
            resolved_at: None,
            resolved_by: None,
        };
        storage::insert_dispute(&env, &dispute);

        wager.status = WagerStatus::Disputed;
        storage::set_wager(&env, &wager);

        WagerEvents::dispute_opened(&env, dispute.id, wager.id, caller);
        dispute.id
    }

    fn resolve_dispute(env: Env, dispute_id: u64, caller: Address, action: Symbol) {
        caller.require_auth();
        let mut dispute = storage::get_dispute(&env, dispute_id)
            .unwrap_or_else(|| panic_with_error!(&env, WagerError::DisputeNotFound));
        let mut wager = load_wager(&env, dispute.wager_id);

        if !accounting::is_wager_admin(&caller, &wager) {
            panic_with_error!(&env, WagerError::UnauthorizedError);
        }
        if dispute.status != DisputeStatus::Open {
            panic_with_error!(&env, WagerError::DisputeNotOpen);
        }
        if wager.status != WagerStatus::Disputed {
            panic_with_error!(&env, WagerError::WagerNotDisputed);
        }

        let resolution = if action == symbol_short!("uphold") {
            wager.status = WagerStatus::Settled;
            String::from_str(&env, "Original settlement upheld")
        } else if action == symbol_short!("reverse") {
            reverse_settlement(&env, &mut wager);
            String::from_str(&env, "Settlement reversed")
        } else if action == symbol_short!("refund") {
            let acceptor = wager
                .acceptor
                .clone()
                .unwrap_or_else(|| panic_with_error!(&env, WagerError::AcceptorMissing));
            refund_stake(&env, &wager, &wager.creator.clone());
            refund_stake(&env, &wager, &acceptor);
            wager.status = WagerStatus::Refunded;
            String::from_str(&env, "Both stakes refunded")
        } else {
            panic_with_error!(&env, WagerError::InvalidAction);
        };
        storage::set_wager(&env, &wager);

        dispute.status = DisputeStatus::Resolved;
        dispute.resolution = Some(resolution.clone());
        dispute.resolved_at = Some(now(&env));
        dispute.resolved_by = Some(caller.clone());
        storage::set_dispute(&env, &dispute);

        WagerEvents::dispute_resolved(&env, dispute.id, wager.id, caller, resolution);
    }

    fn sweep(env: Env) -> (u32, u32) {
        let now = now(&env);
        let mut expired: u32 = 0;
        let mut promoted: u32 = 0;

        for id in storage::wager_ids(&env).iter() {
            let mut wager = match storage::get_wager(&env, id) {
                Some(wager) => wager,
                None => continue,
            };
            match wager.status {
                WagerStatus::Open if now > wager.expiration_time => {
                    refund_stake(&env, &wager, &wager.creator.clone());
                    wager.status = WagerStatus::Cancelled;
                    storage::set_wager(&env, &wager);
                    WagerEvents::wager_expired(&env, wager.id);
                    expired += 1;
                }
                WagerStatus::Accepted
                    if wager.acceptor.is_some() && now >= wager.event_time =>
                {
                    wager.status = WagerStatus::PendingSettlement;
                    storage::set_wager(&env, &wager);
                    WagerEvents::wager_due(&env, wager.id);
                    promoted += 1;
                }
                _ => {}
            }
        }
        (expired, promoted)
    }

    fn get_wager(env: Env, wager_id: u64) -> Wager {
        load_wager(&env, wager_id)
    }

    fn get_dispute(env: Env, dispute_id: u64) -> Dispute {
        storage::get_dispute(&env, dispute_id)
            .unwrap_or_else(|| panic_with_error!(&env, WagerError::DisputeNotFound))
    }

    fn list_open_wagers(env: Env) -> Vec<Wager> {
        let mut out = Vec::new(&env);
        for id in storage::wager_ids(&env).iter() {
            if let Some(wager) = storage::get_wager(&env, id) {
                if wager.status == WagerStatus::Open {
                    out.push_back(wager);
                }
            }
        }
        out
    }

    fn list_user_wagers(env: Env, user: Address) -> Vec<Wager> {
        let mut out = Vec::new(&env);
        for id in storage::user_wager_ids(&env, &user).iter() {
            if let Some(wager) = storage::get_wager(&env, id) {
                out.push_back(wager);
            }
        }
        out
    }

    fn list_active_wagers(env: Env, user: Address) -> Vec<Wager> {
        let mut out = Vec::new(&env);
        for id in storage::user_wager_ids(&env, &user).iter() {
            if let Some(wager) = storage::get_wager(&env, id) {
                if is_active(wager.status) {
                    out.push_back(wager);
                }
            }
        }
        out
    }

    fn get_user_history(env: Env, user: Address) -> Vec<Wager> {
        let mut out = Vec::new(&env);
        for id in storage::user_wager_ids(&env, &user).iter() {
            if let Some(wager) = storage::get_wager(&env, id) {
                if matches!(
                    wager.status,
                    WagerStatus::Settled | WagerStatus::Cancelled | WagerStatus::Refunded
                ) {
                    out.push_back(wager);
                }
            }
        }
        out
    }

    fn get_user(env: Env, user: Address) -> User {
        storage::get_user(&env, &user).unwrap_or(User {
            address: user,
            balance: 0,
            wagers_created: 0,
            wagers_accepted: 0,
            won: 0,
            lost: 0,
        })
    }

    fn get_balance(env: Env, user: Address) -> i128 {
        storage::get_user(&env, &user).map_or(0, |u| u.balance)
    }

    fn get_user_transactions(env: Env, user: Address) -> Vec<Transaction> {
        let mut out = Vec::new(&env);
        for id in storage::user_transaction_ids(&env, &user).iter() {
            if let Some(tx) = storage::get_transaction(&env, id) {
                out.push_back(tx);
            }
        }
        out
    }

    fn get_platform_stats(env: Env) -> PlatformStats {
        let mut stats = PlatformStats {
            total_wagers: 0,
            total_volume: 0,
            fees_collected: 0,
            active_wagers: 0,
            pending_settlements: 0,
        };
        for id in storage::wager_ids(&env).iter() {
            let wager = match storage::get_wager(&env, id) {
                Some(wager) => wager,
                None => continue,
            };
            stats.total_wagers += 1;
            stats.total_volume += wager.stake_amount * 2;
            if wager.status == WagerStatus::Settled {
                stats.fees_collected += accounting::platform_fee(wager.stake_amount * 2);
            }
            if is_active(wager.status) {
                stats.active_wagers += 1;
            }
            if wager.status == WagerStatus::PendingSettlement {
                stats.pending_settlements += 1;
            }
        }
        stats
    }
}

fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn load_wager(env: &Env, id: u64) -> Wager {
    storage::get_wager(env, id)
        .unwrap_or_else(|| panic_with_error!(env, WagerError::WagerNotFound))
}

fn require_ok(env: &Env, check: Result<(), WagerError>) {
    if let Err(error) = check {
        panic_with_error!(env, error);
    }
}

fn is_active(status: WagerStatus) -> bool {
    matches!(
        status,
        WagerStatus::Open | WagerStatus::Accepted | WagerStatus::PendingSettlement
    )
}

fn record_transaction(
    env: &Env,
    user: &Address,
    wager_id: Option<u64>,
    kind: TransactionKind,
    amount: i128,
) {
    let tx = Transaction {
        id: storage::next_transaction_id(env),
        user: user.clone(),
        wager_id,
        kind,
        amount,
        status: TransactionStatus::Completed,
        timestamp: now(env),
    };
    storage::add_transaction(env, &tx);
}

fn refund_stake(env: &Env, wager: &Wager, party: &Address) {
    let mut account = storage::get_or_create_user(env, party);
    account.balance += wager.stake_amount;
    storage::set_user(env, &account);
    record_transaction(
        env,
        party,
        Some(wager.id),
        TransactionKind::Refund,
        wager.stake_amount,
    );
}

/// Flips the recorded winner of a settled-then-disputed wager. The clawed-back
/// payout must still be covered by the old winner's balance or the whole
/// resolution fails before any write. The original fee stays collected; no fee
/// entry is re-issued.
fn reverse_settlement(env: &Env, wager: &mut Wager) {
    let old_winner = wager
        .winner
        .clone()
        .unwrap_or_else(|| panic_with_error!(env, WagerError::InternalError));
    let acceptor = wager
        .acceptor
        .clone()
        .unwrap_or_else(|| panic_with_error!(env, WagerError::AcceptorMissing));
    let new_winner = if old_winner == wager.creator {
        acceptor
    } else {
        wager.creator.clone()
    };

    let payout = accounting::winner_payout(wager.stake_amount * 2);

    let mut old_account = storage::get_or_create_user(env, &old_winner);
    if old_account.balance < payout {
        panic_with_error!(env, WagerError::InsufficientBalance);
    }
    old_account.balance -= payout;
    old_account.won = old_account.won.saturating_sub(1);
    old_account.lost += 1;
    storage::set_user(env, &old_account);

    let mut new_account = storage::get_or_create_user(env, &new_winner);
    new_account.balance += payout;
    new_account.won += 1;
    new_account.lost = new_account.lost.saturating_sub(1);
    storage::set_user(env, &new_account);

    record_transaction(
        env,
        &old_winner,
        Some(wager.id),
        TransactionKind::Withdrawal,
        payout,
    );
    record_transaction(
        env,
        &new_winner,
        Some(wager.id),
        TransactionKind::Payout,
        payout,
    );

    wager.winner = Some(new_winner);
    wager.status = WagerStatus::Settled;
}
