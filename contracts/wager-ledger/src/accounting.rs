use soroban_sdk::{Address, Vec};

use crate::constants::{
    DISPUTE_WINDOW_SECONDS, FEE_PERCENT, MAX_EXPIRATION_HOURS, MAX_STAKE, MAX_WAGER_ADMINS,
    MIN_EXPIRATION_HOURS, MIN_STAKE, MIN_WAGER_ADMINS,
};
use crate::errors::WagerError;
use crate::types::{Wager, WagerStatus};

/// Platform fee on the settlement pool, floored toward zero. The remainder
/// goes to the winner, so `platform_fee(pool) + winner_payout(pool) == pool`
/// holds exactly for every pool.
pub(crate) fn platform_fee(pool: i128) -> i128 {
    pool * FEE_PERCENT / 100
}

pub(crate) fn winner_payout(pool: i128) -> i128 {
    pool - platform_fee(pool)
}

pub(crate) fn validate_stake(amount: i128) -> Result<(), WagerError> {
    if amount < MIN_STAKE {
        return Err(WagerError::StakeTooLow);
    }
    if amount > MAX_STAKE {
        return Err(WagerError::StakeTooHigh);
    }
    Ok(())
}

pub(crate) fn validate_expiration(hours: u32) -> Result<(), WagerError> {
    if !(MIN_EXPIRATION_HOURS..=MAX_EXPIRATION_HOURS).contains(&hours) {
        return Err(WagerError::InvalidExpiration);
    }
    Ok(())
}

/// The creator proposes 1-4 distinct admins and may not be one of them.
pub(crate) fn validate_admins(creator: &Address, admins: &Vec<Address>) -> Result<(), WagerError> {
    if admins.len() < MIN_WAGER_ADMINS {
        return Err(WagerError::NoAdminsProposed);
    }
    if admins.len() > MAX_WAGER_ADMINS {
        return Err(WagerError::TooManyAdmins);
    }
    for i in 0..admins.len() {
        let admin = admins.get_unchecked(i);
        if admin == *creator {
            return Err(WagerError::CreatorAsAdmin);
        }
        for j in (i + 1)..admins.len() {
            if admin == admins.get_unchecked(j) {
                return Err(WagerError::DuplicateAdmin);
            }
        }
    }
    Ok(())
}

pub(crate) fn can_accept(
    acceptor: &Address,
    wager: &Wager,
    balance: i128,
    now: u64,
) -> Result<(), WagerError> {
    if wager.creator == *acceptor {
        return Err(WagerError::SelfAccept);
    }
    if wager.status != WagerStatus::Open {
        return Err(WagerError::WagerNotOpen);
    }
    if now > wager.expiration_time {
        return Err(WagerError::WagerExpired);
    }
    if balance < wager.stake_amount {
        return Err(WagerError::InsufficientBalance);
    }
    Ok(())
}

pub(crate) fn can_cancel(caller: &Address, wager: &Wager) -> Result<(), WagerError> {
    if wager.creator != *caller {
        return Err(WagerError::NotCreator);
    }
    if wager.status != WagerStatus::Open {
        return Err(WagerError::WagerNotOpen);
    }
    Ok(())
}

pub(crate) fn can_dispute(
    caller: &Address,
    wager: &Wager,
    now: u64,
    open_dispute_exists: bool,
) -> Result<(), WagerError> {
    if wager.status != WagerStatus::Settled {
        return Err(WagerError::WagerNotSettled);
    }
    if wager.creator != *caller && wager.acceptor != Some(caller.clone()) {
        return Err(WagerError::NotParticipant);
    }
    let deadline = dispute_deadline(wager).ok_or(WagerError::WagerNotSettled)?;
    if now > deadline {
        return Err(WagerError::DisputeWindowClosed);
    }
    if open_dispute_exists {
        return Err(WagerError::DisputeAlreadyOpen);
    }
    Ok(())
}

/// The stored deadline if the settlement stamped one, otherwise 24h after
/// settlement. `None` for a wager that never settled.
pub(crate) fn dispute_deadline(wager: &Wager) -> Option<u64> {
    wager
        .dispute_deadline
        .or_else(|| wager.settled_at.map(|t| t + DISPUTE_WINDOW_SECONDS))
}

/// The authorization gate for settlement and dispute resolution. An empty
/// admin set (wager not yet accepted) denies everyone; there is no
/// platform-level override.
pub(crate) fn is_wager_admin(user: &Address, wager: &Wager) -> bool {
    wager.agreed_admins.contains(user)
}
