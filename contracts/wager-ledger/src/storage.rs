use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Dispute, DisputeStatus, Transaction, User, Wager};

// User repository

pub(crate) fn get_user(env: &Env, address: &Address) -> Option<User> {
    env.storage()
        .persistent()
        .get(&DataKey::User(address.clone()))
}

pub(crate) fn get_or_create_user(env: &Env, address: &Address) -> User {
    match get_user(env, address) {
        Some(user) => user,
        None => {
            let user = User {
                address: address.clone(),
                balance: 0,
                wagers_created: 0,
                wagers_accepted: 0,
                won: 0,
                lost: 0,
            };
            set_user(env, &user);
            user
        }
    }
}

pub(crate) fn set_user(env: &Env, user: &User) {
    env.storage()
        .persistent()
        .set(&DataKey::User(user.address.clone()), user);
}

// Wager repository

pub(crate) fn next_wager_id(env: &Env) -> u64 {
    next_id(env, &DataKey::WagerCount)
}

pub(crate) fn get_wager(env: &Env, id: u64) -> Option<Wager> {
    env.storage().persistent().get(&DataKey::Wager(id))
}

pub(crate) fn set_wager(env: &Env, wager: &Wager) {
    env.storage()
        .persistent()
        .set(&DataKey::Wager(wager.id), wager);
}

/// Stores a freshly created wager and registers it in the scan and
/// per-creator indexes. The acceptor is indexed later, on acceptance.
pub(crate) fn insert_wager(env: &Env, wager: &Wager) {
    set_wager(env, wager);

    let mut ids = wager_ids(env);
    ids.push_back(wager.id);
    env.storage().persistent().set(&DataKey::WagerIds, &ids);

    add_user_wager(env, &wager.creator, wager.id);
}

pub(crate) fn wager_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::WagerIds)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn user_wager_ids(env: &Env, user: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::UserWagers(user.clone()))
        .unwrap_or(Vec::new(env))
}

pub(crate) fn add_user_wager(env: &Env, user: &Address, id: u64) {
    let mut ids = user_wager_ids(env, user);
    ids.push_back(id);
    env.storage()
        .persistent()
        .set(&DataKey::UserWagers(user.clone()), &ids);
}

// Transaction repository (append-only)

pub(crate) fn next_transaction_id(env: &Env) -> u64 {
    next_id(env, &DataKey::TransactionCount)
}

pub(crate) fn add_transaction(env: &Env, tx: &Transaction) {
    env.storage()
        .persistent()
        .set(&DataKey::Transaction(tx.id), tx);

    let mut ids = user_transaction_ids(env, &tx.user);
    ids.push_back(tx.id);
    env.storage()
        .persistent()
        .set(&DataKey::UserTransactions(tx.user.clone()), &ids);
}

pub(crate) fn get_transaction(env: &Env, id: u64) -> Option<Transaction> {
    env.storage().persistent().get(&DataKey::Transaction(id))
}

pub(crate) fn user_transaction_ids(env: &Env, user: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::UserTransactions(user.clone()))
        .unwrap_or(Vec::new(env))
}

// Dispute repository

pub(crate) fn next_dispute_id(env: &Env) -> u64 {
    next_id(env, &DataKey::DisputeCount)
}

pub(crate) fn get_dispute(env: &Env, id: u64) -> Option<Dispute> {
    env.storage().persistent().get(&DataKey::Dispute(id))
}

pub(crate) fn set_dispute(env: &Env, dispute: &Dispute) {
    env.storage()
        .persistent()
        .set(&DataKey::Dispute(dispute.id), dispute);
}

pub(crate) fn insert_dispute(env: &Env, dispute: &Dispute) {
    set_dispute(env, dispute);

    let mut ids = wager_dispute_ids(env, dispute.wager_id);
    ids.push_back(dispute.id);
    env.storage()
        .persistent()
        .set(&DataKey::WagerDisputes(dispute.wager_id), &ids);
}

pub(crate) fn wager_dispute_ids(env: &Env, wager_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::WagerDisputes(wager_id))
        .unwrap_or(Vec::new(env))
}

pub(crate) fn has_open_dispute(env: &Env, wager_id: u64) -> bool {
    for id in wager_dispute_ids(env, wager_id).iter() {
        if let Some(dispute) = get_dispute(env, id) {
            if dispute.status == DisputeStatus::Open {
                return true;
            }
        }
    }
    false
}

fn next_id(env: &Env, key: &DataKey) -> u64 {
    let next: u64 = env.storage().instance().get(key).unwrap_or(0) + 1;
    env.storage().instance().set(key, &next);
    next
}
