use super::*;
use crate::{DisputeStatus, TransactionKind, WagerError, WagerStatus};
use soroban_sdk::symbol_short;

/// Settles a 50-stake wager in favor of the creator at START and returns
/// (creator, acceptor, admin, wager_id). Creator holds 145, acceptor 50.
fn settled_wager(
    env: &Env,
    client: &crate::WagerLedgerContractClient,
) -> (Address, Address, Address, u64) {
    let (creator, acceptor, admin, wager_id) = accepted_wager(env, client, 50);
    client.settle_wager(&wager_id, &admin, &creator);
    (creator, acceptor, admin, wager_id)
}

#[test]
fn dispute_freezes_a_settled_wager() {
    let (env, client) = setup();
    let (_, acceptor, _, wager_id) = settled_wager(&env, &client);

    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    assert_eq!(client.get_wager(&wager_id).status, WagerStatus::Disputed);
    let dispute = client.get_dispute(&dispute_id);
    assert_eq!(dispute.wager_id, wager_id);
    assert_eq!(dispute.disputing_user, acceptor);
    assert_eq!(dispute.status, DisputeStatus::Open);
    assert_eq!(dispute.resolution, None);
}

#[test]
fn dispute_window_closes_exactly_24h_after_settlement() {
    let (env, client) = setup();
    let (_, acceptor, _, wager_id) = settled_wager(&env, &client);

    set_time(&env, START + DAY + 1);
    let result =
        client.try_dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));
    assert_eq!(result, Err(Ok(WagerError::DisputeWindowClosed.into())));

    // The last second of the window is still inside it.
    set_time(&env, START + DAY);
    client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn dispute_rejects_non_participants() {
    let (env, client) = setup();
    let (_, _, _, wager_id) = settled_wager(&env, &client);
    let stranger = Address::generate(&env);
    client.dispute_wager(&wager_id, &stranger, &String::from_str(&env, "wrong call"));
}

#[test]
#[should_panic(expected = "Error(Contract, #307)")]
fn dispute_rejects_an_unsettled_wager() {
    let (env, client) = setup();
    let (creator, _, _, wager_id) = accepted_wager(&env, &client, 50);
    client.dispute_wager(&wager_id, &creator, &String::from_str(&env, "wrong call"));
}

#[test]
#[should_panic(expected = "Error(Contract, #209)")]
fn dispute_rejects_an_empty_reason() {
    let (env, client) = setup();
    let (_, acceptor, _, wager_id) = settled_wager(&env, &client);
    client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, ""));
}

#[test]
fn dispute_on_a_disputed_wager_is_rejected() {
    let (env, client) = setup();
    let (creator, acceptor, _, wager_id) = settled_wager(&env, &client);
    client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    let result =
        client.try_dispute_wager(&wager_id, &creator, &String::from_str(&env, "me too"));
    assert_eq!(result, Err(Ok(WagerError::WagerNotSettled.into())));
}

#[test]
fn uphold_keeps_the_original_outcome() {
    let (env, client) = setup();
    let (creator, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    client.resolve_dispute(&dispute_id, &admin, &symbol_short!("uphold"));

    // No funds moved.
    assert_eq!(client.get_balance(&creator), 145);
    assert_eq!(client.get_balance(&acceptor), 50);

    let wager = client.get_wager(&wager_id);
    assert_eq!(wager.status, WagerStatus::Settled);
    assert_eq!(wager.winner, Some(creator));

    let dispute = client.get_dispute(&dispute_id);
    assert_eq!(dispute.status, DisputeStatus::Resolved);
    assert_eq!(dispute.resolved_by, Some(admin));
    assert!(dispute.resolution.is_some());
}

#[test]
fn reverse_swaps_payout_and_counters() {
    let (env, client) = setup();
    let (creator, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    client.resolve_dispute(&dispute_id, &admin, &symbol_short!("reverse"));

    // The 95 payout moves from the creator to the acceptor; the original
    // 5 fee stays collected.
    assert_eq!(client.get_balance(&creator), 50);
    assert_eq!(client.get_balance(&acceptor), 145);

    let wager = client.get_wager(&wager_id);
    assert_eq!(wager.status, WagerStatus::Settled);
    assert_eq!(wager.winner, Some(acceptor.clone()));

    let creator_user = client.get_user(&creator);
    assert_eq!(creator_user.won, 0);
    assert_eq!(creator_user.lost, 1);
    let acceptor_user = client.get_user(&acceptor);
    assert_eq!(acceptor_user.won, 1);
    assert_eq!(acceptor_user.lost, 0);

    let creator_txs = client.get_user_transactions(&creator);
    let claw_back = creator_txs.get_unchecked(creator_txs.len() - 1);
    assert_eq!(claw_back.kind, TransactionKind::Withdrawal);
    assert_eq!(claw_back.amount, 95);
    let acceptor_txs = client.get_user_transactions(&acceptor);
    let payout = acceptor_txs.get_unchecked(acceptor_txs.len() - 1);
    assert_eq!(payout.kind, TransactionKind::Payout);
    assert_eq!(payout.amount, 95);
}

#[test]
fn reverse_fails_whole_when_the_old_winner_cannot_cover_it() {
    let (env, client) = setup();
    let (creator, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    // The creator spends the payout on a new wager, dropping to 45 < 95.
    let (_, admins) = one_admin(&env);
    client.create_wager(
        &creator,
        &String::from_str(&env, "another one"),
        &String::from_str(&env, "heads"),
        &100,
        &24,
        &admins,
    );
    assert_eq!(client.get_balance(&creator), 45);

    let result = client.try_resolve_dispute(&dispute_id, &admin, &symbol_short!("reverse"));
    assert_eq!(result, Err(Ok(WagerError::InsufficientBalance.into())));

    // Nothing was applied: balances, wager and dispute are untouched.
    assert_eq!(client.get_balance(&creator), 45);
    assert_eq!(client.get_balance(&acceptor), 50);
    assert_eq!(client.get_wager(&wager_id).status, WagerStatus::Disputed);
    assert_eq!(client.get_dispute(&dispute_id).status, DisputeStatus::Open);
}

#[test]
fn refund_resolution_returns_both_stakes() {
    let (env, client) = setup();
    let (creator, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    client.resolve_dispute(&dispute_id, &admin, &symbol_short!("refund"));

    // Each side gets its 50 stake back on top of whatever it held.
    assert_eq!(client.get_balance(&creator), 145 + 50);
    assert_eq!(client.get_balance(&acceptor), 50 + 50);
    assert_eq!(client.get_wager(&wager_id).status, WagerStatus::Refunded);
    assert_eq!(
        client.get_dispute(&dispute_id).status,
        DisputeStatus::Resolved
    );
}

#[test]
fn resolve_rejects_an_unknown_action() {
    let (env, client) = setup();
    let (_, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));

    let result = client.try_resolve_dispute(&dispute_id, &admin, &symbol_short!("split"));
    assert_eq!(result, Err(Ok(WagerError::InvalidAction.into())));
    assert_eq!(client.get_dispute(&dispute_id).status, DisputeStatus::Open);
    assert_eq!(client.get_wager(&wager_id).status, WagerStatus::Disputed);
}

#[test]
#[should_panic(expected = "Error(Contract, #4)")]
fn resolve_rejects_non_admin() {
    let (env, client) = setup();
    let (creator, acceptor, _, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));
    client.resolve_dispute(&dispute_id, &creator, &symbol_short!("uphold"));
}

#[test]
#[should_panic(expected = "Error(Contract, #312)")]
fn resolve_rejects_a_closed_dispute() {
    let (env, client) = setup();
    let (_, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));
    client.resolve_dispute(&dispute_id, &admin, &symbol_short!("uphold"));
    client.resolve_dispute(&dispute_id, &admin, &symbol_short!("uphold"));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn resolve_rejects_an_unknown_dispute() {
    let (env, client) = setup();
    let (_, _, admin, _) = settled_wager(&env, &client);
    client.resolve_dispute(&999, &admin, &symbol_short!("uphold"));
}

#[test]
fn a_wager_can_be_disputed_again_after_an_uphold() {
    let (env, client) = setup();
    let (creator, acceptor, admin, wager_id) = settled_wager(&env, &client);
    let dispute_id =
        client.dispute_wager(&wager_id, &acceptor, &String::from_str(&env, "wrong call"));
    client.resolve_dispute(&dispute_id, &admin, &symbol_short!("uphold"));

    // Still inside the original window; the first dispute is closed.
    let second =
        client.dispute_wager(&wager_id, &creator, &String::from_str(&env, "second look"));
    assert_ne!(second, dispute_id);
    assert_eq!(client.get_wager(&wager_id).status, WagerStatus::Disputed);
}
