use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent(topics = ["WagerLedger", "Deposit"], data_format = "vec")]
struct DepositEvent {
    user: Address,
    amount: i128,
    balance: i128,
}

#[contractevent(topics = ["WagerLedger", "Wager_Created"], data_format = "vec")]
struct WagerCreatedEvent {
    wager_id: u64,
    creator: Address,
    stake_amount: i128,
    expiration_time: u64,
}

#[contractevent(topics = ["WagerLedger", "Wager_Accepted"], data_format = "vec")]
struct WagerAcceptedEvent {
    wager_id: u64,
    acceptor: Address,
    pool: i128,
}

#[contractevent(topics = ["WagerLedger", "Wager_Cancelled"], data_format = "single-value")]
struct WagerCancelledEvent {
    wager_id: u64,
}

#[contractevent(topics = ["WagerLedger", "Wager_Expired"], data_format = "single-value")]
struct WagerExpiredEvent {
    wager_id: u64,
}

#[contractevent(topics = ["WagerLedger", "Wager_Due"], data_format = "single-value")]
struct WagerDueEvent {
    wager_id: u64,
}

#[contractevent(topics = ["WagerLedger", "Wager_Settled"], data_format = "vec")]
struct WagerSettledEvent {
    wager_id: u64,
    winner: Address,
    payout: i128,
    fee: i128,
}

#[contractevent(topics = ["WagerLedger", "Wager_Tied"], data_format = "single-value")]
struct WagerTiedEvent {
    wager_id: u64,
}

#[contractevent(topics = ["WagerLedger", "Dispute_Opened"], data_format = "vec")]
struct DisputeOpenedEvent {
    dispute_id: u64,
    wager_id: u64,
    disputing_user: Address,
}

#[contractevent(topics = ["WagerLedger", "Dispute_Resolved"], data_format = "vec")]
struct DisputeResolvedEvent {
    dispute_id: u64,
    wager_id: u64,
    resolved_by: Address,
    resolution: String,
}

pub struct WagerEvents {}

impl WagerEvents {
    pub fn deposit(e: &Env, user: Address, amount: i128, balance: i128) {
        DepositEvent {
            user,
            amount,
            balance,
        }
        .publish(&e);
    }
    pub fn wager_created(
        e: &Env,
        wager_id: u64,
        creator: Address,
        stake_amount: i128,
        expiration_time: u64,
    ) {
        WagerCreatedEvent {
            wager_id,
            creator,
            stake_amount,
            expiration_time,
        }
        .publish(&e);
    }
    pub fn wager_accepted(e: &Env, wager_id: u64, acceptor: Address, pool: i128) {
        WagerAcceptedEvent {
            wager_id,
            acceptor,
            pool,
        }
        .publish(&e);
    }
    pub fn wager_cancelled(e: &Env, wager_id: u64) {
        WagerCancelledEvent { wager_id }.publish(&e);
    }
    pub fn wager_expired(e: &Env, wager_id: u64) {
        WagerExpiredEvent { wager_id }.publish(&e);
    }
    pub fn wager_due(e: &Env, wager_id: u64) {
        WagerDueEvent { wager_id }.publish(&e);
    }
    pub fn wager_settled(e: &Env, wager_id: u64, winner: Address, payout: i128, fee: i128) {
        WagerSettledEvent {
            wager_id,
            winner,
            payout,
            fee,
        }
        .publish(&e);
    }
    pub fn wager_tied(e: &Env, wager_id: u64) {
        WagerTiedEvent { wager_id }.publish(&e);
    }
    pub fn dispute_opened(e: &Env, dispute_id: u64, wager_id: u64, disputing_user: Address) {
        DisputeOpenedEvent {
            dispute_id,
            wager_id,
            disputing_user,
        }
        .publish(&e);
    }
    pub fn dispute_resolved(
        e: &Env,
        dispute_id: u64,
        wager_id: u64,
        resolved_by: Address,
        resolution: String,
    ) {
        DisputeResolvedEvent {
            dispute_id,
            wager_id,
            resolved_by,
            resolution,
        }
        .publish(&e);
    }
}
