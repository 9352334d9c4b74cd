pub(crate) const FEE_PERCENT: i128 = 5;

pub(crate) const MIN_STAKE: i128 = 1;
pub(crate) const MAX_STAKE: i128 = 1_000_000_000_000_000;

pub(crate) const MIN_EXPIRATION_HOURS: u32 = 1;
pub(crate) const MAX_EXPIRATION_HOURS: u32 = 168;

pub(crate) const MIN_WAGER_ADMINS: u32 = 1;
pub(crate) const MAX_WAGER_ADMINS: u32 = 4;

pub(crate) const ONE_HOUR_SECONDS: u64 = 3600;
pub(crate) const DISPUTE_WINDOW_SECONDS: u64 = 24 * ONE_HOUR_SECONDS;
