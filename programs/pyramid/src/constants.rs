pub const PYRAMID_VERSION: u8 = 1;

pub const BPS_DENOM: u64 = 10_000;

/// Next take price = paid price * 1.1
pub const TAKE_ESCALATION_BPS: u64 = 11_000;

/// Share of the pot paid to the creator at unlock (1%). The owner gets the rest.
pub const CREATOR_SHARE_BPS: u64 = 100;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Delay after creation before the pyramid can be unlocked.
pub const MATURITY_DELAY_SECS: i64 = 100 * SECONDS_PER_DAY;
