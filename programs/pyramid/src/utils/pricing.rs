use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOM, CREATOR_SHARE_BPS, MATURITY_DELAY_SECS, TAKE_ESCALATION_BPS};
use crate::errors::PyramidErrorCode;

/// Price required for the next take after `paid` lamports were paid.
///
/// Fixed-point: `paid * 11_000 / 10_000`, floored. Prices too small for the
/// 10% step to register still move up by one lamport so the ladder never stalls.
pub fn escalate(paid: u64) -> Result<u64> {
    let scaled = (paid as u128)
        .checked_mul(TAKE_ESCALATION_BPS as u128)
        .ok_or(PyramidErrorCode::MathOverflow)?
        / BPS_DENOM as u128;

    let floor = paid.checked_add(1).ok_or(PyramidErrorCode::MathOverflow)?;
    let next = u64::try_from(scaled).map_err(|_| PyramidErrorCode::MathOverflow)?;

    Ok(next.max(floor))
}

/// Splits the pot into `(creator_share, owner_share)`.
/// The owner receives the remainder, so nothing is lost to rounding.
pub fn split_pot(pot: u64) -> Result<(u64, u64)> {
    let creator_share = (pot as u128)
        .checked_mul(CREATOR_SHARE_BPS as u128)
        .ok_or(PyramidErrorCode::MathOverflow)?
        / BPS_DENOM as u128;
    let creator_share = creator_share as u64;

    let owner_share = pot
        .checked_sub(creator_share)
        .ok_or(PyramidErrorCode::MathOverflow)?;

    Ok((creator_share, owner_share))
}

/// Unix timestamp from which the pyramid may be unlocked.
#[inline]
pub fn matures_at(created_at: i64) -> i64 {
    created_at.saturating_add(MATURITY_DELAY_SECS)
}

#[inline]
pub fn is_matured(created_at: i64, now: i64) -> bool {
    now >= matures_at(created_at)
}
