use anchor_lang::prelude::*;

use crate::constants::PYRAMID_VERSION;
use crate::errors::PyramidErrorCode;
use crate::utils::pricing::{escalate, is_matured, split_pot};

/// ---------------------------------------------------------------------------
/// Pyramid
/// ---------------------------------------------------------------------------
///
/// Fixed-size PDA holding the ledger for one creator's pyramid.
///
/// - The ownership log lives in `HistoryEntry` PDAs; only its length and the
///   latest price are kept here, so loading this account costs the same
///   after any number of takes.
/// - `take` pays the previous owner directly; those lamports never pass
///   through this account.
/// - `pot_lamports` is what gets split at unlock. Rent held by this account
///   is never part of the pot.
/// - Once `unlocked` is set the account is an inert record.
#[account]
pub struct Pyramid {
    /// Wallet that created the pyramid. Immutable.
    pub creator: Pubkey,

    /// Current owner. Same as the owner of the last history entry.
    pub owner: Pubkey,

    /// Unix timestamp at creation. Immutable.
    pub created_at: i64,

    /// Minimum payment for the next take.
    pub take_price: u64,

    /// Price recorded in the last history entry.
    pub last_price: u64,

    /// Number of history entries (>= 1). Also the index of the next entry.
    pub history_len: u64,

    /// Lamports owed out at unlock (initial funding plus later top-ups).
    pub pot_lamports: u64,

    /// Sum of every take payment ever made (audit counter).
    pub total_taken_lamports: u64,

    /// Terminal flag.
    pub unlocked: bool,

    /// Unix timestamp of the unlock, 0 while active.
    pub unlocked_at: i64,

    /// PDA bump.
    pub bump: u8,

    /// Layout version.
    pub version: u8,
}

impl Pyramid {
    pub const SEED_PREFIX: &'static [u8] = b"pyramid";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  + // creator
            32  + // owner
            8   + // created_at
            8   + // take_price
            8   + // last_price
            8   + // history_len
            8   + // pot_lamports
            8   + // total_taken_lamports
            1   + // unlocked
            8   + // unlocked_at
            1   + // bump
            1;    // version

    pub fn init_new(
        &mut self,
        creator: Pubkey,
        initial_take_price: u64,
        funding: u64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(initial_take_price > 0, PyramidErrorCode::InvalidTakePrice);

        self.creator = creator;
        self.owner = creator;
        self.created_at = now;
        self.take_price = escalate(initial_take_price)?;
        self.last_price = initial_take_price;
        self.history_len = 1;
        self.pot_lamports = funding;
        self.total_taken_lamports = 0;
        self.unlocked = false;
        self.unlocked_at = 0;
        self.bump = bump;
        self.version = PYRAMID_VERSION;

        Ok(())
    }

    // ─────────────────────────────
    // Accessors
    // ─────────────────────────────

    pub fn history_len(&self) -> u64 {
        self.history_len
    }

    pub fn next_take_price(&self) -> u64 {
        self.take_price
    }

    pub fn pyramid_owner(&self) -> Pubkey {
        self.owner
    }

    /// Creator and current owner may both unlock.
    pub fn is_authorized(&self, caller: &Pubkey) -> bool {
        *caller == self.creator || *caller == self.owner
    }

    // ─────────────────────────────
    // Take
    // ─────────────────────────────

    /// Validates a take of `payment` lamports and returns the next take price.
    /// Does not mutate; the caller commits with `record_take` once the
    /// previous owner has been paid.
    pub fn check_take(&self, payment: u64) -> Result<u64> {
        require!(!self.unlocked, PyramidErrorCode::AlreadyUnlocked);
        require!(
            payment >= self.take_price,
            PyramidErrorCode::InsufficientPayment
        );
        escalate(payment)
    }

    /// Commits a take and returns the history index it was recorded at.
    pub fn record_take(&mut self, taker: Pubkey, payment: u64, next_price: u64) -> Result<u64> {
        let index = self.history_len;
        let history_len = index.checked_add(1).ok_or(PyramidErrorCode::MathOverflow)?;
        let total_taken = self
            .total_taken_lamports
            .checked_add(payment)
            .ok_or(PyramidErrorCode::MathOverflow)?;

        self.owner = taker;
        self.last_price = payment;
        self.take_price = next_price;
        self.history_len = history_len;
        self.total_taken_lamports = total_taken;

        Ok(index)
    }

    // ─────────────────────────────
    // Fund
    // ─────────────────────────────

    /// Returns the pot after adding `amount`.
    pub fn check_funding(&self, amount: u64) -> Result<u64> {
        require!(!self.unlocked, PyramidErrorCode::AlreadyUnlocked);
        require!(amount > 0, PyramidErrorCode::InvalidAmount);
        let pot = self
            .pot_lamports
            .checked_add(amount)
            .ok_or(PyramidErrorCode::MathOverflow)?;
        Ok(pot)
    }

    // ─────────────────────────────
    // Unlock
    // ─────────────────────────────

    /// Validates an unlock by `caller` at `now` and returns
    /// `(creator_share, owner_share)` of the pot.
    ///
    /// Order: terminal state, then authorization, then maturity.
    pub fn check_unlock(&self, caller: &Pubkey, now: i64) -> Result<(u64, u64)> {
        require!(!self.unlocked, PyramidErrorCode::AlreadyUnlocked);
        require!(self.is_authorized(caller), PyramidErrorCode::Unauthorized);
        require!(
            is_matured(self.created_at, now),
            PyramidErrorCode::NotMatured
        );
        split_pot(self.pot_lamports)
    }

    pub fn mark_unlocked(&mut self, now: i64) {
        self.pot_lamports = 0;
        self.unlocked = true;
        self.unlocked_at = now;
    }

    pub fn assert_invariant(&self) -> Result<()> {
        require!(self.history_len >= 1, PyramidErrorCode::AssertInvariantFailed);
        require!(
            self.take_price > self.last_price,
            PyramidErrorCode::AssertInvariantFailed
        );
        require!(
            !self.unlocked || self.pot_lamports == 0,
            PyramidErrorCode::AssertInvariantFailed
        );
        Ok(())
    }
}
