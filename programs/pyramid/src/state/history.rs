use anchor_lang::prelude::*;

/// ---------------------------------------------------------------------------
/// HistoryEntry
/// ---------------------------------------------------------------------------
///
/// One ownership transition, stored in its own PDA so the ledger account
/// stays fixed-size no matter how many takes happen.
///
/// Seeds: `[b"history", pyramid, index.to_le_bytes()]`. Index 0 is the
/// creator at the initial take price; index `n` is the `n`-th take.
/// Rent is paid by whoever created the entry.
#[account]
pub struct HistoryEntry {
    /// Pyramid this entry belongs to.
    pub pyramid: Pubkey,

    /// Position in the ownership log.
    pub index: u64,

    /// Wallet that became owner.
    pub owner: Pubkey,

    /// Lamports paid (initial take price for index 0).
    pub price: u64,

    /// Unix timestamp of the transition.
    pub recorded_at: i64,

    /// PDA bump.
    pub bump: u8,
}

impl HistoryEntry {
    pub const SEED_PREFIX: &'static [u8] = b"history";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32  // pyramid
            + 8  // index
            + 32 // owner
            + 8  // price
            + 8  // recorded_at
            + 1; // bump

    pub fn init_new(
        &mut self,
        pyramid: Pubkey,
        index: u64,
        owner: Pubkey,
        price: u64,
        recorded_at: i64,
        bump: u8,
    ) {
        self.pyramid = pyramid;
        self.index = index;
        self.owner = owner;
        self.price = price;
        self.recorded_at = recorded_at;
        self.bump = bump;
    }
}
