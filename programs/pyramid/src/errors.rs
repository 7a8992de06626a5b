use anchor_lang::prelude::*;

#[error_code]
pub enum PyramidErrorCode {
    // ─────────────────────────────
    // Setup
    // ─────────────────────────────
    #[msg("Initial take price must be positive")]
    InvalidTakePrice,

    #[msg("Invalid amount")]
    InvalidAmount,

    // ─────────────────────────────
    // Take
    // ─────────────────────────────
    #[msg("Insufficient takePrice")]
    InsufficientPayment,

    #[msg("Account does not match the current owner")]
    OwnerMismatch,

    #[msg("Account does not match the creator")]
    CreatorMismatch,

    // ─────────────────────────────
    // Unlock
    // ─────────────────────────────
    #[msg("Only the Pyramid's owner can unlock it.")]
    Unauthorized,

    #[msg("The Pyramid cannot be unlocked yet.")]
    NotMatured,

    #[msg("The Pyramid has already been unlocked.")]
    AlreadyUnlocked,

    // ─────────────────────────────
    // Transfers / math
    // ─────────────────────────────
    #[msg("Value transfer failed")]
    TransferFailed,

    #[msg("Math overflow")]
    MathOverflow,

    AssertInvariantFailed,
}

/// Anchor error number carried by `err`, for asserting on failures in tests.
#[cfg(test)]
pub fn code_of(err: &anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        other => panic!("expected an Anchor error, got {other:?}"),
    }
}
