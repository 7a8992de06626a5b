use anchor_lang::prelude::*;

use crate::errors::PyramidErrorCode;
use crate::state::*;
use crate::utils::transfers::transfer_lamports;

/// Seizes the pyramid by paying at least the current take price to the
/// displaced owner.
#[derive(Accounts)]
pub struct TakePyramid<'info> {
    #[account(
        mut,
        seeds = [Pyramid::SEED_PREFIX, pyramid.creator.as_ref()],
        bump = pyramid.bump
    )]
    pub pyramid: Account<'info, Pyramid>,

    /// Next history entry, at index `pyramid.history_len`. Rent paid by the taker.
    #[account(
        init,
        payer = taker,
        space = 8 + HistoryEntry::SIZE,
        seeds = [
            HistoryEntry::SEED_PREFIX,
            pyramid.key().as_ref(),
            pyramid.history_len.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub history_entry: Account<'info, HistoryEntry>,

    /// CHECK: Wallet of the owner being displaced; validated via `address = pyramid.owner`.
    #[account(mut, address = pyramid.owner @ PyramidErrorCode::OwnerMismatch)]
    pub previous_owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub taker: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn take_pyramid_handler(ctx: Context<TakePyramid>, payment: u64) -> Result<()> {
    let taker_key = ctx.accounts.taker.key();
    let pyramid_key = ctx.accounts.pyramid.key();
    let now = Clock::get()?.unix_timestamp;

    // Validate and price everything before any lamports move.
    let next_price = ctx.accounts.pyramid.check_take(payment)?;
    let displaced = ctx.accounts.pyramid.owner;

    transfer_lamports(
        &ctx.accounts.taker.to_account_info(),
        &ctx.accounts.previous_owner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        payment,
    )?;

    // Commit only once the displaced owner has been paid.
    let pyramid = &mut ctx.accounts.pyramid;
    let index = pyramid.record_take(taker_key, payment, next_price)?;
    pyramid.assert_invariant()?;

    ctx.accounts.history_entry.init_new(
        pyramid_key,
        index,
        taker_key,
        payment,
        now,
        ctx.bumps.history_entry,
    );

    msg!(
        "Pyramid taken: from={} to={} paid={} next_price={} history_len={}",
        displaced,
        taker_key,
        payment,
        next_price,
        index + 1
    );

    Ok(())
}
