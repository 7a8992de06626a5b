use anchor_lang::prelude::*;

use crate::errors::PyramidErrorCode;
use crate::state::*;
use crate::utils::transfers::payout_from_program_account;

/// Splits the pot between creator and current owner once the pyramid has
/// matured. Terminal: the pyramid can never be unlocked again.
#[derive(Accounts)]
pub struct UnlockPyramid<'info> {
    #[account(
        mut,
        seeds = [Pyramid::SEED_PREFIX, pyramid.creator.as_ref()],
        bump = pyramid.bump
    )]
    pub pyramid: Account<'info, Pyramid>,

    /// CHECK: Receives the creator share; validated via `address = pyramid.creator`.
    #[account(mut, address = pyramid.creator @ PyramidErrorCode::CreatorMismatch)]
    pub creator_wallet: UncheckedAccount<'info>,

    /// CHECK: Receives the owner share; validated via `address = pyramid.owner`.
    /// Same key as `creator_wallet` while nobody has taken the pyramid.
    #[account(mut, address = pyramid.owner @ PyramidErrorCode::OwnerMismatch)]
    pub owner_wallet: UncheckedAccount<'info>,

    /// Creator or current owner; checked in the handler.
    pub caller: Signer<'info>,
}

pub fn unlock_pyramid_handler(ctx: Context<UnlockPyramid>) -> Result<()> {
    let caller_key = ctx.accounts.caller.key();
    let now = Clock::get()?.unix_timestamp;

    let (creator_share, owner_share) = ctx.accounts.pyramid.check_unlock(&caller_key, now)?;

    let pyramid_info = ctx.accounts.pyramid.to_account_info();
    payout_from_program_account(
        &pyramid_info,
        &ctx.accounts.creator_wallet.to_account_info(),
        creator_share,
    )?;
    payout_from_program_account(
        &pyramid_info,
        &ctx.accounts.owner_wallet.to_account_info(),
        owner_share,
    )?;

    let pyramid = &mut ctx.accounts.pyramid;
    pyramid.mark_unlocked(now);
    pyramid.assert_invariant()?;

    msg!(
        "Pyramid unlocked by {}: creator={} share={} owner={} share={}",
        caller_key,
        pyramid.creator,
        creator_share,
        pyramid.owner,
        owner_share
    );

    Ok(())
}
