use anchor_lang::prelude::*;
use crate::state::*;
use crate::utils::transfers::transfer_lamports;

#[derive(Accounts)]
pub struct InitializePyramid<'info> {
    /// Pyramid PDA, one per creator.
    #[account(
        init,
        payer = creator,
        space = 8 + Pyramid::SIZE,
        seeds = [Pyramid::SEED_PREFIX, creator.key().as_ref()],
        bump
    )]
    pub pyramid: Account<'info, Pyramid>,

    /// History entry 0: the creator at the initial take price.
    #[account(
        init,
        payer = creator,
        space = 8 + HistoryEntry::SIZE,
        seeds = [HistoryEntry::SEED_PREFIX, pyramid.key().as_ref(), 0u64.to_le_bytes().as_ref()],
        bump
    )]
    pub first_entry: Account<'info, HistoryEntry>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_pyramid_handler(
    ctx: Context<InitializePyramid>,
    initial_take_price: u64,
    funding: u64,
) -> Result<()> {
    let creator_key = ctx.accounts.creator.key();
    let pyramid_key = ctx.accounts.pyramid.key();
    let clock = Clock::get()?;

    ctx.accounts.pyramid.init_new(
        creator_key,
        initial_take_price,
        funding,
        clock.unix_timestamp,
        ctx.bumps.pyramid,
    )?;
    ctx.accounts.first_entry.init_new(
        pyramid_key,
        0,
        creator_key,
        initial_take_price,
        clock.unix_timestamp,
        ctx.bumps.first_entry,
    );

    // Seed the pot. Rent was already paid by `init`, so the pot sits on top of it.
    if funding > 0 {
        transfer_lamports(
            &ctx.accounts.creator.to_account_info(),
            &ctx.accounts.pyramid.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            funding,
        )?;
    }

    let pyramid = &ctx.accounts.pyramid;
    pyramid.assert_invariant()?;

    msg!(
        "Pyramid created: creator={} take_price={} pot={} created_at={}",
        creator_key,
        pyramid.take_price,
        pyramid.pot_lamports,
        pyramid.created_at
    );

    Ok(())
}
