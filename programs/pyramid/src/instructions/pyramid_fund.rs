use anchor_lang::prelude::*;
use crate::state::*;
use crate::utils::transfers::transfer_lamports;

/// Tops up the pot split at unlock. Anyone may fund an active pyramid.
#[derive(Accounts)]
pub struct FundPyramid<'info> {
    #[account(
        mut,
        seeds = [Pyramid::SEED_PREFIX, pyramid.creator.as_ref()],
        bump = pyramid.bump
    )]
    pub pyramid: Account<'info, Pyramid>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn fund_pyramid_handler(ctx: Context<FundPyramid>, amount: u64) -> Result<()> {
    let new_pot = ctx.accounts.pyramid.check_funding(amount)?;

    transfer_lamports(
        &ctx.accounts.funder.to_account_info(),
        &ctx.accounts.pyramid.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        amount,
    )?;

    let pyramid = &mut ctx.accounts.pyramid;
    pyramid.pot_lamports = new_pot;

    msg!("Pyramid funded: amount={} pot={}", amount, new_pot);
    Ok(())
}
