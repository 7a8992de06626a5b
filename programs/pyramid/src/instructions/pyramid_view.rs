use anchor_lang::prelude::*;
use crate::state::*;

/// Read-only access for the getter instructions (values come back as return data).
#[derive(Accounts)]
pub struct ViewPyramid<'info> {
    #[account(
        seeds = [Pyramid::SEED_PREFIX, pyramid.creator.as_ref()],
        bump = pyramid.bump
    )]
    pub pyramid: Account<'info, Pyramid>,
}

pub fn get_history_length_handler(ctx: Context<ViewPyramid>) -> Result<u64> {
    Ok(ctx.accounts.pyramid.history_len())
}

pub fn get_next_take_price_handler(ctx: Context<ViewPyramid>) -> Result<u64> {
    Ok(ctx.accounts.pyramid.next_take_price())
}

pub fn get_pyramid_owner_handler(ctx: Context<ViewPyramid>) -> Result<Pubkey> {
    Ok(ctx.accounts.pyramid.pyramid_owner())
}
