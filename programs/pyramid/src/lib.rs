use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("8Xb6RQnqbFHLVrRxfqXYjAp4PUUSdS3yRDKkkf9iM8pT");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Pyramid",
    project_url: "https://github.com/pyramid-sol/pyramid",
    contacts: "link:https://github.com/pyramid-sol/pyramid/security/advisories/new",
    policy: "https://github.com/pyramid-sol/pyramid/blob/main/SECURITY.md",
    source_code: "https://github.com/pyramid-sol/pyramid",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod constants;


use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod pyramid {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(
        ctx: Context<InitializePyramid>,
        initial_take_price: u64,
        funding: u64,
    ) -> Result<()> {
        initialize_pyramid_handler(ctx, initial_take_price, funding)
    }

    // -------------------------------------------------------------------------
    // take
    // -------------------------------------------------------------------------
    pub fn take(ctx: Context<TakePyramid>, payment: u64) -> Result<()> {
        take_pyramid_handler(ctx, payment)
    }

    // -------------------------------------------------------------------------
    // fund
    // -------------------------------------------------------------------------
    pub fn fund(ctx: Context<FundPyramid>, amount: u64) -> Result<()> {
        fund_pyramid_handler(ctx, amount)
    }

    // -------------------------------------------------------------------------
    // unlock
    // -------------------------------------------------------------------------
    pub fn unlock(ctx: Context<UnlockPyramid>) -> Result<()> {
        unlock_pyramid_handler(ctx)
    }

    // =====================================================================
    // VIEWS
    // =====================================================================

    pub fn get_history_length(ctx: Context<ViewPyramid>) -> Result<u64> {
        get_history_length_handler(ctx)
    }

    pub fn get_next_take_price(ctx: Context<ViewPyramid>) -> Result<u64> {
        get_next_take_price_handler(ctx)
    }

    pub fn get_pyramid_owner(ctx: Context<ViewPyramid>) -> Result<Pubkey> {
        get_pyramid_owner_handler(ctx)
    }
}
