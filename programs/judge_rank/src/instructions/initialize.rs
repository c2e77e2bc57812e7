use anchor_lang::prelude::*;
use crate::state::{ScoringConfig, CONFIG_SEED};

// =============================================================================
// INITIALIZE INSTRUCTION
// =============================================================================
//
// Creates the singleton config PDA. Whoever signs the first `initialize`
// becomes the authority; the PDA can only be created once, so deployers should
// call this right after deploying the program. `set_authority` hands the role
// on afterwards.
// =============================================================================

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ScoringConfig::SIZE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, ScoringConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts
        .config
        .set_inner(ScoringConfig::new(authority, ctx.bumps.config));

    msg!("Judge rank initialized. Authority: {}", authority);

    Ok(())
}
