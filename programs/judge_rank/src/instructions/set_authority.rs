use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::state::{ScoringConfig, CONFIG_SEED};

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ ScoringError::Unauthorized,
    )]
    pub config: Account<'info, ScoringConfig>,
}

pub fn handler(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    ctx.accounts.config.set_authority(new_authority)?;

    msg!("Set scoring authority to {}", new_authority);
    Ok(())
}
