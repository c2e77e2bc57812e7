use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::state::{encode_name, Fighter, ScoringConfig, CONFIG_SEED, FIGHTER_SEED};

#[derive(Accounts)]
pub struct RegisterFighter<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ ScoringError::Unauthorized,
    )]
    pub config: Account<'info, ScoringConfig>,

    #[account(
        init,
        payer = authority,
        space = Fighter::SIZE,
        seeds = [FIGHTER_SEED, &config.next_fighter_id.to_le_bytes()],
        bump,
    )]
    pub fighter: Account<'info, Fighter>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterFighter>, name: String) -> Result<u64> {
    let name_bytes = encode_name(&name)?;
    let fighter_id = ctx.accounts.config.allocate_fighter_id()?;

    ctx.accounts.fighter.set_inner(Fighter::new(
        fighter_id,
        name_bytes,
        Clock::get()?.unix_timestamp,
        ctx.bumps.fighter,
    ));

    msg!("Registered fighter #{} '{}'", fighter_id, name);

    Ok(fighter_id)
}
