use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::state::{validate_round_count, Fight, ScoringConfig, CONFIG_SEED, FIGHT_SEED};

#[derive(Accounts)]
pub struct CreateMatch<'info> {
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
        space = Fight::SIZE,
        seeds = [FIGHT_SEED, &config.next_fight_id.to_le_bytes()],
        bump,
    )]
    pub fight: Account<'info, Fight>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateMatch>,
    fighter_a: u64,
    fighter_b: u64,
    round_count: u8,
) -> Result<u64> {
    validate_round_count(round_count)?;

    let config = &mut ctx.accounts.config;
    require!(
        config.fighter_exists(fighter_a) && config.fighter_exists(fighter_b),
        ScoringError::NotFound
    );

    let fight_id = config.next_fight_id;
    let fight = Fight::new(
        fight_id,
        fighter_a,
        fighter_b,
        round_count,
        Clock::get()?.unix_timestamp,
        ctx.bumps.fight,
    )?;
    config.allocate_fight_id()?;
    ctx.accounts.fight.set_inner(fight);

    msg!(
        "Created fight #{}: fighter #{} vs fighter #{} over {} rounds",
        fight_id,
        fighter_a,
        fighter_b,
        round_count
    );

    Ok(fight_id)
}
