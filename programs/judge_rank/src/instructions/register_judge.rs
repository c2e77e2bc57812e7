use anchor_lang::prelude::*;
use crate::state::{encode_name, Judge, ScoringConfig, CONFIG_SEED, JUDGE_SEED};

#[derive(Accounts)]
pub struct RegisterJudge<'info> {
    /// Becomes the judge's scoring wallet
    #[account(mut)]
    pub wallet: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ScoringConfig>,

    #[account(
        init,
        payer = wallet,
        space = Judge::SIZE,
        seeds = [JUDGE_SEED, &config.next_judge_id.to_le_bytes()],
        bump,
    )]
    pub judge: Account<'info, Judge>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RegisterJudge>, name: String) -> Result<u64> {
    let name_bytes = encode_name(&name)?;
    let judge_id = ctx.accounts.config.allocate_judge_id()?;
    let wallet = ctx.accounts.wallet.key();

    ctx.accounts.judge.set_inner(Judge::new(
        judge_id,
        wallet,
        name_bytes,
        Clock::get()?.unix_timestamp,
        ctx.bumps.judge,
    ));

    msg!("Registered judge #{} '{}' (wallet {})", judge_id, name, wallet);

    Ok(judge_id)
}
