use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::events::RoundScored;
use crate::state::{Fight, Judge, FIGHT_SEED, JUDGE_SEED};

#[derive(Accounts)]
#[instruction(fight_id: u64, round_id: u8, judge_id: u64)]
pub struct SubmitRoundScore<'info> {
    /// Must be the wallet the judge registered with
    pub wallet: Signer<'info>,

    #[account(
        seeds = [JUDGE_SEED, &judge_id.to_le_bytes()],
        bump = judge.bump,
        constraint = judge.wallet == wallet.key() @ ScoringError::Unauthorized,
    )]
    pub judge: Account<'info, Judge>,

    #[account(
        mut,
        seeds = [FIGHT_SEED, &fight_id.to_le_bytes()],
        bump = fight.bump,
    )]
    pub fight: Account<'info, Fight>,
}

pub fn handler(
    ctx: Context<SubmitRoundScore>,
    fight_id: u64,
    round_id: u8,
    judge_id: u64,
    score_a: u8,
    score_b: u8,
) -> Result<()> {
    let fight = &mut ctx.accounts.fight;
    fight.record_round_score(round_id, judge_id, score_a, score_b)?;

    emit!(RoundScored {
        fight_id,
        round_id,
        score_a,
        score_b,
        judge_id,
    });

    msg!(
        "Judge #{} scored fight #{} round {}: {}-{}",
        judge_id,
        fight_id,
        round_id,
        score_a,
        score_b
    );

    Ok(())
}
