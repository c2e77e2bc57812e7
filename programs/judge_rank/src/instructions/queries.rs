use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::state::{
    Fight, Fighter, FighterView, Judge, JudgeView, RoundScoreEntry, ScoringConfig, CONFIG_SEED,
    FIGHTER_SEED, FIGHT_SEED, JUDGE_SEED,
};
use crate::verdict::{consensus_verdict, judge_verdict};

// =============================================================================
// QUERIES
// =============================================================================
//
// Read-only instructions. Nothing is written; results come back as Anchor
// return data so clients can simulate them instead of decoding accounts.
// =============================================================================

/// Returned by `get_judge_verdict`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct JudgeVerdictView {
    pub winner_id: u64,
    pub winner_name: String,
    pub judge_name: String,
    pub total_a: u32,
    pub total_b: u32,
}

/// Returned by `get_consensus_verdict`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConsensusView {
    pub winner_id: u64,
    pub winner_name: String,
    pub votes_a: u16,
    pub votes_b: u16,
}

#[derive(Accounts)]
#[instruction(judge_id: u64)]
pub struct GetJudge<'info> {
    #[account(
        seeds = [JUDGE_SEED, &judge_id.to_le_bytes()],
        bump = judge.bump,
    )]
    pub judge: Account<'info, Judge>,
}

pub fn get_judge(ctx: Context<GetJudge>, _judge_id: u64) -> Result<JudgeView> {
    Ok(JudgeView::from(&*ctx.accounts.judge))
}

#[derive(Accounts)]
#[instruction(fighter_id: u64)]
pub struct GetFighter<'info> {
    #[account(
        seeds = [FIGHTER_SEED, &fighter_id.to_le_bytes()],
        bump = fighter.bump,
    )]
    pub fighter: Account<'info, Fighter>,
}

pub fn get_fighter(ctx: Context<GetFighter>, _fighter_id: u64) -> Result<FighterView> {
    Ok(FighterView::from(&*ctx.accounts.fighter))
}

#[derive(Accounts)]
#[instruction(fight_id: u64)]
pub struct GetRoundScores<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, ScoringConfig>,

    #[account(
        seeds = [FIGHT_SEED, &fight_id.to_le_bytes()],
        bump = fight.bump,
    )]
    pub fight: Account<'info, Fight>,
}

pub fn get_round_scores(
    ctx: Context<GetRoundScores>,
    _fight_id: u64,
    judge_id: u64,
) -> Result<Vec<RoundScoreEntry>> {
    require!(
        ctx.accounts.config.judge_exists(judge_id),
        ScoringError::NotFound
    );
    Ok(ctx.accounts.fight.round_scores(judge_id))
}

/// The fight plus both of its fighters, for naming the winner.
#[derive(Accounts)]
#[instruction(fight_id: u64)]
pub struct GetConsensusVerdict<'info> {
    #[account(
        seeds = [FIGHT_SEED, &fight_id.to_le_bytes()],
        bump = fight.bump,
    )]
    pub fight: Account<'info, Fight>,

    #[account(
        seeds = [FIGHTER_SEED, &fight.fighter_a.to_le_bytes()],
        bump = fighter_a.bump,
    )]
    pub fighter_a: Account<'info, Fighter>,

    #[account(
        seeds = [FIGHTER_SEED, &fight.fighter_b.to_le_bytes()],
        bump = fighter_b.bump,
    )]
    pub fighter_b: Account<'info, Fighter>,
}

#[derive(Accounts)]
#[instruction(fight_id: u64, judge_id: u64)]
pub struct GetJudgeVerdict<'info> {
    #[account(
        seeds = [FIGHT_SEED, &fight_id.to_le_bytes()],
        bump = fight.bump,
    )]
    pub fight: Account<'info, Fight>,

    #[account(
        seeds = [JUDGE_SEED, &judge_id.to_le_bytes()],
        bump = judge.bump,
    )]
    pub judge: Account<'info, Judge>,

    #[account(
        seeds = [FIGHTER_SEED, &fight.fighter_a.to_le_bytes()],
        bump = fighter_a.bump,
    )]
    pub fighter_a: Account<'info, Fighter>,

    #[account(
        seeds = [FIGHTER_SEED, &fight.fighter_b.to_le_bytes()],
        bump = fighter_b.bump,
    )]
    pub fighter_b: Account<'info, Fighter>,
}

fn name_of(winner_id: u64, fighter_a: &Fighter, fighter_b: &Fighter) -> String {
    if winner_id == fighter_a.fighter_id {
        fighter_a.display_name()
    } else {
        fighter_b.display_name()
    }
}

pub fn get_judge_verdict(
    ctx: Context<GetJudgeVerdict>,
    _fight_id: u64,
    judge_id: u64,
) -> Result<JudgeVerdictView> {
    let accounts = &ctx.accounts;
    let verdict = judge_verdict(&accounts.fight, judge_id)?;

    Ok(JudgeVerdictView {
        winner_id: verdict.winner_id,
        winner_name: name_of(verdict.winner_id, &accounts.fighter_a, &accounts.fighter_b),
        judge_name: accounts.judge.display_name(),
        total_a: verdict.total_a,
        total_b: verdict.total_b,
    })
}

pub fn get_consensus_verdict(
    ctx: Context<GetConsensusVerdict>,
    _fight_id: u64,
) -> Result<ConsensusView> {
    let accounts = &ctx.accounts;
    let consensus = consensus_verdict(&accounts.fight)?;

    Ok(ConsensusView {
        winner_id: consensus.winner_id,
        winner_name: name_of(consensus.winner_id, &accounts.fighter_a, &accounts.fighter_b),
        votes_a: consensus.votes_a,
        votes_b: consensus.votes_b,
    })
}
