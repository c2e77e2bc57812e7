use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod ranking;
pub mod state;
pub mod verdict;

use instructions::*;
use state::{FighterView, JudgeView, RoundScoreEntry};

declare_id!("7auVuFu2aXkuJMYdEKtx4CYLEJJQxxxAmK3fjXamraRq");

#[program]
pub mod judge_rank {
    use super::*;

    // === Configuration ===

    /// Create the scoring config; the signer becomes its authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Hand admin rights to another wallet
    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::set_authority::handler(ctx, new_authority)
    }

    // === Registry ===

    /// Register the signer as a judge, returning the new judge id
    pub fn register_judge(ctx: Context<RegisterJudge>, name: String) -> Result<u64> {
        instructions::register_judge::handler(ctx, name)
    }

    /// Register a fighter, returning the new fighter id
    pub fn register_fighter(ctx: Context<RegisterFighter>, name: String) -> Result<u64> {
        instructions::register_fighter::handler(ctx, name)
    }

    // === Fights & Scoring ===

    /// Schedule a 3- or 5-round fight between two registered fighters
    pub fn create_match(
        ctx: Context<CreateMatch>,
        fighter_a: u64,
        fighter_b: u64,
        round_count: u8,
    ) -> Result<u64> {
        instructions::create_match::handler(ctx, fighter_a, fighter_b, round_count)
    }

    /// Record one judge's score for one round
    pub fn submit_round_score(
        ctx: Context<SubmitRoundScore>,
        fight_id: u64,
        round_id: u8,
        judge_id: u64,
        score_a: u8,
        score_b: u8,
    ) -> Result<()> {
        instructions::submit_round_score::handler(ctx, fight_id, round_id, judge_id, score_a, score_b)
    }

    // === Reputation ===

    /// Settle judge reputation against the fight's consensus, once per fight
    pub fn apply_ranking<'info>(
        ctx: Context<'_, '_, 'info, 'info, ApplyRanking<'info>>,
        fight_id: u64,
    ) -> Result<()> {
        instructions::apply_ranking::handler(ctx, fight_id)
    }

    // === Queries ===

    /// Look up a judge's name and reputation
    pub fn get_judge(ctx: Context<GetJudge>, judge_id: u64) -> Result<JudgeView> {
        instructions::queries::get_judge(ctx, judge_id)
    }

    /// Look up a registered fighter
    pub fn get_fighter(ctx: Context<GetFighter>, fighter_id: u64) -> Result<FighterView> {
        instructions::queries::get_fighter(ctx, fighter_id)
    }

    /// One judge's submitted rounds on a fight, in round order
    pub fn get_round_scores(
        ctx: Context<GetRoundScores>,
        fight_id: u64,
        judge_id: u64,
    ) -> Result<Vec<RoundScoreEntry>> {
        instructions::queries::get_round_scores(ctx, fight_id, judge_id)
    }

    /// Winner on one judge's summed scores; fails with `Tie` on level totals
    pub fn get_judge_verdict(
        ctx: Context<GetJudgeVerdict>,
        fight_id: u64,
        judge_id: u64,
    ) -> Result<JudgeVerdictView> {
        instructions::queries::get_judge_verdict(ctx, fight_id, judge_id)
    }

    /// Majority winner across the fight's decisive judges
    pub fn get_consensus_verdict(
        ctx: Context<GetConsensusVerdict>,
        fight_id: u64,
    ) -> Result<ConsensusView> {
        instructions::queries::get_consensus_verdict(ctx, fight_id)
    }
}
