use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use crate::errors::ScoringError;
use crate::ranking::plan_ranking;
use crate::state::{Fight, Judge, FIGHT_SEED};

// =============================================================================
// APPLY RANKING INSTRUCTION
// =============================================================================
//
// Settles judge reputation for one fight against its consensus verdict.
//
// Remaining accounts: one writable `Judge` account per scorecard on the fight,
// in scorecard order (the order judges first submitted). Tied judges must still
// be passed so the list lines up, but their accounts are not written. Matching
// and the reputation changes themselves live in `RankingPlan::apply`.
// =============================================================================

#[derive(Accounts)]
#[instruction(fight_id: u64)]
pub struct ApplyRanking<'info> {
    /// Anyone can trigger ranking once the panel has scored
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [FIGHT_SEED, &fight_id.to_le_bytes()],
        bump = fight.bump,
        constraint = !fight.ranked @ ScoringError::AlreadyRanked,
    )]
    pub fight: Account<'info, Fight>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ApplyRanking<'info>>,
    fight_id: u64,
) -> Result<()> {
    let fight = &mut ctx.accounts.fight;
    let plan = plan_ranking(fight)?;

    let mut judges = Vec::with_capacity(ctx.remaining_accounts.len());
    for info in ctx.remaining_accounts.iter() {
        require!(info.is_writable, ScoringError::JudgeAccountMismatch);
        let judge: Account<'info, Judge> = Account::try_from(info)
            .map_err(|_| error!(ScoringError::JudgeAccountMismatch))?;
        judges.push(judge);
    }

    plan.apply(&mut judges)?;

    for (judge, (_, decision)) in judges.iter().zip(&plan.decisions) {
        let Some(decision) = decision else {
            continue;
        };
        judge.exit(ctx.program_id)?;

        msg!(
            "Judge #{} {:?}: rank {}, right {}, wrong {}",
            judge.judge_id,
            decision,
            judge.rank,
            judge.right_decision,
            judge.wrong_decision
        );
    }

    fight.ranked = true;

    msg!(
        "Fight #{} ranked. Consensus winner: fighter #{} ({}-{} judges, {} decisive)",
        fight_id,
        plan.consensus.winner_id,
        plan.consensus.votes_a,
        plan.consensus.votes_b,
        plan.decisive()
    );

    Ok(())
}
