use std::ops::DerefMut;

use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::state::{Fight, Judge};
use crate::verdict::{consensus_verdict, scorecard_verdict, ConsensusVerdict};

/// How a judge's verdict compared with the fight's consensus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Right,
    Wrong,
}

/// Reputation changes for one fight, computed before any judge is touched.
#[derive(Debug)]
pub struct RankingPlan {
    pub consensus: ConsensusVerdict,
    /// One entry per scorecard, in scorecard order. `None` marks a tied judge,
    /// whose reputation is left alone.
    pub decisions: Vec<(u64, Option<Decision>)>,
}

impl RankingPlan {
    pub fn decisive(&self) -> usize {
        self.decisions.iter().filter(|(_, d)| d.is_some()).count()
    }

    /// Apply the plan to the fight's judges.
    ///
    /// `judges` must hold exactly one judge per scorecard, in scorecard order.
    /// The whole list is matched before any judge is changed. Tied judges are
    /// matched but left untouched.
    pub fn apply<J: DerefMut<Target = Judge>>(&self, judges: &mut [J]) -> Result<()> {
        require!(
            judges.len() == self.decisions.len(),
            ScoringError::JudgeAccountMismatch
        );
        for (judge, (judge_id, _)) in judges.iter().zip(&self.decisions) {
            require!(
                judge.judge_id == *judge_id,
                ScoringError::JudgeAccountMismatch
            );
        }

        for (judge, (_, decision)) in judges.iter_mut().zip(&self.decisions) {
            if let Some(decision) = decision {
                judge.record_decision(*decision)?;
            }
        }
        Ok(())
    }
}

/// A fight is ranked at most once; a second attempt fails with `AlreadyRanked`.
pub fn plan_ranking(fight: &Fight) -> Result<RankingPlan> {
    require!(!fight.ranked, ScoringError::AlreadyRanked);

    let consensus = consensus_verdict(fight)?;
    let decisions = fight
        .scorecards
        .iter()
        .map(|card| {
            let decision = scorecard_verdict(fight, card).map(|verdict| {
                if verdict.winner_id == consensus.winner_id {
                    Decision::Right
                } else {
                    Decision::Wrong
                }
            });
            (card.judge_id, decision)
        })
        .collect();

    Ok(RankingPlan {
        consensus,
        decisions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_scoring_error;
    use crate::state::encode_name;

    fn judge(judge_id: u64, rank: u64) -> Judge {
        let mut judge = Judge::new(judge_id, Pubkey::new_unique(), encode_name("J").unwrap(), 0, 255);
        judge.rank = rank;
        judge
    }

    fn score_all(fight: &mut Fight, judge_id: u64, rounds: &[(u8, u8)]) {
        for (round_id, (a, b)) in (1u8..).zip(rounds.iter()) {
            fight.record_round_score(round_id, judge_id, *a, *b).unwrap();
        }
    }

    fn apply(fight: &mut Fight, judges: &mut [Judge]) -> Result<()> {
        let plan = plan_ranking(fight)?;
        let mut panel: Vec<&mut Judge> = judges.iter_mut().collect();
        plan.apply(&mut panel)?;
        fight.ranked = true;
        Ok(())
    }

    fn scored_three_judge_fight() -> Fight {
        let mut fight = Fight::new(0, 0, 1, 3, 0, 255).unwrap();
        score_all(&mut fight, 1, &[(10, 9), (9, 10), (10, 9)]);
        score_all(&mut fight, 2, &[(9, 10), (9, 10), (9, 10)]);
        score_all(&mut fight, 3, &[(10, 9), (9, 10), (10, 9)]);
        fight
    }

    #[test]
    fn majority_judges_gain_and_dissenter_loses() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 1), judge(2, 1), judge(3, 1)];

        apply(&mut fight, &mut judges).unwrap();

        let ranks: Vec<_> = judges.iter().map(|j| j.rank).collect();
        let rights: Vec<_> = judges.iter().map(|j| j.right_decision).collect();
        let wrongs: Vec<_> = judges.iter().map(|j| j.wrong_decision).collect();
        assert_eq!(ranks, vec![2, 0, 2]);
        assert_eq!(rights, vec![1, 0, 1]);
        assert_eq!(wrongs, vec![0, 1, 0]);
        assert!(fight.ranked);
    }

    #[test]
    fn adjustments_are_relative_to_starting_rank() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 5), judge(2, 7), judge(3, 0)];

        apply(&mut fight, &mut judges).unwrap();

        assert_eq!(judges[0].rank, 6);
        assert_eq!(judges[1].rank, 6);
        assert_eq!(judges[2].rank, 1);
    }

    #[test]
    fn dissenter_at_zero_rank_stays_at_zero() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 1), judge(2, 0), judge(3, 1)];

        apply(&mut fight, &mut judges).unwrap();

        assert_eq!(judges[1].rank, 0);
        assert_eq!(judges[1].wrong_decision, 1);
    }

    #[test]
    fn second_ranking_is_rejected_and_changes_nothing() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 1), judge(2, 1), judge(3, 1)];
        apply(&mut fight, &mut judges).unwrap();
        let after_first = judges.clone();

        assert_scoring_error(apply(&mut fight, &mut judges), ScoringError::AlreadyRanked);
        assert_eq!(judges, after_first);
    }

    #[test]
    fn tied_judge_is_untouched() {
        let mut fight = scored_three_judge_fight();
        score_all(&mut fight, 4, &[(10, 9), (9, 10)]);
        let mut judges = [judge(1, 1), judge(2, 1), judge(3, 1), judge(4, 3)];

        let plan = plan_ranking(&fight).unwrap();
        assert_eq!(plan.decisions.len(), 4);
        assert_eq!(plan.decisive(), 3);
        assert_eq!(plan.decisions[3], (4, None));

        apply(&mut fight, &mut judges).unwrap();
        assert_eq!(judges[3].rank, 3);
        assert_eq!(judges[3].right_decision, 0);
        assert_eq!(judges[3].wrong_decision, 0);
    }

    #[test]
    fn failed_consensus_leaves_fight_rankable() {
        let mut fight = Fight::new(0, 0, 1, 3, 0, 255).unwrap();
        score_all(&mut fight, 1, &[(10, 9), (10, 9), (10, 9)]);
        score_all(&mut fight, 2, &[(9, 10), (9, 10), (9, 10)]);
        let mut judges = [judge(1, 1), judge(2, 1)];

        assert_scoring_error(apply(&mut fight, &mut judges), ScoringError::NoConsensus);
        assert!(!fight.ranked);
        assert_eq!(judges[0].rank, 1);
        assert_eq!(judges[1].rank, 1);

        // a third judge breaks the deadlock
        score_all(&mut fight, 3, &[(9, 10), (9, 10), (10, 9)]);
        let mut judges = [judge(1, 1), judge(2, 1), judge(3, 1)];
        apply(&mut fight, &mut judges).unwrap();
        assert_eq!(judges[1].right_decision, 1);
        assert_eq!(judges[0].wrong_decision, 1);
    }

    #[test]
    fn short_judge_list_is_rejected_untouched() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 1), judge(2, 1)];

        assert_scoring_error(apply(&mut fight, &mut judges), ScoringError::JudgeAccountMismatch);
        assert!(!fight.ranked);
        assert_eq!(judges[0].rank, 1);
        assert_eq!(judges[1].rank, 1);
    }

    #[test]
    fn reordered_judge_list_is_rejected_untouched() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 1), judge(3, 1), judge(2, 1)];
        let before = judges.clone();

        assert_scoring_error(apply(&mut fight, &mut judges), ScoringError::JudgeAccountMismatch);
        assert_eq!(judges, before);
        assert!(!fight.ranked);
    }

    #[test]
    fn unknown_judge_in_list_is_rejected_untouched() {
        let mut fight = scored_three_judge_fight();
        let mut judges = [judge(1, 1), judge(2, 1), judge(9, 1)];
        let before = judges.clone();

        assert_scoring_error(apply(&mut fight, &mut judges), ScoringError::JudgeAccountMismatch);
        assert_eq!(judges, before);
    }

    #[test]
    fn extra_judge_in_list_is_rejected() {
        let fight = scored_three_judge_fight();
        let plan = plan_ranking(&fight).unwrap();
        let mut judges = [judge(1, 1), judge(2, 1), judge(3, 1), judge(4, 1)];
        let mut panel: Vec<&mut Judge> = judges.iter_mut().collect();

        assert_scoring_error(plan.apply(&mut panel), ScoringError::JudgeAccountMismatch);
    }
}
