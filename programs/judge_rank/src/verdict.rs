use std::cmp::Ordering;

use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::state::{Fight, Scorecard};

// =============================================================================
// VERDICT ENGINE
// =============================================================================
//
// Pure reads over a fight's scorecards. A judge's verdict is whoever leads on
// the judge's summed round scores; the consensus is whoever a strict majority
// of decisive judges picked. Round margins play no part in the consensus.
// =============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct JudgeVerdict {
    pub judge_id: u64,
    pub winner_id: u64,
    pub total_a: u32,
    pub total_b: u32,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsensusVerdict {
    pub winner_id: u64,
    pub votes_a: u16,
    pub votes_b: u16,
}

/// Verdict implied by one scorecard, `None` when the totals are level.
pub fn scorecard_verdict(fight: &Fight, card: &Scorecard) -> Option<JudgeVerdict> {
    let (total_a, total_b) = card.totals();
    let winner_id = match total_a.cmp(&total_b) {
        Ordering::Greater => fight.fighter_a,
        Ordering::Less => fight.fighter_b,
        Ordering::Equal => return None,
    };

    Some(JudgeVerdict {
        judge_id: card.judge_id,
        winner_id,
        total_a,
        total_b,
    })
}

/// A judge who has scored only part of the fight still gets a verdict from the
/// rounds they did score. A judge with no scores has level (zero) totals.
pub fn judge_verdict(fight: &Fight, judge_id: u64) -> Result<JudgeVerdict> {
    let verdict = match fight.scorecard(judge_id) {
        Some(card) => scorecard_verdict(fight, card),
        None => None,
    };
    verdict.ok_or_else(|| error!(ScoringError::Tie))
}

/// Verdicts of every judge who scored the fight, tied judges left out.
pub fn decisive_verdicts(fight: &Fight) -> impl Iterator<Item = JudgeVerdict> + '_ {
    fight
        .scorecards
        .iter()
        .filter_map(move |card| scorecard_verdict(fight, card))
}

pub fn consensus_verdict(fight: &Fight) -> Result<ConsensusVerdict> {
    let (mut votes_a, mut votes_b) = (0u16, 0u16);
    for verdict in decisive_verdicts(fight) {
        if verdict.winner_id == fight.fighter_a {
            votes_a += 1;
        } else {
            votes_b += 1;
        }
    }

    let winner_id = match votes_a.cmp(&votes_b) {
        Ordering::Greater => fight.fighter_a,
        Ordering::Less => fight.fighter_b,
        Ordering::Equal => return err!(ScoringError::NoConsensus),
    };

    Ok(ConsensusVerdict {
        winner_id,
        votes_a,
        votes_b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_scoring_error;

    const FIGHTER_A: u64 = 0;
    const FIGHTER_B: u64 = 1;

    fn fight_with(cards: &[(u64, &[(u8, u8)])]) -> Fight {
        let mut fight = Fight::new(0, FIGHTER_A, FIGHTER_B, 3, 0, 255).unwrap();
        for (judge_id, rounds) in cards {
            for (round_id, (a, b)) in (1u8..).zip(rounds.iter()) {
                fight.record_round_score(round_id, *judge_id, *a, *b).unwrap();
            }
        }
        fight
    }

    const A_29_28: &[(u8, u8)] = &[(10, 9), (9, 10), (10, 9)];
    const B_30_27: &[(u8, u8)] = &[(9, 10), (9, 10), (9, 10)];
    const LEVEL: &[(u8, u8)] = &[(10, 9), (9, 10)];

    #[test]
    fn split_rounds_go_to_fighter_a_on_totals() {
        let fight = fight_with(&[(1, A_29_28)]);
        let verdict = judge_verdict(&fight, 1).unwrap();

        assert_eq!(verdict.winner_id, FIGHTER_A);
        assert_eq!((verdict.total_a, verdict.total_b), (29, 28));
    }

    #[test]
    fn clean_sweep_goes_to_fighter_b() {
        let fight = fight_with(&[(2, B_30_27)]);
        let verdict = judge_verdict(&fight, 2).unwrap();

        assert_eq!(verdict.winner_id, FIGHTER_B);
        assert_eq!((verdict.total_a, verdict.total_b), (27, 30));
    }

    #[test]
    fn partial_card_yields_a_verdict() {
        let one_round: &[(u8, u8)] = &[(10, 8)];
        let fight = fight_with(&[(1, one_round)]);
        let verdict = judge_verdict(&fight, 1).unwrap();

        assert_eq!(verdict.winner_id, FIGHTER_A);
        assert_eq!((verdict.total_a, verdict.total_b), (10, 8));
    }

    #[test]
    fn level_totals_are_a_tie() {
        let fight = fight_with(&[(1, LEVEL)]);
        assert_scoring_error(judge_verdict(&fight, 1), ScoringError::Tie);
    }

    #[test]
    fn judge_without_scores_is_a_tie() {
        let fight = fight_with(&[(1, A_29_28)]);
        assert_scoring_error(judge_verdict(&fight, 9), ScoringError::Tie);
    }

    #[test]
    fn two_of_three_judges_carry_the_consensus() {
        let fight = fight_with(&[(1, A_29_28), (2, B_30_27), (3, A_29_28)]);
        let consensus = consensus_verdict(&fight).unwrap();

        assert_eq!(consensus.winner_id, FIGHTER_A);
        assert_eq!((consensus.votes_a, consensus.votes_b), (2, 1));
    }

    #[test]
    fn majority_ignores_round_margins() {
        // one wide card for A cannot outvote two narrow cards for B
        let wide_a: &[(u8, u8)] = &[(10, 7), (10, 7), (10, 7)];
        let narrow_b: &[(u8, u8)] = &[(9, 10), (10, 9), (9, 10)];
        let fight = fight_with(&[(1, wide_a), (2, narrow_b), (3, narrow_b)]);

        assert_eq!(consensus_verdict(&fight).unwrap().winner_id, FIGHTER_B);
    }

    #[test]
    fn even_split_has_no_consensus() {
        let fight = fight_with(&[(1, A_29_28), (2, B_30_27)]);
        assert_scoring_error(consensus_verdict(&fight), ScoringError::NoConsensus);
    }

    #[test]
    fn no_decisive_judges_has_no_consensus() {
        assert_scoring_error(consensus_verdict(&fight_with(&[])), ScoringError::NoConsensus);
        assert_scoring_error(
            consensus_verdict(&fight_with(&[(1, LEVEL), (2, LEVEL)])),
            ScoringError::NoConsensus,
        );
    }

    #[test]
    fn tied_judges_are_left_out_of_the_tally() {
        let fight = fight_with(&[(1, LEVEL), (2, B_30_27)]);
        let consensus = consensus_verdict(&fight).unwrap();

        assert_eq!(consensus.winner_id, FIGHTER_B);
        assert_eq!((consensus.votes_a, consensus.votes_b), (0, 1));
        assert_eq!(decisive_verdicts(&fight).count(), 1);
    }
}
