use anchor_lang::prelude::*;
use crate::errors::ScoringError;

// =============================================================================
// FIGHT / ROUND STORE
// =============================================================================
//
// A fight pairs two registered fighters over a fixed number of rounds. Every
// judge who scores the fight gets a scorecard with one slot per round; a slot is
// written at most once, which is what rejects duplicate submissions.
// =============================================================================

pub const FIGHT_SEED: &[u8] = b"fight";

/// Longest schedulable fight
pub const MAX_ROUNDS: usize = 5;

/// Fights are scheduled for exactly 3 or 5 rounds
pub const ALLOWED_ROUND_COUNTS: [u8; 2] = [3, 5];

/// Scorecards are stored inline on the fight account
pub const MAX_JUDGES_PER_FIGHT: usize = 16;

pub fn validate_round_count(round_count: u8) -> Result<()> {
    require!(
        ALLOWED_ROUND_COUNTS.contains(&round_count),
        ScoringError::InvalidRoundCount
    );
    Ok(())
}

/// One judge's slot for one round
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundMark {
    pub submitted: bool,
    pub score_a: u8,
    pub score_b: u8,
}

impl RoundMark {
    pub const SIZE: usize = 1 + 1 + 1;
}

/// A submitted round as returned to clients
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundScoreEntry {
    pub round_id: u8,
    pub score_a: u8,
    pub score_b: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Scorecard {
    pub judge_id: u64,
    /// Slot `i` holds round `i + 1`
    pub rounds: [RoundMark; MAX_ROUNDS],
}

impl Scorecard {
    pub const SIZE: usize = 8 + RoundMark::SIZE * MAX_ROUNDS;

    pub fn new(judge_id: u64) -> Self {
        Self {
            judge_id,
            rounds: [RoundMark::default(); MAX_ROUNDS],
        }
    }

    /// Submitted rounds in ascending round order
    pub fn entries(&self) -> Vec<RoundScoreEntry> {
        self.rounds
            .iter()
            .zip(1u8..)
            .filter(|(mark, _)| mark.submitted)
            .map(|(mark, round_id)| RoundScoreEntry {
                round_id,
                score_a: mark.score_a,
                score_b: mark.score_b,
            })
            .collect()
    }

    /// Summed scores over whatever rounds were submitted.
    pub fn totals(&self) -> (u32, u32) {
        self.rounds
            .iter()
            .filter(|mark| mark.submitted)
            .fold((0, 0), |(a, b), mark| {
                (a + mark.score_a as u32, b + mark.score_b as u32)
            })
    }
}

#[account]
#[derive(Debug, PartialEq)]
pub struct Fight {
    /// Fight id, 0-based
    pub fight_id: u64,
    /// Fighter whose score is `score_a`
    pub fighter_a: u64,
    /// Fighter whose score is `score_b`
    pub fighter_b: u64,
    /// 3 or 5
    pub round_count: u8,
    /// One per judge, in order of first submission
    pub scorecards: Vec<Scorecard>,
    /// Set once reputation has been applied; closes scoring
    pub ranked: bool,
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Fight {
    pub const SIZE: usize = 8 +                          // discriminator
        8 +                                              // fight_id
        8 +                                              // fighter_a
        8 +                                              // fighter_b
        1 +                                              // round_count
        4 + Scorecard::SIZE * MAX_JUDGES_PER_FIGHT +     // scorecards
        1 +                                              // ranked
        8 +                                              // created_at
        1;                                               // bump
    // Total: 415 bytes

    pub fn new(
        fight_id: u64,
        fighter_a: u64,
        fighter_b: u64,
        round_count: u8,
        created_at: i64,
        bump: u8,
    ) -> Result<Self> {
        validate_round_count(round_count)?;
        require!(fighter_a != fighter_b, ScoringError::InvalidInput);

        Ok(Self {
            fight_id,
            fighter_a,
            fighter_b,
            round_count,
            scorecards: Vec::new(),
            ranked: false,
            created_at,
            bump,
        })
    }

    pub fn contains_round(&self, round_id: u8) -> bool {
        (1..=self.round_count).contains(&round_id)
    }

    pub fn scorecard(&self, judge_id: u64) -> Option<&Scorecard> {
        self.scorecards.iter().find(|card| card.judge_id == judge_id)
    }

    /// Record one judge's score for one round.
    ///
    /// Nothing is written unless every check passes.
    pub fn record_round_score(
        &mut self,
        round_id: u8,
        judge_id: u64,
        score_a: u8,
        score_b: u8,
    ) -> Result<()> {
        require!(!self.ranked, ScoringError::AlreadyRanked);
        require!(self.contains_round(round_id), ScoringError::OutOfRange);

        let slot = (round_id - 1) as usize;
        let index = match self.scorecards.iter().position(|card| card.judge_id == judge_id) {
            Some(index) => {
                require!(
                    !self.scorecards[index].rounds[slot].submitted,
                    ScoringError::DuplicateSubmission
                );
                index
            }
            None => {
                require!(
                    self.scorecards.len() < MAX_JUDGES_PER_FIGHT,
                    ScoringError::TooManyJudges
                );
                self.scorecards.push(Scorecard::new(judge_id));
                self.scorecards.len() - 1
            }
        };

        self.scorecards[index].rounds[slot] = RoundMark {
            submitted: true,
            score_a,
            score_b,
        };
        Ok(())
    }

    /// Rounds this judge has scored, ascending; empty if none.
    pub fn round_scores(&self, judge_id: u64) -> Vec<RoundScoreEntry> {
        self.scorecard(judge_id)
            .map(Scorecard::entries)
            .unwrap_or_default()
    }
}
