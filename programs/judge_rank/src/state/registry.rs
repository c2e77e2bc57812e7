use anchor_lang::prelude::*;
use crate::errors::ScoringError;
use crate::ranking::Decision;

// =============================================================================
// REGISTRY
// =============================================================================
//
// Identity records for the two kinds of participant. Judges carry a reputation
// (rank plus right/wrong decision counters) that only `apply_ranking` moves;
// fighters are immutable once registered.
// =============================================================================

pub const JUDGE_SEED: &[u8] = b"judge";
pub const FIGHTER_SEED: &[u8] = b"fighter";

/// Names are stored inline as fixed, zero-padded byte arrays
pub const MAX_NAME_LEN: usize = 32;

/// Every judge enters with one point of reputation
pub const INITIAL_JUDGE_RANK: u64 = 1;

/// Validate a display name and pack it into its on-chain form.
pub fn encode_name(name: &str) -> Result<[u8; MAX_NAME_LEN]> {
    require!(!name.is_empty(), ScoringError::InvalidInput);
    require!(name.len() <= MAX_NAME_LEN, ScoringError::InvalidInput);
    // NUL is the padding byte; it would be stripped or misread on decode
    require!(!name.contains('\0'), ScoringError::InvalidInput);

    let mut bytes = [0u8; MAX_NAME_LEN];
    bytes[..name.len()].copy_from_slice(name.as_bytes());
    Ok(bytes)
}

pub fn decode_name(bytes: &[u8; MAX_NAME_LEN]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .to_string()
}

#[account]
#[derive(Debug, PartialEq)]
pub struct Judge {
    /// Registry id, 1-based
    pub judge_id: u64,
    /// Wallet that registered and signs this judge's scores
    pub wallet: Pubkey,
    /// Display name (zero-padded)
    pub name: [u8; MAX_NAME_LEN],
    /// Reputation, never below zero
    pub rank: u64,
    /// Fights where this judge agreed with the consensus
    pub right_decision: u64,
    /// Fights where this judge disagreed with the consensus
    pub wrong_decision: u64,
    pub registered_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Judge {
    pub const SIZE: usize = 8 +  // discriminator
        8 +                      // judge_id
        32 +                     // wallet
        MAX_NAME_LEN +           // name
        8 +                      // rank
        8 +                      // right_decision
        8 +                      // wrong_decision
        8 +                      // registered_at
        1;                       // bump

    pub fn new(
        judge_id: u64,
        wallet: Pubkey,
        name: [u8; MAX_NAME_LEN],
        registered_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            judge_id,
            wallet,
            name,
            rank: INITIAL_JUDGE_RANK,
            right_decision: 0,
            wrong_decision: 0,
            registered_at,
            bump,
        }
    }

    pub fn display_name(&self) -> String {
        decode_name(&self.name)
    }

    /// Apply the outcome of one ranked fight.
    ///
    /// Agreement with the consensus earns a point of rank; disagreement costs
    /// one, floored at zero.
    pub fn record_decision(&mut self, decision: Decision) -> Result<()> {
        match decision {
            Decision::Right => {
                self.right_decision = self
                    .right_decision
                    .checked_add(1)
                    .ok_or(ScoringError::MathOverflow)?;
                self.rank = self.rank.checked_add(1).ok_or(ScoringError::MathOverflow)?;
            }
            Decision::Wrong => {
                self.wrong_decision = self
                    .wrong_decision
                    .checked_add(1)
                    .ok_or(ScoringError::MathOverflow)?;
                self.rank = self.rank.saturating_sub(1);
            }
        }
        Ok(())
    }
}

#[account]
#[derive(Debug, PartialEq)]
pub struct Fighter {
    /// Registry id, 0-based
    pub fighter_id: u64,
    /// Display name (zero-padded)
    pub name: [u8; MAX_NAME_LEN],
    pub registered_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Fighter {
    pub const SIZE: usize = 8 + 8 + MAX_NAME_LEN + 8 + 1;

    pub fn new(fighter_id: u64, name: [u8; MAX_NAME_LEN], registered_at: i64, bump: u8) -> Self {
        Self {
            fighter_id,
            name,
            registered_at,
            bump,
        }
    }

    pub fn display_name(&self) -> String {
        decode_name(&self.name)
    }
}

/// Decoded judge record returned by the `get_judge` query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct JudgeView {
    pub judge_id: u64,
    pub wallet: Pubkey,
    pub name: String,
    pub rank: u64,
    pub right_decision: u64,
    pub wrong_decision: u64,
}

impl From<&Judge> for JudgeView {
    fn from(judge: &Judge) -> Self {
        Self {
            judge_id: judge.judge_id,
            wallet: judge.wallet,
            name: judge.display_name(),
            rank: judge.rank,
            right_decision: judge.right_decision,
            wrong_decision: judge.wrong_decision,
        }
    }
}

/// Decoded fighter record returned by the `get_fighter` query
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FighterView {
    pub fighter_id: u64,
    pub name: String,
}

impl From<&Fighter> for FighterView {
    fn from(fighter: &Fighter) -> Self {
        Self {
            fighter_id: fighter.fighter_id,
            name: fighter.display_name(),
        }
    }
}
