use anchor_lang::prelude::*;
use crate::errors::ScoringError;

pub const CONFIG_SEED: &[u8] = b"scoring_config";

/// Judges are numbered from 1, fighters and fights from 0.
pub const FIRST_JUDGE_ID: u64 = 1;
pub const FIRST_FIGHTER_ID: u64 = 0;
pub const FIRST_FIGHT_ID: u64 = 0;

/// Program-wide singleton: admin authority plus the id counters.
///
/// Every registration and match creation writes this account, so the ledger
/// serializes id allocation.
#[account]
pub struct ScoringConfig {
    /// Wallet allowed to register fighters and schedule fights
    pub authority: Pubkey,
    /// Id the next registered judge receives
    pub next_judge_id: u64,
    /// Id the next registered fighter receives
    pub next_fighter_id: u64,
    /// Id the next scheduled fight receives
    pub next_fight_id: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl ScoringConfig {
    pub const SIZE: usize = 8 +  // discriminator
        32 +                     // authority
        8 +                      // next_judge_id
        8 +                      // next_fighter_id
        8 +                      // next_fight_id
        1;                       // bump

    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            next_judge_id: FIRST_JUDGE_ID,
            next_fighter_id: FIRST_FIGHTER_ID,
            next_fight_id: FIRST_FIGHT_ID,
            bump,
        }
    }

    pub fn allocate_judge_id(&mut self) -> Result<u64> {
        Self::bump_counter(&mut self.next_judge_id)
    }

    pub fn allocate_fighter_id(&mut self) -> Result<u64> {
        Self::bump_counter(&mut self.next_fighter_id)
    }

    pub fn allocate_fight_id(&mut self) -> Result<u64> {
        Self::bump_counter(&mut self.next_fight_id)
    }

    /// Fighters are never removed, so every id below the counter is live.
    pub fn fighter_exists(&self, fighter_id: u64) -> bool {
        fighter_id < self.next_fighter_id
    }

    pub fn judge_exists(&self, judge_id: u64) -> bool {
        (FIRST_JUDGE_ID..self.next_judge_id).contains(&judge_id)
    }

    /// Hand admin rights to `new_authority`; the default key is refused.
    pub fn set_authority(&mut self, new_authority: Pubkey) -> Result<()> {
        require_keys_neq!(new_authority, Pubkey::default(), ScoringError::InvalidAuthority);
        self.authority = new_authority;
        Ok(())
    }

    fn bump_counter(counter: &mut u64) -> Result<u64> {
        let id = *counter;
        *counter = id.checked_add(1).ok_or(ScoringError::MathOverflow)?;
        Ok(id)
    }
}
