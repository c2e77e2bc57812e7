use anchor_lang::prelude::*;

/// Emitted once per accepted round score, in submission order.
#[event]
pub struct RoundScored {
    pub fight_id: u64,
    pub round_id: u8,
    pub score_a: u8,
    pub score_b: u8,
    pub judge_id: u64,
}
