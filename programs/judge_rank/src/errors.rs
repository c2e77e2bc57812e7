use anchor_lang::prelude::*;

#[error_code]
pub enum ScoringError {
    #[msg("Invalid input: names must be 1-32 bytes without NUL and the two fighters must differ")]
    InvalidInput,

    #[msg("Not found: no judge, fighter or fight with that id")]
    NotFound,

    #[msg("Invalid round count: a fight is scheduled for exactly 3 or 5 rounds")]
    InvalidRoundCount,

    #[msg("Round out of range: round id must lie between 1 and the fight's round count")]
    OutOfRange,

    #[msg("Duplicate submission: this judge already scored this round")]
    DuplicateSubmission,

    #[msg("Tie: the judge's totals are level, no winner")]
    Tie,

    #[msg("No consensus: judges are evenly split or none gave a decisive verdict")]
    NoConsensus,

    #[msg("Fight already ranked: reputation was applied and scoring is closed")]
    AlreadyRanked,

    #[msg("Unauthorized: signer does not hold the required authority")]
    Unauthorized,

    #[msg("Invalid authority: cannot set zero address as authority")]
    InvalidAuthority,

    #[msg("Too many judges scored this fight")]
    TooManyJudges,

    #[msg("Judge accounts do not match the fight's scorecards")]
    JudgeAccountMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}

#[cfg(test)]
pub(crate) fn assert_scoring_error<T: std::fmt::Debug>(result: Result<T>, expected: ScoringError) {
    assert_eq!(result.unwrap_err(), anchor_lang::error::Error::from(expected));
}
