pub mod initialize;
pub mod set_authority;
pub mod register_judge;
pub mod register_fighter;
pub mod create_match;
pub mod submit_round_score;
pub mod apply_ranking;

// Read-only instructions answering through return data
pub mod queries;

pub use initialize::*;
pub use set_authority::*;
pub use register_judge::*;
pub use register_fighter::*;
pub use create_match::*;
pub use submit_round_score::*;
pub use apply_ranking::*;
pub use queries::*;
