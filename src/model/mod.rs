pub mod flags;
pub mod pronouns;
pub mod scores;
pub mod thresholds;
