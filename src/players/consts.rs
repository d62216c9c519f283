pub const LEADERBOARD_SIZE: usize = 10;
/// Counted in grapheme clusters.
pub const MAX_NICKNAME_LENGTH: usize = 50;
