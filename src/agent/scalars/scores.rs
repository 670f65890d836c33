/// A position score in pawns, relative to some side.
pub type Score = f64;

pub mod consts
{
    use super::Score;

    /// The score of being checkmated, negated for delivering it.
    pub const MATE: Score = 9999.0;

    /// Any drawn position.
    pub const DRAW: Score = 0.0;

    /// Bounds of the initial search window.
    pub const INF: Score = Score::INFINITY;
}

pub use consts::*;

/// Whether a score can only come from a forced checkmate.
pub fn is_mate(score: Score) -> bool
{
    score.abs() >= MATE
}
