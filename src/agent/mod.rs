use crate::prelude::*;

pub mod book;
pub mod difficulty;
pub mod evaluators;
pub mod scalars;
pub mod search;
pub mod selector;
pub mod variation;

pub use book::*;
pub use difficulty::*;
pub use evaluators::*;
pub use scalars::*;
pub use search::*;
pub use selector::*;
pub use variation::*;

/// A policy by which we score a frontier position of the search tree.
pub trait Evaluator<R: Rules>
{
    /// Scores a terminal or depth-exhausted position for the side to move: positive is good for
    /// whoever moves next.
    fn evaluate(&self, board: &R) -> Score;
}
