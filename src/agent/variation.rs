use arrayvec::ArrayVec;

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq)]
/// A particular line taken by the search, which is a continuation and a corresponding score.
///
/// The first move of the line is the move chosen at the node the variation was returned from;
/// an empty line means the node was a frontier node.
pub struct Variation<M>
{
    pub moves: ArrayVec<M, MAXIMUM_PLY>,
    pub score: Score,
}

impl<M: Clone> Variation<M>
{
    /// The move chosen at the root of this line, if any.
    pub fn best(&self) -> Option<&M>
    {
        self.moves.first()
    }

    /// A line with no moves yet.
    pub fn new(score: Score) -> Self
    {
        Variation {
            moves: ArrayVec::new(),
            score,
        }
    }

    /// Replaces this line with `mv` followed by the continuation below it.
    pub fn load(&mut self, mv: M, rest: &Variation<M>)
    {
        self.moves.clear();
        self.moves.push(mv);
        self.moves.extend(rest.moves.iter().take(MAXIMUM_PLY - 1).cloned());
        self.score = rest.score;
    }
}
