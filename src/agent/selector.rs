use std::{sync::Arc, time::Instant};

use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Debug)]
/// Chooses the move to play: from the opening book when the policy allows it and the book knows
/// the position, otherwise by searching.
pub struct MoveSelector<E = MaterialEvaluator>
{
    book:      Arc<OpeningBook>,
    evaluator: E,
    policy:    Policy,
    stats:     SearchStats,
}

impl MoveSelector<MaterialEvaluator>
{
    /// Creates a selector for the named level, playing with the material evaluator.
    pub fn new(level: &str, book: Arc<OpeningBook>) -> Self
    {
        MoveSelector::with_evaluator(Policy::named(level), book, MaterialEvaluator)
    }
}

impl<E> MoveSelector<E>
{
    /// Creates a selector with an explicit policy and evaluator.
    pub fn with_evaluator(policy: Policy, book: Arc<OpeningBook>, evaluator: E) -> Self
    {
        MoveSelector {
            book,
            evaluator,
            policy,
            stats: SearchStats::default(),
        }
    }

    /// Returns the best move in the current position, or nothing if the game is over.
    pub fn best_move<B>(&mut self, board: &mut B) -> Result<Option<B::Move>>
    where
        B: Notation,
        E: Evaluator<B>,
    {
        self.stats = SearchStats::default();

        if board.is_over()
        {
            log::debug!("no move to find, the game is over ({})", board.state());
            return Ok(None);
        }

        if let Some(mv) = self.book.lookup(board, self.policy.book)?
        {
            log::debug!("playing {} from the book", board.move_text(&mv));
            return Ok(Some(mv));
        }

        let start = Instant::now();
        let mut search = Search::new(&self.evaluator);
        let variation = search.run(board, self.policy.depth)?;
        self.stats = search.stats();

        let elapsed = start.elapsed();
        let chosen = variation.best().map(|mv| board.move_text(mv)).unwrap_or_else(|| "none".into());
        let line = variation.moves.iter().map(|mv| board.move_text(mv)).join(" ");
        let mate = if is_mate(variation.score) { " (mate)" } else { "" };
        log::debug!("found {: ^8}: scored {: >8.2}{}", chosen, variation.score, mate);
        log::debug!("line {}", line);
        log::debug!(
            "took {: >3.1}s at depth {}, visited {} nodes ({} leaves, {} cutoffs)",
            elapsed.as_secs_f64(),
            self.policy.depth,
            self.stats.nodes,
            self.stats.leaves,
            self.stats.cutoffs
        );

        Ok(variation.best().cloned())
    }

    /// The policy this selector was built with.
    pub fn policy(&self) -> Policy
    {
        self.policy
    }

    /// The counters of the last search. All zero if the last move came from the book.
    pub fn stats(&self) -> SearchStats
    {
        self.stats
    }
}
