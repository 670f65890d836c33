use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Counters gathered over one search.
pub struct SearchStats
{
    /// Every node entered, frontier nodes included.
    pub nodes:   u64,
    /// Frontier nodes, which were handed to the evaluator.
    pub leaves:  u64,
    /// Nodes whose remaining siblings were pruned.
    pub cutoffs: u64,
    /// The furthest ply below the root that was made on the board.
    pub deepest: usize,
}

#[derive(Debug)]
/// A depth-bounded minimax search with alpha-beta pruning.
///
/// Moves are made and unmade on the caller's board; it is left untouched on return, whether the
/// search succeeds or not.
pub struct Search<'a, E>
{
    evaluator: &'a E,
    ply:       usize,
    stats:     SearchStats,
}

impl<'a, E> Search<'a, E>
{
    /// Creates a search that scores frontier nodes with the given evaluator.
    pub fn new(evaluator: &'a E) -> Self
    {
        Search {
            evaluator,
            ply: 0,
            stats: SearchStats::default(),
        }
    }

    /// Searches the board to the given depth with a full window, maximizing at the root.
    pub fn run<R>(&mut self, board: &mut R, depth: Depth) -> Result<Variation<R::Move>>
    where
        R: Rules,
        E: Evaluator<R>,
    {
        self.ply = 0;
        self.stats = SearchStats::default();
        self.alpha_beta(board, depth, true, -INF, INF)
    }

    /// The counters of the most recent search.
    pub fn stats(&self) -> SearchStats
    {
        self.stats
    }

    /// Performs alpha-beta search.
    ///
    /// Frontier nodes return the evaluator's score as is, whichever side the node maximizes for.
    /// With a mover-relative evaluator, frontier scores at odd plies are in the opponent's terms.
    ///
    /// Moves are tried in the rules engine's order and only a strictly better score replaces the
    /// best move, so the first of several equal moves is the one returned.
    pub fn alpha_beta<R>(&mut self, board: &mut R, depth: Depth, maximizing: bool, alpha: Score, beta: Score) -> Result<Variation<R::Move>>
    where
        R: Rules,
        E: Evaluator<R>,
    {
        self.stats.nodes += 1;

        if depth.is_nil() || board.is_over()
        {
            self.stats.leaves += 1;
            let score = self.evaluator.evaluate(board);
            return Ok(Variation::new(score));
        }

        let (mut a, mut b) = (alpha, beta);
        let mut best = Variation::new(if maximizing { -INF } else { INF });

        for mv in board.legal_moves()
        {
            board.make(&mv)?;
            self.ply += 1;
            self.stats.deepest = self.stats.deepest.max(self.ply);

            let child = self.alpha_beta(board, depth.next(), !maximizing, a, b);

            // Take the move back before anything else, even if the subtree failed.
            self.ply -= 1;
            board.unmake()?;
            let child = child?;

            let improves = if maximizing { child.score > best.score } else { child.score < best.score };
            if improves
            {
                best.load(mv, &child);
            }

            if maximizing
            {
                a = a.max(child.score);
            }
            else
            {
                b = b.min(child.score);
            }

            if b <= a
            {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}
