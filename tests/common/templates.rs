use std::sync::Arc;

use checkmind::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// The key of the standard starting position.
pub const START_KEY: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR_True";

/// White mates with Ra8.
pub const WHITE_MATES_IN_ONE: &str = "6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1";

/// Black mates with Ra1.
pub const BLACK_MATES_IN_ONE: &str = "r5k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1";

/// White has been mated (fool's mate).
pub const WHITE_IS_MATED: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

/// Black has been mated (scholar's mate).
pub const BLACK_IS_MATED: &str = "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4";

/// Black to move and stalemated.
pub const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

/// A king and pawn against a king, small enough to search deeply.
pub const PAWN_ENDGAME: &str = "k7/8/8/8/8/8/P7/K7 w - - 0 1";

/// Loads a board, failing the test on a bad FEN.
pub fn board(fen: &str) -> Board
{
    let board = fen.parse::<Board>();
    assert!(board.is_ok(), "\tdue to {}", board.unwrap_err());
    board.unwrap()
}

/// Builds a shared book from JSON, failing the test on bad JSON.
pub fn book(json: &str) -> Arc<OpeningBook>
{
    let book = OpeningBook::from_json(json);
    assert!(book.is_ok(), "\tdue to {}", book.unwrap_err());
    Arc::new(book.unwrap())
}

/// Plays random legal moves from the starting position, reproducibly.
pub fn random_positions(seed: u64, count: usize, max_plies: usize) -> Vec<Board>
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::new();

    for _ in 0..count
    {
        let mut board = Board::default();
        let plies = rng.gen_range(0..=max_plies);
        for _ in 0..plies
        {
            let moves = board.legal_moves();
            let Some(mv) = moves.choose(&mut rng)
            else
            {
                break;
            };

            board.play(mv).unwrap();
            if board.is_over()
            {
                break;
            }
        }
        boards.push(board);
    }

    boards
}

/// Exhaustive minimax over the same frontier scores as the search, but without pruning.
pub fn minimax<R: Rules, E: Evaluator<R>>(board: &mut R, evaluator: &E, depth: Depth, maximizing: bool) -> Score
{
    if depth.is_nil() || board.is_over()
    {
        return evaluator.evaluate(board);
    }

    let mut best = if maximizing { -INF } else { INF };
    for mv in board.legal_moves()
    {
        board.make(&mv).unwrap();
        let score = minimax(board, evaluator, depth.next(), !maximizing);
        board.unmake().unwrap();

        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

#[derive(Clone, Debug)]
/// A fixed game tree. Moves are child indices, and only leaves carry values.
pub struct Tree
{
    children: Vec<Vec<usize>>,
    values:   Vec<Score>,
    path:     Vec<usize>,
}

impl Tree
{
    /// Builds a tree where every inner node has `branching` children, `depth` plies deep.
    ///
    /// Leaf values are scores for the side to move at that leaf, assigned left to right.
    pub fn uniform(branching: usize, depth: usize, leaves: &[Score]) -> Tree
    {
        let mut tree = Tree {
            children: Vec::new(),
            values:   Vec::new(),
            path:     Vec::new(),
        };
        let mut next_leaf = 0;
        tree.grow(branching, depth, leaves, &mut next_leaf);
        assert_eq!(next_leaf, leaves.len(), "wrong number of leaf values");
        tree
    }

    /// The depth of the node the tree is currently at.
    pub fn ply(&self) -> usize
    {
        self.path.len()
    }

    fn current(&self) -> usize
    {
        self.path.last().copied().unwrap_or(0)
    }

    fn grow(&mut self, branching: usize, depth: usize, leaves: &[Score], next_leaf: &mut usize) -> usize
    {
        let index = self.children.len();
        self.children.push(Vec::new());
        self.values.push(0.0);

        if depth == 0
        {
            self.values[index] = leaves[*next_leaf];
            *next_leaf += 1;
        }
        else
        {
            for _ in 0..branching
            {
                let child = self.grow(branching, depth - 1, leaves, next_leaf);
                self.children[index].push(child);
            }
        }
        index
    }
}

impl Rules for Tree
{
    type Move = usize;

    fn to_move(&self) -> Color
    {
        if self.path.len() % 2 == 0
        {
            Color::White
        }
        else
        {
            Color::Black
        }
    }

    fn legal_moves(&self) -> Vec<usize>
    {
        (0..self.children[self.current()].len()).collect()
    }

    fn make(&mut self, mv: &usize) -> Result<()>
    {
        let child = self.children[self.current()][*mv];
        self.path.push(child);
        Ok(())
    }

    fn unmake(&mut self) -> Result<()>
    {
        self.path.pop().map(|_| ()).ok_or_else(|| Error::empty(Kind::TooManyUndos))
    }

    fn state(&self) -> GameState
    {
        GameState::InProgress
    }
}

/// Reads the stored leaf values of a `Tree`.
pub struct TreeEvaluator;

impl Evaluator<Tree> for TreeEvaluator
{
    fn evaluate(&self, tree: &Tree) -> Score
    {
        tree.values[tree.current()]
    }
}
