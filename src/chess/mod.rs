use crate::prelude::*;

mod board;
mod key;
mod state;

pub use board::Board;
pub use key::PositionKey;
pub use shakmaty::{Color, Move, Piece, Role, Square};
pub use state::GameState;

/// The capabilities the search needs from a position.
///
/// A position is mutated in place: every `make` must be reversed by exactly one `unmake`.
pub trait Rules
{
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// The side to move.
    fn to_move(&self) -> Color;

    /// Enumerates the legal moves, in the rules engine's own order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a legal move, remembering enough to take it back.
    fn make(&mut self, mv: &Self::Move) -> Result<()>;

    /// Takes back the most recent `make`.
    fn unmake(&mut self) -> Result<()>;

    /// Classifies the position.
    fn state(&self) -> GameState;

    /// Whether the game has ended in this position.
    fn is_over(&self) -> bool
    {
        self.state().is_over()
    }
}

/// Piece counting and attack queries, for material evaluation.
pub trait Material: Rules
{
    /// The number of pieces of this colour and role on the board.
    fn count(&self, piece: Piece) -> usize;

    /// Whether any piece of the given colour attacks the square.
    fn attacked_by(&self, attacker: Color, square: Square) -> bool;
}

/// Canonical text for positions and moves.
pub trait Notation: Rules
{
    /// The opening-book key of the position.
    fn key(&self) -> PositionKey;

    /// Converts move text into a move that is legal in this position.
    fn parse_move(&self, text: &str) -> Result<Self::Move>;

    /// The canonical text of a move in this position.
    fn move_text(&self, mv: &Self::Move) -> String;
}
