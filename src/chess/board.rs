use arrayvec::ArrayVec;
use shakmaty::{
    fen::Fen,
    san::SanPlus,
    uci::UciMove,
    CastlingMode,
    Chess,
    EnPassantMode,
    Outcome,
    Position,
};

use crate::prelude::*;

/// The halfmove clock at which the game is drawn without a claim.
const SEVENTY_FIVE_MOVES: u32 = 150;

#[derive(Clone, Default)]
/// A chess position that can be searched in place.
///
/// Moves made during a search are remembered on a bounded undo stack, one saved position per
/// ply, so that `unmake` restores the exact previous state.
pub struct Board
{
    /// The live position.
    position: Chess,

    /// Positions saved by `make`, most recent last.
    undo: ArrayVec<Chess, MAXIMUM_PLY>,
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board({}, ply {})", self.fen(), self.ply())
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.fen())
    }
}

impl PartialEq for Board
{
    fn eq(&self, other: &Self) -> bool
    {
        self.ply() == other.ply() && self.fen() == other.fen()
    }
}

impl Eq for Board {}

impl FromStr for Board
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        Board::from_fen(s)
    }
}

impl Board
{
    /// Loads a position from FEN.
    pub fn from_fen(fen: &str) -> Result<Board>
    {
        let base = Error::new(Kind::InvalidFen, format!("'{}' is not a valid FEN.", fen));

        let parsed = fen
            .trim()
            .parse::<Fen>()
            .map_err(|e| Error::new(Kind::ParseError, e.to_string()).chain(base.clone()))?;

        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| Error::new(Kind::ParseError, e.to_string()).chain(base))?;

        Ok(Board {
            position,
            undo: ArrayVec::new(),
        })
    }

    /// The full FEN of the live position.
    pub fn fen(&self) -> String
    {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// The result of a finished game, which displays as `1-0`, `0-1` or `1/2-1/2`.
    pub fn outcome(&self) -> Option<Outcome>
    {
        match self.state()
        {
            | GameState::InProgress => None,
            | GameState::Checkmate => Some(Outcome::Decisive {
                winner: self.to_move().other(),
            }),
            | _ => Some(Outcome::Draw),
        }
    }

    /// Plays a legal move for good.
    ///
    /// This is the move a player actually made, so it is not recorded on the undo stack.
    pub fn play(&mut self, mv: &Move) -> Result<()>
    {
        if !self.undo.is_empty()
        {
            let err = Error::new(Kind::InternalError, format!("Cannot play a move {} plies into a search.", self.ply()));
            return Err(Error::holy_shit(err));
        }

        if !self.position.is_legal(mv)
        {
            return Err(Error::illegal(&self.move_text(mv), &self.fen()));
        }

        self.position.play_unchecked(mv);
        Ok(())
    }

    /// Parses and plays a move given as text, returning the move played.
    pub fn play_text(&mut self, text: &str) -> Result<Move>
    {
        let mv = self.parse_move(text)?;
        self.play(&mv)?;
        Ok(mv)
    }

    /// The number of moves made and not yet taken back.
    pub fn ply(&self) -> usize
    {
        self.undo.len()
    }
}

impl Rules for Board
{
    type Move = Move;

    fn to_move(&self) -> Color
    {
        self.position.turn()
    }

    fn legal_moves(&self) -> Vec<Move>
    {
        self.position.legal_moves().into_iter().collect()
    }

    fn make(&mut self, mv: &Move) -> Result<()>
    {
        if self.undo.try_push(self.position.clone()).is_err()
        {
            return Err(Error::new(Kind::TooManyMoves, format!("The undo stack holds at most {} plies.", MAXIMUM_PLY)));
        }

        self.position.play_unchecked(mv);
        Ok(())
    }

    fn unmake(&mut self) -> Result<()>
    {
        let Some(previous) = self.undo.pop()
        else
        {
            return Err(Error::new(Kind::TooManyUndos, "There is no move to take back.".into()));
        };

        self.position = previous;
        Ok(())
    }

    fn state(&self) -> GameState
    {
        if self.position.is_checkmate()
        {
            GameState::Checkmate
        }
        else if self.position.is_insufficient_material()
        {
            GameState::InsufficientMaterial
        }
        else if self.position.is_stalemate()
        {
            GameState::Stalemate
        }
        else if self.position.halfmoves() >= SEVENTY_FIVE_MOVES
        {
            GameState::SeventyFiveMoves
        }
        else
        {
            GameState::InProgress
        }
    }
}

impl Material for Board
{
    fn count(&self, piece: Piece) -> usize
    {
        self.position.board().by_piece(piece).count()
    }

    fn attacked_by(&self, attacker: Color, square: Square) -> bool
    {
        let board = self.position.board();
        board.attacks_to(square, attacker, board.occupied()).any()
    }
}

impl Notation for Board
{
    fn key(&self) -> PositionKey
    {
        let fen = self.fen();
        let placement = fen.split(' ').next().unwrap_or_default();
        PositionKey::new(placement, self.to_move())
    }

    /// Accepts UCI (`g1f3`) first, then SAN (`Nf3`, `Nf3+`).
    fn parse_move(&self, text: &str) -> Result<Move>
    {
        let text = text.trim();

        if let Ok(uci) = text.parse::<UciMove>()
        {
            if let Ok(mv) = uci.to_move(&self.position)
            {
                return Ok(mv);
            }
        }

        if let Ok(san) = text.parse::<SanPlus>()
        {
            if let Ok(mv) = san.san.to_move(&self.position)
            {
                return Ok(mv);
            }
        }

        Err(Error::illegal(text, &self.fen()))
    }

    fn move_text(&self, mv: &Move) -> String
    {
        mv.to_uci(CastlingMode::Standard).to_string()
    }
}
