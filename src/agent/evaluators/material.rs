use crate::prelude::*;

const VALUE_PAWN: Score = 1.0;
const VALUE_KNIGHT: Score = 3.0;
const VALUE_BISHOP: Score = 3.0;
const VALUE_ROOK: Score = 5.0;
const VALUE_QUEEN: Score = 9.0;
const VALUE_KING: Score = 0.0;

/// Paid for each contested central square a side attacks.
const K_CENTER: Score = 0.1;

const CENTER: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

/// Gives a baseline value for a piece, in pawns.
fn role_value(role: Role) -> Score
{
    match role
    {
        | Role::Pawn => VALUE_PAWN,
        | Role::Knight => VALUE_KNIGHT,
        | Role::Bishop => VALUE_BISHOP,
        | Role::Rook => VALUE_ROOK,
        | Role::Queen => VALUE_QUEEN,
        | Role::King => VALUE_KING,
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Scores positions by material balance and control of the four central squares.
pub struct MaterialEvaluator;

impl<R: Material> Evaluator<R> for MaterialEvaluator
{
    /// Returns a score for the board in the moving player's perspective.
    fn evaluate(&self, board: &R) -> Score
    {
        match board.state()
        {
            | GameState::Checkmate => -MATE,
            | GameState::Stalemate | GameState::InsufficientMaterial => DRAW,
            | GameState::InProgress | GameState::SeventyFiveMoves =>
            {
                let score = center(board, material(board));
                match board.to_move()
                {
                    | Color::White => score,
                    | Color::Black => -score,
                }
            }
        }
    }
}

/// Returns the material advantage in white's perspective.
fn material<R: Material>(board: &R) -> Score
{
    let mut score = 0.0;
    for role in Role::ALL
    {
        let white = board.count(Piece {
            color: Color::White,
            role,
        });
        let black = board.count(Piece {
            color: Color::Black,
            role,
        });

        score += white as Score * role_value(role);
        score -= black as Score * role_value(role);
    }
    score
}

/// Adds the central control in white's perspective to a running score.
fn center<R: Material>(board: &R, mut score: Score) -> Score
{
    for square in CENTER
    {
        if board.attacked_by(Color::White, square)
        {
            score += K_CENTER;
        }
        if board.attacked_by(Color::Black, square)
        {
            score -= K_CENTER;
        }
    }
    score
}
