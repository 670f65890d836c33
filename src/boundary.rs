use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// What the caller gets back after a turn: the position, the engine's reply, and whether the game is done.
pub struct Reply
{
    pub fen:       String,
    pub ai_move:   Option<String>,
    pub game_over: bool,
    pub result:    Option<String>,
}

impl Reply
{
    /// Describes the board as it stands.
    pub fn new(board: &Board, ai_move: Option<String>) -> Reply
    {
        let outcome = board.outcome();
        Reply {
            fen: board.fen(),
            ai_move,
            game_over: outcome.is_some(),
            result: outcome.map(|o| o.to_string()),
        }
    }
}

/// Plays one turn: the human's move if there is one, then the engine's answer.
///
/// An illegal human move is rejected before the engine is asked anything, and leaves the board
/// as it was. If the game is over after the human's move, the engine does not move.
pub fn respond<E: Evaluator<Board>>(board: &mut Board, human: Option<&str>, selector: &mut MoveSelector<E>) -> Result<Reply>
{
    if let Some(text) = human
    {
        if let Err(err) = board.play_text(text)
        {
            return Err(err.chain(Error::new(Kind::InvalidMove, "Invalid move".into())));
        }
    }

    if board.is_over()
    {
        return Ok(Reply::new(board, None));
    }

    let Some(mv) = selector.best_move(board)?
    else
    {
        return Ok(Reply::new(board, None));
    };

    let text = board.move_text(&mv);
    board.play(&mv)?;

    Ok(Reply::new(board, Some(text)))
}
