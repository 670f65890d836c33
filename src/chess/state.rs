use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    InProgress,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
}

impl GameState
{
    /// Whether the game ended in a draw.
    pub fn is_draw(&self) -> bool
    {
        matches!(self, Self::Stalemate | Self::InsufficientMaterial | Self::SeventyFiveMoves)
    }

    /// Whether the game has ended at all.
    pub fn is_over(&self) -> bool
    {
        *self != Self::InProgress
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::InProgress => "InProgress",
            | Self::Checkmate => "Checkmate",
            | Self::Stalemate => "Stalemate",
            | Self::InsufficientMaterial => "InsufficientMaterial",
            | Self::SeventyFiveMoves => "SeventyFiveMoves",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "InProgress" => Ok(Self::InProgress),
            | "Checkmate" => Ok(Self::Checkmate),
            | "Stalemate" => Ok(Self::Stalemate),
            | "InsufficientMaterial" => Ok(Self::InsufficientMaterial),
            | "SeventyFiveMoves" => Ok(Self::SeventyFiveMoves),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
