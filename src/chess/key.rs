use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    /// Eight ranks of FEN piece placement, then the side-to-move tag.
    static ref KEY: Regex =
        Regex::new(r"^(?<placement>(?:[1-8pnbrqkPNBRQK]{1,8}/){7}[1-8pnbrqkPNBRQK]{1,8})_(?<side>True|False)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The opening-book key of a position: its piece placement and the side to move.
///
/// Castling rights, en passant squares and move clocks are left out, so
/// transpositions into the same placement share one entry. The side tag is `True` when white
/// is to move, and `False` when black is, as written by the book builder.
pub struct PositionKey(String);

impl PositionKey
{
    /// Builds the key for a placement field and a side to move.
    pub fn new(placement: &str, to_move: Color) -> PositionKey
    {
        PositionKey(format!("{}_{}", placement, Self::tag(to_move)))
    }

    /// The raw key.
    pub fn as_str(&self) -> &str
    {
        &self.0
    }

    /// The piece placement part of the key.
    pub fn placement(&self) -> &str
    {
        self.0.rsplit_once('_').map(|(placement, _)| placement).unwrap_or(&self.0)
    }

    /// The side to move recorded in the key.
    pub fn to_move(&self) -> Color
    {
        if self.0.ends_with(Self::tag(Color::White))
        {
            Color::White
        }
        else
        {
            Color::Black
        }
    }

    fn tag(color: Color) -> &'static str
    {
        match color
        {
            | Color::White => "True",
            | Color::Black => "False",
        }
    }
}

impl AsRef<str> for PositionKey
{
    fn as_ref(&self) -> &str
    {
        self.as_str()
    }
}

impl std::fmt::Display for PositionKey
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PositionKey
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Some(caps) = KEY.captures(s)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let placement = &caps["placement"];
        let to_move = if &caps["side"] == "True" { Color::White } else { Color::Black };
        Ok(PositionKey::new(placement, to_move))
    }
}
