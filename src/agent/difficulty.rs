use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The skill levels a player can ask the engine for.
pub enum Difficulty
{
    Easy,
    Medium,
    Hard,
    Unbeatable,
}

impl Difficulty
{
    /// Every level, weakest first.
    pub fn all() -> [Difficulty; 4]
    {
        [Self::Easy, Self::Medium, Self::Hard, Self::Unbeatable]
    }

    /// Whether this level plays from the opening book. Only the two strongest do.
    pub fn consults_book(&self) -> bool
    {
        matches!(self, Self::Hard | Self::Unbeatable)
    }

    /// The depth this level searches to.
    pub fn depth(&self) -> Depth
    {
        match self
        {
            | Self::Easy => Depth::new(1),
            | Self::Medium => Depth::new(2),
            | Self::Hard => Depth::new(3),
            | Self::Unbeatable => Depth::new(6),
        }
    }
}

impl std::fmt::Display for Difficulty
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Easy => "easy",
            | Self::Medium => "medium",
            | Self::Hard => "hard",
            | Self::Unbeatable => "unbeatable",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "easy" => Ok(Self::Easy),
            | "medium" => Ok(Self::Medium),
            | "hard" => Ok(Self::Hard),
            | "unbeatable" => Ok(Self::Unbeatable),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a move selector is allowed to do: how deep it searches, and whether it may use the book.
pub struct Policy
{
    pub depth: Depth,
    pub book:  bool,
}

impl Policy
{
    /// The depth searched by levels nobody recognizes.
    pub const DEFAULT_DEPTH: Depth = Depth::new(3);

    /// Resolves a level name. Unknown names search to the default depth without the book.
    pub fn named(name: &str) -> Policy
    {
        match name.parse::<Difficulty>()
        {
            | Ok(difficulty) => difficulty.into(),
            | Err(err) =>
            {
                log::debug!("falling back to depth {}: {}", Self::DEFAULT_DEPTH, err);
                Policy {
                    depth: Self::DEFAULT_DEPTH,
                    book:  false,
                }
            }
        }
    }
}

impl From<Difficulty> for Policy
{
    fn from(value: Difficulty) -> Self
    {
        Policy {
            depth: value.depth(),
            book:  value.consults_book(),
        }
    }
}
