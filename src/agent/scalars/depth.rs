#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A ply-representation of search depth.
pub struct Depth(u8);

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value)
    }
}

impl From<Depth> for u8
{
    fn from(value: Depth) -> Self
    {
        value.0
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl Depth
{
    /// Zero plies.
    pub const NIL: Depth = Depth(0);

    /// The max search depth is 128 plys, or 64 turns.
    pub const MAX: Depth = Depth(1 + i8::MAX as u8);

    /// Whether the depth budget is spent.
    pub const fn is_nil(&self) -> bool
    {
        self.0 == 0
    }

    /// Constructs a new depth, clamped to the maximum.
    pub const fn new(value: u8) -> Depth
    {
        if value > Self::MAX.0
        {
            Self::MAX
        }
        else
        {
            Depth(value)
        }
    }

    /// The depth one ply further down the tree.
    pub const fn next(&self) -> Depth
    {
        Depth(self.0.saturating_sub(1))
    }

    /// The number of plies.
    pub const fn plies(&self) -> usize
    {
        self.0 as usize
    }
}
