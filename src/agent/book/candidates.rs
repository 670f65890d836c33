use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The continuations played from one position, with how often each was played.
///
/// Candidates keep the order they were recorded in, which decides ties.
pub struct Candidates
{
    moves: Vec<(String, u64)>,
}

impl Candidates
{
    /// The most played continuation. Among equally popular moves, the first recorded wins.
    pub fn best(&self) -> Option<&str>
    {
        let mut best: Option<&(String, u64)> = None;
        for candidate in self.moves.iter()
        {
            match best
            {
                | Some((_, count)) if candidate.1 <= *count =>
                {}
                | _ => best = Some(candidate),
            }
        }
        best.map(|(mv, _)| mv.as_str())
    }

    /// Records a continuation. A move recorded twice keeps its first place and its last count.
    pub fn insert(&mut self, mv: impl Into<String>, count: u64)
    {
        let mv = mv.into();
        match self.moves.iter_mut().find(|(known, _)| *known == mv)
        {
            | Some((_, known)) => *known = count,
            | None => self.moves.push((mv, count)),
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)>
    {
        self.moves.iter().map(|(mv, count)| (mv.as_str(), *count))
    }

    pub fn len(&self) -> usize
    {
        self.moves.len()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Candidates
{
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self
    {
        let mut candidates = Candidates::default();
        for (mv, count) in iter
        {
            candidates.insert(mv, count);
        }
        candidates
    }
}

/// Reads a `{ "move": count, ... }` object in document order.
struct CandidatesVisitor;

impl<'de> Visitor<'de> for CandidatesVisitor
{
    type Value = Candidates;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result
    {
        write!(f, "a map from move text to a non-negative count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    {
        let mut candidates = Candidates::default();
        while let Some((mv, count)) = access.next_entry::<String, u64>()?
        {
            candidates.insert(mv, count);
        }
        Ok(candidates)
    }
}

impl<'de> Deserialize<'de> for Candidates
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error>
    {
        deserializer.deserialize_map(CandidatesVisitor)
    }
}
