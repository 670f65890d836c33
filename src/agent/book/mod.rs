use std::{collections::HashMap, path::Path};

use itertools::{Either, Itertools};

use crate::prelude::*;

mod candidates;

pub use candidates::Candidates;

#[derive(Clone, Debug, Default)]
/// Statistics mined from master games: for each early position, how often each continuation was played.
///
/// The book is loaded once at startup and is read-only afterwards, so one instance can be shared
/// between every move selector.
pub struct OpeningBook
{
    positions: HashMap<PositionKey, Candidates>,
}

impl OpeningBook
{
    /// Creates a book with no positions in it.
    pub fn empty() -> OpeningBook
    {
        OpeningBook::default()
    }

    /// Parses a book from its JSON artifact, `{ "<key>": { "<move>": <count>, ... }, ... }`.
    ///
    /// Keys that are not valid position keys are skipped.
    pub fn from_json(json: &str) -> Result<OpeningBook>
    {
        let raw: HashMap<String, Candidates> = serde_json::from_str(json)?;

        let (positions, rejected): (HashMap<PositionKey, Candidates>, Vec<String>) =
            raw.into_iter().partition_map(|(key, candidates)| match key.parse::<PositionKey>()
            {
                | Ok(key) => Either::Left((key, candidates)),
                | Err(_) => Either::Right(key),
            });

        for key in rejected.iter()
        {
            log::warn!("skipping malformed opening book key '{}'", key);
        }

        Ok(OpeningBook { positions })
    }

    /// Gets the candidates recorded for a position, if any.
    pub fn get(&self, key: &PositionKey) -> Option<&Candidates>
    {
        self.positions.get(key)
    }

    pub fn is_empty(&self) -> bool
    {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize
    {
        self.positions.len()
    }

    /// Loads the book from a file.
    ///
    /// A missing or unreadable artifact gives an empty book; the engine then always searches.
    pub fn load(path: impl AsRef<Path>) -> OpeningBook
    {
        let path = path.as_ref();

        let loaded = std::fs::read_to_string(path).map_err(Error::from).and_then(|json| OpeningBook::from_json(&json));
        match loaded
        {
            | Ok(book) =>
            {
                log::debug!("loaded {} opening book positions from {}", book.len(), path.display());
                book
            }
            | Err(err) =>
            {
                log::warn!("playing without an opening book from {}:\n{}", path.display(), err);
                OpeningBook::empty()
            }
        }
    }

    /// Finds the most played continuation from this position, if the caller is allowed to use the book.
    ///
    /// A stored move that is not legal here means the artifact is corrupt, which is an error rather
    /// than a reason to fall back to searching.
    pub fn lookup<B: Notation>(&self, board: &B, allowed: bool) -> Result<Option<B::Move>>
    {
        if !allowed
        {
            return Ok(None);
        }

        let key = board.key();
        let Some(text) = self.get(&key).and_then(Candidates::best)
        else
        {
            log::trace!("no book move for {}", key);
            return Ok(None);
        };

        match board.parse_move(text)
        {
            | Ok(mv) =>
            {
                log::trace!("book move {} for {}", text, key);
                Ok(Some(mv))
            }
            | Err(err) =>
            {
                let base = Error::new(Kind::CorruptBook, format!("The book move '{}' for {} cannot be played.", text, key));
                Err(err.chain(base))
            }
        }
    }
}

impl FromIterator<(PositionKey, Candidates)> for OpeningBook
{
    fn from_iter<T: IntoIterator<Item = (PositionKey, Candidates)>>(iter: T) -> Self
    {
        OpeningBook {
            positions: iter.into_iter().collect(),
        }
    }
}
