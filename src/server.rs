use std::{io::BufRead, path::PathBuf, sync::Arc};

use clap::Parser;
use dashmap::DashMap;
use serde_json::json;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(short, long, default_value = "openings.json")]
    /// opening book artifact; missing means no book
    pub book: PathBuf,

    #[arg(long, default_value = "unbeatable")]
    /// level used when a move command names none
    pub level: String,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,
}

/// Serves one board per game id over a line protocol on stdin and stdout.
pub struct Server
{
    options: ServerOptions,
    book:    Arc<OpeningBook>,
    games:   DashMap<String, Board>,
}

impl Server
{
    /// Creates a new server, loading the opening book named in the options.
    pub fn new(options: ServerOptions) -> Self
    {
        let book = Arc::new(OpeningBook::load(&options.book));
        Server::with_book(options, book)
    }

    /// Creates a new server around an already loaded book.
    pub fn with_book(options: ServerOptions, book: Arc<OpeningBook>) -> Self
    {
        Server {
            options,
            book,
            games: DashMap::new(),
        }
    }

    /// Handles one command line, returning the JSON reply.
    pub fn execute(&self, line: &str) -> Result<String>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let cmd = *args.first().unwrap_or(&"");
        let rest = args.get(1..).unwrap_or_default();

        match cmd
        {
            | "info" => Ok(self.info()),
            | "move" => self.make_move(rest),
            | "position" => self.position(rest),
            | "reset" => self.reset(rest),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        }
    }

    /// The FEN of a game, if the server knows it.
    pub fn fen(&self, game: &str) -> Option<String>
    {
        self.games.get(game).map(|board| board.fen())
    }

    /// Serves commands until stdin closes.
    pub fn run(&self) -> Result<()>
    {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines()
        {
            let line = line?;
            if line.trim().is_empty()
            {
                continue;
            }

            match self.execute(&line)
            {
                | Ok(reply) =>
                {
                    log::debug!("command completed successfully: {}", line.trim());
                    println!("{}", reply);
                }
                | Err(err) => match err.fatal()
                {
                    | true =>
                    {
                        self.err(&err);
                        return Err(err);
                    }
                    | false =>
                    {
                        log::warn!("encountered recoverable error:\n{err}");
                        self.err(&err);
                    }
                },
            }
        }
        Ok(())
    }
}

impl Server
{
    /// Prints an error to the reply stream.
    fn err(&self, err: &Error)
    {
        println!("{}", json!({ "error": err.to_string() }));
    }

    /// Gets the game id, which every game command starts with.
    fn game<'a>(&self, args: &[&'a str]) -> Result<&'a str>
    {
        args.first().copied().ok_or_else(|| Error::new(Kind::UnknownGame, "You must name a game.".into()))
    }

    /// Prints the server's ID.
    fn info(&self) -> String
    {
        json!({ "id": format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")) }).to_string()
    }

    /// Plays the human's move, if any, and answers it: `move <game> [level] [move]`.
    fn make_move(&self, args: &[&str]) -> Result<String>
    {
        let game = self.game(args)?;

        // Search on a copy, so that the map is not locked while the engine thinks.
        let mut board = self.games.entry(game.to_owned()).or_default().clone();

        // A lone word that is no level but is a legal move is the human's move.
        let (level, human) = match (args.get(1).copied(), args.get(2).copied())
        {
            | (Some(word), None) if word.parse::<Difficulty>().is_err() && board.parse_move(word).is_ok() =>
            {
                (self.options.level.as_str(), Some(word))
            }
            | (level, human) => (level.unwrap_or(self.options.level.as_str()), human),
        };

        // Levels the engine does not know get its strongest play.
        let level = match level.parse::<Difficulty>()
        {
            | Ok(difficulty) => difficulty,
            | Err(err) =>
            {
                log::debug!("serving {} as unbeatable: {}", level, err);
                Difficulty::Unbeatable
            }
        };

        let mut selector = MoveSelector::with_evaluator(level.into(), self.book.clone(), MaterialEvaluator);

        let reply = respond(&mut board, human, &mut selector)?;
        self.games.insert(game.to_owned(), board);

        Ok(serde_json::to_string(&reply)?)
    }

    /// Loads a position into a game: `position <game> <fen>`.
    fn position(&self, args: &[&str]) -> Result<String>
    {
        let game = self.game(args)?;
        let board: Board = args.get(1..).unwrap_or_default().join(" ").parse()?;

        let reply = json!({ "fen": board.fen() });
        self.games.insert(game.to_owned(), board);
        Ok(reply.to_string())
    }

    /// Starts a game over: `reset <game>`.
    fn reset(&self, args: &[&str]) -> Result<String>
    {
        let game = self.game(args)?;
        let board = Board::default();

        let reply = json!({ "fen": board.fen() });
        self.games.insert(game.to_owned(), board);
        Ok(reply.to_string())
    }
}
