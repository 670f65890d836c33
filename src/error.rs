pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents an application error in Checkmind.
pub struct Error
{
    pub kind: Kind,
    pub msg:  String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind
{
    /// The opening book names a move that cannot be played where it is stored.
    CorruptBook,
    InternalError,
    InvalidFen,
    InvalidMove,
    IoError,
    LoggerError,
    ParseError,
    PleaseOpenAGithubIssue,
    SerdeError,
    /// The search went deeper than the undo stack can hold.
    TooManyMoves,
    TooManyUndos,
    UnknownGame,
    UnrecognizedCommand,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self.msg.is_empty()
        {
            | true => write!(f, "{:?}", self.kind),
            | false => write!(f, "{:?}: {}", self.kind, self.msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{
    fn from(value: std::io::Error) -> Self
    {
        Error::new(Kind::IoError, value.to_string())
    }
}

impl From<serde_json::Error> for Error
{
    fn from(value: serde_json::Error) -> Self
    {
        Error::new(Kind::SerdeError, value.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for Error
{
    fn from(value: flexi_logger::FlexiLoggerError) -> Self
    {
        Error::new(Kind::LoggerError, value.to_string())
    }
}

impl Error
{
    /// Stacks this error under `base`, which supplies the kind of the result.
    pub fn chain(&self, base: Error) -> Error
    {
        let msg = format!("{}\n\tdue to {}", base.msg, self);
        Error::new(base.kind, msg)
    }

    /// Creates an error with no message.
    pub fn empty(kind: Kind) -> Error
    {
        Error::new(kind, String::new())
    }

    /// Whether this error is fatal or recoverable.
    pub fn fatal(&self) -> bool
    {
        matches!(self.kind, Kind::InternalError | Kind::IoError | Kind::PleaseOpenAGithubIssue)
    }

    /// Creates a parse error for a particular type.
    pub fn for_parse<T>(s: String) -> Error
    {
        Error::new(Kind::ParseError, format!("'{}' is not a valid {}.", s, Error::type_name::<T>()))
    }

    /// Wraps an error that the rules adapter should have made impossible.
    pub fn holy_shit(err: Error) -> Error
    {
        err.chain(Error::new(Kind::PleaseOpenAGithubIssue, "Something has gone terribly wrong.".into()))
    }

    /// Creates an illegal move error for some move text in a position.
    pub fn illegal(text: &str, fen: &str) -> Error
    {
        Error::new(Kind::InvalidMove, format!("'{}' is not a legal move in {}.", text, fen))
    }

    /// Creates a new error.
    pub fn new(kind: Kind, msg: String) -> Error
    {
        Error { kind, msg }
    }

    /// Computes the basename for the parameterized type.
    pub fn type_name<T>() -> &'static str
    {
        let type_name = std::any::type_name::<T>();
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}
