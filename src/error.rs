use {
    bincode::ErrorKind as PakError,
    std::{
        error::Error as StdError,
        fmt::{Display, Formatter, Result as FmtResult},
        io::Error as IoError,
    },
};

#[cfg(feature = "bake")]
use toml::de::Error as AssetError;

/// Errors which occur while reading, writing or using a [`Font`](crate::Font).
#[derive(Debug)]
pub enum Error {
    /// A `.toml` font asset could not be parsed.
    #[cfg(feature = "bake")]
    Asset(AssetError),

    /// A file or stream could not be read or written.
    Io(IoError),

    /// A relative width was requested which the font does not have.
    LetterWidth(LetterWidthError),

    /// A `.pak` font could not be encoded or decoded.
    Pak(Box<PakError>),
}

#[cfg(feature = "bake")]
impl From<AssetError> for Error {
    fn from(error: AssetError) -> Self {
        Self::Asset(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Self::Io(error)
    }
}

impl From<LetterWidthError> for Error {
    fn from(error: LetterWidthError) -> Self {
        Self::LetterWidth(error)
    }
}

impl From<Box<PakError>> for Error {
    fn from(error: Box<PakError>) -> Self {
        // bincode wraps stream failures; surface those as plain IO errors
        match *error {
            PakError::Io(error) => Self::Io(error),
            error => Self::Pak(Box::new(error)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            #[cfg(feature = "bake")]
            Self::Asset(error) => write!(f, "invalid font asset: {}", error),
            Self::Io(error) => write!(f, "io error: {}", error),
            Self::LetterWidth(error) => Display::fmt(error, f),
            Self::Pak(error) => write!(f, "invalid font pak: {}", error),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            #[cfg(feature = "bake")]
            Self::Asset(error) => Some(error),
            Self::Io(error) => Some(error),
            Self::LetterWidth(error) => Some(error),
            Self::Pak(error) => Some(error.as_ref()),
        }
    }
}

/// Returned when looking up the relative width of a symbol fails.
///
/// These are programming errors: check [`Font::monospaced`](crate::Font::monospaced) and keep
/// character codes within `[0, 255]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LetterWidthError {
    /// The font is monospaced and has no relative widths.
    Monospaced,

    /// The character code is outside of `[0, 255]`.
    OutOfRange(u32),
}

impl Display for LetterWidthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Monospaced => write!(f, "monospaced fonts have no letter widths"),
            Self::OutOfRange(code) => write!(f, "character code {} is out of range", code),
        }
    }
}

impl StdError for LetterWidthError {}
