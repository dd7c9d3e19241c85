use crate::messaging::messages::{
    ERROR_PREFIX, INVALID_RESPONSE, NOTHING_FOUND, NOTHING_PLAYING, UNAUTHORIZED_USER,
    USAGE_PREFIX,
};
use crate::Error;
use serenity::Error as SerenityError;
use std::fmt::{self, Display};

/// A common error enum returned by most of the crate's functions within a [`Result`].
#[derive(Debug)]
pub enum SinusError {
    Other(&'static str),
    /// Command was invoked with missing or invalid arguments, holds the usage line.
    Usage(&'static str),
    /// Command failed in a way the user should be told about.
    Failed(String),
    NothingPlaying,
    NothingFound,
    UnauthorizedUser,
    InvalidResponse,
    NoToken,
    HttpStatus(u16, String),
    Config(String),
    Reqwest(reqwest::Error),
    Json(serde_json::Error),
    Serenity(SerenityError),
    Poise(Error),
}

/// `SinusError` implements the [`Debug`] and [`Display`] traits
/// meaning it implements the [`std::error::Error`] trait.
/// This just makes it explicit.
impl std::error::Error for SinusError {}

/// Implementation of the [`Display`] trait for the [`SinusError`] enum.
/// Errors are formatted with this and then sent as replies to the command.
impl Display for SinusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(msg) => f.write_str(msg),
            Self::Usage(usage) => write!(f, "{USAGE_PREFIX}{usage}"),
            Self::Failed(msg) => write!(f, "{ERROR_PREFIX}{msg}"),
            Self::NothingPlaying => f.write_str(NOTHING_PLAYING),
            Self::NothingFound => f.write_str(NOTHING_FOUND),
            Self::UnauthorizedUser => write!(f, "{ERROR_PREFIX}{UNAUTHORIZED_USER}"),
            Self::InvalidResponse => f.write_str(INVALID_RESPONSE),
            Self::NoToken => f.write_str("No discord token configured"),
            Self::HttpStatus(status, body) => write!(f, "discord responded {status}: {body}"),
            Self::Config(err) => write!(f, "config error: {err}"),
            Self::Reqwest(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Serenity(err) => write!(f, "{err}"),
            Self::Poise(err) => write!(f, "{err}"),
        }
    }
}

/// Implementation of the [`PartialEq`] trait for the [`SinusError`] enum.
/// For some enum variants, values are considered equal when their inner values
/// are equal and for others when they are of the same type.
impl PartialEq for SinusError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Other(l0), Self::Other(r0)) => l0 == r0,
            (Self::Usage(l0), Self::Usage(r0)) => l0 == r0,
            (Self::Failed(l0), Self::Failed(r0)) => l0 == r0,
            (Self::HttpStatus(l0, l1), Self::HttpStatus(r0, r1)) => l0 == r0 && l1 == r1,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Provides an implementation to convert a [`reqwest::Error`] to a [`SinusError`].
impl From<reqwest::Error> for SinusError {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

/// Provides an implementation to convert a [`serde_json::Error`] to a [`SinusError`].
impl From<serde_json::Error> for SinusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Provides an implementation to convert a [`SerenityError`] to a [`SinusError`].
impl From<SerenityError> for SinusError {
    fn from(err: SerenityError) -> Self {
        match err {
            SerenityError::Other(msg) => Self::Other(msg),
            _ => Self::Serenity(err),
        }
    }
}

impl From<config_file::ConfigFileError> for SinusError {
    fn from(err: config_file::ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<Error> for SinusError {
    fn from(err: Error) -> Self {
        Self::Poise(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_usage_display() {
        let err = SinusError::Usage("volume <up|down|dn|0-100>");
        assert_eq!(err.to_string(), "❌ Usage: volume <up|down|dn|0-100>");
    }

    #[test]
    fn test_failed_display() {
        let err = SinusError::Failed("Invalid URL.".to_string());
        assert_eq!(err.to_string(), "❌ Invalid URL.");
    }

    #[test]
    fn test_unauthorized_display() {
        assert_eq!(
            SinusError::UnauthorizedUser.to_string(),
            "❌ You don't have the permission to use this command."
        );
    }

    #[test]
    fn test_partial_eq() {
        assert_eq!(SinusError::NothingPlaying, SinusError::NothingPlaying);
        assert_ne!(SinusError::Usage("a"), SinusError::Usage("b"));
        assert_ne!(SinusError::NothingFound, SinusError::NothingPlaying);
        assert_eq!(
            SinusError::HttpStatus(404, "gone".to_string()),
            SinusError::HttpStatus(404, "gone".to_string())
        );
    }
}
