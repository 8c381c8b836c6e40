// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced while searching, decoding thumbnails, or handling
/// configuration. Variants carry display strings rather than source errors so
/// they stay `Clone` and can travel inside messages.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level HTTP failure (connection, timeout, body read).
    Http(String),
    /// The endpoint answered with a non-success status code.
    Status(u16),
    /// The response payload or thumbnail bytes could not be decoded.
    Decode(String),
    Config(String),
    Io(String),
}

impl Error {
    /// Returns the i18n message key shown to the user for this error.
    ///
    /// Every failure on the search path maps to the same generic key; the
    /// technical `Display` string is only offered behind the details toggle.
    pub fn user_message_key(&self) -> &'static str {
        match self {
            Error::Http(_) | Error::Status(_) | Error::Decode(_) => "error-search-failed",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Status(code) => write!(f, "Search endpoint returned status {}", code),
            Error::Decode(e) => write!(f, "Decode error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Status(status.as_u16()),
            None => Error::Http(err.to_string()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_status_error() {
        let err = Error::Status(403);
        assert_eq!(format!("{}", err), "Search endpoint returned status 403");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn search_path_errors_share_one_user_message() {
        let key = Error::Http("connection refused".into()).user_message_key();
        assert_eq!(key, Error::Status(500).user_message_key());
        assert_eq!(key, Error::Decode("truncated".into()).user_message_key());
        assert_eq!(key, "error-search-failed");
    }

    #[test]
    fn config_error_has_its_own_key() {
        let err = Error::Config("bad field".into());
        assert_eq!(err.user_message_key(), "error-config");
        assert_eq!(format!("{}", err), "Config error: bad field");
    }
}
