// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Reasons a previous/next request cannot move to another image.
/// Each variant maps to a user-facing informational message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Navigation was requested before any image was displayed.
    #[error("No image is loaded")]
    NoImageLoaded,

    /// The current image is the first entry of its directory.
    #[error("Current image is the first one")]
    AtFirst,

    /// The current image is the last entry of its directory.
    #[error("Current image is the last one")]
    AtLast,

    /// The current image disappeared from its directory listing.
    #[error("Current image is no longer in its directory")]
    NotListed,
}

impl NavigationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NavigationError::NoImageLoaded => "navigation-no-image",
            NavigationError::AtFirst => "navigation-first-image",
            NavigationError::AtLast => "navigation-last-image",
            NavigationError::NotListed => "navigation-not-listed",
        }
    }
}

/// Failures of the Save As command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Nothing to save")]
    NothingToSave,

    /// The chosen name does not end in `.png`, `.bmp` or `.jpg`.
    #[error("Save error: bad format or filename")]
    BadFormatOrFilename,

    /// The codec or the file system refused the write.
    #[error("Save error: {0}")]
    Encode(String),
}

impl SaveError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SaveError::NothingToSave => "save-nothing",
            SaveError::BadFormatOrFilename => "save-bad-format",
            SaveError::Encode(_) => "save-encode-failed",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
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
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn navigation_errors_display_user_messages() {
        assert_eq!(
            NavigationError::AtFirst.to_string(),
            "Current image is the first one"
        );
        assert_eq!(
            NavigationError::AtLast.to_string(),
            "Current image is the last one"
        );
    }

    #[test]
    fn save_errors_display_user_messages() {
        assert_eq!(SaveError::NothingToSave.to_string(), "Nothing to save");
        assert_eq!(
            SaveError::BadFormatOrFilename.to_string(),
            "Save error: bad format or filename"
        );
    }

    #[test]
    fn wrapped_errors_are_transparent() {
        let err: Error = NavigationError::AtLast.into();
        assert_eq!(err.to_string(), "Current image is the last one");

        let err: Error = SaveError::NothingToSave.into();
        assert!(matches!(err, Error::Save(SaveError::NothingToSave)));
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            NavigationError::NoImageLoaded.i18n_key(),
            NavigationError::AtFirst.i18n_key(),
            NavigationError::AtLast.i18n_key(),
            NavigationError::NotListed.i18n_key(),
            SaveError::NothingToSave.i18n_key(),
            SaveError::BadFormatOrFilename.i18n_key(),
            SaveError::Encode(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
