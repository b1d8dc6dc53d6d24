use alloc::string::String;
use thiserror::Error;

/// Errors that abort a whole wrapping call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WrapError {
    /// A global parameter is malformed. Reported before any string is processed.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// The boundary segmenter failed on one of the strings.
    #[error(transparent)]
    Segmenter(#[from] SegmentError),

    /// A string contains a hard line break and the options ask for this to be fatal.
    #[error("string {index} contains hard line break {character:?} at byte {offset}")]
    HardBreakInText {
        /// Position of the offending string in the batch.
        index: usize,
        /// Byte offset of the line break within that string.
        offset: usize,
        character: char,
    },
}

impl From<LocaleError> for WrapError {
    fn from(err: LocaleError) -> Self {
        WrapError::InvalidArgument {
            name: "locale",
            reason: alloc::format!("{err}"),
        }
    }
}

/// Errors produced while measuring the words of a single string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    #[error("hard line break {character:?} at byte {offset}")]
    HardBreakInText { offset: usize, character: char },

    #[error("invalid UTF-8 at byte {offset}")]
    InvalidEncoding { offset: usize },
}

/// Errors reported by a [`Segmenter`](crate::Segmenter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// The segmentation backend could not process the string.
    #[error("segmenter failure: {0}")]
    Backend(String),

    /// The backend returned offsets that do not describe the string.
    #[error("malformed boundaries: {0}")]
    Malformed(&'static str),
}

/// A locale identifier could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unparsable locale identifier `{0}`")]
pub struct LocaleError(pub String);
