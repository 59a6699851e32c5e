use thiserror::Error;

/// Errors that can occur while slicing the database image out of a save
/// container.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file does not start with the GVAS magic bytes
    #[error("magic header not found")]
    MissingMagic,

    /// The database image marker string is absent
    #[error("database image marker not found")]
    MissingMarker,

    /// The length-prefixed image slice runs past the end of the file
    #[error("save file truncated: need {expected} bytes, have {actual}")]
    Truncated { expected: usize, actual: usize },
}
