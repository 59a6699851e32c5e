use thiserror::Error;

use revelio_catalog::CatalogError;
use revelio_lib::ScanError;

/// Errors surfaced to the user as a single failure line.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The collectible dataset is missing or malformed; nothing can run
    /// without it
    #[error("could not load the collectible catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The given save file path does not exist
    #[error("the file \"{path}\" couldn't be found")]
    SaveNotFound { path: String },

    /// The save file exists but could not be read from disk
    #[error("could not read \"{path}\": {source}")]
    SaveRead {
        path: String,
        source: std::io::Error,
    },

    /// The save file was read but nothing could be reconciled from it
    #[error("revelio was unable to read the save file \"{path}\": {source}")]
    Unreadable { path: String, source: ScanError },

    /// Reading the interactive path prompt failed
    #[error("could not read input: {0}")]
    Prompt(#[from] std::io::Error),
}
