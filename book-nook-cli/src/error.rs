use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Library file could not be written (or read where that matters)
    #[error("Library error: {0}")]
    Store(#[from] book_nook_catalog::StoreError),

    /// Export failed
    #[error("Export error: {0}")]
    Export(#[from] book_nook_export::ExportError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
