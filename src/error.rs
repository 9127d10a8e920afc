use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("{0} is not set")]
    MissingVar(&'static str),

    #[error("invalid database host '{0}'")]
    InvalidHost(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{0}' not found in workbook")]
    MissingSheet(String),

    #[error("failed to read sheet '{sheet}': {source}")]
    ReadSheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("column '{0}' not found in settings header")]
    MissingColumn(&'static str),

    #[error("setting '{0}' not found")]
    MissingSetting(&'static str),

    #[error("setting '{0}' has no value")]
    EmptyValue(&'static str),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
