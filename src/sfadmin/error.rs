use crate::model::UserRole;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SfAdminError {
    #[error("The '{0}' command was not found. Please ensure Salesforce CLI is installed and in your PATH.")]
    ExecutableNotFound(String),

    #[error("{0}")]
    CommandFailed(String),

    #[error("Error parsing JSON output from Salesforce CLI: {0}")]
    ResponseParse(String),

    #[error("Profile not found for role: {0}")]
    ProfileNotFound(UserRole),

    #[error("Invalid role: {0} (expected one of: standard, admin, read_only)")]
    InvalidRole(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SfAdminError>;
