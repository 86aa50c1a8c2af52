use crate::config::SfAdminConfig;
use crate::model::User;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod list;

/// Where sfadmin keeps its own files.
#[derive(Debug, Clone)]
pub struct SfAdminPaths {
    pub config_dir: PathBuf,
}

impl SfAdminPaths {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub users: Vec<User>,
    pub config: Option<SfAdminConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_config(mut self, config: SfAdminConfig) -> Self {
        self.config = Some(config);
        self
    }
}
