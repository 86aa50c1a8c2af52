//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point UI clients use.
//!
//! It dispatches to `commands/*.rs` and returns [`CmdResult`] values. It does
//! no business logic and no I/O of its own: no stdout, no formatting.
//!
//! ## Generic Over Runner
//!
//! `SfAdminApi<R: Runner>` is generic over how the `sf` tool is launched:
//! - Production: `SfAdminApi<SystemRunner>`
//! - Testing: `SfAdminApi<ScriptedRunner>` (or a reference to one)

use crate::commands;
use crate::directory::{DirectoryConfig, UserDirectory};
use crate::error::Result;
use crate::exec::{CommandExecutor, Runner};
use crate::model::CreateUserParams;

/// The main API facade for sfadmin operations.
pub struct SfAdminApi<R: Runner> {
    directory: UserDirectory<R>,
    paths: commands::SfAdminPaths,
}

impl<R: Runner> SfAdminApi<R> {
    pub fn new(
        runner: R,
        executable: impl Into<String>,
        directory_config: DirectoryConfig,
        paths: commands::SfAdminPaths,
    ) -> Self {
        let executor = CommandExecutor::new(runner, executable);
        Self {
            directory: UserDirectory::new(executor, directory_config),
            paths,
        }
    }

    pub fn create_user(&self, params: CreateUserParams) -> Result<commands::CmdResult> {
        commands::create::run(&self.directory, params)
    }

    pub fn list_users(&self, active_only: bool) -> Result<commands::CmdResult> {
        commands::list::run(&self.directory, active_only)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SfAdminPaths};
