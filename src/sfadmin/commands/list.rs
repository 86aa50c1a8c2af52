use crate::commands::{CmdMessage, CmdResult};
use crate::directory::UserDirectory;
use crate::error::Result;
use crate::exec::Runner;

pub fn run<R: Runner>(directory: &UserDirectory<R>, active_only: bool) -> Result<CmdResult> {
    let users = directory.list(active_only)?;

    let mut result = CmdResult::default();
    if users.is_empty() {
        let what = if active_only { "active users" } else { "users" };
        result.add_message(CmdMessage::info(format!("No {} found.", what)));
    }
    Ok(result.with_users(users))
}
