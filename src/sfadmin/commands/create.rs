use crate::commands::{CmdMessage, CmdResult};
use crate::directory::UserDirectory;
use crate::error::Result;
use crate::exec::Runner;
use crate::model::CreateUserParams;

pub fn run<R: Runner>(directory: &UserDirectory<R>, params: CreateUserParams) -> Result<CmdResult> {
    let user = directory.create(params)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User created successfully with ID: {}",
        user.id.as_deref().unwrap_or_default()
    )));
    Ok(result.with_users(vec![user]))
}
