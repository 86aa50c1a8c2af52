//! # User Directory
//!
//! [`UserDirectory`] is the entry point for user operations against an org.
//! It composes the pieces in this module:
//!
//! ```text
//! create: params -> User -> profile::RoleProfileResolver (query) -> fields -> data create record
//! list:   query::list_users -> data query -> records::records_to_users
//! ```
//!
//! Every call spawns exactly one `sf` process per step through the
//! [`CommandExecutor`]; nothing is cached between calls.

use crate::error::{Result, SfAdminError};
use crate::exec::{CommandExecutor, Runner};
use crate::model::{CreateUserParams, User};
use serde_json::Value;
use tracing::info;

pub mod fields;
pub mod profile;
pub mod query;
pub mod records;

pub use profile::RoleProfileResolver;

/// Settings every directory call runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Org alias or username passed as `--target-org`. When `None` the tool
    /// falls back to its own default org.
    pub target_org: Option<String>,
}

impl DirectoryConfig {
    pub fn new(target_org: Option<String>) -> Self {
        Self { target_org }
    }

    /// `args` followed by the target org flag, when one is set.
    pub fn scoped<I, S>(&self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv: Vec<String> = args.into_iter().map(Into::into).collect();
        if let Some(org) = &self.target_org {
            argv.push("--target-org".to_string());
            argv.push(org.clone());
        }
        argv
    }
}

pub struct UserDirectory<R: Runner> {
    executor: CommandExecutor<R>,
    config: DirectoryConfig,
}

impl<R: Runner> UserDirectory<R> {
    pub fn new(executor: CommandExecutor<R>, config: DirectoryConfig) -> Self {
        Self { executor, config }
    }

    /// Creates a user and returns it with the id assigned by the org.
    pub fn create(&self, params: CreateUserParams) -> Result<User> {
        let mut user = params.into_user()?;

        let profile_id =
            RoleProfileResolver::new(&self.executor, &self.config).resolve_profile_id(user.role)?;
        let values = fields::join_values(&fields::build_create_fields(&user, &profile_id)?);

        let result = self.executor.execute(self.config.scoped([
            "data",
            "create",
            "record",
            "--sobject",
            "User",
            "--values",
            values.as_str(),
        ]))?;

        let id = result
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| SfAdminError::ResponseParse("create result without id".to_string()))?;
        info!(id, username = ?user.username, "user created");

        user.id = Some(id.to_string());
        Ok(user)
    }

    /// Lists users ordered by last name, optionally only active ones.
    pub fn list(&self, active_only: bool) -> Result<Vec<User>> {
        let soql = query::list_users(active_only);
        let result = self
            .executor
            .execute(self.config.scoped(["data", "query", "--query", soql.as_str()]))?;

        Ok(profile::records_of(&result)
            .map(|rows| records::records_to_users(rows))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::scripted::ScriptedRunner;
    use crate::exec::ProcessOutput;
    use crate::model::UserRole;
    use serde_json::json;

    fn directory(runner: &ScriptedRunner) -> UserDirectory<&ScriptedRunner> {
        UserDirectory::new(CommandExecutor::new(runner, "sf"), DirectoryConfig::default())
    }

    #[test]
    fn create_resolves_profile_then_creates_record() {
        let runner = ScriptedRunner::new()
            .respond_records(json!([{"Id": "00eADMIN"}]))
            .respond_json(json!({"status": 0, "result": {"id": "005NEW", "success": true, "errors": []}}));

        let params = CreateUserParams::new("a@x.com", "Doe").with_role("admin");
        let user = directory(&runner).create(params).unwrap();

        assert_eq!(user.id.as_deref(), Some("005NEW"));
        assert_eq!(user.role, UserRole::Administrator);

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].arg_after("--query"),
            Some("SELECT Id FROM Profile WHERE Name = 'System Administrator'")
        );
        assert_eq!(
            &calls[1].args[..5],
            &["data", "create", "record", "--sobject", "User"]
        );
        let values = calls[1].arg_after("--values").unwrap();
        assert!(values.contains(
            "Username=a@x.com Email=a@x.com LastName=Doe Alias=a@x.c ProfileId=00eADMIN"
        ));
        for default in [
            "TimeZoneSidKey=America/New_York",
            "LocaleSidKey=en_US",
            "EmailEncodingKey=UTF-8",
            "LanguageLocaleKey=en_US",
        ] {
            assert!(values.contains(default), "missing {}", default);
        }
    }

    #[test]
    fn invalid_role_fails_before_any_process() {
        let runner = ScriptedRunner::new();
        let params = CreateUserParams::new("a@x.com", "Doe").with_role("root");

        let err = directory(&runner).create(params).unwrap_err();

        assert!(matches!(err, SfAdminError::InvalidRole(ref k) if k == "root"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn missing_profile_stops_before_create() {
        let runner = ScriptedRunner::new().respond_records(json!([]));

        let err = directory(&runner)
            .create(CreateUserParams::new("a@x.com", "Doe"))
            .unwrap_err();

        assert!(matches!(err, SfAdminError::ProfileNotFound(UserRole::Standard)));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn create_failure_carries_tool_message() {
        let runner = ScriptedRunner::new()
            .respond_records(json!([{"Id": "00e1"}]))
            .respond(ProcessOutput::failure(
                1,
                r#"{"name":"DUPLICATE_USERNAME","message":"Duplicate Username."}"#,
            ));

        let err = directory(&runner)
            .create(CreateUserParams::new("a@x.com", "Doe"))
            .unwrap_err();

        assert!(matches!(err, SfAdminError::CommandFailed(ref m) if m == "Duplicate Username."));
    }

    #[test]
    fn create_result_without_id_is_parse_error() {
        let runner = ScriptedRunner::new()
            .respond_records(json!([{"Id": "00e1"}]))
            .respond_json(json!({"result": {"success": true}}));

        let err = directory(&runner)
            .create(CreateUserParams::new("a@x.com", "Doe"))
            .unwrap_err();

        assert!(matches!(err, SfAdminError::ResponseParse(_)));
    }

    #[test]
    fn list_active_with_no_matches_is_empty() {
        let runner = ScriptedRunner::new().respond_records(json!([]));

        let users = directory(&runner).list(true).unwrap();

        assert!(users.is_empty());
        let soql = runner.calls()[0].arg_after("--query").unwrap().to_string();
        assert!(soql.contains("WHERE IsActive = true ORDER BY LastName"));
    }

    #[test]
    fn list_without_records_key_is_empty() {
        let runner = ScriptedRunner::new().respond_json(json!({"status": 0, "result": {}}));

        let users = directory(&runner).list(false).unwrap();

        assert!(users.is_empty());
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn unquotable_value_fails_without_create_call() {
        let runner = ScriptedRunner::new().respond_records(json!([{"Id": "00e1"}]));
        let params = CreateUserParams::new("a@x.com", r#"O'Brien "Jr""#);

        let err = directory(&runner).create(params).unwrap_err();

        assert!(matches!(err, SfAdminError::Api(_)));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn list_maps_records() {
        let runner = ScriptedRunner::new().respond_records(json!([
            {"Id": "005A", "LastName": "Adams", "IsActive": true, "Profile": {"Name": "Read Only"}},
            {"Id": "005B", "LastName": "Baker", "IsActive": false, "Profile": {"Name": "Standard User"}}
        ]));

        let users = directory(&runner).list(false).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].role, UserRole::ReadOnly);
        assert!(!users[1].is_active);
        assert!(!runner.calls()[0].arg_after("--query").unwrap().contains("WHERE"));
    }

    #[test]
    fn target_org_is_passed_to_every_call() {
        let runner = ScriptedRunner::new()
            .respond_records(json!([{"Id": "00e1"}]))
            .respond_json(json!({"result": {"id": "005NEW"}}));
        let dir = UserDirectory::new(
            CommandExecutor::new(&runner, "sf"),
            DirectoryConfig::new(Some("uat".into())),
        );

        dir.create(CreateUserParams::new("a@x.com", "Doe")).unwrap();

        for call in runner.calls() {
            assert_eq!(call.arg_after("--target-org"), Some("uat"));
        }
    }

    #[test]
    fn scoped_leaves_args_alone_without_org() {
        let args = DirectoryConfig::default().scoped(["org", "display"]);
        assert_eq!(args, vec!["org", "display"]);
    }
}
