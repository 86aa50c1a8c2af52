use super::{query, DirectoryConfig};
use crate::error::{Result, SfAdminError};
use crate::exec::{CommandExecutor, Runner};
use crate::model::UserRole;
use serde_json::Value;
use tracing::debug;

/// Looks up the profile id behind a [`UserRole`].
///
/// Profile names are unique within an org, so the lookup is expected to match
/// at most one record. Should it ever match several, the first record the
/// tool returns is used; no other tie-break is attempted.
pub struct RoleProfileResolver<'a, R: Runner> {
    executor: &'a CommandExecutor<R>,
    config: &'a DirectoryConfig,
}

impl<'a, R: Runner> RoleProfileResolver<'a, R> {
    pub fn new(executor: &'a CommandExecutor<R>, config: &'a DirectoryConfig) -> Self {
        Self { executor, config }
    }

    pub fn resolve_profile_id(&self, role: UserRole) -> Result<String> {
        let soql = query::profile_lookup(role);
        let result = self
            .executor
            .execute(self.config.scoped(["data", "query", "--query", soql.as_str()]))?;

        let first = records_of(&result)
            .and_then(|records| records.first())
            .ok_or(SfAdminError::ProfileNotFound(role))?;

        let id = first
            .get("Id")
            .and_then(Value::as_str)
            .ok_or_else(|| SfAdminError::ResponseParse("profile record without Id".to_string()))?;

        debug!(role = %role, profile_id = id, "resolved profile");
        Ok(id.to_string())
    }
}

/// The `records` array of a query result, if there is one.
pub(crate) fn records_of(result: &Value) -> Option<&Vec<Value>> {
    result.get("records").and_then(Value::as_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::scripted::ScriptedRunner;
    use serde_json::json;

    fn resolve(runner: &ScriptedRunner, config: &DirectoryConfig, role: UserRole) -> Result<String> {
        let executor = CommandExecutor::new(runner, "sf");
        RoleProfileResolver::new(&executor, config).resolve_profile_id(role)
    }

    #[test]
    fn returns_id_of_matching_profile() {
        let runner = ScriptedRunner::new().respond_records(json!([{"Id": "00e1"}]));

        let id = resolve(&runner, &DirectoryConfig::default(), UserRole::Administrator).unwrap();

        assert_eq!(id, "00e1");
        let call = &runner.calls()[0];
        assert_eq!(&call.args[..3], &["data", "query", "--query"]);
        assert_eq!(
            call.arg_after("--query"),
            Some("SELECT Id FROM Profile WHERE Name = 'System Administrator'")
        );
    }

    #[test]
    fn first_record_wins() {
        let runner =
            ScriptedRunner::new().respond_records(json!([{"Id": "00eA"}, {"Id": "00eB"}]));

        let id = resolve(&runner, &DirectoryConfig::default(), UserRole::Standard).unwrap();
        assert_eq!(id, "00eA");
    }

    #[test]
    fn zero_records_is_profile_not_found() {
        let runner = ScriptedRunner::new().respond_records(json!([]));

        let err = resolve(&runner, &DirectoryConfig::default(), UserRole::ReadOnly).unwrap_err();
        assert!(matches!(err, SfAdminError::ProfileNotFound(UserRole::ReadOnly)));
    }

    #[test]
    fn missing_records_is_profile_not_found() {
        let runner = ScriptedRunner::new().respond_json(json!({"result": {}}));

        let err = resolve(&runner, &DirectoryConfig::default(), UserRole::Standard).unwrap_err();
        assert!(matches!(err, SfAdminError::ProfileNotFound(UserRole::Standard)));
    }

    #[test]
    fn command_failure_is_not_profile_not_found() {
        let runner = ScriptedRunner::new().respond(crate::exec::ProcessOutput::failure(
            1,
            r#"{"message":"No default org"}"#,
        ));

        let err = resolve(&runner, &DirectoryConfig::default(), UserRole::Standard).unwrap_err();
        assert!(matches!(err, SfAdminError::CommandFailed(ref m) if m == "No default org"));
    }

    #[test]
    fn lookup_runs_against_target_org() {
        let runner = ScriptedRunner::new().respond_records(json!([{"Id": "00e1"}]));
        let config = DirectoryConfig::new(Some("qa-sandbox".into()));

        resolve(&runner, &config, UserRole::Standard).unwrap();

        let call = &runner.calls()[0];
        assert_eq!(call.arg_after("--target-org"), Some("qa-sandbox"));
        assert_eq!(call.args.last().map(String::as_str), Some("--json"));
    }
}
