use crate::commands::{CmdMessage, CmdResult, SfAdminPaths};
use crate::config::SfAdminConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SfAdminPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = SfAdminConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SfAdminConfig::load(dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(&key)?));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SfAdminConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;

            let display_val = config.get(&key)?;
            let mut result = CmdResult::default().with_config(config);
            if display_val.is_empty() {
                result.add_message(CmdMessage::success(format!("{} cleared", key)));
            } else {
                result.add_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                )));
            }
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> (tempfile::TempDir, SfAdminPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = SfAdminPaths::new(dir.path());
        (dir, paths)
    }

    #[test]
    fn show_all_returns_defaults_without_file() {
        let (_dir, paths) = paths();
        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(SfAdminConfig::default()));
    }

    #[test]
    fn set_persists_and_reports() {
        let (_dir, paths) = paths();

        let result = run(
            &paths,
            ConfigAction::Set("target-org".into(), "uat".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "target-org set to uat");

        let shown = run(&paths, ConfigAction::ShowKey("target-org".into())).unwrap();
        assert_eq!(shown.messages[0].content, "uat");
    }

    #[test]
    fn clearing_target_org_reports_cleared() {
        let (_dir, paths) = paths();
        run(&paths, ConfigAction::Set("target-org".into(), "uat".into())).unwrap();

        let result = run(&paths, ConfigAction::Set("target-org".into(), "".into())).unwrap();

        assert_eq!(result.messages[0].content, "target-org cleared");
        assert_eq!(result.config.unwrap().target_org, None);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let (_dir, paths) = paths();
        assert!(run(&paths, ConfigAction::ShowKey("nope".into())).is_err());
        assert!(run(&paths, ConfigAction::Set("nope".into(), "x".into())).is_err());
    }
}
