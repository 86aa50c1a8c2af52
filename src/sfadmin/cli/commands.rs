use super::render::{
    print_messages, print_user_details, print_user_table, print_users_json,
};
use super::setup::{Cli, Commands, CreateArgs, OutputFormat, UserCommands};
use clap::Parser;
use directories::ProjectDirs;
use sfadmin::api::{ConfigAction, SfAdminApi, SfAdminPaths};
use sfadmin::config::SfAdminConfig;
use sfadmin::directory::DirectoryConfig;
use sfadmin::error::{Result, SfAdminError};
use sfadmin::exec::process::SystemRunner;
use sfadmin::model::CreateUserParams;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Overrides the directory holding `config.json`.
const HOME_ENV: &str = "SFADMIN_HOME";

struct AppContext {
    api: SfAdminApi<SystemRunner>,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Users(cmd) => match cmd {
            UserCommands::Create(args) => handle_create(&ctx, args),
            UserCommands::List {
                active_only,
                format,
            } => handle_list(&ctx, active_only, format),
        },
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr so JSON output on stdout stays parseable. `RUST_LOG`
/// wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "sfadmin=debug"
    } else {
        "sfadmin=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "sfadmin", "sfadmin")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SfAdminError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = SfAdminConfig::load(&config_dir)?;

    let target_org = cli.org.clone().or(config.target_org);
    tracing::debug!(?target_org, executable = %config.executable, "context ready");

    let api = SfAdminApi::new(
        SystemRunner,
        config.executable,
        DirectoryConfig::new(target_org),
        SfAdminPaths::new(config_dir),
    );

    Ok(AppContext {
        api,
        verbose: cli.verbose,
    })
}

fn handle_create(ctx: &AppContext, args: CreateArgs) -> Result<()> {
    let params = CreateUserParams::from(args);

    if ctx.verbose {
        print_user_details(&params.clone().into_user()?);
    }

    let result = ctx.api.create_user(params)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, active_only: bool, format: OutputFormat) -> Result<()> {
    let result = ctx.api.list_users(active_only)?;
    match format {
        OutputFormat::Json => print_users_json(&result.users)?,
        OutputFormat::Table => {
            print_user_table(&result.users);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!(
                "target-org = {}",
                config.target_org.as_deref().unwrap_or("(sf default)")
            );
            println!("executable = {}", config.executable);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
