use clap::{Args, Parser, Subcommand, ValueEnum};
use sfadmin::model::CreateUserParams;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "sfadmin", bin_name = "sfadmin", version = get_version())]
#[command(about = "Manage Salesforce users through the sf CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Salesforce org alias (overrides the configured target org)
    #[arg(long, global = true)]
    pub org: Option<String>,

    /// Show execution details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Salesforce users
    #[command(subcommand)]
    Users(UserCommands),

    /// Get or set configuration
    Config {
        /// Configuration key (target-org, executable)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a new user
    #[command(alias = "new")]
    Create(CreateArgs),

    /// List users
    #[command(visible_alias = "list-users", alias = "ls")]
    List {
        /// Show only active users
        #[arg(long)]
        active_only: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// User's email
    #[arg(long)]
    pub email: String,

    /// User's first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// User's last name
    #[arg(long)]
    pub last_name: String,

    /// User's role (standard, admin, read_only)
    #[arg(long, default_value = "standard")]
    pub role: String,

    /// Username (default: email)
    #[arg(long)]
    pub username: Option<String>,

    /// User's phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// User's job title
    #[arg(long)]
    pub title: Option<String>,

    /// User's department
    #[arg(long)]
    pub department: Option<String>,

    /// User's company name
    #[arg(long)]
    pub company: Option<String>,
}

impl From<CreateArgs> for CreateUserParams {
    fn from(args: CreateArgs) -> Self {
        CreateUserParams {
            email: args.email,
            last_name: args.last_name,
            first_name: args.first_name,
            username: args.username,
            role: args.role,
            phone: args.phone,
            title: args.title,
            department: args.department,
            company: args.company,
        }
    }
}
