//! # sfadmin Architecture
//!
//! sfadmin administers Salesforce users by driving the vendor `sf` CLI. The
//! library owns everything between typed Rust values and the external tool;
//! the binary is a thin client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables/JSON, sets up logging   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + UserDirectory (directory/) │
//! │  - Builds sf invocations from typed values                  │
//! │  - Maps User <-> sf records, resolves roles to profiles     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Execution Layer (exec/)                                    │
//! │  - Runner trait: SystemRunner (production),                 │
//! │    ScriptedRunner (testing)                                 │
//! │  - Decodes the tool's JSON envelope into Ok/typed errors    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. The only side effect is the child process launched through the
//! [`exec::Runner`] the caller supplies. Diagnostics go through `tracing`;
//! installing a subscriber is the client's business.
//!
//! ## Testing Strategy
//!
//! Everything above the process boundary is tested against
//! [`exec::scripted::ScriptedRunner`], which replays canned `sf` outputs and
//! records the argument vectors it was given. The process boundary itself is
//! tested with real `sh` children.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Operations returning `CmdResult`
//! - [`directory`]: `UserDirectory`, profile resolution, field building, record mapping
//! - [`exec`]: Running `sf` and decoding its output
//! - [`model`]: `User`, `UserRole`, `CreateUserParams`
//! - [`config`]: Persisted configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod exec;
pub mod model;
