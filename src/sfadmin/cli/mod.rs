//! # CLI Layer
//!
//! This module is **one possible UI client** for sfadmin. It is the only
//! place that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments to typed commands via clap
//! 2. **Context Setup**: load config, apply `--org`, build the `SfAdminApi`
//! 3. **Logging**: install the `tracing` subscriber
//! 4. **Output**: render `CmdResult` as tables, JSON or colored messages
//!
//! ## Module Structure
//!
//! - `commands`: `run()` plus per-command handlers
//! - `render`: Tables, JSON and messages
//! - `setup`: clap definitions
//! - `styles`: Terminal styles

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
