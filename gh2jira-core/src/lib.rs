//! # gh2jira Core Library
//!
//! Shared pieces used by the gh2jira binary and its service clients: the
//! YAML configuration file model, URL normalization, and terminal output
//! helpers.

pub mod config;
pub mod output;
pub mod url;

pub use config::{AuthTokens, Config, default_config_path};
pub use output::{ColorMode, print_info, print_success, print_warning};
pub use url::normalize_base_url;
