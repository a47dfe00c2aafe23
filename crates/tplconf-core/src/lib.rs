//! Templated configuration loading
//!
//! Locates a YAML or JSON config file, resolves `{{name}}` placeholders in
//! its string values, and serves the result through dotted-path lookups.
//!
//! # Example
//!
//! ```no_run
//! use tplconf_core::{ConfigFile, LoaderOptions};
//!
//! # fn main() -> tplconf_core::Result<()> {
//! let options = LoaderOptions::default().define("APP_PATH", "/opt/app");
//! let config = ConfigFile::load_with("./settings", options)?;
//!
//! let port = config.get_or("server.port", 8080);
//! let log_dir = config.require("paths.logs")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod resolver;
pub mod store;

pub use error::{Error, Result};
pub use loader::{ConfigFile, LoaderOptions};
pub use resolver::{Resolver, SubstitutionMode, token};
pub use store::{ConfigStore, Lookup};
pub use tplconf_content::{ConfigValue, Mapping, kind_name, stringify};
pub use tplconf_fs::NormalizedPath;
