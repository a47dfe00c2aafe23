//! Filesystem layer for tplconf
//!
//! Provides normalized path handling, scoped text reads, and discovery of
//! the configuration file to load.

pub mod constants;
pub mod error;
pub mod io;
pub mod locate;
pub mod path;

pub use constants::{DEFAULT_CONFIG_NAME, DEFAULT_EXTENSIONS, default_extensions};
pub use error::{Error, Result};
pub use locate::{candidates, locate};
pub use path::NormalizedPath;
