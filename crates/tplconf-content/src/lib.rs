//! Value model and format parsing for tplconf
//!
//! Every supported file format is decoded into the same ordered
//! [`ConfigValue`] tree, which the rest of the workspace resolves and
//! queries.

pub mod error;
pub mod format;
pub mod handlers;
pub mod parse;
pub mod path;
pub mod value;

pub use error::{Error, Result};
pub use format::{Format, FormatHandler};
pub use handlers::{JsonHandler, YamlHandler};
pub use parse::{parse_file, parse_str};
pub use path::{get_at_path, parse_path};
pub use value::{ConfigValue, Mapping, kind_name, stringify};
