//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tplconf_core::{ConfigValue, LoaderOptions, SubstitutionMode};

/// tplconf - Load templated YAML/JSON configuration and query it
#[derive(Parser, Debug)]
#[command(name = "tplconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (debug logs and a dump of every loaded entry)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the located file and all resolved entries
    Show {
        #[command(flatten)]
        load: LoadArgs,

        /// Print the plain dump (file header plus JSON) without colors
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved value at a dotted path
    ///
    /// Strings are printed as-is; anything else as JSON.
    ///
    /// Examples:
    ///   tplconf get database.host
    ///   tplconf get port ./deploy --default 8080
    ///   tplconf get logs --define APP_PATH=/opt/app --raise
    Get {
        /// Dotted path, e.g. `server.port`
        key: String,

        #[command(flatten)]
        load: LoadArgs,

        /// Value printed when the key is missing
        #[arg(long)]
        default: Option<String>,

        /// Fail when the key is missing
        #[arg(long)]
        raise: bool,
    },

    /// Print which file would be loaded
    Locate {
        #[command(flatten)]
        load: LoadArgs,
    },
}

/// Arguments shared by every command that loads a config file
#[derive(Args, Debug, Clone, PartialEq)]
pub struct LoadArgs {
    /// Config file, or directory to search
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Base file name searched for in a directory
    #[arg(long, default_value = "config")]
    pub name: String,

    /// Candidate suffix, in priority order (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Placeholder binding KEY=VALUE; VALUE is read as JSON when it parses
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_definition)]
    pub definitions: Vec<(String, ConfigValue)>,

    /// Also bind every environment variable (explicit --define wins)
    #[arg(long)]
    pub env: bool,

    /// Keep the type of values referenced by a whole-string placeholder
    #[arg(long)]
    pub splice: bool,
}

impl LoadArgs {
    /// Build loader options from the flags.
    pub fn options(&self, print_when_create: bool) -> LoaderOptions {
        let mut options = LoaderOptions::new()
            .name(&self.name)
            .print_when_create(print_when_create);

        if !self.extensions.is_empty() {
            options = options.extensions(self.extensions.iter().map(|e| normalize_ext(e)));
        }
        if self.env {
            options = options.env_definitions();
        }
        for (key, value) in &self.definitions {
            options = options.define(key, value.clone());
        }
        if self.splice {
            options = options.substitution(SubstitutionMode::Splice);
        }
        options
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// Parse a `KEY=VALUE` definition.
pub fn parse_definition(s: &str) -> Result<(String, ConfigValue), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    let value =
        serde_json::from_str(raw).unwrap_or_else(|_| ConfigValue::String(raw.to_string()));
    Ok((key.to_string(), value))
}
