//! Command implementations for tplconf-cli

pub mod get;
pub mod locate;
pub mod show;

pub use get::run_get;
pub use locate::run_locate;
pub use show::run_show;
