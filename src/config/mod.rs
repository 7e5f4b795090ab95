//! Configuration module for spendscope
//!
//! - Path resolution (env override, XDG, APPDATA)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendscopePaths;
pub use settings::Settings;
