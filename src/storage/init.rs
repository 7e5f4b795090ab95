//! Storage initialization
//!
//! First-run setup: directories, empty record files and default settings.

use tracing::info;

use crate::config::paths::SpendscopePaths;
use crate::config::settings::Settings;
use crate::error::SpendscopeError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing files are left untouched, so running this twice is harmless.
pub fn initialize_storage(paths: &SpendscopePaths) -> Result<(), SpendscopeError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    if !paths.transactions_file().exists() {
        write_json_atomic(
            paths.transactions_file(),
            &serde_json::json!({ "transactions": [] }),
        )?;
    }

    if !paths.budgets_file().exists() {
        write_json_atomic(paths.budgets_file(), &serde_json::json!({ "budgets": [] }))?;
    }

    info!(path = %paths.base_dir().display(), "initialized data directory");
    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &SpendscopePaths) -> bool {
    !paths.is_initialized()
}
