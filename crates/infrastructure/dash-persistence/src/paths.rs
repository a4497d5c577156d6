use std::path::PathBuf;

use dash_config::{APP_NAME, APP_ORG, APP_QUALIFIER, PREFERENCES_FILENAME};
use directories::ProjectDirs;

use crate::PreferenceError;

/// `<config dir>/preferences.json`. The directory is not created here.
pub fn default_preferences_path() -> Result<PathBuf, PreferenceError> {
    let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .ok_or(PreferenceError::NoConfigDir)?;
    Ok(dirs.config_dir().join(PREFERENCES_FILENAME))
}
