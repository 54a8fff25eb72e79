//! Centralized configuration paths for riffle
//!
//! The bindings file lives under:
//! - Unix/macOS: `~/.config/riffle/`
//! - Windows: `%APPDATA%\riffle\`

use std::{env, path::PathBuf};

const APP_DIR: &str = "riffle";

/// Base config directory for riffle
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/riffle`
///   - Else: `~/.config/riffle`
///
/// Windows:
///   - `%APPDATA%\riffle`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/riffle/bindings.txt`
pub fn bindings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("bindings.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_file_under_config_dir() {
        let config = config_dir().unwrap();
        let file = bindings_file().unwrap();
        assert!(file.starts_with(&config));
        assert!(file.to_string_lossy().ends_with("bindings.txt"));
    }
}
