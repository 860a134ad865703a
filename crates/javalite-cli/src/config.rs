// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Loading `javalite.toml`.
//!
//! Only the `[validator]` table is read; other tables are left for other
//! tools. A missing file in the current directory means the defaults.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use javalite_core::config::ValidatorConfig;
use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tracing::debug;

/// The configuration file name looked for in the current directory.
pub const CONFIG_FILE: &str = "javalite.toml";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    validator: ValidatorConfig,
}

/// Parses the configuration file at `path`.
///
/// Returns an error if the file cannot be read or its `[validator]` table
/// is malformed.
pub fn parse_config(path: &Utf8Path) -> Result<ValidatorConfig> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config '{path}'"))?;

    let file: ConfigFile = toml::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse config '{path}'"))?;

    debug!(%path, "loaded configuration");
    Ok(file.validator)
}

/// Looks for `javalite.toml` in `dir` and parses it if found.
///
/// Returns `None` if no file exists.
pub fn find_config(dir: &Utf8Path) -> Result<Option<ValidatorConfig>> {
    let path = dir.join(CONFIG_FILE);
    if path
        .try_exists()
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to stat config '{path}'"))?
    {
        parse_config(&path).map(Some)
    } else {
        Ok(None)
    }
}

/// The configuration for this invocation: `explicit` if given (it must
/// exist), else `javalite.toml` in the current directory, else defaults.
pub fn load_config(explicit: Option<&Utf8Path>) -> Result<ValidatorConfig> {
    if let Some(path) = explicit {
        return parse_config(path);
    }
    let cwd = std::env::current_dir()
        .into_diagnostic()
        .wrap_err("Failed to determine the current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|path| miette::miette!("Non-UTF-8 current directory '{}'", path.display()))?;
    Ok(find_config(&cwd)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use javalite_core::config::PassKind;
    use javalite_core::validation::Severity;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::write(path.join(CONFIG_FILE), content).unwrap();
        path
    }

    #[test]
    fn parse_full_config() {
        let temp = TempDir::new().unwrap();
        let dir = write_config(
            &temp,
            r#"
[validator]
disabled-passes = ["scoping"]
known-methods = ["nextInt"]

[validator.severity]
MISSING_SEMICOLON = "warning"

[editor]
theme = "dark"
"#,
        );

        let config = parse_config(&dir.join(CONFIG_FILE)).unwrap();
        assert!(!config.is_enabled(PassKind::Scoping));
        assert_eq!(config.known_methods, vec!["nextInt"]);
        assert_eq!(
            config.severity_for("MISSING_SEMICOLON", Severity::Error),
            Severity::Warning
        );
    }

    #[test]
    fn file_without_validator_table_is_default() {
        let temp = TempDir::new().unwrap();
        let dir = write_config(&temp, "[editor]\ntheme = \"dark\"\n");
        assert_eq!(
            parse_config(&dir.join(CONFIG_FILE)).unwrap(),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn find_config_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        assert!(find_config(&dir).unwrap().is_none());
    }

    #[test]
    fn find_config_present() {
        let temp = TempDir::new().unwrap();
        let dir = write_config(&temp, "[validator]\nknown-types = [\"Scanner\"]\n");
        let config = find_config(&dir).unwrap().unwrap();
        assert_eq!(config.known_types, vec!["Scanner"]);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let dir = write_config(&temp, "[validator]\ndisabled-passes = [\"nope\"]\n");
        let err = find_config(&dir).unwrap_err();
        assert!(format!("{err:?}").contains("Failed to parse config"));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let err = load_config(Some(&dir.join("absent.toml"))).unwrap_err();
        assert!(format!("{err:?}").contains("Failed to read config"));
    }
}
