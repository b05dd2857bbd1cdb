//! Configuration file handling

use anyhow::{Context, Result};
use hueprint_theme::PaletteConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "hueprint.toml";

/// Load configuration.
///
/// An explicit path (file, or directory containing `hueprint.toml`) must
/// exist. Without one, `./hueprint.toml` is used when present and built-in
/// defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<PaletteConfig> {
    let config_path = match explicit {
        Some(path) if path.is_dir() => path.join(CONFIG_FILE),
        Some(path) => path.to_path_buf(),
        None => {
            let local = PathBuf::from(CONFIG_FILE);
            if !local.exists() {
                tracing::debug!("no {CONFIG_FILE} found, using defaults");
                return Ok(PaletteConfig::default());
            }
            local
        }
    };

    if !config_path.exists() {
        anyhow::bail!("No config file found at {}", config_path.display());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config = PaletteConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueprint_theme::ColorScheme;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn loads_from_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[generate]\nscheme = \"dark\"\n\n[snippet]\nindent = 4\n",
        )
        .unwrap();

        let config = load(Some(dir.path())).unwrap();
        assert_eq!(config.generate.scheme, ColorScheme::Dark);
        assert_eq!(config.snippet.indent, 4);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("No config file found"));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[generate]\nseed = \"many\"\n").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }
}
