//! Settings file loading.

use std::fs;
use std::path::Path;

use crate::config::schema::FileSettings;
use crate::error::{Result, ShopcheckError};

/// Load and parse a settings file.
///
/// A missing file is an error: the path was given explicitly, so silently
/// falling back to defaults would test the wrong backend.
pub fn load_settings_file(path: &Path) -> Result<FileSettings> {
    if !path.exists() {
        return Err(ShopcheckError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    parse_settings(&content, path)
}

/// Parse settings from YAML content.
pub fn parse_settings(content: &str, path: &Path) -> Result<FileSettings> {
    if content.trim().is_empty() {
        return Ok(FileSettings::default());
    }

    serde_yaml::from_str(content).map_err(|e| ShopcheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoginField;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_settings_file(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(ShopcheckError::ConfigNotFound { .. })));
    }

    #[test]
    fn loads_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shopcheck.yml");
        fs::write(
            &path,
            "base_url: http://localhost:3002\nlogin:\n  field: email\n",
        )
        .unwrap();

        let settings = load_settings_file(&path).unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:3002"));
        assert_eq!(settings.login.field, Some(LoginField::Email));
    }

    #[test]
    fn empty_file_is_default() {
        let settings = parse_settings("   \n", Path::new("empty.yml")).unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_settings("base_url: [unclosed", Path::new("broken.yml")).unwrap_err();
        assert!(matches!(err, ShopcheckError::ConfigParseError { .. }));
        assert!(err.to_string().contains("broken.yml"));
    }
}
