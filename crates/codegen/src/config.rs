use serde::Deserialize;
use std::path::{Path, PathBuf};
use validgen_core::catalog::CatalogConfig;
use crate::error::{CodegenError, Result};

pub const CONFIG_FILE: &str = "validgen.toml";

/// Overrides `database.url` when set and non-empty.
pub const DATABASE_URL_ENV: &str = "VALIDGEN_DATABASE_URL";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: String,
    pub database: DatabaseConfig,
    pub output: OutputConfig,
}

#[derive(Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub line_ending: LineEnding,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

fn default_extension() -> String {
    "txt".to_string()
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .field("schema", &self.schema)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn catalog_config(&self) -> CatalogConfig {
        let config = CatalogConfig::new(self.url.clone());
        match &self.schema {
            Some(schema) => config.with_schema(schema.clone()),
            None => config,
        }
    }
}

impl Config {
    pub fn find_and_load(start_dir: &Path) -> Result<(Self, PathBuf)> {
        let mut current_dir = start_dir.to_path_buf();

        loop {
            let config_path = current_dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load(&config_path)?;
                return Ok((config, current_dir));
            }

            if !current_dir.pop() {
                return Err(CodegenError::ConfigNotFound(start_dir.to_path_buf()));
            }
        }
    }

    fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let base = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::parse(&content, base)?;
        config.apply_url_override(std::env::var(DATABASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses config text; a relative output path is resolved against `base`.
    pub fn parse(content: &str, base: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        if config.output.path.is_relative() {
            config.output.path = base.join(&config.output.path);
        }
        Ok(config)
    }

    pub fn apply_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(CodegenError::InvalidConfig(format!(
                "database.url is empty (set it or {DATABASE_URL_ENV})"
            )));
        }

        let ext = &self.output.extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(CodegenError::InvalidConfig(format!(
                "output.extension '{ext}' must be a bare extension such as \"txt\""
            )));
        }

        if !self.output.path.is_dir() {
            return Err(CodegenError::InvalidPath(self.output.path.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC: &str = r#"
version = "1.0"

[database]
url = "postgres://localhost/app"

[output]
path = "Validators"
"#;

    #[test]
    fn defaults_apply() {
        let config = Config::parse(BASIC, Path::new("/work")).expect("Config should parse");

        assert_eq!(config.output.path, Path::new("/work/Validators"));
        assert_eq!(config.output.extension, "txt");
        assert_eq!(config.output.line_ending, LineEnding::Lf);
        assert!(config.database.schema.is_none());
    }

    #[test]
    fn absolute_output_path_is_kept() {
        let content = BASIC.replace("\"Validators\"", "\"/srv/out\"");
        let config = Config::parse(&content, Path::new("/work")).expect("Config should parse");
        assert_eq!(config.output.path, Path::new("/srv/out"));
    }

    #[test]
    fn crlf_line_ending() {
        let content = format!("{BASIC}line_ending = \"crlf\"\n");
        let config = Config::parse(&content, Path::new("/work")).expect("Config should parse");
        assert_eq!(config.output.line_ending.as_str(), "\r\n");
    }

    #[test]
    fn url_override_ignores_blank() {
        let mut config = Config::parse(BASIC, Path::new("/work")).expect("Config should parse");

        config.apply_url_override(Some("  ".to_string()));
        assert_eq!(config.database.url, "postgres://localhost/app");

        config.apply_url_override(Some("postgres://prod/app".to_string()));
        assert_eq!(config.database.url, "postgres://prod/app");
    }

    #[test]
    fn validate_rejects_bad_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let content = format!("{BASIC}extension = \".cs\"\n");
        let config = Config::parse(&content, dir.path()).expect("Config should parse");
        std::fs::create_dir(dir.path().join("Validators")).expect("create output dir");

        assert!(matches!(config.validate(), Err(CodegenError::InvalidConfig(_))));
    }

    #[test]
    fn validate_rejects_missing_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::parse(BASIC, dir.path()).expect("Config should parse");

        assert!(matches!(config.validate(), Err(CodegenError::InvalidPath(_))));
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), BASIC).expect("write config");
        std::fs::create_dir(dir.path().join("Validators")).expect("create output dir");
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).expect("create nested dirs");

        let (config, found_in) = Config::find_and_load(&nested).expect("Config should be found");
        assert_eq!(found_in, dir.path());
        assert_eq!(config.output.path, dir.path().join("Validators"));
    }

    #[test]
    fn catalog_config_carries_schema() {
        let content = BASIC.replace(
            "url = \"postgres://localhost/app\"",
            "url = \"postgres://localhost/app\"\nschema = \"sales\"",
        );
        let config = Config::parse(&content, Path::new("/work")).expect("Config should parse");
        assert_eq!(config.database.catalog_config().schema.as_deref(), Some("sales"));
    }
}
