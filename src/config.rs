use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".stringsrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns (relative to the source dir) of files to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_search_extensions")]
    pub search_extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    /// Localization files tried in order when none is given, relative to the project root.
    #[serde(default = "default_localizable_candidates")]
    pub localizable_candidates: Vec<String>,
    /// Source dirs tried in order when none is given; "" is the project root.
    #[serde(default = "default_source_dir_candidates")]
    pub source_dir_candidates: Vec<String>,
    /// SwiftGen enum name that prefixes generated accessors.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_search_extensions() -> Vec<String> {
    ["swift", "m", "mm", "h"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    ["Pods", "build", "DerivedData", ".git"]
        .map(String::from)
        .to_vec()
}

fn default_localizable_candidates() -> Vec<String> {
    [
        "Resources/Localization/en.lproj/Localizable.strings",
        "Resources/Localization/zh-Hans.lproj/Localizable.strings",
        "Localization/en.lproj/Localizable.strings",
    ]
    .map(String::from)
    .to_vec()
}

fn default_source_dir_candidates() -> Vec<String> {
    ["", "Sources", "App"].map(String::from).to_vec()
}

fn default_namespace() -> String {
    "L10n".to_string()
}

fn default_report_file() -> String {
    "localization_cleanup_report.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            search_extensions: default_search_extensions(),
            excluded_dirs: default_excluded_dirs(),
            localizable_candidates: default_localizable_candidates(),
            source_dir_candidates: default_source_dir_candidates(),
            namespace: default_namespace(),
            report_file: default_report_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.search_extensions.is_empty() {
            bail!("'searchExtensions' must contain at least one extension");
        }

        if self.namespace.trim().is_empty() {
            bail!("'namespace' must not be empty");
        }

        if self.report_file.trim().is_empty() {
            bail!("'reportFile' must not be empty");
        }

        Ok(())
    }

    /// The extension used as evidence when auto-discovering the source dir.
    pub fn primary_extension(&self) -> &str {
        self.search_extensions
            .first()
            .map(String::as_str)
            .unwrap_or("swift")
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
