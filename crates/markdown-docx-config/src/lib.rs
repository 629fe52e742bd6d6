use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid file pattern '{pattern}': {source}")]
    PatternError {
        pattern: String,
        source: glob::PatternError,
    },
}

/// The manuals converted when no file list is configured.
pub const DEFAULT_FILES: [&str; 9] = [
    "AJUSTES_MEJORAS_SISTEMA.md",
    "CHANGELOG.md",
    "COMENTARIOS_README_CODIGO.md",
    "DIAGRAMAS_UML_TECNICOS.md",
    "EVIDENCIA_INTEGRACION_MODULOS.md",
    "GUIA_INSTALACION_COMPLETA.md",
    "INFORME_CONTROL_AVANCES.md",
    "MANUAL_DESARROLLADOR_ARQUITECTURA.md",
    "PRUEBAS_INTERNAS.md",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Open the output directory in the platform file browser afterwards.
    pub open_output_dir: bool,
    /// Names relative to `source_dir`. Entries with glob metacharacters are
    /// expanded; plain names are kept as-is even if they don't exist.
    pub files: Vec<String>,
    pub code: CodeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub font: String,
    pub size_pt: f32,
    pub indent_inches: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs/manuales"),
            output_dir: PathBuf::from("docs/manuales/docx"),
            open_output_dir: true,
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            code: CodeConfig::default(),
        }
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            font: "Courier New".to_string(),
            size_pt: 9.0,
            indent_inches: 0.5,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded directories
        config.source_dir = Self::expand_path(&config.source_dir).unwrap_or(config.source_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-docx");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves `files` into concrete names relative to `source_dir`.
    ///
    /// Order is preserved. Each glob entry is replaced by its matches,
    /// sorted; a name already listed earlier is not repeated.
    pub fn resolve_files(&self) -> Result<Vec<String>, ConfigError> {
        let mut resolved: Vec<String> = Vec::new();

        for entry in &self.files {
            let names = if is_pattern(entry) {
                self.expand_pattern(entry)?
            } else {
                vec![entry.clone()]
            };

            for name in names {
                if !resolved.contains(&name) {
                    resolved.push(name);
                }
            }
        }

        Ok(resolved)
    }

    fn expand_pattern(&self, pattern: &str) -> Result<Vec<String>, ConfigError> {
        let full = self.source_dir.join(pattern);
        let paths = glob::glob(&full.to_string_lossy()).map_err(|source| {
            ConfigError::PatternError {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        let mut names: Vec<String> = paths
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .filter_map(|p| {
                p.strip_prefix(&self.source_dir)
                    .ok()
                    .map(|rel| rel.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        names.sort();
        Ok(names)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

fn is_pattern(entry: &str) -> bool {
    entry.contains(['*', '?', '['])
}
