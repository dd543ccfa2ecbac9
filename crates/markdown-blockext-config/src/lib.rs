use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// HTML-style attributes attached to a block. Ordered so that serialized
/// output is stable.
pub type Attributes = BTreeMap<String, String>;

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
}

/// Element that wraps a heading and its content.
///
/// `Undefined` and `None` both mean "no wrapper": the heading stands alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapperKind {
    Undefined,
    None,
    #[default]
    Section,
    Article,
    Aside,
    Nav,
    Header,
    Footer,
}

impl WrapperKind {
    /// Whether headings resolved to this kind open a section.
    pub fn wraps(self) -> bool {
        !matches!(self, WrapperKind::Undefined | WrapperKind::None)
    }

    /// Element name, or `None` when the heading is not wrapped.
    pub fn element_name(self) -> Option<&'static str> {
        match self {
            WrapperKind::Undefined | WrapperKind::None => None,
            WrapperKind::Section => Some("section"),
            WrapperKind::Article => Some("article"),
            WrapperKind::Aside => Some("aside"),
            WrapperKind::Nav => Some("nav"),
            WrapperKind::Header => Some("header"),
            WrapperKind::Footer => Some("footer"),
        }
    }
}

/// Defaults for heading-anchored sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionOptions {
    pub element: WrapperKind,
    pub generate_id: bool,
    pub auto_link: bool,
    pub attributes: Attributes,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            element: WrapperKind::Section,
            generate_id: true,
            auto_link: true,
            attributes: Attributes::new(),
        }
    }
}

/// Defaults for `!`-prefixed alert blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertOptions {
    #[serde(rename = "type")]
    pub alert_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Applied to `alert_type` to build the alert's class name.
    pub class_format: String,
    pub attributes: Attributes,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            alert_type: "info".to_string(),
            icon: None,
            class_format: "alert-{0}".to_string(),
            attributes: Attributes::new(),
        }
    }
}

/// Defaults for fenced code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlockOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub line_numbers: bool,
    pub copy_icon: bool,
    /// Applied to the language to build the code element's class name.
    pub class_format: String,
    pub attributes: Attributes,
}

impl Default for CodeBlockOptions {
    fn default() -> Self {
        Self {
            title: None,
            language: None,
            line_numbers: false,
            copy_icon: true,
            class_format: "language-{0}".to_string(),
            attributes: Attributes::new(),
        }
    }
}

/// Which extensions are installed. A disabled extension leaves its syntax to
/// the plain host blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extensions {
    pub alerts: bool,
    pub code_blocks: bool,
    pub sections: bool,
    pub options_blocks: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            alerts: true,
            code_blocks: true,
            sections: true,
            options_blocks: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub enabled: Extensions,
    pub alerts: AlertOptions,
    pub code_blocks: CodeBlockOptions,
    pub sections: SectionOptions,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = Self::expand_path(config_path.as_ref());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-blockext");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables; unexpandable paths are returned as-is.
    fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => path.to_path_buf(),
        }
    }
}
