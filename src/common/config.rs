use std::path::{Path, PathBuf};

use anyhow::bail;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_ICON_SIZE: u32 = 128;

pub fn config_file() -> PathBuf {
    dirs::home_dir().unwrap().join(".config").join("taskbar").join("config.toml")
}

#[derive(Debug, Error)]
#[error("could not read config file {}", path.display())]
pub struct ConfigReadError {
    pub path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Panel settings, consumed by the model and the renderer.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct TaskbarSettings {
    /// Window icon size in pixels.
    #[serde(default = "default_icon_size")]
    pub icon_size: u32,
    /// Icon opacity applied to hidden (minimized) windows, 0-255.
    #[serde(default = "default_hidden_opacity")]
    pub hidden_opacity: u8,
    /// Emit one clickable label per workspace.
    #[serde(default = "yes")]
    pub display_workspaces: bool,
    /// Include the trailing workspace, which is usually the empty one kept
    /// around by dynamic workspace management.
    #[serde(default = "no")]
    pub display_last_workspace: bool,
    /// Emit a marker label in front of the sticky-window group.
    #[serde(default = "yes")]
    pub display_sticky_workspace: bool,
    #[serde(default = "default_sticky_workspace_label")]
    pub sticky_workspace_label: String,
    /// Use `custom_workspace_labels` instead of numeric workspace labels.
    #[serde(default = "no")]
    pub display_custom_workspaces: bool,
    /// Comma-separated labels, index-aligned. Workspaces beyond the list
    /// fall back to the numeric label.
    #[serde(default)]
    pub custom_workspace_labels: String,
    /// Focused-title label shows the full window title when set, the owning
    /// application's name otherwise.
    #[serde(default = "yes")]
    pub display_full_window_title: bool,
}

impl Default for TaskbarSettings {
    fn default() -> Self {
        Self {
            icon_size: default_icon_size(),
            hidden_opacity: default_hidden_opacity(),
            display_workspaces: yes(),
            display_last_workspace: no(),
            display_sticky_workspace: yes(),
            sticky_workspace_label: default_sticky_workspace_label(),
            display_custom_workspaces: no(),
            custom_workspace_labels: String::new(),
            display_full_window_title: yes(),
        }
    }
}

impl TaskbarSettings {
    /// Custom label for a workspace index, if one is configured there. An
    /// empty list entry counts as not configured.
    pub fn custom_workspace_label(&self, index: usize) -> Option<&str> {
        let raw = self.custom_workspace_labels.trim();
        if raw.is_empty() {
            return None;
        }
        raw.split(',').map(str::trim).nth(index).filter(|label| !label.is_empty())
    }

    /// Validates settings values and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.icon_size == 0 {
            issues.push("icon_size must be at least 1".to_string());
        }

        if self.icon_size > MAX_ICON_SIZE {
            issues.push(format!(
                "icon_size should not exceed {MAX_ICON_SIZE}, got {}",
                self.icon_size
            ));
        }

        if self.display_custom_workspaces && self.custom_workspace_label(0).is_none() {
            issues.push(
                "display_custom_workspaces is set but custom_workspace_labels is empty"
                    .to_string(),
            );
        }

        issues
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let buf = std::fs::read_to_string(path).map_err(|source| ConfigReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&buf)
    }

    pub fn parse(buf: &str) -> anyhow::Result<Self> {
        let settings: TaskbarSettings = toml::from_str(buf)?;
        let issues = settings.validate();
        if !issues.is_empty() {
            bail!("invalid taskbar config: {}", issues.join("; "));
        }
        Ok(settings)
    }
}

fn yes() -> bool { true }

fn no() -> bool { false }

fn default_icon_size() -> u32 { 20 }

fn default_hidden_opacity() -> u8 { 127 }

fn default_sticky_workspace_label() -> String { "All".to_string() }
