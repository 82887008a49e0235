use tracing::{debug, trace};

use crate::common::config::TaskbarSettings;
use crate::sys::shell::{ShellCommands, ShellQueries, WindowInfo};

/// Visual state of a window entry. Precedence when flags disagree:
/// hidden over focused over unfocused. Serializes as the panel style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum WindowVisual {
    #[strum(serialize = "focused-app")]
    Focused,
    #[strum(serialize = "unfocused-app")]
    Unfocused,
    #[strum(serialize = "hidden-app")]
    Hidden,
}

impl WindowVisual {
    fn of(window: &WindowInfo) -> Self {
        if window.minimized {
            WindowVisual::Hidden
        } else if window.focused {
            WindowVisual::Focused
        } else {
            WindowVisual::Unfocused
        }
    }

    /// Panel style class for this state.
    pub fn style_class(self) -> &'static str { self.into() }
}

/// One unit of taskbar output. The sequence is rebuilt in full on every
/// recompute; its order is significant and the renderer consumes it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEntry {
    /// Label in front of the group of sticky windows.
    StickyMarker { label: String },
    /// Clickable workspace label.
    WorkspaceLabel { index: usize, active: bool, text: String },
    /// Clickable window icon. `tooltip` is the title captured when the entry
    /// was built; hover prefers the live title and uses this as fallback.
    Window {
        workspace: usize,
        window: WindowInfo,
        visual: WindowVisual,
        tooltip: String,
    },
}

impl RenderEntry {
    pub fn style_class(&self) -> &'static str {
        match self {
            RenderEntry::StickyMarker { .. } => "desk-label-active",
            RenderEntry::WorkspaceLabel { active: true, .. } => "desk-label-active",
            RenderEntry::WorkspaceLabel { active: false, .. } => "desk-label-inactive",
            RenderEntry::Window { visual, .. } => visual.style_class(),
        }
    }
}

/// The taskbar's reconciliation model.
///
/// Holds no host state of its own: every rebuild re-reads the live registry
/// through the injected [`ShellQueries`] view and replaces the previous entry
/// sequence wholesale. There is no diffing.
#[derive(Debug, Default)]
pub struct WindowList {
    settings: TaskbarSettings,
    entries: Vec<RenderEntry>,
}

impl WindowList {
    pub fn new(settings: TaskbarSettings) -> Self {
        Self { settings, entries: Vec::new() }
    }

    pub fn settings(&self) -> &TaskbarSettings { &self.settings }

    /// Swaps in new settings. The caller recomputes afterwards.
    pub fn set_settings(&mut self, settings: TaskbarSettings) { self.settings = settings; }

    pub fn entries(&self) -> &[RenderEntry] { &self.entries }

    pub fn entry(&self, index: usize) -> Option<&RenderEntry> { self.entries.get(index) }

    /// Full rebuild from current host state.
    ///
    /// Workspaces are walked in ascending index order, leaving out the
    /// trailing workspace unless configured otherwise. The workspace-0 pass
    /// additionally emits the sticky group up front: every sticky window
    /// appears there exactly once, ordered by id, and never again on the
    /// other workspaces it is a member of. Skip-taskbar windows are never
    /// listed. Within a workspace, windows keep host stacking order.
    pub fn recompute(&mut self, host: &impl ShellQueries) -> &[RenderEntry] {
        let count = host.workspace_count();
        let active = host.active_workspace();
        let bound = if self.settings.display_last_workspace {
            count
        } else {
            count.saturating_sub(1)
        };

        let mut entries = Vec::new();
        for index in 0..bound {
            let windows = host.windows_on(index);

            if index == 0 {
                let mut sticky: Vec<&WindowInfo> = windows
                    .iter()
                    .filter(|w| w.on_all_workspaces && !w.skip_taskbar)
                    .collect();
                sticky.sort_by_key(|w| w.id);

                // The setting gates the marker only; the sticky windows
                // themselves are always listed.
                if !sticky.is_empty() && self.settings.display_sticky_workspace {
                    entries.push(RenderEntry::StickyMarker {
                        label: self.settings.sticky_workspace_label.clone(),
                    });
                }
                for window in sticky {
                    entries.push(self.window_entry(index, window.clone()));
                }
            }

            if self.settings.display_workspaces {
                entries.push(RenderEntry::WorkspaceLabel {
                    index,
                    active: index == active,
                    text: self.workspace_label(index),
                });
            }

            for window in windows {
                if window.skip_taskbar || window.on_all_workspaces {
                    continue;
                }
                entries.push(self.window_entry(index, window));
            }
        }

        debug!(
            workspaces = bound,
            active,
            entries = entries.len(),
            "window list rebuilt"
        );
        self.entries = entries;
        &self.entries
    }

    fn window_entry(&self, workspace: usize, window: WindowInfo) -> RenderEntry {
        let visual = WindowVisual::of(&window);
        trace!(id = %window.id, workspace, %visual, "window entry");
        RenderEntry::Window {
            workspace,
            tooltip: window.title.clone(),
            visual,
            window,
        }
    }

    fn workspace_label(&self, index: usize) -> String {
        if self.settings.display_custom_workspaces {
            if let Some(label) = self.settings.custom_workspace_label(index) {
                return label.to_string();
            }
        }
        (index + 1).to_string()
    }

    /// Text for the focused-window title label. `None` means "leave the
    /// label alone": there is no focused window, or it has no title.
    pub fn focused_title(&self, host: &impl ShellQueries) -> Option<String> {
        let id = host.focused_window()?;
        if self.settings.display_full_window_title {
            host.window_title(id).filter(|title| !title.is_empty())
        } else {
            host.window_app_name(id).filter(|name| !name.is_empty())
        }
    }

    /// Text shown while hovering a window entry. Prefers the live title and
    /// falls back to the title captured at entry creation when the window no
    /// longer reports one.
    pub fn hover_text(&self, entry: &RenderEntry, host: &impl ShellQueries) -> Option<String> {
        let RenderEntry::Window { window, tooltip, .. } = entry else {
            return None;
        };
        match host.window_title(window.id) {
            Some(title) if !title.is_empty() => Some(title),
            _ if !tooltip.is_empty() => Some(tooltip.clone()),
            _ => None,
        }
    }

    /// Click on a workspace label. Clicking the active workspace toggles the
    /// overview instead of merely showing it; the workspace activation
    /// request is issued either way.
    pub fn activate_workspace<H>(&self, host: &mut H, index: usize)
    where
        H: ShellQueries + ShellCommands,
    {
        if host.active_workspace() == index {
            host.toggle_overview();
        } else {
            host.show_overview();
        }
        host.activate_workspace(index);
    }

    /// Click on a window entry.
    ///
    /// A window that is already focused on the active workspace, with the
    /// overview hidden, minimizes instead of re-activating. Anything else is
    /// raised and focused; activation unminimizes. The overview always ends
    /// hidden, and a workspace-local window drags its workspace active.
    /// Focus is read live at click time, not from the entry snapshot.
    pub fn activate_window<H>(&self, host: &mut H, workspace: usize, window: &WindowInfo)
    where
        H: ShellQueries + ShellCommands,
    {
        let focused = host.focused_window() == Some(window.id);
        if host.active_workspace() == workspace && focused && !host.overview_visible() {
            debug!(id = %window.id, "minimizing focused window");
            host.minimize_window(window.id);
        } else {
            debug!(id = %window.id, "activating window");
            host.activate_window(window.id);
        }
        host.hide_overview();
        if !window.on_all_workspaces {
            host.activate_workspace(workspace);
        }
    }
}
