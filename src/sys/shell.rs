use serde::{Deserialize, Serialize};

/// Stable host-assigned window identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct WindowId(pub u64);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of one window as reported by the host, read transiently during a
/// single rebuild pass. The host owns the window; this is plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub title: String,
    /// Owning application's name, used for icon lookup and the app-name
    /// title mode.
    pub app_name: String,
    /// Excluded from any taskbar-like listing when set.
    pub skip_taskbar: bool,
    /// Sticky: present on all workspaces simultaneously.
    pub on_all_workspaces: bool,
    pub minimized: bool,
    pub focused: bool,
}

/// Read-only view of the host shell's live window/workspace registry.
///
/// All queries are synchronous in-process calls against a trusted host;
/// absence of data is the only failure mode. Workspaces are identified by
/// 0-based contiguous index.
pub trait ShellQueries {
    fn workspace_count(&self) -> usize;

    fn active_workspace(&self) -> usize;

    /// Windows of one workspace in host stacking order. The host reports a
    /// sticky window as a member of every workspace.
    fn windows_on(&self, workspace: usize) -> Vec<WindowInfo>;

    fn focused_window(&self) -> Option<WindowId>;

    /// Live title lookup; `None` once the window is gone or untitled.
    fn window_title(&self, id: WindowId) -> Option<String>;

    /// Live owning-application name lookup.
    fn window_app_name(&self, id: WindowId) -> Option<String>;

    /// Whether the host's overview mode is currently shown.
    fn overview_visible(&self) -> bool;
}

/// Requests into the host's window management. The host applies these
/// asynchronously from the model's point of view; none of them mutate any
/// state the model holds.
pub trait ShellCommands {
    /// Raise and focus a window. Activating a minimized window unminimizes
    /// it; callers do not issue a separate unminimize.
    fn activate_window(&mut self, id: WindowId);

    fn minimize_window(&mut self, id: WindowId);

    fn activate_workspace(&mut self, index: usize);

    fn show_overview(&mut self);

    fn hide_overview(&mut self);

    fn toggle_overview(&mut self);
}
