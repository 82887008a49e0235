use crate::sys::shell::{ShellCommands, ShellQueries, WindowId, WindowInfo};

/// Command a test run issued against the host, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    ActivateWindow(WindowId),
    MinimizeWindow(WindowId),
    ActivateWorkspace(usize),
    ShowOverview,
    HideOverview,
    ToggleOverview,
}

/// Scripted in-memory host. Workspaces hold windows in stacking order; a
/// sticky window is stored on one workspace but reported on all of them,
/// like the real host does. Commands are recorded and also applied to the
/// fake state so multi-step tests see their effects.
#[derive(Debug, Default)]
pub(crate) struct FakeShell {
    pub workspaces: Vec<Vec<WindowInfo>>,
    pub active: usize,
    pub overview: bool,
    pub commands: Vec<Command>,
}

impl FakeShell {
    pub fn with_workspaces(count: usize) -> Self {
        Self {
            workspaces: vec![Vec::new(); count],
            ..Default::default()
        }
    }

    pub fn push_window(&mut self, workspace: usize, window: WindowInfo) {
        self.workspaces[workspace].push(window);
    }

    pub fn take_commands(&mut self) -> Vec<Command> { std::mem::take(&mut self.commands) }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowInfo> {
        self.workspaces.iter_mut().flatten().find(|w| w.id == id)
    }

    fn window(&self, id: WindowId) -> Option<&WindowInfo> {
        self.workspaces.iter().flatten().find(|w| w.id == id)
    }
}

pub(crate) fn window(id: u64, title: &str) -> WindowInfo {
    WindowInfo {
        id: WindowId(id),
        title: title.to_string(),
        app_name: format!("app-{id}"),
        skip_taskbar: false,
        on_all_workspaces: false,
        minimized: false,
        focused: false,
    }
}

pub(crate) fn sticky(id: u64, title: &str) -> WindowInfo {
    WindowInfo { on_all_workspaces: true, ..window(id, title) }
}

pub(crate) fn focused(window: WindowInfo) -> WindowInfo {
    WindowInfo { focused: true, ..window }
}

pub(crate) fn minimized(window: WindowInfo) -> WindowInfo {
    WindowInfo { minimized: true, ..window }
}

pub(crate) fn skip_taskbar(window: WindowInfo) -> WindowInfo {
    WindowInfo { skip_taskbar: true, ..window }
}

impl ShellQueries for FakeShell {
    fn workspace_count(&self) -> usize { self.workspaces.len() }

    fn active_workspace(&self) -> usize { self.active }

    fn windows_on(&self, workspace: usize) -> Vec<WindowInfo> {
        let mut windows: Vec<WindowInfo> =
            self.workspaces.get(workspace).cloned().unwrap_or_default();
        for (index, list) in self.workspaces.iter().enumerate() {
            if index == workspace {
                continue;
            }
            windows.extend(list.iter().filter(|w| w.on_all_workspaces).cloned());
        }
        windows
    }

    fn focused_window(&self) -> Option<WindowId> {
        self.workspaces.iter().flatten().find(|w| w.focused).map(|w| w.id)
    }

    fn window_title(&self, id: WindowId) -> Option<String> {
        self.window(id).map(|w| w.title.clone()).filter(|t| !t.is_empty())
    }

    fn window_app_name(&self, id: WindowId) -> Option<String> {
        self.window(id).map(|w| w.app_name.clone())
    }

    fn overview_visible(&self) -> bool { self.overview }
}

impl ShellCommands for FakeShell {
    fn activate_window(&mut self, id: WindowId) {
        self.commands.push(Command::ActivateWindow(id));
        for w in self.workspaces.iter_mut().flatten() {
            w.focused = false;
        }
        if let Some(w) = self.window_mut(id) {
            w.focused = true;
            w.minimized = false;
        }
    }

    fn minimize_window(&mut self, id: WindowId) {
        self.commands.push(Command::MinimizeWindow(id));
        if let Some(w) = self.window_mut(id) {
            w.minimized = true;
            w.focused = false;
        }
    }

    fn activate_workspace(&mut self, index: usize) {
        self.commands.push(Command::ActivateWorkspace(index));
        self.active = index;
    }

    fn show_overview(&mut self) {
        self.commands.push(Command::ShowOverview);
        self.overview = true;
    }

    fn hide_overview(&mut self) {
        self.commands.push(Command::HideOverview);
        self.overview = false;
    }

    fn toggle_overview(&mut self) {
        self.commands.push(Command::ToggleOverview);
        self.overview = !self.overview;
    }
}
