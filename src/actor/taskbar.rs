use tracing::{debug, trace};

use crate::common::config::TaskbarSettings;
use crate::model::window_list::{RenderEntry, WindowList};
use crate::sys::shell::{ShellCommands, ShellQueries, WindowId};

/// Host notifications and user interaction the taskbar reacts to.
///
/// Structural changes all funnel into the same full rebuild; a title change
/// takes the narrow label-refresh path instead. Interaction events carry the
/// index of the render entry they happened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Restacked,
    WindowLeftMonitor,
    WorkspaceAdded,
    WorkspaceRemoved,
    ActiveWorkspaceChanged,
    WorkspaceCountChanged,
    WindowTitleChanged(WindowId),
    SettingsChanged(TaskbarSettings),
    EntryClicked(usize),
    HoverChanged { entry: usize, hovered: bool },
}

/// Materializes the model's output into panel widgets. `apply` replaces the
/// previously rendered entries wholesale; `set_title` drives the
/// focused-window title label.
pub trait Renderer {
    fn apply(&mut self, entries: &[RenderEntry], settings: &TaskbarSettings);
    fn set_title(&mut self, text: &str);
}

/// Glue between the host shell, the model, and the renderer.
///
/// Runs synchronously on the host's UI loop: the host delivers events
/// serially and each one is handled to completion before the next. State
/// changes in the host surface as further events, so click handlers never
/// rebuild on their own.
pub struct Taskbar<H, R> {
    host: H,
    renderer: R,
    model: WindowList,
}

impl<H, R> Taskbar<H, R>
where
    H: ShellQueries + ShellCommands,
    R: Renderer,
{
    pub fn new(host: H, renderer: R, settings: TaskbarSettings) -> Self {
        let mut taskbar = Self {
            host,
            renderer,
            model: WindowList::new(settings),
        };
        taskbar.rebuild();
        taskbar
    }

    pub fn model(&self) -> &WindowList { &self.model }

    pub fn host(&self) -> &H { &self.host }

    pub fn handle_event(&mut self, event: Event) {
        trace!(?event, "taskbar event");
        match event {
            Event::Restacked
            | Event::WindowLeftMonitor
            | Event::WorkspaceAdded
            | Event::WorkspaceRemoved
            | Event::ActiveWorkspaceChanged
            | Event::WorkspaceCountChanged => self.rebuild(),
            Event::SettingsChanged(settings) => {
                self.model.set_settings(settings);
                self.rebuild();
            }
            Event::WindowTitleChanged(id) => {
                if self.host.focused_window() == Some(id) {
                    self.refresh_title();
                }
            }
            Event::EntryClicked(index) => self.on_click(index),
            Event::HoverChanged { entry, hovered } => self.on_hover(entry, hovered),
        }
    }

    fn rebuild(&mut self) {
        self.model.recompute(&self.host);
        self.renderer.apply(self.model.entries(), self.model.settings());
        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        // No focused window means the previous text stays, not clears.
        if let Some(text) = self.model.focused_title(&self.host) {
            self.renderer.set_title(&text);
        }
    }

    fn on_click(&mut self, index: usize) {
        let Some(entry) = self.model.entry(index).cloned() else {
            debug!(index, "click on unknown entry");
            return;
        };
        match entry {
            RenderEntry::StickyMarker { .. } => {}
            RenderEntry::WorkspaceLabel { index, .. } => {
                self.model.activate_workspace(&mut self.host, index);
            }
            RenderEntry::Window { workspace, window, .. } => {
                self.model.activate_window(&mut self.host, workspace, &window);
            }
        }
    }

    fn on_hover(&mut self, index: usize, hovered: bool) {
        if hovered {
            let text = self
                .model
                .entry(index)
                .and_then(|entry| self.model.hover_text(entry, &self.host));
            if let Some(text) = text {
                self.renderer.set_title(&text);
                return;
            }
        }
        self.refresh_title();
    }
}
