use std::sync::Arc;
use std::sync::mpsc;

use super::views::{RestoreSection, RestoreView, StatisticsView, TodoView};
use super::*;

use crate::sync::{Confirm, Notify, Transition};

/// The answer the user gave in the confirm modal. The key loop cannot block on a
/// prompt raised from a background task, so the modal asks first and the controller
/// consults this record; it only accepts the prompt that was actually shown.
struct ModalAnswer {
    shown: String,
    accepted: bool,
}

impl Confirm for ModalAnswer {
    fn confirm(&self, prompt: &str) -> bool {
        self.accepted && prompt == self.shown
    }
}

/// Forwards acknowledgements from background tasks to the status line.
struct ChannelNotify(mpsc::Sender<String>);

impl Notify for ChannelNotify {
    fn notify(&self, message: &str) {
        let _ = self.0.send(message.to_string());
    }
}

enum ActiveView {
    Restore(RestoreView),
    Statistics(StatisticsView),
    Todo(TodoView),
}

pub(super) struct App {
    runtime: tokio::runtime::Handle,
    admin: AdminClient,
    pub(super) server: String,
    active: ActiveView,
    pub(super) modal: Option<Modal>,
    pub(super) last_result: Option<ResultEntry>,
    pub(super) quit: bool,
    pub(super) redraw: Redraw,
    notify: Arc<ChannelNotify>,
    notices: mpsc::Receiver<String>,
}

impl App {
    pub(super) fn new(runtime: tokio::runtime::Handle, admin: AdminClient, base_url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        let redraw = Redraw::default();
        let restore = RestoreView::new(&admin, &redraw);
        restore.reload(&runtime);
        Self {
            runtime,
            admin,
            server: server_label(&base_url),
            active: ActiveView::Restore(restore),
            modal: None,
            last_result: None,
            quit: false,
            redraw,
            notify: Arc::new(ChannelNotify(tx)),
            notices: rx,
        }
    }

    pub(super) fn view(&self) -> &dyn View {
        match &self.active {
            ActiveView::Restore(v) => v,
            ActiveView::Statistics(v) => v,
            ActiveView::Todo(v) => v,
        }
    }

    pub(super) fn view_mut(&mut self) -> &mut dyn View {
        match &mut self.active {
            ActiveView::Restore(v) => v,
            ActiveView::Statistics(v) => v,
            ActiveView::Todo(v) => v,
        }
    }

    pub(super) fn mode(&self) -> UiMode {
        self.view().mode()
    }

    /// Unmounts the current view and mounts a fresh one for `mode`. Remote views fetch
    /// again on mount; the to-do list starts over.
    pub(super) fn switch_to(&mut self, mode: UiMode) {
        self.view().deactivate();
        self.active = match mode {
            UiMode::Restore => {
                let v = RestoreView::new(&self.admin, &self.redraw);
                v.reload(&self.runtime);
                ActiveView::Restore(v)
            }
            UiMode::Statistics => {
                let v = StatisticsView::new(&self.admin, &self.redraw);
                v.reload(&self.runtime);
                ActiveView::Statistics(v)
            }
            UiMode::Todo => ActiveView::Todo(TodoView::new(&self.redraw)),
        };
    }

    pub(super) fn switch_next(&mut self) {
        let next = self.mode().next();
        self.switch_to(next);
        self.push_output(vec![format!("opened {}", next.label())]);
    }

    pub(super) fn reload(&mut self) {
        match &self.active {
            ActiveView::Restore(v) => v.reload(&self.runtime),
            ActiveView::Statistics(v) => v.reload(&self.runtime),
            ActiveView::Todo(_) => return,
        }
        self.push_output(vec!["reloading".to_string()]);
    }

    pub(super) fn toggle_section(&mut self) {
        if let ActiveView::Restore(v) = &mut self.active {
            v.toggle_section();
        }
    }

    /// Enter on the restore view: ask before writing anything.
    pub(super) fn open_restore_confirm(&mut self) {
        let ActiveView::Restore(v) = &self.active else {
            return;
        };
        let action = match v.section {
            RestoreSection::Members => v.selected_member().map(PendingAction::RestoreMember),
            RestoreSection::Boards => v.selected_board().map(PendingAction::RestoreBoard),
        };
        let Some(action) = action else {
            self.push_error("nothing selected".to_string());
            return;
        };
        let prompt = match &action {
            PendingAction::RestoreMember(t) => t.describe(),
            PendingAction::RestoreBoard(t) => t.describe(),
        };
        self.modal = Some(Modal {
            title: "Confirm".to_string(),
            lines: vec![prompt],
            kind: ModalKind::Confirm { action },
        });
    }

    /// Hands the modal's answer to the mutation controller, which makes the
    /// confirm/write/resync decision. Declines go through it too.
    pub(super) fn answer_confirm(&mut self, action: PendingAction, shown: String, accepted: bool) {
        let ActiveView::Restore(v) = &self.active else {
            return;
        };
        let confirm: Arc<dyn Confirm> = Arc::new(ModalAnswer { shown, accepted });
        let notify: Arc<dyn Notify> = self.notify.clone();
        match action {
            PendingAction::RestoreMember(t) => {
                let controller = crate::remote::mutations(&v.members, confirm, notify);
                self.runtime.spawn(async move {
                    let _ = controller.mutate(&t).await;
                });
            }
            PendingAction::RestoreBoard(t) => {
                let controller = crate::remote::mutations(&v.boards, confirm, notify);
                self.runtime.spawn(async move {
                    let _ = controller.mutate(&t).await;
                });
            }
        }
    }

    pub(super) fn open_add_todo(&mut self) {
        self.modal = Some(Modal {
            title: "Add Todo".to_string(),
            lines: vec!["New item title (Enter to add, Esc to cancel)".to_string()],
            kind: ModalKind::AddTodo { buf: String::new() },
        });
    }

    pub(super) fn add_todo(&mut self, title: String) {
        if let ActiveView::Todo(v) = &mut self.active {
            v.add(title.clone());
            self.push_output(vec![format!("added \"{}\"", title)]);
        }
    }

    pub(super) fn toggle_todo(&mut self) {
        let ActiveView::Todo(v) = &self.active else {
            return;
        };
        if let Some(t) = v.toggle_current() {
            let state = if t.is_done { "done" } else { "not done" };
            self.push_output(vec![format!("\"{}\" marked {}", t.title, state)]);
        }
    }

    pub(super) fn delete_todo(&mut self) {
        let ActiveView::Todo(v) = &mut self.active else {
            return;
        };
        if let Some(t) = v.delete_current() {
            self.push_output(vec![format!("deleted \"{}\"", t.title)]);
        }
    }

    /// Moves acknowledgements sent by finished mutations onto the status line.
    pub(super) fn drain_notices(&mut self) {
        while let Ok(msg) = self.notices.try_recv() {
            self.push_output(vec![msg]);
        }
    }

    pub(super) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(super) fn push_error(&mut self, msg: String) {
        self.push_entry(EntryKind::Error, vec![msg]);
    }

    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        self.redraw.request();
        self.last_result = Some(ResultEntry {
            ts: now_ts(),
            kind,
            lines,
        });
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
