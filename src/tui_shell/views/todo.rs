use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::super::view::{clamp_selected, render_selection};
use super::super::{Redraw, RenderCtx, UiMode, View, render_view_chrome};
use crate::model::{TodoItem, starter_todos};
use crate::sync::LocalList;

/// The local to-do list. Nothing here touches the network.
pub(in crate::tui_shell) struct TodoView {
    pub(in crate::tui_shell) list: LocalList<TodoItem>,
    pub(in crate::tui_shell) selected: usize,
}

impl TodoView {
    pub(in crate::tui_shell) fn new(redraw: &Redraw) -> Self {
        let list = LocalList::new(starter_todos());
        redraw.watch(list.state());
        Self { list, selected: 0 }
    }

    /// Index of the highlighted item in the current snapshot.
    pub(in crate::tui_shell) fn current_index(&self) -> Option<usize> {
        clamp_selected(self.selected, self.list.len())
    }

    pub(in crate::tui_shell) fn add(&mut self, title: String) {
        self.list.append(TodoItem::new(title));
        self.selected = self.list.len().saturating_sub(1);
    }

    pub(in crate::tui_shell) fn toggle_current(&self) -> Option<TodoItem> {
        let idx = self.current_index()?;
        self.list.toggle(idx);
        self.list.items().get(idx).map(|t| (**t).clone())
    }

    pub(in crate::tui_shell) fn delete_current(&mut self) -> Option<TodoItem> {
        let idx = self.current_index()?;
        let removed = self.list.items().get(idx).map(|t| (**t).clone());
        self.list.remove(idx);
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
        removed
    }
}

impl View for TodoView {
    fn mode(&self) -> UiMode {
        UiMode::Todo
    }

    fn title(&self) -> &str {
        "Todo"
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let max = self.list.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    fn deactivate(&self) {
        self.list.state().deactivate();
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let note = format!("{} items  {}", self.list.len(), ctx.now);
        let inner = render_view_chrome(frame, self.title(), &note, area);

        let selected = self.selected;
        let state = self.list.state();
        render_selection(frame, inner, &state.snapshot(), state.gate(), |frame, area, items| {
            let rows = items
                .iter()
                .map(|t| {
                    let (mark, style) = if t.is_done {
                        (
                            "[x] ",
                            Style::default()
                                .fg(Color::Gray)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        ("[ ] ", Style::default())
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(mark),
                        Span::styled(t.title.clone(), style),
                    ]))
                })
                .collect::<Vec<_>>();

            let mut list_state = ListState::default();
            list_state.select(clamp_selected(selected, items.len()));
            let list = List::new(rows).highlight_style(Style::default().bg(Color::DarkGray));
            frame.render_stateful_widget(list, area, &mut list_state);
        });
    }
}
