use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::super::view::{clamp_selected, render_selection};
use super::super::{Redraw, RenderCtx, UiMode, View, render_view_chrome};
use crate::model::{DeletedBoard, WithdrawnMember};
use crate::remote::{AdminClient, RestoreBoard, RestoreMember};
use crate::sync::{FetchController, Items};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum RestoreSection {
    Members,
    Boards,
}

/// Withdrawn members and deleted boards, each restorable from the list.
pub(in crate::tui_shell) struct RestoreView {
    pub(in crate::tui_shell) members: FetchController<Items<WithdrawnMember>>,
    pub(in crate::tui_shell) boards: FetchController<Items<DeletedBoard>>,
    pub(in crate::tui_shell) section: RestoreSection,
    pub(in crate::tui_shell) member_selected: usize,
    pub(in crate::tui_shell) board_selected: usize,
}

impl RestoreView {
    pub(in crate::tui_shell) fn new(admin: &AdminClient, redraw: &Redraw) -> Self {
        let members = admin.withdrawn_members();
        let boards = admin.deleted_boards();
        redraw.watch(members.state());
        redraw.watch(boards.state());
        Self {
            members,
            boards,
            section: RestoreSection::Members,
            member_selected: 0,
            board_selected: 0,
        }
    }

    pub(in crate::tui_shell) fn reload(&self, runtime: &tokio::runtime::Handle) {
        let _rt = runtime.enter();
        self.members.spawn();
        self.boards.spawn();
    }

    pub(in crate::tui_shell) fn toggle_section(&mut self) {
        self.section = match self.section {
            RestoreSection::Members => RestoreSection::Boards,
            RestoreSection::Boards => RestoreSection::Members,
        };
    }

    fn member_count(&self) -> usize {
        self.members.state().snapshot().get().map_or(0, |v| v.len())
    }

    fn board_count(&self) -> usize {
        self.boards.state().snapshot().get().map_or(0, |v| v.len())
    }

    pub(in crate::tui_shell) fn selected_member(&self) -> Option<RestoreMember> {
        let snapshot = self.members.state().snapshot();
        let items = snapshot.get()?;
        let idx = clamp_selected(self.member_selected, items.len())?;
        Some(RestoreMember::from(&*items[idx]))
    }

    pub(in crate::tui_shell) fn selected_board(&self) -> Option<RestoreBoard> {
        let snapshot = self.boards.state().snapshot();
        let items = snapshot.get()?;
        let idx = clamp_selected(self.board_selected, items.len())?;
        Some(RestoreBoard::from(&*items[idx]))
    }

    fn section_block(&self, section: RestoreSection, title: &str) -> Block<'static> {
        let style = if self.section == section {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(style)
            .title(title.to_string())
    }

    fn render_members(&self, frame: &mut ratatui::Frame, area: Rect) {
        let block = self.section_block(RestoreSection::Members, "Withdrawn members");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selected = self.member_selected;
        let focused = self.section == RestoreSection::Members;
        let state = self.members.state();
        render_selection(frame, inner, &state.snapshot(), state.gate(), |frame, area, items| {
            let rows = items
                .iter()
                .map(|m| ListItem::new(format!("#{:<6} {}", m.member_no, m.member_nickname)))
                .collect::<Vec<_>>();
            render_rows(frame, area, rows, focused, clamp_selected(selected, items.len()));
        });
    }

    fn render_boards(&self, frame: &mut ratatui::Frame, area: Rect) {
        let block = self.section_block(RestoreSection::Boards, "Deleted boards");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let selected = self.board_selected;
        let focused = self.section == RestoreSection::Boards;
        let state = self.boards.state();
        render_selection(frame, inner, &state.snapshot(), state.gate(), |frame, area, items| {
            let rows = items
                .iter()
                .map(|b| {
                    ListItem::new(format!(
                        "No.{:<5} [{}] {}  by {}",
                        b.board_no, b.board_name, b.board_title, b.member_nickname
                    ))
                })
                .collect::<Vec<_>>();
            render_rows(frame, area, rows, focused, clamp_selected(selected, items.len()));
        });
    }
}

fn render_rows(
    frame: &mut ratatui::Frame,
    area: Rect,
    rows: Vec<ListItem<'static>>,
    focused: bool,
    selected: Option<usize>,
) {
    let mut state = ListState::default();
    if focused {
        state.select(selected);
    }
    let list = List::new(rows).highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}

impl View for RestoreView {
    fn mode(&self) -> UiMode {
        UiMode::Restore
    }

    fn title(&self) -> &str {
        "Restore"
    }

    fn move_up(&mut self) {
        match self.section {
            RestoreSection::Members => {
                self.member_selected = self.member_selected.saturating_sub(1);
            }
            RestoreSection::Boards => {
                self.board_selected = self.board_selected.saturating_sub(1);
            }
        }
    }

    fn move_down(&mut self) {
        match self.section {
            RestoreSection::Members => {
                let max = self.member_count().saturating_sub(1);
                self.member_selected = (self.member_selected + 1).min(max);
            }
            RestoreSection::Boards => {
                let max = self.board_count().saturating_sub(1);
                self.board_selected = (self.board_selected + 1).min(max);
            }
        }
    }

    fn deactivate(&self) {
        self.members.state().deactivate();
        self.boards.state().deactivate();
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &ctx.now, area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);
        self.render_members(frame, parts[0]);
        self.render_boards(frame, parts[1]);
    }
}
