use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::view::render_selection;
use super::super::{Redraw, RenderCtx, UiMode, View, render_view_chrome};
use crate::model::{CommentCountRecord, LikeCountRecord, ReadCountRecord};
use crate::remote::AdminClient;
use crate::sync::{FetchController, Presence};

/// Most-read, most-liked and most-commented boards. Each record loads on its own.
pub(in crate::tui_shell) struct StatisticsView {
    pub(in crate::tui_shell) read: FetchController<ReadCountRecord>,
    pub(in crate::tui_shell) like: FetchController<LikeCountRecord>,
    pub(in crate::tui_shell) comment: FetchController<CommentCountRecord>,
}

impl StatisticsView {
    pub(in crate::tui_shell) fn new(admin: &AdminClient, redraw: &Redraw) -> Self {
        let view = Self {
            read: admin.max_read_count(),
            like: admin.max_like_count(),
            comment: admin.max_comment_count(),
        };
        redraw.watch(view.read.state());
        redraw.watch(view.like.state());
        redraw.watch(view.comment.state());
        view
    }

    pub(in crate::tui_shell) fn reload(&self, runtime: &tokio::runtime::Handle) {
        let _rt = runtime.enter();
        self.read.spawn();
        self.like.spawn();
        self.comment.spawn();
    }
}

fn render_record<V: Presence>(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    fetch: &FetchController<V>,
    lines: impl FnOnce(&V) -> Vec<String>,
) where
    V: serde::de::DeserializeOwned + Send + Sync + 'static,
{
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = fetch.state();
    render_selection(frame, inner, &state.snapshot(), state.gate(), |frame, area, v| {
        let text = lines(v).into_iter().map(Line::from).collect::<Vec<_>>();
        frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), area);
    });
}

impl View for StatisticsView {
    fn mode(&self) -> UiMode {
        UiMode::Statistics
    }

    fn title(&self) -> &str {
        "Statistics"
    }

    fn deactivate(&self) {
        self.read.state().deactivate();
        self.like.state().deactivate();
        self.comment.state().deactivate();
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), &ctx.now, area);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner);

        render_record(frame, parts[0], "Most read", &self.read, |r| {
            vec![
                format!("board: {}", r.board_name),
                format!("No.{} / {}", r.board_no, r.board_title),
                format!("reads: {}", r.read_count),
                format!("author: {}", r.member_nickname),
            ]
        });
        render_record(frame, parts[1], "Most liked", &self.like, |r| {
            vec![
                format!("board: {}", r.board_name),
                format!("No.{} / {}", r.board_no, r.board_title),
                format!("likes: {}", r.like_count),
                format!("author: {}", r.member_nickname),
            ]
        });
        render_record(frame, parts[2], "Most commented", &self.comment, |r| {
            vec![
                format!("board: {}", r.board_name),
                format!("No.{} / {}", r.board_no, r.board_title),
                format!("comments: {}", r.comment_count),
                format!("author: {}", r.member_nickname),
            ]
        });
    }
}
