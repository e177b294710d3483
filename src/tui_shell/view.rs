use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::sync::{CollectionState, LoadingGate, Presence, Selection, Snapshot, select};

#[derive(Clone, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: String,
}

/// Dirty flag shared by the event loop and every watched collection. Starts set so the
/// first frame is drawn.
#[derive(Clone, Debug)]
pub(super) struct Redraw(Arc<AtomicBool>);

impl Default for Redraw {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Redraw {
    pub(super) fn request(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub(super) fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clears the flag, returning whether a frame was due.
    pub(super) fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Registers the state's continuation. Frames re-read the snapshot when drawn, so
    /// the committed value passed to the continuation is ignored.
    pub(super) fn watch<V: 'static>(&self, state: &CollectionState<V>) {
        let redraw = self.clone();
        state.on_change(move |_, _| redraw.request());
    }
}

pub(super) trait View {
    fn mode(&self) -> super::UiMode;
    fn title(&self) -> &str;

    fn move_up(&mut self) {}
    fn move_down(&mut self) {}

    /// Stops the view's collections from accepting late fetch results.
    fn deactivate(&self) {}

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    note: &str,
    area: Rect,
) -> Rect {
    let header = Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(note.to_string(), Style::default().fg(Color::Gray)),
    ]);
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// Draws the loading placeholder or the "(empty)" marker, or hands the content to
/// `content`.
pub(super) fn render_selection<V: Presence>(
    frame: &mut ratatui::Frame,
    area: Rect,
    snapshot: &Snapshot<V>,
    gate: LoadingGate,
    content: impl FnOnce(&mut ratatui::Frame, Rect, &V),
) {
    match select(snapshot, gate) {
        Selection::Loading => frame.render_widget(
            Paragraph::new("Loading...").style(Style::default().fg(Color::Gray)),
            area,
        ),
        Selection::Empty => frame.render_widget(Paragraph::new("(empty)"), area),
        Selection::Content(v) => content(frame, area, v),
    }
}

/// Clamps a cursor to the current length; indices are never kept across snapshots.
pub(super) fn clamp_selected(selected: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(selected.min(len - 1))
    }
}
