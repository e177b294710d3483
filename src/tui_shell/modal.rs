use super::*;

use crate::remote::{RestoreBoard, RestoreMember};

#[derive(Clone, Debug)]
pub(super) enum PendingAction {
    RestoreMember(RestoreMember),
    RestoreBoard(RestoreBoard),
}

#[derive(Debug)]
pub(super) enum ModalKind {
    /// y/Enter accepts, n/Esc declines.
    Confirm { action: PendingAction },
    AddTodo { buf: String },
}

#[derive(Debug)]
pub(super) struct Modal {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) kind: ModalKind,
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = area.height.saturating_sub(6).clamp(5, 9);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Confirm { .. } => {
            let mut lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "y: yes   n: no",
                Style::default().fg(Color::Gray),
            )));
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
        ModalKind::AddTodo { buf } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            frame.render_widget(Paragraph::new(lines), parts[0]);
            frame.render_widget(
                Paragraph::new(buf.as_str())
                    .block(Block::default().borders(Borders::ALL).title("Title")),
                parts[1],
            );
            let cx = buf.chars().count() as u16;
            frame.set_cursor_position((parts[1].x + 1 + cx, parts[1].y + 1));
        }
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        Answer(PendingAction, bool),
        AddTodo(String),
    }

    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };
        match &mut m.kind {
            ModalKind::Confirm { action } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    ModalAction::Answer(action.clone(), true)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ModalAction::Answer(action.clone(), false)
                }
                _ => ModalAction::None,
            },
            ModalKind::AddTodo { buf } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => ModalAction::AddTodo(std::mem::take(buf)),
                KeyCode::Backspace => {
                    buf.pop();
                    ModalAction::None
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buf.push(c);
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::Answer(pending, accepted) => {
            let shown = app
                .modal
                .take()
                .and_then(|m| m.lines.into_iter().next())
                .unwrap_or_default();
            app.answer_confirm(pending, shown, accepted);
        }
        ModalAction::AddTodo(title) => {
            app.modal = None;
            app.add_todo(title);
        }
    }
}
