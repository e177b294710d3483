use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Header
    let mut spans = vec![
        Span::styled("resync", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
    ];
    for mode in UiMode::ALL {
        let style = if mode == app.mode() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(mode.label(), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(app.server.as_str(), Style::default().fg(Color::Green)));
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let ctx = RenderCtx { now: now_ts() };
    app.view().render(frame, chunks[1], &ctx);

    // Status / last result
    let mut lines = Vec::new();
    if let Some(r) = &app.last_result {
        let style = match r.kind {
            EntryKind::Output => Style::default().fg(Color::White),
            EntryKind::Error => Style::default().fg(Color::Red),
        };
        for (i, l) in r.lines.iter().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", r.ts), Style::default().fg(Color::Gray)),
                    Span::styled(l.as_str(), style),
                ]));
            } else {
                lines.push(Line::from(Span::styled(l.as_str(), style)));
            }
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP).title("Last")),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(app.mode().hints()).style(Style::default().fg(Color::Gray)),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}
