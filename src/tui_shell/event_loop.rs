use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut shown_ts = String::new();
    loop {
        app.drain_notices();
        // The view chrome shows a clock.
        let ts = now_ts();
        if ts != shown_ts {
            shown_ts = ts;
            app.redraw.request();
        }
        if app.redraw.take() {
            terminal
                .draw(|f| super::render::draw(f, app))
                .context("draw")?;
        }
        if app.quit {
            return Ok(());
        }

        // The poll timeout bounds how long a commit from a background fetch waits
        // for its frame.
        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Resize(..) => app.redraw.request(),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    app.redraw.request();
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit = true;
        }
        KeyCode::Tab => app.switch_next(),
        KeyCode::Up => app.view_mut().move_up(),
        KeyCode::Down => app.view_mut().move_down(),
        _ => match app.mode() {
            UiMode::Restore => match key.code {
                KeyCode::Enter => app.open_restore_confirm(),
                KeyCode::Left | KeyCode::Right => app.toggle_section(),
                KeyCode::Char('r') => app.reload(),
                _ => {}
            },
            UiMode::Statistics => {
                if key.code == KeyCode::Char('r') {
                    app.reload();
                }
            }
            UiMode::Todo => match key.code {
                KeyCode::Char('a') => app.open_add_todo(),
                KeyCode::Char(' ') => app.toggle_todo(),
                KeyCode::Char('d') | KeyCode::Delete => app.delete_todo(),
                _ => {}
            },
        },
    }
}
