use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use time::OffsetDateTime;

use crate::remote::AdminClient;
use crate::tui::TuiRunOptions;

mod app;
use app::App;

mod event_loop;
mod modal;
use modal::{Modal, ModalKind, PendingAction};

mod render;

mod view;
use view::{Redraw, RenderCtx, View, render_view_chrome};

mod views;

pub(crate) fn run(runtime: tokio::runtime::Handle, opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the console requires an interactive terminal (TTY)");
    }
    if let Some(path) = &opts.log_file {
        crate::telemetry::init_file(opts.verbosity, path)?;
    }

    let admin = AdminClient::connect(&opts.config)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(runtime, admin, opts.config.base_url.clone());
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Restore,
    Statistics,
    Todo,
}

impl UiMode {
    const ALL: [UiMode; 3] = [UiMode::Restore, UiMode::Statistics, UiMode::Todo];

    fn label(self) -> &'static str {
        match self {
            UiMode::Restore => "restore",
            UiMode::Statistics => "statistics",
            UiMode::Todo => "todo",
        }
    }

    fn next(self) -> Self {
        match self {
            UiMode::Restore => UiMode::Statistics,
            UiMode::Statistics => UiMode::Todo,
            UiMode::Todo => UiMode::Restore,
        }
    }

    fn hints(self) -> &'static str {
        match self {
            UiMode::Restore => "Enter: restore  Left/Right: section  r: reload  Tab: next  q: quit",
            UiMode::Statistics => "r: reload  Tab: next  q: quit",
            UiMode::Todo => "a: add  Space: done/undo  d: delete  Tab: next  q: quit",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryKind {
    Output,
    Error,
}

#[derive(Clone, Debug)]
struct ResultEntry {
    ts: String,
    kind: EntryKind,
    lines: Vec<String>,
}

fn now_ts() -> String {
    let t = OffsetDateTime::now_utc().time();
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

fn server_label(base_url: &str) -> String {
    let s = base_url.trim_end_matches('/');
    let s = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"))
        .unwrap_or(s);
    s.to_string()
}
