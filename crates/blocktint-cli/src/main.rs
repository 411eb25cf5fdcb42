mod marks;
mod theme;

use anyhow::Result;
use blocktint_config::Config;
use blocktint_engine::{Debouncer, DocumentSnapshot, Highlighter, io};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use marks::LevelMarks;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::stdout,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};

struct App {
    path: PathBuf,
    document: DocumentSnapshot,
    highlighter: Highlighter,
    marks: LevelMarks,
    colors: Vec<Color>,
    debouncer: Debouncer,
    scroll: usize,
    status: String,
}

impl App {
    fn new(path: PathBuf, config: &Config) -> Result<Self> {
        let document = io::read_snapshot(&path)?;
        let highlighter = Highlighter::with_enabled(config.highlight.clone(), config.enabled);

        let mut app = Self {
            path,
            document,
            highlighter,
            marks: LevelMarks::default(),
            colors: theme::level_colors(&config.highlight),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            scroll: 0,
            status: String::new(),
        };

        app.refresh();
        Ok(app)
    }

    /// Run one highlighting pass. A configuration error is reported once in
    /// the status line and the previous marks stay applied.
    fn refresh(&mut self) {
        if let Err(e) = self.highlighter.refresh(&self.document, &mut self.marks) {
            self.status = format!("Configuration error: {e}");
        }
    }

    fn toggle(&mut self) {
        let enabled = self.highlighter.toggle();
        self.status = format!(
            "Comment block highlighting {}",
            if enabled { "enabled" } else { "disabled" }
        );
        self.refresh();
    }

    /// Schedule a reload after the quiet period; rapid requests coalesce
    /// into a single pass.
    fn request_reload(&mut self) {
        self.debouncer.trigger(Instant::now());
        self.status = "Reload pending...".to_string();
    }

    fn reload(&mut self) {
        match io::read_snapshot(&self.path) {
            Ok(document) => {
                self.document = document;
                self.status = format!("Reloaded {}", self.path.display());
                self.refresh();
            }
            Err(e) => {
                self.status = format!("Error reading file: {e}");
            }
        }
    }

    fn scroll_down(&mut self, by: usize) {
        let max = self.document.line_count().saturating_sub(1);
        self.scroll = (self.scroll + by).min(max);
    }

    fn scroll_up(&mut self, by: usize) {
        self.scroll = self.scroll.saturating_sub(by);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let mut app = match App::new(path, &config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Sleep until the next key or until a pending pass comes due.
        let timeout = app
            .debouncer
            .time_until_due(Instant::now())
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('t') => app.toggle(),
                KeyCode::Char('r') => app.request_reload(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(20),
                KeyCode::PageUp => app.scroll_up(20),
                _ => {}
            }
        }

        if app.debouncer.poll(Instant::now()) {
            app.reload();
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let view_height = chunks[0].height.saturating_sub(2) as usize;

    // Content panel
    let text: Vec<Line> = app
        .document
        .lines()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(view_height)
        .map(|(index, line)| {
            let style = app
                .marks
                .level_for_line(index)
                .and_then(|level| app.colors.get(level))
                .map(|color| Style::default().bg(*color))
                .unwrap_or_default();
            Line::from(Span::styled(line.clone(), style))
        })
        .collect();

    let title = format!(
        "{} [{}]",
        app.path.display(),
        app.document.language_id()
    );
    let content = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    // Status and key help
    let help = if app.status.is_empty() {
        "q: Quit | t: Toggle highlighting | r: Reload | ↑/k ↓/j: Scroll".to_string()
    } else {
        app.status.clone()
    };
    f.render_widget(Paragraph::new(Line::from(Span::raw(help))), chunks[1]);
}
