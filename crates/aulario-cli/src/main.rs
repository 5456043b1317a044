use anyhow::Result;
use aulario_config::Config;
use aulario_engine::io;
use aulario_engine::models::course::Course;
use aulario_engine::render::{
    render_lesson, InlineSegment, Palette, RenderedBlock, RenderedLesson, Token, TokenKind,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::{env, io::stdout, path::PathBuf, process};

/// One row in the catalog pane: a course header or a lesson under an
/// expanded course.
#[derive(Debug, Clone)]
enum CatalogItem {
    Course { index: usize, expanded: bool },
    Lesson { course: usize, lesson: usize },
}

struct App {
    courses: Vec<Course>,
    /// Indices into `courses` that pass the current search filter.
    visible: Vec<usize>,
    expanded: Vec<bool>,
    items: Vec<CatalogItem>,
    list_state: ListState,
    query: String,
    searching: bool,
    current_lesson: Option<RenderedLesson>,
    lesson_title: String,
}

impl App {
    fn new(courses: Vec<Course>) -> Self {
        let expanded = vec![false; courses.len()];
        let mut app = Self {
            visible: (0..courses.len()).collect(),
            expanded,
            courses,
            items: Vec::new(),
            list_state: ListState::default(),
            query: String::new(),
            searching: false,
            current_lesson: None,
            lesson_title: String::new(),
        };
        app.rebuild_items();
        if !app.items.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }
        app
    }

    /// Recompute the visible course set and the flattened item list after a
    /// filter or expansion change.
    fn rebuild_items(&mut self) {
        let filtered = aulario_engine::filter_courses(&self.courses, &self.query);
        self.visible = filtered
            .iter()
            .map(|course| {
                self.courses
                    .iter()
                    .position(|c| c.id == course.id)
                    .unwrap_or(0)
            })
            .collect();

        self.items.clear();
        for &index in &self.visible {
            let expanded = self.expanded[index];
            self.items.push(CatalogItem::Course { index, expanded });
            if expanded {
                for lesson in 0..self.courses[index].lessons.len() {
                    self.items.push(CatalogItem::Lesson {
                        course: index,
                        lesson,
                    });
                }
            }
        }

        // Keep the selection in range after the list shrinks
        match self.list_state.selected() {
            Some(i) if i >= self.items.len() => {
                self.list_state
                    .select(self.items.len().checked_sub(1));
            }
            None if !self.items.is_empty() => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    fn next_item(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_item(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn activate_selected_item(&mut self) {
        if let Some(i) = self.list_state.selected()
            && let Some(CatalogItem::Course { index, .. }) = self.items.get(i).cloned()
        {
            self.expanded[index] = !self.expanded[index];
            self.rebuild_items();
            self.update_content_for_selection();
        }
        // Lessons need no activation; selecting one already renders it
    }

    fn update_content_for_selection(&mut self) {
        match self
            .list_state
            .selected()
            .and_then(|i| self.items.get(i).cloned())
        {
            Some(CatalogItem::Lesson { course, lesson }) => {
                let course = &self.courses[course];
                let lesson = &course.lessons[lesson];
                self.lesson_title = lesson.title.clone();
                self.current_lesson = Some(render_lesson(&lesson.blocks));
            }
            _ => {
                self.current_lesson = None;
                self.lesson_title.clear();
            }
        }
    }

    /// Description shown when a course (not a lesson) is selected.
    fn selected_course_summary(&self) -> Vec<Line<'static>> {
        let Some(CatalogItem::Course { index, .. }) = self
            .list_state
            .selected()
            .and_then(|i| self.items.get(i).cloned())
        else {
            return vec![Line::from("Selecciona una lección para verla")];
        };

        let course = &self.courses[index];
        let mut lines = vec![
            Line::from(Span::styled(
                course.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if !course.description.is_empty() {
            lines.push(Line::from(course.description.clone()));
            lines.push(Line::from(""));
        }
        if let Some(level) = &course.level {
            lines.push(Line::from(format!("Nivel: {level}")));
        }
        lines.push(Line::from(format!("Lecciones: {}", course.lessons.len())));
        lines
    }
}

fn main() -> Result<()> {
    // Courses directory from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let courses_path;
    let from_config;

    if args.len() == 2 {
        courses_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                courses_path = config.courses_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No courses path provided and no config file found");
                eprintln!("Usage: {} <courses-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <courses-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [courses-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_courses_dir(&courses_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Courses path '{}'{} is invalid: {e}",
            courses_path.display(),
            source
        );
        process::exit(1);
    }

    let courses = io::load_catalog(&courses_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(courses);

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
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.searching {
                match key.code {
                    KeyCode::Esc => {
                        app.searching = false;
                        app.query.clear();
                        app.rebuild_items();
                        app.update_content_for_selection();
                    }
                    KeyCode::Enter => app.searching = false,
                    KeyCode::Backspace => {
                        app.query.pop();
                        app.rebuild_items();
                        app.update_content_for_selection();
                    }
                    KeyCode::Char(c) => {
                        app.query.push(c);
                        app.rebuild_items();
                        app.update_content_for_selection();
                    }
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('/') => app.searching = true,
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_item(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Catalog panel
    let catalog_items: Vec<ListItem> = app
        .items
        .iter()
        .map(|item| {
            let text = match item {
                CatalogItem::Course { index, expanded } => {
                    let marker = if *expanded { "▾" } else { "▸" };
                    format!("{marker} {}", app.courses[*index].title)
                }
                CatalogItem::Lesson { course, lesson } => {
                    format!("    {}", app.courses[*course].lessons[*lesson].title)
                }
            };
            ListItem::new(vec![Line::from(vec![Span::raw(text)])])
        })
        .collect();

    let catalog_title = if app.query.is_empty() && !app.searching {
        "Cursos".to_string()
    } else {
        format!("Cursos /{}", app.query)
    };
    let catalog_list = List::new(catalog_items)
        .block(Block::default().borders(Borders::ALL).title(catalog_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(catalog_list, chunks[0], &mut app.list_state);

    // Content panel
    let (title, content_lines) = match &app.current_lesson {
        Some(lesson) => (app.lesson_title.clone(), lesson_lines(lesson)),
        None => ("Contenido".to_string(), app.selected_course_summary()),
    };

    let content = Paragraph::new(content_lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Salir | "),
        Span::raw("↑/k ↓/j: Mover | "),
        Span::raw("Enter/Espacio: Abrir curso | "),
        Span::raw("/: Buscar"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

/// Flatten a rendered lesson into styled terminal lines.
fn lesson_lines(lesson: &RenderedLesson) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for section in &lesson.sections {
        if !section.title.is_empty() {
            lines.push(Line::from(Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        for block in &section.blocks {
            match block {
                RenderedBlock::Subheading { text } => {
                    lines.push(Line::from(Span::styled(
                        text.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(""));
                }
                RenderedBlock::Prose { segments } => {
                    lines.push(Line::from(segment_spans(segments)));
                    lines.push(Line::from(""));
                }
                RenderedBlock::List { items, ordered } => {
                    for (i, item) in items.iter().enumerate() {
                        let marker = if *ordered {
                            format!("{}. ", i + 1)
                        } else {
                            "• ".to_string()
                        };
                        let mut spans = vec![Span::raw(marker)];
                        spans.extend(segment_spans(item));
                        lines.push(Line::from(spans));
                    }
                    lines.push(Line::from(""));
                }
                RenderedBlock::Code { lines: code_lines } => {
                    for line in code_lines {
                        lines.push(Line::from(token_spans(line)));
                    }
                    lines.push(Line::from(""));
                }
                RenderedBlock::Callout { title, segments } => {
                    let mut spans = vec![Span::styled(
                        format!("⚠ {} ", title.as_deref().unwrap_or("Nota")),
                        Style::default().fg(Color::Yellow),
                    )];
                    spans.extend(segment_spans(segments));
                    lines.push(Line::from(spans));
                    lines.push(Line::from(""));
                }
                RenderedBlock::Table { headers, rows } => {
                    let mut header_spans = Vec::new();
                    for cell in headers {
                        header_spans.push(Span::styled(
                            segment_text(cell),
                            Style::default().add_modifier(Modifier::BOLD),
                        ));
                        header_spans.push(Span::raw("  "));
                    }
                    lines.push(Line::from(header_spans));

                    for row in rows {
                        let mut spans = Vec::new();
                        for cell in row {
                            match cell.color {
                                Some(palette) => spans.push(Span::styled(
                                    segment_text(&cell.segments),
                                    Style::default().fg(palette_color(palette)),
                                )),
                                None => spans.extend(segment_spans(&cell.segments)),
                            }
                            spans.push(Span::raw("  "));
                        }
                        lines.push(Line::from(spans));
                    }
                    lines.push(Line::from(""));
                }
                RenderedBlock::Image { alt, caption, .. } => {
                    // No terminal image rendering; show a labelled placeholder
                    lines.push(Line::from(Span::styled(
                        format!("[imagen: {alt}]"),
                        Style::default().fg(Color::DarkGray),
                    )));
                    if let Some(caption) = caption {
                        lines.push(Line::from(Span::styled(
                            caption.clone(),
                            Style::default().add_modifier(Modifier::ITALIC),
                        )));
                    }
                    lines.push(Line::from(""));
                }
            }
        }
    }

    lines
}

/// Concatenate a cell's segments as unstyled text (used where one style is
/// applied to the whole cell).
fn segment_text(segments: &[InlineSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            InlineSegment::Text(text) | InlineSegment::Code(text) => text.as_str(),
        })
        .collect()
}

fn segment_spans(segments: &[InlineSegment]) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| match segment {
            InlineSegment::Text(text) => Span::raw(text.clone()),
            InlineSegment::Code(code) => Span::styled(
                code.clone(),
                Style::default().fg(Color::LightMagenta).bg(Color::Black),
            ),
        })
        .collect()
}

fn token_spans(tokens: &[Token]) -> Vec<Span<'static>> {
    tokens
        .iter()
        .map(|token| {
            let style = match token.kind {
                TokenKind::Whitespace | TokenKind::Plain => Style::default(),
                TokenKind::Str => Style::default().fg(Color::Green),
                TokenKind::Number => Style::default().fg(Color::Magenta),
                TokenKind::Keyword => Style::default().fg(Color::Yellow),
                TokenKind::Builtin => Style::default().fg(Color::Cyan),
                TokenKind::Comment => Style::default().fg(Color::DarkGray),
            };
            Span::styled(token.text.clone(), style)
        })
        .collect()
}

fn palette_color(palette: Palette) -> Color {
    match palette {
        Palette::Black => Color::Black,
        Palette::Orange => Color::Rgb(255, 140, 0),
        Palette::Blue => Color::Blue,
        Palette::Purple => Color::Magenta,
        Palette::DarkRed => Color::Red,
        Palette::LightRed => Color::LightRed,
        Palette::Green => Color::Green,
    }
}
