use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};

use crate::app::{App, JobResults, Tab, NO_JOBS_FOUND};

pub const WELCOME_TITLE: &str = "Welcome to the AI Job Finder and Advisor!";
pub const WELCOME_TEXT: &str = "Your ultimate tool for finding jobs and receiving career advice. \
Focus on advancing your career, not navigating endless job boards. \
We simplify the complexities of job searching and career planning, from tailored job listings \
to expert advice, so you can achieve your professional goals faster and with confidence.";

const LEGEND: &str = "Tab/F1-F3 switch view | Enter submit | Up/Down select | Ctrl-O open link | Esc quit";

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // navigation bar
            Constraint::Min(0),    // content
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_tabs(frame, app.tab, chunks[0]);
    match app.tab {
        Tab::Home => render_home(frame, chunks[1]),
        Tab::Jobs => render_jobs(frame, app, chunks[1]),
        Tab::Advice => render_advice(frame, app, chunks[1]),
    }

    let footer = if app.status.is_empty() {
        LEGEND.to_owned()
    } else {
        format!("{} | {}", app.status, LEGEND)
    };
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_tabs(frame: &mut Frame, selected: Tab, area: Rect) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(Span::styled(tab.title(), Style::default().fg(Color::Green))))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected.index())
        .highlight_style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    frame.render_widget(tabs, area);
}

/// Horizontal band in the middle of `area`, like a fixed-width page column.
fn centered_column(area: Rect, percent: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent) / 2),
            Constraint::Percentage(percent),
            Constraint::Percentage((100 - percent) / 2),
        ])
        .split(area)[1]
}

fn heading(text: &str, color: Color) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
}

fn render_home(frame: &mut Frame, area: Rect) {
    let column = centered_column(area, 80);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(column);
    frame.render_widget(heading(WELCOME_TITLE, Color::Cyan), rows[1]);
    frame.render_widget(
        Paragraph::new(WELCOME_TEXT)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[2],
    );
}

/// Renders a single-line input box and places the cursor at its end.
fn render_input(frame: &mut Frame, label: &str, value: &str, area: Rect) {
    let input = Paragraph::new(value).block(
        Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(input, area);
    let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let x = area.x.saturating_add(1).saturating_add(typed).min(max_x);
    frame.set_cursor_position((x, area.y + 1));
}

fn render_jobs(frame: &mut Frame, app: &App, area: Rect) {
    let column = centered_column(area, 80);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(column);
    frame.render_widget(heading("Find Your Dream Job", Color::Yellow), rows[0]);
    render_input(frame, "Enter job title or keyword", &app.job_query, rows[1]);

    let results_block = Block::default().title("Results").borders(Borders::ALL);
    match &app.jobs {
        JobResults::NotSearched => frame.render_widget(
            Paragraph::new("Type a job title or keyword and press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .block(results_block),
            rows[2],
        ),
        JobResults::Searching => frame.render_widget(
            Paragraph::new("Searching...").block(results_block),
            rows[2],
        ),
        JobResults::Found(jobs) if jobs.is_empty() => frame.render_widget(
            Paragraph::new(NO_JOBS_FOUND)
                .style(Style::default().fg(Color::Red))
                .block(results_block),
            rows[2],
        ),
        JobResults::Found(jobs) => {
            let items: Vec<ListItem> = jobs
                .iter()
                .map(|job| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(job.title.clone(), Style::default().fg(Color::LightGreen)),
                            Span::styled(" \u{2197}", Style::default().fg(Color::LightCyan)),
                        ]),
                        Line::from(Span::styled(
                            job.company.clone(),
                            Style::default().fg(Color::Cyan),
                        )),
                        Line::from(""),
                    ])
                })
                .collect();
            let mut state = ListState::default();
            state.select(app.selected_job);
            frame.render_stateful_widget(
                List::new(items)
                    .block(results_block)
                    .highlight_symbol("> ")
                    .highlight_style(Style::default().add_modifier(Modifier::BOLD)),
                rows[2],
                &mut state,
            );
        }
    }
}

fn render_advice(frame: &mut Frame, app: &App, area: Rect) {
    let column = centered_column(area, 80);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(column);
    frame.render_widget(heading("Career Advice", Color::Yellow), rows[0]);
    render_input(frame, "Ask for career advice", &app.question, rows[1]);
    frame.render_widget(
        Paragraph::new(app.advice.as_str())
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        rows[2],
    );
}
