use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::app::{Action, App};
use crate::error::Result;
use crate::services::Services;
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(200);

/// The terminal is restored on return and also from the panic hook
/// installed by `ratatui::try_init`.
pub async fn run(services: Services) -> Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &services).await;
    ratatui::try_restore()?;
    result
}

/// Searches and advice requests run inline: the screen is not redrawn and keys
/// are not read until they finish.
async fn event_loop(terminal: &mut DefaultTerminal, services: &Services) -> Result<()> {
    let mut app = App::new();
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;
        if !event::poll(TICK_RATE)? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };
        match app.handle_key(key) {
            Action::None => {}
            Action::Quit => break,
            Action::SearchJobs(query) => {
                app.begin_job_search(&query);
                terminal.draw(|frame| ui::render(frame, &app))?;
                let jobs = services.search_jobs(&query).await;
                log::info!("search '{}' returned {} jobs", query, jobs.len());
                app.show_jobs(jobs);
            }
            Action::GetAdvice(question) => {
                app.begin_advice();
                terminal.draw(|frame| ui::render(frame, &app))?;
                let advice = services.get_advice(&question).await;
                app.show_advice(advice);
            }
            Action::OpenLink(url) => {
                if let Err(e) = open::that_detached(&url) {
                    log::error!("Failed to open {}: {}", url, e);
                    app.status = format!("Could not open browser: {}", e);
                }
            }
        }
    }
    Ok(())
}
