use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use job_scraper::JobListing;

pub const THINKING: &str = "Thinking...";
pub const NO_JOBS_FOUND: &str = "No jobs found. Try a different search.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Home,
    Jobs,
    Advice,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Jobs, Tab::Advice];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Jobs => "Jobs",
            Tab::Advice => "Advice",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Jobs => 1,
            Tab::Advice => 2,
        }
    }

    fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// What the event loop has to do after a key press
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    SearchJobs(String),
    GetAdvice(String),
    OpenLink(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum JobResults {
    NotSearched,
    Searching,
    Found(Vec<JobListing>),
}

pub struct App {
    pub tab: Tab,
    pub job_query: String,
    pub jobs: JobResults,
    pub selected_job: Option<usize>,
    pub question: String,
    pub advice: String,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            tab: Tab::Home,
            job_query: String::new(),
            jobs: JobResults::NotSearched,
            selected_job: None,
            question: String::new(),
            advice: String::new(),
            status: String::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.status.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Tab => {
                self.select_tab(self.tab.next());
                return Action::None;
            }
            KeyCode::BackTab => {
                self.select_tab(self.tab.previous());
                return Action::None;
            }
            KeyCode::F(n @ 1..=3) => {
                self.select_tab(Tab::ALL[n as usize - 1]);
                return Action::None;
            }
            _ => {}
        }
        match self.tab {
            Tab::Home => Action::None,
            Tab::Jobs => self.handle_jobs_key(key, ctrl),
            Tab::Advice => self.handle_advice_key(key, ctrl),
        }
    }

    fn handle_jobs_key(&mut self, key: KeyEvent, ctrl: bool) -> Action {
        match key.code {
            KeyCode::Char('o') if ctrl => self.open_selected_job(),
            KeyCode::Char(c) if !ctrl => {
                self.job_query.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.job_query.pop();
                Action::None
            }
            KeyCode::Enter => {
                let query = self.job_query.trim();
                if query.is_empty() {
                    Action::None
                } else {
                    Action::SearchJobs(query.to_owned())
                }
            }
            KeyCode::Down => {
                let count = self.job_count();
                self.selected_job = match self.selected_job {
                    Some(idx) if idx + 1 < count => Some(idx + 1),
                    None if count > 0 => Some(0),
                    other => other,
                };
                Action::None
            }
            KeyCode::Up => {
                if let Some(idx) = self.selected_job {
                    self.selected_job = Some(idx.saturating_sub(1));
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_advice_key(&mut self, key: KeyEvent, ctrl: bool) -> Action {
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.question.push(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.question.pop();
                Action::None
            }
            KeyCode::Enter => {
                let question = self.question.trim();
                if question.is_empty() {
                    Action::None
                } else {
                    Action::GetAdvice(question.to_owned())
                }
            }
            _ => Action::None,
        }
    }

    fn job_count(&self) -> usize {
        match &self.jobs {
            JobResults::Found(jobs) => jobs.len(),
            _ => 0,
        }
    }

    pub fn selected_listing(&self) -> Option<&JobListing> {
        match &self.jobs {
            JobResults::Found(jobs) => self.selected_job.and_then(|idx| jobs.get(idx)),
            _ => None,
        }
    }

    fn open_selected_job(&mut self) -> Action {
        let link = match self.selected_listing() {
            Some(job) => job.link.clone(),
            None => {
                self.status = "Select a job first (Up/Down)".to_owned();
                return Action::None;
            }
        };
        if link.starts_with("http://") || link.starts_with("https://") {
            Action::OpenLink(link)
        } else {
            self.status = "This job has no link".to_owned();
            Action::None
        }
    }

    /// The previous results are dropped before the request is sent.
    pub fn begin_job_search(&mut self, query: &str) {
        self.jobs = JobResults::Searching;
        self.selected_job = None;
        self.status = format!("Searching jobs for '{}'...", query);
    }

    pub fn show_jobs(&mut self, jobs: Vec<JobListing>) {
        self.status = if jobs.is_empty() {
            NO_JOBS_FOUND.to_owned()
        } else {
            format!("Found {} jobs", jobs.len())
        };
        self.selected_job = if jobs.is_empty() { None } else { Some(0) };
        self.jobs = JobResults::Found(jobs);
    }

    pub fn begin_advice(&mut self) {
        self.advice = THINKING.to_owned();
        self.status.clear();
    }

    pub fn show_advice(&mut self, advice: String) {
        self.advice = advice;
    }
}

/// Plain-text listing printed by the `jobs` command.
pub fn job_lines(jobs: &[JobListing]) -> Vec<String> {
    if jobs.is_empty() {
        return vec![NO_JOBS_FOUND.to_owned()];
    }
    jobs.iter()
        .map(|job| format!("{} | {} | {}", job.title, job.company, job.link))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_key(press(KeyCode::Char(c))), Action::None);
        }
    }

    fn listing(title: &str, link: &str) -> JobListing {
        JobListing::new(title.to_owned(), "Acme".to_owned(), link.to_owned())
    }

    #[test]
    fn test_starts_on_home() {
        let app = App::new();
        assert_eq!(app.tab, Tab::Home);
        assert_eq!(app.jobs, JobResults::NotSearched);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Jobs);
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Home);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::Advice);
        app.handle_key(press(KeyCode::F(2)));
        assert_eq!(app.tab, Tab::Jobs);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(app.handle_key(ctrl('c')), Action::Quit);
    }

    #[test]
    fn test_typing_on_home_is_ignored() {
        let mut app = App::new();
        type_text(&mut app, "abc");
        assert!(app.job_query.is_empty());
        assert!(app.question.is_empty());
    }

    #[test]
    fn test_enter_searches_trimmed_query() {
        let mut app = App::new();
        app.select_tab(Tab::Jobs);
        assert_eq!(app.handle_key(press(KeyCode::Enter)), Action::None);
        type_text(&mut app, " rust dev ");
        assert_eq!(
            app.handle_key(press(KeyCode::Enter)),
            Action::SearchJobs("rust dev".to_owned())
        );
    }

    #[test]
    fn test_search_replaces_previous_results() {
        let mut app = App::new();
        app.show_jobs(vec![listing("Old", "https://www.indeed.com/1")]);
        app.begin_job_search("new");
        assert_eq!(app.jobs, JobResults::Searching);
        assert_eq!(app.selected_job, None);

        app.show_jobs(vec![]);
        assert_eq!(app.jobs, JobResults::Found(vec![]));
        assert_eq!(app.status, NO_JOBS_FOUND);
    }

    #[test]
    fn test_selection_and_open_link() {
        let mut app = App::new();
        app.select_tab(Tab::Jobs);
        app.show_jobs(vec![
            listing("First", "https://www.indeed.com/1"),
            listing("Second", "#"),
        ]);
        assert_eq!(
            app.handle_key(ctrl('o')),
            Action::OpenLink("https://www.indeed.com/1".to_owned())
        );

        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected_job, Some(1));
        assert_eq!(app.handle_key(ctrl('o')), Action::None);
        assert_eq!(app.status, "This job has no link");

        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected_job, Some(0));
    }

    #[test]
    fn test_advice_flow() {
        let mut app = App::new();
        app.select_tab(Tab::Advice);
        type_text(&mut app, "Should I get a master's degree?");
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(
            app.handle_key(press(KeyCode::Enter)),
            Action::GetAdvice("Should I get a master's degree".to_owned())
        );
        app.begin_advice();
        assert_eq!(app.advice, THINKING);
        app.show_advice("It depends on your field.".to_owned());
        assert_eq!(app.advice, "It depends on your field.");
    }

    #[test]
    fn test_input_survives_tab_switch() {
        let mut app = App::new();
        app.select_tab(Tab::Jobs);
        type_text(&mut app, "nurse");
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.tab, Tab::Jobs);
        assert_eq!(app.job_query, "nurse");
    }

    #[test]
    fn test_open_link_keeps_query_string() {
        let mut app = App::new();
        app.select_tab(Tab::Jobs);
        let link = "https://www.indeed.com/rc/clk?jk=abc&bb=xyz&xkcb=1";
        app.show_jobs(vec![listing("Welder", link)]);
        assert_eq!(app.handle_key(ctrl('o')), Action::OpenLink(link.to_owned()));
    }

    #[test]
    fn test_job_lines() {
        let jobs = vec![
            listing("Nurse", "https://www.indeed.com/1"),
            JobListing::new("No Title".to_owned(), "Unknown Company".to_owned(), "#".to_owned()),
        ];
        assert_eq!(
            job_lines(&jobs),
            vec![
                "Nurse | Acme | https://www.indeed.com/1".to_owned(),
                "No Title | Unknown Company | #".to_owned(),
            ]
        );
    }

    #[test]
    fn test_job_lines_without_results() {
        assert_eq!(job_lines(&[]), vec![NO_JOBS_FOUND.to_owned()]);
    }
}
