mod app;
mod error;
mod services;
mod tui;
mod ui;

use std::fs::File;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use env_logger::{Env, Target};
use job_scraper::{scrape_jobs, ProxyConfig};

use crate::app::job_lines;
use crate::error::Result;
use crate::services::{load_advisor, Services};

/// Logs go to this file while the terminal interface owns the screen
const UI_LOG_FILE: &str = "job-advisor.log";

#[derive(Parser)]
#[command(author, version, about = "Find jobs and get career advice", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the Home / Jobs / Advice interface (default)
    Ui {},
    /// Run a single job search and print the results
    Jobs {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Ask for career advice and print the answer
    Advice {
        #[arg(required = true)]
        question: Vec<String>,
    },
}

fn init_logging(command: &Commands) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Commands::Ui {} = command {
        builder.target(Target::Pipe(Box::new(File::create(UI_LOG_FILE)?)));
    }
    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Cli::parse();
    let command = args.command.unwrap_or(Commands::Ui {});
    init_logging(&command)?;
    let client = reqwest::Client::new();

    match command {
        Commands::Ui {} => {
            let services = Services::from_env(client).await;
            tui::run(services).await?;
        }
        Commands::Jobs { query } => {
            let config = ProxyConfig::from_env()?;
            let jobs = scrape_jobs(&client, &config, &query.join(" ")).await;
            for line in job_lines(&jobs) {
                println!("{}", line);
            }
        }
        Commands::Advice { question } => {
            let advisor = load_advisor(client).await;
            println!("{}", advisor.get_advice(&question.join(" ")).await);
        }
    }
    Ok(())
}
