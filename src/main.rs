use bookrec::cli::commands::{Cli, Commands};
use bookrec::config::Config;
use bookrec::domain::values::metric::Metric;
use bookrec::BookRec;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(c) => c.with_overrides(cli.artifacts, cli.user_log),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&config, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(config: &Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Import { books, vectors, metric } => {
            let metric: Metric = metric.parse().map_err(|e: String| e)?;
            let summary = BookRec::import(&config.artifacts_path, &books, &vectors, metric)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Search { text, limit } => {
            let titles = open_engine(config).search_titles(&text, limit);
            if titles.is_empty() {
                eprintln!("No matching books found.");
            }
            println!("{}", serde_json::to_string_pretty(&titles)?);
        }
        Commands::Similar { title, count, user } => {
            let br = open_engine(config);
            let recs = match user {
                Some(user) => br.search_and_recommend(&user, &title, count)?,
                None => br.recommend_similar(&title, count)?,
            };
            if recs.is_empty() {
                eprintln!("No recommendations found for this book.");
            }
            println!("{}", serde_json::to_string_pretty(&recs)?);
        }
        Commands::Like { title, user } => {
            let event = open_engine(config).like(&user, &title)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        Commands::ForUser { user, count } => {
            let recs = open_engine(config).recommend_for_user(&user, count)?;
            if recs.is_empty() {
                eprintln!("Start searching to receive personalized recommendations!");
            }
            println!("{}", serde_json::to_string_pretty(&recs)?);
        }
        Commands::History { user } => {
            let events = open_engine(config).history(&user)?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&open_engine(config).stats())?);
        }
    }
    Ok(())
}

/// Loads the served artifacts; a missing or corrupt artifact database ends the process.
fn open_engine(config: &Config) -> BookRec {
    match BookRec::open(config) {
        Ok(br) => br,
        Err(e) => {
            eprintln!("Error initializing bookrec: {e}");
            std::process::exit(1);
        }
    }
}
