use crate::{DEFAULT_PERSONAL_COUNT, DEFAULT_SIMILAR_COUNT};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookrec", about = "Book recommendations from a nearest-neighbor index")]
pub struct Cli {
    /// Artifact database (overrides BOOKREC_ARTIFACTS)
    #[arg(long, global = true)]
    pub artifacts: Option<String>,
    /// Interaction log CSV (overrides BOOKREC_USER_LOG)
    #[arg(long, global = true)]
    pub user_log: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the artifact database from precomputed CSV files
    Import {
        /// CSV with header title,author,image_url
        #[arg(long)]
        books: PathBuf,
        /// Headerless CSV of title,f1,f2,...
        #[arg(long)]
        vectors: PathBuf,
        /// Distance metric (cosine, euclidean)
        #[arg(long, default_value = "cosine")]
        metric: String,
    },
    /// Find catalog titles containing some text
    Search {
        text: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Books most similar to a title
    Similar {
        title: String,
        #[arg(long, default_value_t = DEFAULT_SIMILAR_COUNT)]
        count: usize,
        /// Log the lookup as a search by this user
        #[arg(long)]
        user: Option<String>,
    },
    /// Record that a user liked a book
    Like {
        title: String,
        #[arg(long)]
        user: String,
    },
    /// Personal recommendations from a user's history
    ForUser {
        user: String,
        #[arg(long, default_value_t = DEFAULT_PERSONAL_COUNT)]
        count: usize,
    },
    /// Show a user's logged interactions
    History {
        user: String,
    },
    /// Show catalog and index statistics
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_parses_without_artifact_flags() {
        let cli = Cli::try_parse_from(["bookrec", "import", "--books", "b.csv", "--vectors", "v.csv"]).unwrap();
        assert!(cli.artifacts.is_none());
        match cli.command {
            Commands::Import { books, vectors, metric } => {
                assert_eq!(books, PathBuf::from("b.csv"));
                assert_eq!(vectors, PathBuf::from("v.csv"));
                assert_eq!(metric, "cosine");
            }
            _ => panic!("expected import"),
        }
    }

    #[test]
    fn counts_default_and_accept_large_values() {
        let cli = Cli::try_parse_from(["bookrec", "for-user", "alice"]).unwrap();
        assert!(matches!(cli.command, Commands::ForUser { count: DEFAULT_PERSONAL_COUNT, .. }));

        let max = usize::MAX.to_string();
        let cli = Cli::try_parse_from(["bookrec", "similar", "Dune", "--count", max.as_str()]).unwrap();
        assert!(matches!(cli.command, Commands::Similar { count: usize::MAX, .. }));
    }
}
