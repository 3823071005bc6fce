mod digest;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "digest-cli")]
#[command(about = "Daily viral-ideas digest pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build today's digest and upsert it for the configured owner
    Run {
        /// Print the rendered digest without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
    /// List recent digests for the configured owner
    Recent {
        /// Maximum number of digests to show
        #[arg(long, default_value_t = 10)]
        limit: i64,
    },
    /// Run pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { dry_run } => digest::run(dry_run).await,
        Commands::Recent { limit } => digest::recent(limit).await,
        Commands::Migrate => {
            let pool = digest_db::connect_pool_from_env().await?;
            digest_db::run_migrations(&pool).await?;
            println!("migrations applied");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn parses_run_defaults() {
        let cli = Cli::try_parse_from(["digest-cli", "run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { dry_run: false }));
    }

    #[test]
    fn parses_run_dry_run() {
        let cli = Cli::try_parse_from(["digest-cli", "run", "--dry-run"]).unwrap();
        assert!(matches!(cli.command, Commands::Run { dry_run: true }));
    }

    #[test]
    fn parses_recent_with_limit() {
        let cli = Cli::try_parse_from(["digest-cli", "recent", "--limit", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Recent { limit: 3 }));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["digest-cli"]).is_err());
    }
}
