//! memorize HTTP server.
//!
//! Serves the flashcard API, and optionally a static front end, backed by a
//! SQLite deck database.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use memorize_server::Server;
use memorize_store::DeckStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate flashcards from text and keep decks of them.
#[derive(Parser, Debug)]
#[command(name = "memorize-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Listen port
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// SQLite database file (created if missing)
    #[arg(long, default_value = "memorize.db")]
    database: PathBuf,

    /// Directory of static files served for non-API paths
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let addr = SocketAddr::new(args.host.parse::<IpAddr>()?, args.port);
    info!(
        database = %args.database.display(),
        static_dir = ?args.static_dir,
        "Starting memorize server"
    );

    let store = DeckStore::open(&args.database)?;
    let mut server = Server::new(store);
    if let Some(dir) = args.static_dir {
        server = server.with_static_dir(dir);
    }

    server.run(addr).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["memorize-server"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 5000);
        assert_eq!(args.database, PathBuf::from("memorize.db"));
        assert!(args.static_dir.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_verbose_is_counted() {
        let args = Args::parse_from(["memorize-server", "-vv", "--static-dir", "public"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.static_dir, Some(PathBuf::from("public")));
    }
}
