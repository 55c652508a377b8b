use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "reportdir", version, about = "Directory service for business intelligence report links")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Load a JSON catalogue into an empty database
    Seed(SeedArgs),
    /// List reports from a running server
    Query(QueryArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen port [default: 8001]
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address [default: 0.0.0.0]
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite database path [default: ./data/reportdir.db]
    #[arg(long)]
    pub db: Option<String>,

    /// Substring every report URL must contain [default: app.powerbi.com]
    #[arg(long)]
    pub url_domain: Option<String>,

    /// JSON catalogue to load when the database is empty
    #[arg(long)]
    pub seed: Option<String>,
}

#[derive(Args, Clone)]
pub struct SeedArgs {
    /// JSON catalogue file
    #[arg(short, long, default_value = "./seeds/reports.json")]
    pub file: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// SQLite database path [default: ./data/reportdir.db]
    #[arg(long)]
    pub db: Option<String>,

    /// Substring every report URL must contain [default: app.powerbi.com]
    #[arg(long)]
    pub url_domain: Option<String>,
}

#[derive(Args, Clone)]
pub struct QueryArgs {
    /// Base URL of the running server
    #[arg(long, default_value = "http://localhost:8001")]
    pub server: String,

    /// Only reports in this group
    #[arg(short, long)]
    pub group: Option<String>,

    /// Case-insensitive substring of the report name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["reportdir", "-v", "serve", "--port", "9000", "--db", "/tmp/r.db"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.db.as_deref(), Some("/tmp/r.db"));
                assert!(args.host.is_none());
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_query_defaults() {
        let cli = Cli::try_parse_from(["reportdir", "query", "--group", "COMPRAS"]).unwrap();
        match cli.command {
            Commands::Query(args) => {
                assert_eq!(args.server, "http://localhost:8001");
                assert_eq!(args.group.as_deref(), Some("COMPRAS"));
                assert!(!args.json);
            }
            _ => panic!("expected query"),
        }
    }

    #[test]
    fn test_parse_seed_default_file() {
        let cli = Cli::try_parse_from(["reportdir", "seed"]).unwrap();
        match cli.command {
            Commands::Seed(args) => assert_eq!(args.file, "./seeds/reports.json"),
            _ => panic!("expected seed"),
        }
    }
}
