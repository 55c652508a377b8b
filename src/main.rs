use std::path::PathBuf;
use clap::Parser;
use reportdir::cli::{self, Cli, Commands};
use reportdir::config;
use reportdir::errors::DirectoryError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match cli.command {
        Commands::Serve(args) => cli::serve::handle_serve(args).await,
        Commands::Seed(args) => cli::seed::handle_seed(args).await,
        Commands::Query(args) => cli::query::handle_query(args).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// `RUST_LOG` wins over `-v`.
fn init_logging(cli: &Cli) {
    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.with_target(false).with_ansi(!cli.no_color).init();
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), DirectoryError> {
    let config = config::parse_config(&PathBuf::from(&args.config)).await?;
    println!("Configuration is valid: {}", args.config);
    if let Some(domain) = config.required_url_domain() {
        println!("  required URL domain: {}", domain);
    }
    if config.admin_token().is_some() {
        println!("  admin endpoints require a bearer token");
    }
    Ok(())
}
