use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;

mod check;

#[derive(Parser)]
#[command(
    name = "ckan-dataset",
    version,
    about = "CKAN dataset ownership checker for resource plugins"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON object on stdout
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a user owns the CKAN dataset a link points to
    Check {
        /// Dataset link (e.g. https://ckan.example.org/dataset/<id>)
        link: String,
        /// Username of the provider submitting the link
        #[arg(long)]
        username: String,
        /// Provider's CKAN API token
        #[arg(long, env = "CKAN_ACCESS_TOKEN", hide_env_values = true)]
        token: String,
        /// Timeout for each catalog lookup, in seconds [default: 10]
        #[arg(long)]
        timeout: Option<u64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

pub fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = Cli::parse();

    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Check {
            link,
            username,
            token,
            timeout,
            format,
        }) => check::run(&link, username, token, timeout, format),
        None => {
            eprintln!("Usage: ckan-dataset <command> [args]");
            eprintln!("Run `ckan-dataset --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "ckan-dataset: CKAN dataset ownership checker\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
