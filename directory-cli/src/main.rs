use clap::{Args, Parser, Subcommand};
use colored::Colorize;

mod commands;
mod prompt;
mod terminal;

use commands::Reported;

/// staffdir - Employee directory from the command line
#[derive(Parser)]
#[command(name = "staffdir")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// API base URL (overrides config)
    #[arg(long, global = true, env = "STAFFDIR_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Load configuration from this file instead of the search path
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all employees
    List {
        /// Print the directory page as HTML
        #[arg(long)]
        html: bool,
    },

    /// Add an employee; missing fields are prompted for
    Add(commands::add::AddArgs),

    /// Delete an employee by id
    Delete {
        /// Employee id
        #[arg(value_name = "ID")]
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    let result = match commands::Context::new(&cli.global) {
        Ok(ctx) => match cli.command {
            Commands::List { html } => commands::list::execute(&ctx, html).await,
            Commands::Add(args) => commands::add::execute(&ctx, args).await,
            Commands::Delete { id, yes } => commands::delete::execute(&ctx, id, yes).await,
        },
        Err(e) => Err(e),
    };

    // Handle result
    match result {
        Ok(()) => std::process::exit(0),
        // already shown as a banner or list message
        Err(e) if e.downcast_ref::<Reported>().is_some() => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);

            // Show context if available
            if let Some(source) = e.source() {
                eprintln!("\n{} {}", "Caused by:".yellow(), source);
            }

            std::process::exit(1);
        }
    }
}
