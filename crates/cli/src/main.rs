//! Smart Pantry CLI - seeding and user management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the meal plan grid and starter recipe notes
//! pantry-cli seed
//!
//! # Create a user account
//! pantry-cli user create -e ana@example.com -u ana -p secret
//!
//! # List registered users
//! pantry-cli user list
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the fixed collections if they are empty
//! - `user create` - Register a user account
//! - `user list` - List registered users
//!
//! All commands operate on the same record store as the server, selected by
//! `PANTRY_DATA_DIR` (default `./data`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "pantry-cli")]
#[command(author, version, about = "Smart Pantry CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the meal plan grid and starter recipe notes
    Seed,
    /// Manage registered users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Register a new user account
    Create {
        /// Email address (the unique account key)
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        username: String,

        /// Password (stored as plain text; this is a local prototype store)
        #[arg(short, long)]
        password: String,
    },
    /// List registered users
    List,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run()?,
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                username,
                password,
            } => {
                commands::user::create(&email, &username, &password)?;
            }
            UserAction::List => commands::user::list()?,
        },
    }
    Ok(())
}
