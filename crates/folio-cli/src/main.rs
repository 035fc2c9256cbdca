//! Folio - portfolio terminal client
//!
//! The `folio` command drives the contact pipeline from a terminal.
//!
//! ## Commands
//!
//! - `send`: validate and submit a contact message through the relay
//! - `projects`: list the showcased projects
//! - `profile`: print the profile hero
//! - `theme`: read or change the persisted theme preference

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use folio_core::transport::DEFAULT_RELAY_URL;
use folio_core::{
    catalog, init_tracing, reduce, submit, Effect, Field, FormEvent, FormState,
    HttpRelayTransport, Notice, Phase, Theme, ThemeStore,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal portfolio toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a contact message through the relay
    Send {
        /// Sender name
        #[arg(short, long)]
        name: String,

        /// Sender email address
        #[arg(short, long)]
        email: String,

        /// Message body
        #[arg(short, long)]
        message: String,

        /// Relay endpoint URL
        #[arg(long, env = "FOLIO_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
        relay_url: String,
    },

    /// List the showcased projects
    Projects,

    /// Print the profile hero
    Profile,

    /// Read or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current preference
    Get,

    /// Persist a preference (light or dark)
    Set { theme: String },

    /// Flip the preference
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(cli.json, level);

    match cli.command {
        Commands::Send {
            name,
            email,
            message,
            relay_url,
        } => send(name, email, message, relay_url).await,
        Commands::Projects => {
            print_projects();
            Ok(())
        }
        Commands::Profile => {
            print_profile();
            Ok(())
        }
        Commands::Theme { action } => theme(action.unwrap_or(ThemeAction::Get)),
    }
}

/// Run the full form pipeline: edit events, submit, render effects.
async fn send(name: String, email: String, message: String, relay_url: String) -> Result<()> {
    let mut state = FormState::default();
    reduce(&mut state, FormEvent::FieldEdited(Field::Name, name));
    reduce(&mut state, FormEvent::FieldEdited(Field::Email, email));
    reduce(&mut state, FormEvent::FieldEdited(Field::Message, message));

    let transport = HttpRelayTransport::new(relay_url);
    let effects = submit(&mut state, &transport).await;

    for effect in &effects {
        if let Effect::Notify(notice) = effect {
            match notice {
                Notice::Success(text) => println!("{text}"),
                Notice::Failure(text) => eprintln!("{text}"),
            }
        }
    }

    match state.phase {
        Phase::Success => Ok(()),
        _ => {
            for error in &state.errors {
                eprintln!("  {}: {}", error.field.label(), error.message);
            }
            bail!("message was not delivered")
        }
    }
}

fn print_projects() {
    for project in catalog::projects() {
        let platforms: Vec<&str> = project.platforms.iter().map(|p| p.label()).collect();
        println!("{} ({})", project.title, platforms.join(", "));
        println!("  {}", project.description);
        println!();
    }
}

fn print_profile() {
    let profile = catalog::profile();
    println!("{}", profile.name);
    println!("{}", profile.role);
    println!();
    println!("{}", profile.summary);
}

fn theme(action: ThemeAction) -> Result<()> {
    let store = ThemeStore::from_env();

    match action {
        ThemeAction::Get => {
            let current = store.load().context("failed to read theme preference")?;
            println!("{current}");
        }
        ThemeAction::Set { theme } => {
            let theme: Theme = theme
                .parse()
                .context("unknown theme (expected light or dark)")?;
            store.save(theme).context("failed to save theme preference")?;
            println!("{theme}");
        }
        ThemeAction::Toggle => {
            let next = store.toggle().context("failed to toggle theme preference")?;
            println!("{next}");
        }
    }

    Ok(())
}
