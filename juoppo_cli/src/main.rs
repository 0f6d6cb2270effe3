use clap::{Parser, Subcommand};
use juoppo_core::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Printed when the program has to give up
const ERR_FATAL: &str = "Voi ei! Nyt kävi jotain odottamatonta ja ohjelma joutuu \
lopettamaan. Pahoittelut. Alla on teknistä tietoa, josta voi olla apua vian \
selvittämisessä, ja lisää löytyy lokitiedostosta. Kehittäjä haluaisi kovasti \
kuulla tapahtuneesta.";

#[derive(Parser)]
#[command(name = "juoppo")]
#[command(about = "Drinking session recorder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a drinking session (default)
    Session,

    /// Create the database and exit
    Init,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal error: {:?}", e);
            println!();
            println!("{}", ERR_FATAL);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    juoppo_core::logging::init(&config.data.log_path(&data_dir))?;

    let db = DatabaseFile::new(config.data.database_path(&data_dir));
    db.ensure_schema()?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => cmd_session(db),
        Commands::Init => cmd_init(&db),
    }
}

fn cmd_session(mut db: DatabaseFile) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let beverages = Session::new(stdin.lock(), stdout.lock()).run(&mut db)?;

    tracing::debug!("Session finished with {} beverages", beverages.len());
    Ok(())
}

fn cmd_init(db: &DatabaseFile) -> Result<()> {
    let consumers = db.open()?.consumer_count()?;

    println!("✓ Tietokanta valmiina: {}", db.path().display());
    println!("  Tunnettuja juojia: {}", consumers);
    Ok(())
}
