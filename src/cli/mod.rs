use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;

pub mod init;
pub mod list;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Initialize the events database
    Init {
        #[arg(long, action, default_value = "false")]
        db: bool,
    },
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "5000")]
        port: String,
    },
    /// Print all stored events as JSON
    List {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let storage_path = env::var("AGENDA_STORAGE_PATH").unwrap_or("./".to_string());
    let db_path = format!("{}/db", storage_path);

    // Handle each sub command
    match args.command {
        Some(Command::Init { db }) => {
            init::run(db, &db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::List {}) => {
            list::run(&db_path).await?;
        }
        None => {}
    }

    Ok(())
}
