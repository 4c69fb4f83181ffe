pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "hotelctl")]
#[command(about = "Operator tooling for the hotel listing service")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Issue a bearer token for a user id")]
    Token {
        #[arg(help = "User id to put in the token subject")]
        user_id: String,
    },

    #[command(about = "Check a hotel draft JSON file against the listing rules")]
    Validate {
        #[arg(help = "Path to a JSON file holding a hotel draft")]
        file: std::path::PathBuf,
    },

    #[command(about = "Image operations")]
    Image {
        #[command(subcommand)]
        cmd: commands::image::ImageCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Token { user_id } => commands::token::handle(&user_id, output_format),
        Commands::Validate { file } => commands::draft::handle(&file, output_format),
        Commands::Image { cmd } => commands::image::handle(cmd, output_format).await,
    }
}
