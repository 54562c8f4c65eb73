//! CLI frontend for the Tavern encounter engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "tavern",
    about = "Tavern: turn-based adventures for a party of heroes",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the adventures that can be played
    Adventures {
        /// Directory holding characters.json, monsters.json and adventures.json
        #[arg(short, long, default_value = ".")]
        data: PathBuf,
    },

    /// List the monsters of the bestiary
    Monsters {
        /// Directory holding the data files
        #[arg(short, long, default_value = ".")]
        data: PathBuf,
    },

    /// List the characters of the roster
    Roster {
        /// Only show characters of this player
        #[arg(short, long)]
        player: Option<String>,

        /// Directory holding the data files
        #[arg(short, long, default_value = ".")]
        data: PathBuf,
    },

    /// Create a character with rolled stats and add it to the roster
    Recruit {
        /// Character name (letters and spaces)
        name: String,

        /// Player who owns the character
        #[arg(long)]
        player: String,

        /// Starting level [1..10]
        #[arg(short, long, default_value = "1")]
        level: u32,

        /// Starting class line: Adventurer, Cleric or Mage
        #[arg(short, long, default_value = "Adventurer")]
        class: String,

        /// RNG seed for the stat rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Directory holding the data files
        #[arg(short, long, default_value = ".")]
        data: PathBuf,
    },

    /// Play an adventure with a party picked from the roster
    Play {
        /// Adventure name or its number in `tavern adventures`
        adventure: String,

        /// Roster numbers of the party members, as listed by `tavern roster`
        #[arg(short, long, value_delimiter = ',', required = true)]
        party: Vec<usize>,

        /// RNG seed for deterministic play
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Write the party back to characters.json if the adventure is completed
        #[arg(long)]
        save: bool,

        /// Only print the outcome, not the story
        #[arg(short, long)]
        quiet: bool,

        /// Only tell the parts of the story this character or monster takes part in
        #[arg(short, long, conflicts_with = "quiet")]
        follow: Option<String>,

        /// Directory holding the data files
        #[arg(short, long, default_value = ".")]
        data: PathBuf,
    },
}

fn main() {
    // Logs go to stderr so the story on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tavern_engine=warn,tavern_mechanics=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Adventures { data } => commands::adventures::run(&data),
        Commands::Monsters { data } => commands::monsters::run(&data),
        Commands::Roster { player, data } => commands::roster::run(&data, player.as_deref()),
        Commands::Recruit {
            name,
            player,
            level,
            class,
            seed,
            data,
        } => commands::recruit::run(&data, &name, &player, level, &class, seed),
        Commands::Play {
            adventure,
            party,
            seed,
            save,
            quiet,
            follow,
            data,
        } => commands::play::run(&data, &adventure, &party, seed, save, quiet, follow.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
