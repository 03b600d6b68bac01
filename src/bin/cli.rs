//! RankKV CLI Client
//!
//! Command-line interface for interacting with RankKV.

use clap::{Parser, Subcommand};
use rankkv::network::Client;

/// RankKV CLI
#[derive(Parser, Debug)]
#[command(name = "rankkv-cli")]
#[command(about = "CLI for the RankKV key-value store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:7069")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key to an integer value
    Set {
        /// The key to set
        key: String,

        /// The value to set
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },

    /// Get the key/value at a descending rank (0 is the largest)
    Rank {
        /// Zero-based rank
        #[arg(allow_hyphen_values = true)]
        rank: i64,
    },

    /// Print the sorted queue of values
    Sorted,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let client = Client::new(args.server);

    let result = match args.command {
        Commands::Get { key } => client.get(&key).await.map(|value| format!("{} = {}", key, value)),
        Commands::Set { key, value } => client.set(&key, value).await,
        Commands::Rank { rank } => client
            .get_rank(rank)
            .await
            .map(|item| format!("#{} {} = {}", rank, item.key, item.value)),
        Commands::Sorted => client.sorted_queue().await.map(|values| {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        }),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
