use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nomadtrack", about = "Days spent per country and in the Schengen area")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-country and Schengen day counts for a user
    Summary {
        /// User UUID
        #[arg(long)]
        user: String,
        /// Start of date range (YYYY-MM-DD), defaults to 1970-01-01
        #[arg(long)]
        start: Option<String>,
        /// End of date range (YYYY-MM-DD), defaults to 2038-01-01
        #[arg(long)]
        end: Option<String>,
    },
    /// List a user's visits overlapping a date range
    Visits {
        /// User UUID
        #[arg(long)]
        user: String,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },
    /// List all countries
    Countries,
    /// Show one country
    Country {
        /// Country ID
        id: i64,
    },
}
