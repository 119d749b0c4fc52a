use clap::Parser;
use nomadtrack::cli::commands::{Cli, Commands};
use nomadtrack::config::Config;
use nomadtrack::domain::error::DomainError;
use nomadtrack::domain::values::date_window::parse_date;
use nomadtrack::NomadTrack;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nomadtrack={}", config.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let nt = match NomadTrack::new(&config.db_path) {
        Ok(nt) => nt,
        Err(e) => {
            eprintln!("Error opening {}: {e}", config.db_path);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&nt, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(nt: &NomadTrack, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Summary { user, start, end } => {
            let user_id = parse_user(&user)?;
            let summary = nt.summary(&user_id, parse_opt_date(&start)?, parse_opt_date(&end)?)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Visits { user, start, end } => {
            let user_id = parse_user(&user)?;
            let listing = nt.visits(&user_id, parse_opt_date(&start)?, parse_opt_date(&end)?)?;
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Commands::Countries => {
            let countries = nt.countries()?;
            println!("{}", serde_json::to_string_pretty(&countries)?);
        }
        Commands::Country { id } => {
            let country = nt.country(id)?;
            println!("{}", serde_json::to_string_pretty(&country)?);
        }
    }
    Ok(())
}

fn parse_user(s: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(s).map_err(|e| DomainError::Parse(format!("Invalid user id '{s}': {e}")))
}

fn parse_opt_date(s: &Option<String>) -> Result<Option<chrono::NaiveDate>, DomainError> {
    s.as_deref().map(parse_date).transpose()
}
