use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use reqwest::StatusCode;

use cloud_cars::client::{CarsClient, ClientError, NameSource};
use cloud_cars::{Car, CarId};

#[derive(Parser)]
#[command(name = "cars-cli")]
#[command(about = "Command line client for the cloud cars API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8082")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the welcome message
    Welcome,
    /// Ask the server to greet someone
    Greet {
        name: String,
        /// How the name is sent
        #[arg(long, value_enum, default_value_t = Via::Path)]
        via: Via,
    },
    /// List cars, optionally filtered by make
    List {
        #[arg(long)]
        make: Option<String>,
    },
    /// Show one car by id
    Get { id: String },
    /// Add a car
    Create {
        #[arg(long)]
        id: String,
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        cost: u64,
        #[arg(long)]
        make: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Via {
    Path,
    Query,
    Body,
}

impl From<Via> for NameSource {
    fn from(via: Via) -> Self {
        match via {
            Via::Path => NameSource::Path,
            Via::Query => NameSource::Query,
            Via::Body => NameSource::Body,
        }
    }
}

/// Numeric ids are sent as JSON numbers, anything else as a string.
fn parse_id(raw: &str) -> CarId {
    match raw.parse::<u64>() {
        Ok(n) => CarId::number(n),
        Err(_) => CarId::text(raw),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = CarsClient::new(&cli.url)?;

    let result = match cli.command {
        Commands::Welcome => client.welcome().await.map(|text| println!("{}", text)),
        Commands::Greet { name, via } => client
            .greet(&name, via.into())
            .await
            .map(|text| println!("{}", text)),
        Commands::List { make } => match client.list_cars(make.as_deref()).await {
            Ok(cars) => print_json(&cars),
            Err(e) => Err(e),
        },
        Commands::Get { id } => match client.get_car(&id).await {
            Ok(Some(car)) => print_json(&car),
            Ok(None) => Err(ClientError::Status {
                status: StatusCode::NOT_FOUND,
                body: format!("car not found: {}", id),
            }),
            Err(e) => Err(e),
        },
        Commands::Create {
            id,
            kind,
            model,
            cost,
            make,
        } => {
            let car = Car::new(parse_id(&id), make.as_deref(), &kind, &model, cost);
            match client.create_car(&car).await {
                Ok(created) => print_json(&created),
                Err(e) => Err(e),
            }
        }
    };

    Ok(ExitCode::from(exit_status(result)?))
}

/// Process exit status for a command's outcome. A rejection by the server is
/// reported on stderr and exits 1; transport failures propagate.
fn exit_status(result: Result<(), ClientError>) -> Result<u8, ClientError> {
    match result {
        Ok(()) => Ok(0),
        Err(ClientError::Status { status, body }) => {
            eprintln!("Error: server returned status {}", status);
            eprintln!("Response: {}", body);
            Ok(1)
        }
        Err(other) => Err(other),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ClientError> {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: failed to render response: {}", e),
    }
    Ok(())
}
