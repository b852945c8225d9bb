use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use postos::{
    App, Config, Coordinates, Credentials, FixedLocation, FuelKind, Gateway, Notice, SignUp,
    REQUIRED_VARIABLES,
};

#[derive(Parser)]
#[command(name = "postos")]
#[command(about = "Look up and register fuel station prices", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Login {
    #[arg(long)]
    email: String,

    #[arg(long, env = "POSTOS_PASSWORD")]
    password: String,
}

#[derive(Args)]
struct Position {
    /// Device latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,

    /// Device longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    longitude: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a user account
    SignUp {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "POSTOS_PASSWORD")]
        password: String,
    },

    /// List stations near a position and show the cheapest one
    Nearby {
        #[command(flatten)]
        login: Login,

        #[command(flatten)]
        position: Position,

        /// Search radius in kilometers (1 to 50)
        #[arg(short, long, default_value = "5")]
        radius: f64,

        /// gasolina, etanol, diesel or gnv
        #[arg(short, long)]
        fuel: Option<FuelKind>,
    },

    /// Register a station at a position, or update the one already there
    Register {
        #[command(flatten)]
        login: Login,

        #[command(flatten)]
        position: Position,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        gasolina: Option<String>,

        #[arg(long)]
        etanol: Option<String>,

        #[arg(long)]
        diesel: Option<String>,

        #[arg(long)]
        gnv: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;
    config.log();
    let gateway = Gateway::new(&config)?;

    match cli.command {
        Commands::SignUp {
            username,
            email,
            password,
        } => {
            let mut app = App::new(gateway, FixedLocation(Coordinates::new(0.0, 0.0)));
            app.go_to_sign_up();
            let form = SignUp {
                username,
                email,
                confirm_password: password.clone(),
                password,
            };
            let ok = app.sign_up(&form).await;
            finish(&mut app, ok)
        }
        Commands::Nearby {
            login,
            position,
            radius,
            fuel,
        } => {
            let mut app = signed_in(gateway, &login, &position).await?;
            if !app.refine(radius, fuel).await {
                return finish(&mut app, false);
            }

            if let Some(map) = app.screen().map() {
                let markers = map.markers();
                if markers.is_empty() {
                    println!("No stations within {} km.", map.query().radius_km());
                }
                for marker in markers {
                    let flag = if marker.highlighted { "*" } else { " " };
                    println!(
                        "{} {} ({}, {}) {}",
                        flag,
                        marker.title,
                        marker.coordinates.latitude,
                        marker.coordinates.longitude,
                        marker.description
                    );
                }
                if let (Some(cheapest), Some(fuel)) = (map.cheapest(), map.query().fuel) {
                    println!("Cheapest {}: {}", fuel, cheapest.name);
                }
            }
            finish(&mut app, true)
        }
        Commands::Register {
            login,
            position,
            name,
            address,
            gasolina,
            etanol,
            diesel,
            gnv,
        } => {
            let mut app = signed_in(gateway, &login, &position).await?;
            if !app.open_registration().await {
                return finish(&mut app, false);
            }

            if let Some(form) = app.registration_form_mut() {
                let updates = [
                    (&mut form.name, name),
                    (&mut form.address, address),
                    (&mut form.gasoline, gasolina),
                    (&mut form.ethanol, etanol),
                    (&mut form.diesel, diesel),
                    (&mut form.natural_gas, gnv),
                ];
                for (field, value) in updates {
                    if let Some(value) = value {
                        *field = value;
                    }
                }
            }
            let ok = app.submit_registration().await;
            finish(&mut app, ok)
        }
    }
}

async fn signed_in(
    gateway: Gateway,
    login: &Login,
    position: &Position,
) -> Result<App<FixedLocation>> {
    let location = FixedLocation(Coordinates::new(position.latitude, position.longitude));
    let mut app = App::new(gateway, location);
    app.go_to_sign_in();

    let credentials = Credentials {
        email: login.email.clone(),
        password: login.password.clone(),
    };
    if !app.sign_in(&credentials).await {
        finish(&mut app, false)?;
    }
    Ok(app)
}

fn finish(app: &mut App<FixedLocation>, ok: bool) -> Result<()> {
    let notice = app.take_notice();
    if let Some(Notice { title, message }) = &notice {
        println!("{}: {}", title, message);
    }
    if ok {
        Ok(())
    } else {
        Err(anyhow!(notice
            .map(|n| n.to_string())
            .unwrap_or_else(|| String::from("action failed"))))
    }
}
