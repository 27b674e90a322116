//! Command-line front end for the villa API.
//!
//! Commands:
//! - villa-client list
//! - villa-client get <ID>
//! - villa-client create --name .. --details .. --rate .. --sqft .. --occupancy .. --image-url ..
//! - villa-client update <ID> (same flags as create)
//! - villa-client patch <ID> [--rate ..] [--image-url ..] ...
//! - villa-client delete <ID>

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use magicvilla::client::report::render_table;
use magicvilla::client::{
    Outcome, PartialVillaForm, VillaApiClient, VillaController, VillaForm, ViewState,
};
use magicvilla::core::config::ClientConfig;
use magicvilla::features::villas::patch::PatchableField;

/// MagicVilla API controller
#[derive(Parser, Debug)]
#[command(name = "villa-client")]
#[command(version, about, long_about = None)]
struct Cli {
    /// API base URL (overrides VILLA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print the villa table after a successful change
    #[arg(long, global = true)]
    show: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all villas
    List,

    /// Find a villa by ID
    Get { id: String },

    /// Create a new villa
    Create(FormArgs),

    /// Replace every field of a villa
    Update {
        id: String,
        #[command(flatten)]
        form: FormArgs,
    },

    /// Update only the given fields of a villa
    Patch {
        id: String,
        #[command(flatten)]
        fields: PatchArgs,
    },

    /// Delete a villa
    Delete { id: String },
}

/// Full form; empty values are reported by local validation
#[derive(Args, Debug)]
struct FormArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    details: String,
    #[arg(long, default_value = "")]
    rate: String,
    #[arg(long, default_value = "")]
    sqft: String,
    #[arg(long, default_value = "")]
    occupancy: String,
    #[arg(long, default_value = "")]
    image_url: String,
    #[arg(long, default_value = "")]
    amenity: String,
}

impl From<FormArgs> for VillaForm {
    fn from(args: FormArgs) -> Self {
        Self {
            name: args.name,
            details: args.details,
            rate: args.rate,
            sqft: args.sqft,
            occupancy: args.occupancy,
            image_url: args.image_url,
            amenity: args.amenity,
        }
    }
}

/// Fields to change; omitted flags stay untouched
#[derive(Args, Debug)]
struct PatchArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    details: Option<String>,
    #[arg(long)]
    rate: Option<String>,
    #[arg(long)]
    sqft: Option<String>,
    #[arg(long)]
    occupancy: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    amenity: Option<String>,
}

impl PatchArgs {
    fn into_form(self, id: String) -> PartialVillaForm {
        let selected = [
            (PatchableField::Name, self.name),
            (PatchableField::Details, self.details),
            (PatchableField::Rate, self.rate),
            (PatchableField::Sqft, self.sqft),
            (PatchableField::Occupancy, self.occupancy),
            (PatchableField::ImageUrl, self.image_url),
            (PatchableField::Amenity, self.amenity),
        ];

        PartialVillaForm {
            id,
            fields: selected
                .into_iter()
                .filter_map(|(field, value)| value.map(|v| (field, v)))
                .collect(),
        }
    }
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Success(msg) => println!("{}", msg),
        Outcome::Failure(msg) => eprintln!("Error: {}", msg),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ClientConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    if let Some(api_url) = cli.api_url.as_deref() {
        config = config.with_api_url(api_url);
    }
    tracing::debug!("Using API at {}", config.api_url);

    let mut controller = VillaController::new(VillaApiClient::new(&config)?);
    let mut state = ViewState::default();

    let outcome = match cli.command {
        Command::List => {
            return match controller.refresh(&mut state).await {
                Ok([]) => {
                    println!("No villas found in the database.");
                    Ok(ExitCode::SUCCESS)
                }
                Ok(villas) => {
                    println!("{}", render_table(villas));
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("Error: {}", err.user_message());
                    Ok(ExitCode::FAILURE)
                }
            };
        }
        Command::Get { id } => controller.find(&id).await,
        Command::Create(form) => controller.create(&mut state, &form.into()).await,
        Command::Update { id, form } => controller.update(&mut state, &id, &form.into()).await,
        Command::Patch { id, fields } => {
            controller
                .update_partial(&mut state, &fields.into_form(id))
                .await
        }
        Command::Delete { id } => controller.delete(&mut state, &id).await,
    };

    report(&outcome);

    if cli.show && state.modified {
        match controller.refresh(&mut state).await {
            Ok(villas) => println!("{}", render_table(villas)),
            Err(err) => eprintln!("Error: {}", err.user_message()),
        }
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
