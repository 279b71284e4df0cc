use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use food_dashboard::config::{apply_overrides, load_or_default, ConfigOverrides};
use food_dashboard::dashboard::view;
use food_dashboard::food::{FoodId, FoodPlate, NewFoodPlate};
use food_dashboard::observability::logging::init_logging;
use food_dashboard::{Dashboard, HttpFoodApi};

#[derive(Parser)]
#[command(name = "food-dashboard")]
#[command(about = "Manage food plates on a REST backend", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `api.base_url`.
    #[arg(short, long)]
    url: Option<String>,

    /// Print the list as JSON instead of cards.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every food plate
    List,
    /// Add a new, available food plate
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        description: String,
    },
    /// Edit a food plate; omitted fields keep their value
    Edit {
        id: FoodId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a food plate
    Delete { id: FoodId },
    /// Set a food plate's availability
    Available {
        id: FoodId,
        #[arg(action = ArgAction::Set)]
        available: bool,
    },
    /// Flip a food plate's availability
    Toggle { id: FoodId },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = apply_overrides(
        load_or_default(cli.config.as_deref())?,
        ConfigOverrides {
            api_url: cli.url,
            ..ConfigOverrides::default()
        },
    )?;
    init_logging(&config.observability);

    let api = HttpFoodApi::new(&config.api, &config.retries)?;
    let mut dashboard = Dashboard::new(api);
    dashboard.load().await?;

    match cli.command {
        Commands::List => {}
        Commands::Add {
            name,
            image,
            price,
            description,
        } => {
            dashboard
                .add_food(NewFoodPlate {
                    name,
                    image,
                    price,
                    description,
                })
                .await?;
        }
        Commands::Edit {
            id,
            name,
            image,
            price,
            description,
        } => {
            let current = listed(&dashboard, id)?;
            let form = NewFoodPlate::from(current.clone())
                .with_overrides(name, image, price, description);
            dashboard.edit_food(current);
            dashboard.update_food(form).await?;
        }
        Commands::Delete { id } => {
            dashboard.delete_food(id).await?;
        }
        Commands::Available { id, available } => {
            let current = listed(&dashboard, id)?;
            dashboard.set_availability(&current, available).await?;
        }
        Commands::Toggle { id } => {
            if dashboard.toggle_availability(id).await?.is_none() {
                return Err(format!("Food plate {} not found", id).into());
            }
        }
    }

    print_foods(dashboard.foods(), cli.json)?;
    Ok(())
}

fn listed(
    dashboard: &Dashboard<HttpFoodApi>,
    id: FoodId,
) -> Result<FoodPlate, Box<dyn std::error::Error>> {
    dashboard
        .find(id)
        .cloned()
        .ok_or_else(|| format!("Food plate {} not found", id).into())
}

fn print_foods(foods: &[FoodPlate], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(foods)?);
    } else {
        print!("{}", view::render_list(foods));
    }
    Ok(())
}
