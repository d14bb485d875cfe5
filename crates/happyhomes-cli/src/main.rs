use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use happyhomes_cli::admin;
use happyhomes_cli::seeder::{self, SeedConfig};
use happyhomes_config::{StoreBackend, StoreConfig};
use happyhomes_db::{SharedStore, init_store};

#[derive(Parser)]
#[command(name = "happyhomes-cli")]
#[command(about = "Happy Homes CLI - Administrative tools for Happy Homes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grant the admin role to a registered user
    PromoteAdmin {
        /// Email the user registered with (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,
    },
    /// Seed the store with fake users, pets and donation campaigns
    Seed {
        /// Number of users to create
        #[arg(short = 'u', long, default_value = "10")]
        users: usize,

        /// Number of pets to create
        #[arg(short = 'p', long, default_value = "25")]
        pets: usize,

        /// Number of donation campaigns to create
        #[arg(short = 'c', long, default_value = "5")]
        campaigns: usize,
    },
    /// Remove every seeded document
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let config = StoreConfig {
        backend: StoreBackend::Postgres,
        ..StoreConfig::from_env()
    };
    let store = match init_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to connect to the store: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::PromoteAdmin { email } => handle_promote_admin(&store, email).await,
        Commands::Seed {
            users,
            pets,
            campaigns,
        } => handle_seed(&store, SeedConfig::new(users, pets, campaigns)).await,
        Commands::ClearSeed => handle_clear_seed(&store).await,
    }
}

async fn handle_promote_admin(store: &SharedStore, email: Option<String>) {
    let email = match email {
        Some(email) => email,
        None => match Input::<String>::new()
            .with_prompt("Email address")
            .interact_text()
        {
            Ok(email) => email,
            Err(e) => {
                eprintln!("❌ Failed to read email: {}", e);
                std::process::exit(1);
            }
        },
    };

    match admin::promote_admin(store.as_ref(), &email).await {
        Ok(result) if result.modified_count == 0 => {
            println!("ℹ️  {} is already an admin", email);
        }
        Ok(_) => {
            println!("✅ {} is now an admin", email);
        }
        Err(e) => {
            eprintln!("❌ Error promoting admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(store: &SharedStore, config: SeedConfig) {
    match seeder::seed_all(store.as_ref(), config).await {
        Ok(summary) => {
            println!(
                "   {} users, {} pets, {} campaigns",
                summary.users, summary.pets, summary.campaigns
            );
        }
        Err(e) => {
            eprintln!("\n❌ Error seeding store: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_seed(store: &SharedStore) {
    if let Err(e) = seeder::clear_seeded(store.as_ref()).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
