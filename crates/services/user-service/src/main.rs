//! User Service - command line front end for user management.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppError;
use domain::UserResponse;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::service::UserService;
use user_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management service")]
struct Cli {
    /// Database URL (overrides USER_SERVICE_DATABASE_URL / DATABASE_URL)
    #[arg(long, global = true, env = "USER_SERVICE_DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    User(UserCommands),
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Register a new user and print its id
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change a user's name and/or email
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Print one user as JSON
    Get { id: String },
    /// Print all users as JSON
    List,
    /// Delete a user
    Delete { id: String },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = UserServiceConfig::from_env();
    if let Some(url) = cli.database_url.clone() {
        config = config.with_database_url(url);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<AppError>() {
                Some(app) => {
                    eprintln!("error [{}]: {}", app.code(), app.user_message());
                    if app.is_client_error() {
                        // bad input, not a system failure
                        return ExitCode::from(2);
                    }
                }
                None => eprintln!("error: {}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(
    command: Commands,
    config: &UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(config, migrate_action).await
        }
        Commands::User(command) => {
            let service = user_service_lib::connect_user_service(config).await?;
            run_user_command(command, service.as_ref()).await
        }
    }
}

async fn run_user_command(
    command: UserCommands,
    service: &dyn UserService,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        UserCommands::Register { name, email } => {
            let id = service.register_user(&name, &email).await?;
            println!("{}", id);
        }
        UserCommands::Update { id, name, email } => {
            service
                .update_user(&id, name.as_deref(), email.as_deref())
                .await?;
        }
        UserCommands::Get { id } => match service.get_user(&id).await? {
            Some(user) => println!("{}", serde_json::to_string_pretty(&UserResponse::from(user))?),
            None => println!("null"),
        },
        UserCommands::List => {
            let users: Vec<UserResponse> = service
                .get_all_users()
                .await?
                .into_iter()
                .map(UserResponse::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        UserCommands::Delete { id } => {
            service.delete_user(&id).await?;
        }
    }

    Ok(())
}
