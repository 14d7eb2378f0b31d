//! courier CLI: drive the messaging service from the command line. Config
//! from env and `.env`; authenticated commands take the identity token
//! printed by `register` / `login`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use courier_core::{build_components, AppConfig, CourierComponents, NewUser};

#[derive(Parser)]
#[command(name = "courier")]
#[command(about = "Courier messaging service CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user and print an identity token.
    Register {
        username: String,
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: String,
    },
    /// Authenticate and print a fresh identity token.
    Login { username: String, password: String },
    /// Send a message.
    Send {
        #[arg(short, long)]
        token: String,
        to_username: String,
        body: String,
    },
    /// Show one message (participants only).
    Show {
        #[arg(short, long)]
        token: String,
        id: i64,
    },
    /// Mark a message read (recipient only).
    Read {
        #[arg(short, long)]
        token: String,
        id: i64,
    },
    /// List messages sent to you, sender profiles attached.
    Inbox {
        #[arg(short, long)]
        token: String,
    },
    /// List messages you sent, recipient profiles attached.
    Outbox {
        #[arg(short, long)]
        token: String,
    },
    /// List all user profiles.
    Users {
        #[arg(short, long)]
        token: String,
    },
    /// Show a user's full profile (own profile only).
    User {
        #[arg(short, long)]
        token: String,
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(None)?;
    config.validate()?;
    courier_core::init_tracing(&config.log_file)?;

    let components = build_components(&config).await?;
    run(cli.command, components).await
}

async fn run(command: Commands, components: CourierComponents) -> Result<()> {
    let CourierComponents {
        api,
        directory,
        tokens,
    } = components;

    match command {
        Commands::Register {
            username,
            password,
            first_name,
            last_name,
            phone,
        } => {
            let user = directory
                .register(NewUser {
                    username,
                    password,
                    first_name,
                    last_name,
                    phone,
                })
                .await?;
            let token = tokens.issue(&user.username)?;
            print_json(&user)?;
            println!("token: {}", token);
        }
        Commands::Login { username, password } => {
            if !directory.authenticate(&username, &password).await? {
                anyhow::bail!("invalid username or password");
            }
            println!("token: {}", tokens.issue(&username)?);
        }
        Commands::Send {
            token,
            to_username,
            body,
        } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.post_message(&actor, &to_username, &body).await?)?;
        }
        Commands::Show { token, id } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.get_message(&actor, id).await?)?;
        }
        Commands::Read { token, id } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.mark_read(&actor, id).await?)?;
        }
        Commands::Inbox { token } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.messages_to(&actor, &actor).await?)?;
        }
        Commands::Outbox { token } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.messages_from(&actor, &actor).await?)?;
        }
        Commands::Users { token } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.list_users(&actor).await?)?;
        }
        Commands::User { token, username } => {
            let actor = tokens.verify(&token)?;
            print_json(&api.get_user(&actor, &username).await?)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
