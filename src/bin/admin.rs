//! CLI administration tool for the classifieds backend.
//!
//! Covers the operations the HTTP API deliberately does not expose: granting
//! the `ADMIN` role and physically deleting users or ads.
//!
//! # Usage
//!
//! ```bash
//! # Create an administrator account
//! cargo run --bin admin -- user create-admin --email admin@example.com
//!
//! # Delete a user and everything they own
//! cargo run --bin admin -- user delete someone@example.com
//!
//! # Delete an ad
//! cargo run --bin admin -- ad delete 3f0c...-...
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `ENCRYPTION_KEY` (user commands): the server's 32-byte key
//! - `REDIS_URL` (optional): flushed search cache after `ad delete`

use classifieds::application::use_cases::{RegisterUserCommand, RegisterUserUseCase};
use classifieds::domain::entities::UserRole;
use classifieds::domain::repositories::{AdRepository, UserRepository};
use classifieds::domain::value_objects::Email;
use classifieds::infrastructure::cache::{RedisCache, SearchCache};
use classifieds::infrastructure::persistence::{PgAdRepository, PgUserRepository};
use classifieds::infrastructure::security::AesEncryptionService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// CLI tool for managing the classifieds backend.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage ads
    Ad {
        #[command(subcommand)]
        action: AdAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account with the ADMIN role
    CreateAdmin {
        #[arg(short, long)]
        email: Option<String>,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a user by email, with their ads and conversations
    Delete { email: String },
}

#[derive(Subcommand)]
enum AdAction {
    /// Delete an ad by id
    Delete { id: Uuid },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Ad { action } => handle_ad_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

type UserPorts = (Arc<PgUserRepository>, Arc<AesEncryptionService>);

fn user_repository(pool: &PgPool) -> Result<UserPorts> {
    let key = std::env::var("ENCRYPTION_KEY").context("ENCRYPTION_KEY must be set")?;
    let encryption =
        Arc::new(AesEncryptionService::new(key.as_bytes()).context("Invalid ENCRYPTION_KEY")?);
    let repo = Arc::new(PgUserRepository::new(
        Arc::new(pool.clone()),
        encryption.clone(),
    ));
    Ok((repo, encryption))
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let (repo, encryption) = user_repository(pool)?;

    match action {
        UserAction::CreateAdmin {
            email,
            first_name,
            last_name,
            yes,
        } => {
            let use_case = RegisterUserUseCase::new(repo, encryption);
            create_admin(use_case, email, first_name, last_name, yes).await?;
        }
        UserAction::Delete { email } => delete_user(repo, email).await?,
    }

    Ok(())
}

/// Creates an administrator through the regular registration rules
/// (password policy, email format, uniqueness).
async fn create_admin(
    use_case: RegisterUserUseCase,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Admin Account".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let first_name = match first_name {
        Some(n) => n,
        None => Input::new().with_prompt("First name").interact_text()?,
    };
    let last_name = match last_name {
        Some(n) => n,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("  Email: {}", email.cyan());
    println!("  Name:  {} {}", first_name.cyan(), last_name.cyan());
    println!("  Role:  {}", "ADMIN".bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = use_case
        .register(
            RegisterUserCommand {
                email,
                password,
                first_name,
                last_name,
                phone: None,
            },
            UserRole::Admin,
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create admin: {}", e))?;

    println!();
    println!("{}", "✅ Admin created successfully!".green().bold());
    println!("  ID: {}", user.id().to_string().bright_black());
    println!();

    Ok(())
}

async fn delete_user(repo: Arc<PgUserRepository>, email: String) -> Result<()> {
    println!("{}", "🗑️  Delete User".bright_blue().bold());
    println!();

    let email = Email::create(&email).map_err(|e| anyhow::anyhow!("{}", e))?;
    let user = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  User: {}", user.email().as_str().cyan());
    println!("  ID:   {}", user.id().to_string().bright_black());
    println!();
    println!(
        "{}",
        "⚠️  Their ads, conversations and messages are deleted too.".yellow()
    );
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this user?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete(user.id())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!();
    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

async fn handle_ad_action(action: AdAction, pool: &PgPool) -> Result<()> {
    match action {
        AdAction::Delete { id } => {
            let repo = PgAdRepository::new(Arc::new(pool.clone()));
            delete_ad(&repo, id).await?;
        }
    }
    Ok(())
}

async fn delete_ad(repo: &PgAdRepository, id: Uuid) -> Result<()> {
    let ad = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Ad not found")?;

    println!("  Ad:     {}", ad.title().cyan());
    println!("  Status: {}", ad.status().to_string().bright_white());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this ad?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete ad: {}", e))?;

    if let Ok(redis_url) = std::env::var("REDIS_URL") {
        match RedisCache::connect(&redis_url).await {
            Ok(redis) => SearchCache::new(Arc::new(redis), 0).invalidate_ad_related().await,
            Err(e) => println!("{} {}", "⚠️  Search cache not flushed:".yellow(), e),
        }
    }

    println!("{}", "✅ Ad deleted".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let by_status: Vec<(String, i64)> =
        sqlx::query_as("SELECT status, COUNT(*) FROM ads GROUP BY status ORDER BY status")
            .fetch_all(pool)
            .await?;

    let conversations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversations")
        .fetch_one(pool)
        .await?;

    let messages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:         {}",
        users.to_string().bright_green().bold()
    );
    for (status, count) in &by_status {
        println!(
            "  Ads {:<10} {}",
            format!("{}:", status),
            count.to_string().bright_green().bold()
        );
    }
    println!(
        "  Conversations: {}",
        conversations.to_string().bright_green().bold()
    );
    println!(
        "  Messages:      {}",
        messages.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
