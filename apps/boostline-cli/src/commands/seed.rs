use boostline_entities::accounts;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use std::fs::File;
use std::path::PathBuf;

use crate::config::SeedConfig;
use crate::error::CliResult;

pub async fn execute(db: &DatabaseConnection, config: PathBuf) -> CliResult<()> {
    println!("🌱 Seeding accounts from {}...", config.display());

    let file = File::open(&config)?;
    let seed: SeedConfig = serde_yaml::from_reader(file)?;

    for entry in &seed.accounts {
        let account = accounts::ActiveModel {
            full_name: Set(entry.full_name.clone()),
            email: Set(entry.email.clone()),
            phone: Set(entry.phone.clone()),
            role: Set(entry.role),
            device_fingerprint: Set(entry.device_fingerprint.clone()),
            blocked: Set(false),
            blocked_reason: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        println!("  👤 #{} {} ({:?})", account.id, account.email, account.role);
    }

    println!("✅ Seeded {} accounts", seed.accounts.len());
    Ok(())
}
