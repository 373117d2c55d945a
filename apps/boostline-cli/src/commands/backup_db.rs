use sea_orm::DatabaseConnection;
use std::path::PathBuf;

use crate::error::CliResult;

pub async fn execute(db: &DatabaseConnection, output: PathBuf) -> CliResult<()> {
    println!("💾 Writing backup to {}...", output.display());
    boostline_db::backup_db(db, &output).await?;
    println!("✅ Backup complete (file is read-only)");
    Ok(())
}
