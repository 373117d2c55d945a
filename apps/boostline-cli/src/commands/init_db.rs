use std::path::Path;

use crate::error::CliResult;

// The database itself is opened (and migrated) in main before dispatch;
// this command only reports the result.
pub fn execute(path: &Path) -> CliResult<()> {
    println!("✅ Database ready: {}", path.display());
    Ok(())
}
