/*!
# Boostline Database Management

Unified access to the marketplace SQLite database:

1. **Open** (or create) the back-office database with [`open_db`]
2. **Scratch** databases for tests come from [`new_scratch_db`]
3. **Backup** a database to a compact read-only file with [`backup_db`]
4. **Open** saved backups in read-only mode with [`open_readonly_db`]

Every connection pool is capped at a single connection: SQLite permits one
writer at a time, and a single pooled connection serializes transactions
instead of surfacing busy errors to the engine.
*/

pub mod database;
pub mod errors;

pub use database::{backup_db, new_scratch_db, open_db, open_readonly_db};
pub use errors::{DbError, DbResult};
