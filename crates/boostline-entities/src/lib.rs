/*!
# Boostline Entities

sea-orm entity models for the marketplace tables: accounts, campaigns,
tasks, withdrawals, notifications, and the device block-list.

Status columns are string-backed active enums so the database stays
readable with plain SQL tooling.
*/

pub mod accounts;
pub mod campaigns;
pub mod device_blocks;
pub mod notifications;
pub mod tasks;
pub mod withdrawals;
