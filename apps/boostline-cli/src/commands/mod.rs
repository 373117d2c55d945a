pub mod approve_campaign;
pub mod backup_db;
pub mod balance;
pub mod block_user;
pub mod cancel_campaign;
pub mod claim_task;
pub mod create_campaign;
pub mod export_payouts;
pub mod init_db;
pub mod list_campaigns;
pub mod list_tasks;
pub mod list_withdrawals;
pub mod notifications;
pub mod reject_campaign;
pub mod request_withdrawal;
pub mod review_task;
pub mod review_withdrawal;
pub mod seed;
pub mod submit_proofs;
pub mod unblock_user;
