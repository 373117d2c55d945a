/*!
# Boostline Engine

The campaign lifecycle and task settlement engine: every state transition
of the marketplace runs through the operations in this crate.

- [`campaigns`] — create / approve / reject / cancel, auto-completion
- [`tasks`] — claim, proof submission, review, capacity accounting
- [`withdrawals`] — request / approve / reject against the computed balance
- [`moderation`] — account and device-fingerprint blocking
- [`balance`] — the derived worker balance projection
- [`notifications`] — the side-channel every transition appends to

Operations take a [`DatabaseConnection`](sea_orm::DatabaseConnection) and an
[`Actor`] (the authenticated account id plus role, supplied by the identity
provider) and return [`EngineResult`]. Multi-step transitions run inside a
transaction; counters and status flips are conditional updates checked via
`rows_affected`, so a lost race surfaces as a typed error instead of a
double-applied transition.
*/

pub mod actor;
pub mod balance;
pub mod campaigns;
pub mod error;
pub mod moderation;
pub mod notifications;
pub mod tasks;
pub mod withdrawals;

pub use actor::Actor;
pub use balance::BalanceSummary;
pub use error::{EngineError, EngineResult};
