/*!
# Boostline Plans

The static commercial catalog and the validation that sits in front of the
engine:

- **Catalog**: plan tiers per plan type (target count and price), per-task
  reward rates, the withdrawal minimum, and the claim window.
- **Schemas**: the typed campaign-request and proof-bundle inputs.
- **Validation**: plan lookup, target-link well-formedness, proof
  completeness, and withdrawal request shape.

Prices and rewards are whole kwanzas carried as `i64`; [`money`] converts
to `Decimal` at the presentation edge.
*/

pub mod catalog;
pub mod errors;
pub mod money;
pub mod schemas;
pub mod validation;

pub use catalog::{
    find_plan, plans_for, reward_for, PlanTier, CLAIM_WINDOW_HOURS, MIN_WITHDRAWAL,
};
pub use errors::{PlanError, PlanResult};
pub use schemas::{CampaignRequest, ProofBundle};
pub use validation::{validate_campaign_request, validate_proofs, validate_withdrawal_request};
