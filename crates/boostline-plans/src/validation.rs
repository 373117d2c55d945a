/*!
# Request Validation

Shape checks that run before the engine touches the database: plan lookup,
link well-formedness, proof completeness, withdrawal minimums. Balance and
state checks stay in the engine where the current rows are visible.
*/

use boostline_entities::campaigns::PlanType;
use url::Url;

use crate::{
    catalog::{find_plan, PlanTier, MIN_WITHDRAWAL},
    errors::{PlanError, PlanResult},
    schemas::{CampaignRequest, ProofBundle},
};

/// Validate a campaign request against the catalog.
///
/// Returns the matched tier; the caller fixes `target_count` and
/// `total_price` from it so a tampered request cannot buy a custom ratio.
pub fn validate_campaign_request(request: &CampaignRequest) -> PlanResult<&'static PlanTier> {
    validate_link(&request.target_link)?;
    if let Some(link) = request.profile_link.as_deref() {
        validate_link(link)?;
    }
    if let Some(link) = request.video_link.as_deref() {
        validate_link(link)?;
    }

    find_plan(request.plan_type, &request.plan_name).ok_or_else(|| PlanError::UnknownPlan {
        plan_type: plan_type_label(request.plan_type).to_string(),
        plan_name: request.plan_name.clone(),
    })
}

/// Validate a proof bundle for the given campaign plan type.
pub fn validate_proofs(plan_type: PlanType, proofs: &ProofBundle) -> PlanResult<()> {
    require_proof(proofs.follow.as_deref(), "follow")?;

    if plan_type == PlanType::FullEngagement {
        require_proof(proofs.like.as_deref(), "like")?;
        require_proof(proofs.comment.as_deref(), "comment")?;
        require_proof(proofs.share.as_deref(), "share")?;
    }

    Ok(())
}

/// Validate the shape of a withdrawal request (amount floor, non-empty
/// payout details). The balance ceiling is the engine's concern.
pub fn validate_withdrawal_request(amount: i64, payout_details: &str) -> PlanResult<()> {
    if amount < MIN_WITHDRAWAL {
        return Err(PlanError::AmountBelowMinimum {
            amount,
            minimum: MIN_WITHDRAWAL,
        });
    }
    if payout_details.trim().is_empty() {
        return Err(PlanError::EmptyPayoutDetails);
    }
    Ok(())
}

fn plan_type_label(plan_type: PlanType) -> &'static str {
    match plan_type {
        PlanType::FollowGrowth => "follow_growth",
        PlanType::FullEngagement => "full_engagement",
    }
}

fn require_proof(proof: Option<&str>, action: &'static str) -> PlanResult<()> {
    match proof {
        Some(url) if !url.trim().is_empty() => Ok(()),
        _ => Err(PlanError::MissingProof(action)),
    }
}

fn validate_link(link: &str) -> PlanResult<()> {
    let parsed =
        Url::parse(link).map_err(|e| PlanError::InvalidLink(format!("{link}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(PlanError::InvalidLink(format!(
            "{link}: unsupported scheme {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boostline_entities::campaigns::Platform;

    fn request() -> CampaignRequest {
        CampaignRequest {
            plan_type: PlanType::FollowGrowth,
            plan_name: "Bronze".to_string(),
            platform: Platform::Instagram,
            target_link: "https://instagram.com/some.page".to_string(),
            profile_link: None,
            video_link: None,
        }
    }

    #[test]
    fn valid_request_returns_tier() {
        let tier = validate_campaign_request(&request()).expect("valid");
        assert_eq!(tier.target_count, 200);
        assert_eq!(tier.price, 27_000);
    }

    #[test]
    fn relative_link_is_rejected() {
        let mut req = request();
        req.target_link = "instagram.com/some.page".to_string();
        assert!(matches!(
            validate_campaign_request(&req),
            Err(PlanError::InvalidLink(_))
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let mut req = request();
        req.target_link = "ftp://instagram.com/some.page".to_string();
        assert!(matches!(
            validate_campaign_request(&req),
            Err(PlanError::InvalidLink(_))
        ));
    }

    #[test]
    fn unknown_plan_is_rejected() {
        let mut req = request();
        req.plan_name = "Diamante".to_string();
        assert!(matches!(
            validate_campaign_request(&req),
            Err(PlanError::UnknownPlan { .. })
        ));
    }

    #[test]
    fn follow_proof_is_always_required() {
        let proofs = ProofBundle {
            like: Some("https://example.com/like.png".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_proofs(PlanType::FollowGrowth, &proofs),
            Err(PlanError::MissingProof("follow"))
        ));
    }

    #[test]
    fn full_engagement_requires_all_four_proofs() {
        let proofs = ProofBundle {
            follow: Some("https://example.com/follow.png".to_string()),
            like: Some("https://example.com/like.png".to_string()),
            comment: Some("https://example.com/comment.png".to_string()),
            share: None,
        };
        assert!(matches!(
            validate_proofs(PlanType::FullEngagement, &proofs),
            Err(PlanError::MissingProof("share"))
        ));
    }

    #[test]
    fn follow_growth_needs_only_follow() {
        let proofs = ProofBundle {
            follow: Some("https://example.com/follow.png".to_string()),
            ..Default::default()
        };
        validate_proofs(PlanType::FollowGrowth, &proofs).expect("follow alone is enough");
    }

    #[test]
    fn withdrawal_below_minimum_is_rejected() {
        assert!(matches!(
            validate_withdrawal_request(499, "AO06 0000"),
            Err(PlanError::AmountBelowMinimum { minimum: 500, .. })
        ));
        validate_withdrawal_request(500, "AO06 0000").expect("minimum is inclusive");
    }

    #[test]
    fn withdrawal_needs_payout_details() {
        assert!(matches!(
            validate_withdrawal_request(1_000, "   "),
            Err(PlanError::EmptyPayoutDetails)
        ));
    }
}
