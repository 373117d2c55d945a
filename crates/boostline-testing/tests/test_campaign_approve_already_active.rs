use boostline_engine::{campaigns, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// Approval is only legal from `pending_payment`; a second approval (e.g.
/// two admins racing) reports the state mismatch.
#[tokio::test]
async fn test_campaign_approve_already_active() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Basico")
        .await;

    let err = campaigns::approve_campaign(&fx.db, &fx.admin, campaign.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidState {
            entity: "campaign",
            expected: "pending_payment",
            ..
        }
    ));
}
