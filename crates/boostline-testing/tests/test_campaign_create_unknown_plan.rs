use boostline_engine::{campaigns, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// A plan name that is not in the catalog for the chosen plan type is a
/// validation failure; clients cannot buy custom count/price ratios.
#[tokio::test]
async fn test_campaign_create_unknown_plan() {
    let fx = TestFixture::new().await;

    let mut request = TestFixture::campaign_request(PlanType::FollowGrowth, "Basico");
    request.plan_name = "Diamante".to_string();

    let err = campaigns::create_campaign(&fx.db, &fx.client, request)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}
