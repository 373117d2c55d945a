use boostline_engine::{campaigns, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// Target links must be absolute http(s) URLs.
#[tokio::test]
async fn test_campaign_create_invalid_link() {
    let fx = TestFixture::new().await;

    let mut request = TestFixture::campaign_request(PlanType::FollowGrowth, "Basico");
    request.target_link = "instagram.com/no-scheme".to_string();

    let err = campaigns::create_campaign(&fx.db, &fx.client, request)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}
