use boostline_engine::{campaigns, moderation, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// Blocked clients cannot spend.
#[tokio::test]
async fn test_campaign_create_blocked_client() {
    let fx = TestFixture::new().await;

    moderation::block_account(&fx.db, &fx.admin, fx.client.account_id, "chargeback abuse")
        .await
        .expect("block should succeed");

    let err = campaigns::create_campaign(
        &fx.db,
        &fx.client,
        TestFixture::campaign_request(PlanType::FollowGrowth, "Basico"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::BlockedAccount(_)));
}
