use boostline_engine::{moderation, tasks, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// A blocked worker cannot claim; unblocking restores access.
#[tokio::test]
async fn test_claim_blocked_account() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Basico")
        .await;

    moderation::block_account(&fx.db, &fx.admin, fx.worker.account_id, "fake proofs")
        .await
        .expect("block should succeed");

    let err = tasks::claim_task(&fx.db, &fx.worker, campaign.id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::BlockedAccount(_)));

    moderation::unblock_account(&fx.db, &fx.admin, fx.worker.account_id)
        .await
        .expect("unblock should succeed");

    tasks::claim_task(&fx.db, &fx.worker, campaign.id)
        .await
        .expect("claim after unblock should succeed");
}
