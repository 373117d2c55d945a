use boostline_engine::{tasks, EngineError};
use boostline_entities::accounts::Role;
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// Workers can only submit against their own tasks; someone else's task
/// is reported as not found, not as forbidden.
#[tokio::test]
async fn test_submit_proofs_wrong_owner() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Basico")
        .await;

    let task = tasks::claim_task(&fx.db, &fx.worker, campaign.id)
        .await
        .expect("claim should succeed");

    let interloper = fx.create_account(Role::Worker, None).await;
    let err = tasks::submit_proofs(
        &fx.db,
        &interloper,
        task.id,
        TestFixture::proofs_for(campaign.plan_type),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::NotFound("task", _)));
}
