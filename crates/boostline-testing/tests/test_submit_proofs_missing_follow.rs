use boostline_engine::{tasks, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_entities::tasks::TaskStatus;
use boostline_plans::ProofBundle;
use boostline_testing::TestFixture;

/// The follow proof is required for every plan; a submission without it
/// leaves the task untouched in `in_progress`.
#[tokio::test]
async fn test_submit_proofs_missing_follow() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Basico")
        .await;

    let task = tasks::claim_task(&fx.db, &fx.worker, campaign.id)
        .await
        .expect("claim should succeed");

    let err = tasks::submit_proofs(&fx.db, &fx.worker, task.id, ProofBundle::default())
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let task = fx.reload_task(task.id).await;
    assert_eq!(task.status, TaskStatus::InProgress);
    assert!(task.completed_at.is_none());
}
