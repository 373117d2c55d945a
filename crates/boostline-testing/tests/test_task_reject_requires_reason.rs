use boostline_engine::{tasks, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_entities::tasks::TaskStatus;
use boostline_testing::TestFixture;

/// Rejection must carry a reason; the worker sees it in the notification
/// and on the task itself.
#[tokio::test]
async fn test_task_reject_requires_reason() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Basico")
        .await;

    let submitted = fx.claim_and_submit(&fx.worker, &campaign).await;

    let err = tasks::reject_task(&fx.db, &fx.admin, submitted.id, "")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let rejected = tasks::reject_task(&fx.db, &fx.admin, submitted.id, "wrong account followed")
        .await
        .expect("reject with reason should succeed");
    assert_eq!(rejected.status, TaskStatus::Rejected);
    assert_eq!(
        rejected.rejection_reason.as_deref(),
        Some("wrong account followed")
    );
}
