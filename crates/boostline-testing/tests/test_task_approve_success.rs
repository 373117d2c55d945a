use boostline_engine::{balance, notifications, tasks};
use boostline_entities::campaigns::PlanType;
use boostline_entities::tasks::TaskStatus;
use boostline_testing::TestFixture;

/// Approval settles a slot, credits the worker's computed balance, and
/// stamps the review trail.
#[tokio::test]
async fn test_task_approve_success() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FullEngagement, "Basico")
        .await;

    let submitted = fx.claim_and_submit(&fx.worker, &campaign).await;

    let before = balance::worker_balance(&fx.db, fx.worker.account_id)
        .await
        .expect("balance");
    assert_eq!(before.available, 0);
    assert_eq!(before.pending_earnings, 200);

    let approved = tasks::approve_task(&fx.db, &fx.admin, submitted.id)
        .await
        .expect("approve should succeed");

    assert_eq!(approved.status, TaskStatus::Approved);
    assert_eq!(approved.reviewed_by, Some(fx.admin.account_id));
    assert!(approved.reviewed_at.is_some());

    let campaign = fx.reload_campaign(campaign.id).await;
    assert_eq!(campaign.completed_count, 1);

    let after = balance::worker_balance(&fx.db, fx.worker.account_id)
        .await
        .expect("balance");
    assert_eq!(after.available, 200);
    assert_eq!(after.pending_earnings, 0);

    let inbox = notifications::list_notifications(&fx.db, &fx.worker)
        .await
        .expect("list notifications");
    assert!(inbox.iter().any(|n| n.title == "Task approved"));
}
