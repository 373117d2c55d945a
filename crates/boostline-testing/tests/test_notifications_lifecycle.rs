use boostline_engine::{notifications, tasks, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// Lifecycle transitions leave a notification trail, mark-read flips the
/// flag, and one account cannot touch another's inbox.
#[tokio::test]
async fn test_notifications_lifecycle() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Ta Fixe")
        .await;

    // Approval notifies the worker
    fx.earn(&fx.worker, &campaign).await;

    // Rejection notifies with the reason
    let task = fx.claim_and_submit(&fx.worker, &campaign).await;
    tasks::reject_task(&fx.db, &fx.admin, task.id, "screenshot is cropped")
        .await
        .expect("reject task");

    let inbox = notifications::list_notifications(&fx.db, &fx.worker)
        .await
        .expect("list notifications");
    assert!(inbox.iter().any(|n| n.title == "Task approved"));
    let rejected = inbox
        .iter()
        .find(|n| n.title == "Task rejected")
        .expect("rejection notification missing");
    assert!(rejected.message.contains("screenshot is cropped"));
    assert!(inbox.iter().all(|n| !n.is_read));

    let read = notifications::mark_read(&fx.db, &fx.worker, rejected.id)
        .await
        .expect("mark read");
    assert!(read.is_read);

    let inbox = notifications::list_notifications(&fx.db, &fx.worker)
        .await
        .expect("list notifications");
    assert_eq!(inbox.iter().filter(|n| n.is_read).count(), 1);

    // Someone else's notification reads as not found
    let err = notifications::mark_read(&fx.db, &fx.client, rejected.id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound("notification", _)));

    // The client's own inbox only holds campaign traffic
    let client_inbox = notifications::list_notifications(&fx.db, &fx.client)
        .await
        .expect("list notifications");
    assert!(client_inbox.iter().all(|n| n.title != "Task approved"));
}
