use boostline_engine::tasks;
use boostline_entities::campaigns::PlanType;
use boostline_entities::tasks::TaskStatus;
use boostline_testing::TestFixture;

/// A successful claim reserves exactly one slot and materializes an
/// `in_progress` task with the plan's fixed reward.
#[tokio::test]
async fn test_claim_happy_path() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FullEngagement, "Basico")
        .await;

    let task = tasks::claim_task(&fx.db, &fx.worker, campaign.id)
        .await
        .expect("claim should succeed");

    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.reward_amount, 200);
    assert_eq!(task.worker_id, fx.worker.account_id);
    assert!(task.follow_proof_url.is_none());

    let campaign = fx.reload_campaign(campaign.id).await;
    assert_eq!(campaign.reserved_count, 1);
    assert_eq!(campaign.completed_count, 0);
}
