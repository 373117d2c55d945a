use boostline_engine::{tasks, EngineError};
use boostline_entities::accounts::Role;
use boostline_entities::campaigns::{CampaignStatus, PlanType};
use boostline_testing::TestFixture;

/// Reservations, not settlements, bound claiming: once every slot is
/// reserved a fresh worker is refused even though nothing is settled yet.
#[tokio::test]
async fn test_claim_capacity_exhausted() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Basico")
        .await;

    for _ in 0..campaign.target_count {
        let worker = fx.create_account(Role::Worker, None).await;
        tasks::claim_task(&fx.db, &worker, campaign.id)
            .await
            .expect("claim within capacity should succeed");
    }

    let current = fx.reload_campaign(campaign.id).await;
    assert_eq!(current.reserved_count, current.target_count);
    assert_eq!(current.completed_count, 0);
    assert_eq!(current.status, CampaignStatus::Active);

    let late_worker = fx.create_account(Role::Worker, None).await;
    let err = tasks::claim_task(&fx.db, &late_worker, campaign.id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::CapacityExceeded));
}
