use boostline_engine::{campaigns, moderation, tasks, EngineError};
use boostline_entities::accounts::Role;
use boostline_entities::campaigns::PlanType;
use boostline_testing::TestFixture;

/// Block and unblock round-trip: a blocked worker cannot claim, a blocked
/// client cannot create, and unblocking restores both. The fingerprint
/// entry disappears with the unblock.
#[tokio::test]
async fn test_moderation_block_unblock() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FollowGrowth, "Ta Fixe")
        .await;

    let worker = fx.create_account(Role::Worker, Some("device-m1")).await;

    // A block needs a reason
    let err = moderation::block_account(&fx.db, &fx.admin, worker.account_id, "  ")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let blocked = moderation::block_account(&fx.db, &fx.admin, worker.account_id, "proof fraud")
        .await
        .expect("block should succeed");
    assert!(blocked.blocked);
    assert_eq!(blocked.blocked_reason.as_deref(), Some("proof fraud"));

    let err = tasks::claim_task(&fx.db, &worker, campaign.id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::BlockedAccount(_)));

    // A sibling account on the same device is refused too
    let sibling = fx.create_account(Role::Worker, Some("device-m1")).await;
    let err = tasks::claim_task(&fx.db, &sibling, campaign.id)
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::BlockedAccount(_)));

    // Only admins moderate
    let err = moderation::block_account(&fx.db, &fx.client, worker.account_id, "nope")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Unauthorized("admin")));

    let unblocked = moderation::unblock_account(&fx.db, &fx.admin, worker.account_id)
        .await
        .expect("unblock should succeed");
    assert!(!unblocked.blocked);
    assert_eq!(unblocked.blocked_reason, None);

    // Both the account and its device sibling can work again
    tasks::claim_task(&fx.db, &worker, campaign.id)
        .await
        .expect("claim after unblock should succeed");
    tasks::claim_task(&fx.db, &sibling, campaign.id)
        .await
        .expect("sibling claim after unblock should succeed");

    // Blocking a client stops campaign creation as well
    moderation::block_account(&fx.db, &fx.admin, fx.client.account_id, "chargeback")
        .await
        .expect("block client");
    let err = campaigns::create_campaign(
        &fx.db,
        &fx.client,
        TestFixture::campaign_request(PlanType::FollowGrowth, "Basico"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::BlockedAccount(_)));
}
