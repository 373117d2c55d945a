use boostline_engine::{campaigns, notifications};
use boostline_entities::campaigns::{CampaignStatus, PlanType};
use boostline_testing::TestFixture;

/// Approving payment flips the campaign to `active`, stamps the
/// confirmation time, and notifies the client.
#[tokio::test]
async fn test_campaign_approve_success() {
    let fx = TestFixture::new().await;

    let created = campaigns::create_campaign(
        &fx.db,
        &fx.client,
        TestFixture::campaign_request(PlanType::FullEngagement, "Ta Fixe"),
    )
    .await
    .expect("create should succeed");

    let approved = campaigns::approve_campaign(&fx.db, &fx.admin, created.id)
        .await
        .expect("approve should succeed");

    assert_eq!(approved.status, CampaignStatus::Active);
    assert!(approved.payment_confirmed_at.is_some());

    let inbox = notifications::list_notifications(&fx.db, &fx.client)
        .await
        .expect("list notifications");
    assert!(inbox.iter().any(|n| n.title == "Payment confirmed"));
}
