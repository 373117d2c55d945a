use boostline_engine::{balance, notifications, withdrawals};
use boostline_entities::campaigns::PlanType;
use boostline_entities::withdrawals::{WithdrawalMethod, WithdrawalStatus};
use boostline_testing::TestFixture;

/// The balance projection reflects an approved withdrawal immediately,
/// and only then.
#[tokio::test]
async fn test_withdrawal_approve_debits_balance() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FullEngagement, "Basico")
        .await;
    for _ in 0..5 {
        fx.earn(&fx.worker, &campaign).await;
    }

    let pending = withdrawals::request_withdrawal(
        &fx.db,
        &fx.worker,
        600,
        WithdrawalMethod::MobileWallet,
        "923 000 111",
    )
    .await
    .expect("request should succeed");

    // Pending requests do not debit
    let bal = balance::worker_balance(&fx.db, fx.worker.account_id)
        .await
        .expect("balance");
    assert_eq!(bal.available, 1_000);

    let approved = withdrawals::approve_withdrawal(&fx.db, &fx.admin, pending.id)
        .await
        .expect("approve should succeed");
    assert_eq!(approved.status, WithdrawalStatus::Approved);
    assert_eq!(approved.reviewed_by, Some(fx.admin.account_id));

    let bal = balance::worker_balance(&fx.db, fx.worker.account_id)
        .await
        .expect("balance");
    assert_eq!(bal.available, 400);
    assert_eq!(bal.total_withdrawn, 600);
    assert!(bal.available >= 0);

    let inbox = notifications::list_notifications(&fx.db, &fx.worker)
        .await
        .expect("list notifications");
    assert!(inbox.iter().any(|n| n.title == "Withdrawal approved"));
}
