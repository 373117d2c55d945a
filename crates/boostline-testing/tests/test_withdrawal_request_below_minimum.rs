use boostline_engine::{withdrawals, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_entities::withdrawals::WithdrawalMethod;
use boostline_testing::TestFixture;

/// Requests under the 500 floor are refused before any balance math, and
/// payout details are mandatory.
#[tokio::test]
async fn test_withdrawal_request_below_minimum() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FullEngagement, "Basico")
        .await;
    for _ in 0..3 {
        fx.earn(&fx.worker, &campaign).await;
    }

    let err = withdrawals::request_withdrawal(
        &fx.db,
        &fx.worker,
        499,
        WithdrawalMethod::Iban,
        "AO06 0044 0000 1234",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    let err = withdrawals::request_withdrawal(
        &fx.db,
        &fx.worker,
        500,
        WithdrawalMethod::MobileWallet,
        "   ",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    withdrawals::request_withdrawal(
        &fx.db,
        &fx.worker,
        500,
        WithdrawalMethod::MobileWallet,
        "923 000 111",
    )
    .await
    .expect("minimum with details should succeed");
}
