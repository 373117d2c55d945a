use boostline_engine::{withdrawals, EngineError};
use boostline_entities::campaigns::PlanType;
use boostline_entities::withdrawals::WithdrawalMethod;
use boostline_testing::TestFixture;

/// Two admins deciding the same withdrawal: the first decision sticks,
/// the second is a state error and the debit applies at most once.
#[tokio::test]
async fn test_withdrawal_double_review() {
    let fx = TestFixture::new().await;
    let campaign = fx
        .create_active_campaign(PlanType::FullEngagement, "Basico")
        .await;
    for _ in 0..3 {
        fx.earn(&fx.worker, &campaign).await;
    }

    let pending = withdrawals::request_withdrawal(
        &fx.db,
        &fx.worker,
        500,
        WithdrawalMethod::Iban,
        "AO06 0044 0000 1234",
    )
    .await
    .expect("request should succeed");

    withdrawals::approve_withdrawal(&fx.db, &fx.admin, pending.id)
        .await
        .expect("first decision should succeed");

    let err = withdrawals::approve_withdrawal(&fx.db, &fx.admin, pending.id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidState {
            entity: "withdrawal",
            expected: "pending",
            ..
        }
    ));

    let err = withdrawals::reject_withdrawal(&fx.db, &fx.admin, pending.id, "too late")
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidState { .. }));
}
