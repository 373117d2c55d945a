use boostline_entities::{accounts, device_blocks};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    TransactionTrait,
};
use tracing::info;

use crate::{
    actor::Actor,
    error::{EngineError, EngineResult},
    notifications::notify,
};

/// Block an account. If it carries a device fingerprint the fingerprint
/// joins the device block-list, so sibling accounts on the same device are
/// refused at claim and create time too.
pub async fn block_account(
    db: &DatabaseConnection,
    actor: &Actor,
    account_id: i32,
    reason: &str,
) -> EngineResult<accounts::Model> {
    actor.require_admin()?;
    if reason.trim().is_empty() {
        return Err(EngineError::Validation(
            "a block reason is required".to_string(),
        ));
    }

    let txn = db.begin().await?;

    let account = accounts::Entity::find_by_id(account_id)
        .one(&txn)
        .await?
        .ok_or(EngineError::NotFound("account", account_id))?;

    let fingerprint = account.device_fingerprint.clone();

    let mut active: accounts::ActiveModel = account.into();
    active.blocked = Set(true);
    active.blocked_reason = Set(Some(reason.to_string()));
    let account = active.update(&txn).await?;

    if let Some(fingerprint) = fingerprint {
        let already_listed = device_blocks::Entity::find_by_id(fingerprint.clone())
            .one(&txn)
            .await?
            .is_some();
        if !already_listed {
            device_blocks::ActiveModel {
                fingerprint: Set(fingerprint),
                blocked_by: Set(Some(actor.account_id)),
                blocked_at: Set(Utc::now()),
            }
            .insert(&txn)
            .await?;
        }
    }

    notify(
        &txn,
        account.id,
        "Account blocked",
        format!("Your account has been blocked: {reason}"),
    )
    .await?;

    txn.commit().await?;
    info!(account = account.id, "account blocked");
    Ok(account)
}

/// Undo a block, including the device-fingerprint entry if one was made.
pub async fn unblock_account(
    db: &DatabaseConnection,
    actor: &Actor,
    account_id: i32,
) -> EngineResult<accounts::Model> {
    actor.require_admin()?;

    let txn = db.begin().await?;

    let account = accounts::Entity::find_by_id(account_id)
        .one(&txn)
        .await?
        .ok_or(EngineError::NotFound("account", account_id))?;

    let fingerprint = account.device_fingerprint.clone();

    let mut active: accounts::ActiveModel = account.into();
    active.blocked = Set(false);
    active.blocked_reason = Set(None);
    let account = active.update(&txn).await?;

    if let Some(fingerprint) = fingerprint {
        device_blocks::Entity::delete_by_id(fingerprint)
            .exec(&txn)
            .await?;
    }

    notify(
        &txn,
        account.id,
        "Account unblocked",
        "Your account has been unblocked. Welcome back!".to_string(),
    )
    .await?;

    txn.commit().await?;
    info!(account = account.id, "account unblocked");
    Ok(account)
}

/// Refuse blocked actors, by account flag or by device-fingerprint
/// membership, whichever is stricter. Campaign creation and task claiming
/// both route through this.
pub(crate) async fn ensure_not_blocked<C: ConnectionTrait>(
    conn: &C,
    account: &accounts::Model,
) -> EngineResult<()> {
    if account.blocked {
        return Err(EngineError::BlockedAccount(
            account
                .blocked_reason
                .clone()
                .unwrap_or_else(|| "account is blocked".to_string()),
        ));
    }

    if let Some(fingerprint) = account.device_fingerprint.as_deref() {
        let listed = device_blocks::Entity::find_by_id(fingerprint.to_string())
            .one(conn)
            .await?
            .is_some();
        if listed {
            return Err(EngineError::BlockedAccount(
                "device is on the block-list".to_string(),
            ));
        }
    }

    Ok(())
}
