use boostline_entities::notifications;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    actor::Actor,
    error::{EngineError, EngineResult},
};

/// Append a notification. Called from inside lifecycle transactions so the
/// record commits (or rolls back) together with the transition it reports.
pub(crate) async fn notify<C: ConnectionTrait>(
    conn: &C,
    account_id: i32,
    title: &str,
    message: String,
) -> Result<(), sea_orm::DbErr> {
    notifications::ActiveModel {
        account_id: Set(account_id),
        title: Set(title.to_string()),
        message: Set(message),
        is_read: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(())
}

/// All notifications addressed to the caller, newest first.
pub async fn list_notifications<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
) -> EngineResult<Vec<notifications::Model>> {
    Ok(notifications::Entity::find()
        .filter(notifications::Column::AccountId.eq(actor.account_id))
        .order_by_desc(notifications::Column::CreatedAt)
        .all(conn)
        .await?)
}

/// Mark one of the caller's notifications read. A notification owned by
/// someone else is reported as not found rather than forbidden.
pub async fn mark_read<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
    notification_id: i32,
) -> EngineResult<notifications::Model> {
    let notification = notifications::Entity::find_by_id(notification_id)
        .one(conn)
        .await?
        .filter(|n| n.account_id == actor.account_id)
        .ok_or(EngineError::NotFound("notification", notification_id))?;

    let mut active: notifications::ActiveModel = notification.into();
    active.is_read = Set(true);
    Ok(active.update(conn).await?)
}
