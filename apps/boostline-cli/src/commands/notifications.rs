use boostline_engine::{notifications, Actor};
use sea_orm::DatabaseConnection;

use crate::error::CliResult;

pub async fn execute(
    db: &DatabaseConnection,
    account: i32,
    mark_read: Option<i32>,
) -> CliResult<()> {
    let actor = Actor::load(db, account).await?;

    if let Some(notification_id) = mark_read {
        let notification = notifications::mark_read(db, &actor, notification_id).await?;
        println!("✅ Marked #{} read: {}", notification.id, notification.title);
        return Ok(());
    }

    let inbox = notifications::list_notifications(db, &actor).await?;
    if inbox.is_empty() {
        println!("No notifications.");
        return Ok(());
    }

    for notification in &inbox {
        let marker = if notification.is_read { " " } else { "•" };
        println!(
            "  {marker} #{} [{}] {}: {}",
            notification.id,
            notification.created_at.format("%Y-%m-%d %H:%M"),
            notification.title,
            notification.message
        );
    }
    Ok(())
}
