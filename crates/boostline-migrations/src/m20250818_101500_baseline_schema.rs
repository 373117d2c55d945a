use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Accounts::Id))
                    .col(string(Accounts::FullName))
                    .col(string(Accounts::Email))
                    .col(string(Accounts::Phone))
                    .col(string(Accounts::Role))
                    .col(string_null(Accounts::DeviceFingerprint))
                    .col(boolean(Accounts::Blocked))
                    .col(string_null(Accounts::BlockedReason))
                    .col(timestamp_with_time_zone(Accounts::CreatedAt))
                    .index(Index::create().col(Accounts::Email).unique())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(pk_auto(Campaigns::Id))
                    .col(integer(Campaigns::ClientId))
                    .col(string(Campaigns::PlanType))
                    .col(string(Campaigns::PlanName))
                    .col(string(Campaigns::Platform))
                    .col(string(Campaigns::TargetLink))
                    .col(string_null(Campaigns::ProfileLink))
                    .col(string_null(Campaigns::VideoLink))
                    .col(integer(Campaigns::TargetCount))
                    .col(integer(Campaigns::ReservedCount))
                    .col(integer(Campaigns::CompletedCount))
                    .col(big_integer(Campaigns::TotalPrice))
                    .col(string(Campaigns::Status))
                    .col(timestamp_with_time_zone_null(Campaigns::PaymentConfirmedAt))
                    .col(timestamp_with_time_zone(Campaigns::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Campaigns::Table, Campaigns::ClientId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_campaigns_client_status")
                    .table(Campaigns::Table)
                    .col(Campaigns::ClientId)
                    .col(Campaigns::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(pk_auto(Tasks::Id))
                    .col(integer(Tasks::CampaignId))
                    .col(integer(Tasks::WorkerId))
                    .col(string(Tasks::Status))
                    .col(big_integer(Tasks::RewardAmount))
                    .col(string_null(Tasks::FollowProofUrl))
                    .col(string_null(Tasks::LikeProofUrl))
                    .col(string_null(Tasks::CommentProofUrl))
                    .col(string_null(Tasks::ShareProofUrl))
                    .col(timestamp_with_time_zone(Tasks::AssignedAt))
                    .col(timestamp_with_time_zone_null(Tasks::CompletedAt))
                    .col(timestamp_with_time_zone_null(Tasks::ReviewedAt))
                    .col(integer_null(Tasks::ReviewedBy))
                    .col(string_null(Tasks::RejectionReason))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tasks::Table, Tasks::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tasks::Table, Tasks::WorkerId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_campaign_worker")
                    .table(Tasks::Table)
                    .col(Tasks::CampaignId)
                    .col(Tasks::WorkerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Withdrawals::Table)
                    .if_not_exists()
                    .col(pk_auto(Withdrawals::Id))
                    .col(integer(Withdrawals::WorkerId))
                    .col(big_integer(Withdrawals::Amount))
                    .col(string(Withdrawals::Method))
                    .col(string(Withdrawals::PayoutDetails))
                    .col(string(Withdrawals::Status))
                    .col(string_null(Withdrawals::RejectionReason))
                    .col(timestamp_with_time_zone(Withdrawals::CreatedAt))
                    .col(timestamp_with_time_zone_null(Withdrawals::ReviewedAt))
                    .col(integer_null(Withdrawals::ReviewedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Withdrawals::Table, Withdrawals::WorkerId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_withdrawals_worker_status")
                    .table(Withdrawals::Table)
                    .col(Withdrawals::WorkerId)
                    .col(Withdrawals::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(pk_auto(Notifications::Id))
                    .col(integer(Notifications::AccountId))
                    .col(string(Notifications::Title))
                    .col(string(Notifications::Message))
                    .col(boolean(Notifications::IsRead))
                    .col(timestamp_with_time_zone(Notifications::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Notifications::Table, Notifications::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DeviceBlocks::Table)
                    .if_not_exists()
                    .col(string(DeviceBlocks::Fingerprint).primary_key())
                    .col(integer_null(DeviceBlocks::BlockedBy))
                    .col(timestamp_with_time_zone(DeviceBlocks::BlockedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceBlocks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Withdrawals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campaigns::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
    FullName,
    Email,
    Phone,
    Role,
    DeviceFingerprint,
    Blocked,
    BlockedReason,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Campaigns {
    Table,
    Id,
    ClientId,
    PlanType,
    PlanName,
    Platform,
    TargetLink,
    ProfileLink,
    VideoLink,

    TargetCount,    // slots the client paid for
    ReservedCount,  // slots handed to workers at claim time
    CompletedCount, // slots settled by an approved review

    TotalPrice, // whole kwanzas, fixed by the plan tier
    Status,
    PaymentConfirmedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Tasks {
    Table,
    Id,
    CampaignId,
    WorkerId,
    Status,
    RewardAmount, // whole kwanzas, copied from the plan rate at claim time

    FollowProofUrl,  // -------\
    LikeProofUrl,    //         +---- one URL per required action
    CommentProofUrl, //         |
    ShareProofUrl,   // -------/

    AssignedAt,
    CompletedAt,
    ReviewedAt,
    ReviewedBy,
    RejectionReason,
}

#[derive(DeriveIden)]
enum Withdrawals {
    Table,
    Id,
    WorkerId,
    Amount, // whole kwanzas
    Method,
    PayoutDetails, // opaque, method-specific
    Status,
    RejectionReason,
    CreatedAt,
    ReviewedAt,
    ReviewedBy,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    AccountId,
    Title,
    Message,
    IsRead,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DeviceBlocks {
    Table,
    Fingerprint,
    BlockedBy,
    BlockedAt,
}
