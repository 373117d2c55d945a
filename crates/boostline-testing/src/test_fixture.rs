use std::sync::atomic::{AtomicU32, Ordering};

use boostline_engine::{campaigns, tasks, Actor};
use boostline_entities::accounts::{self, Role};
use boostline_entities::campaigns::{
    self as campaign_entities, CampaignStatus, PlanType, Platform,
};
use boostline_entities::tasks as task_entities;
use boostline_plans::{CampaignRequest, ProofBundle};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};

static NEXT_ACCOUNT: AtomicU32 = AtomicU32::new(1);

/// A fresh migrated database plus one account per role.
pub struct TestFixture {
    pub db: DatabaseConnection,
    pub admin: Actor,
    pub client: Actor,
    pub worker: Actor,
}

impl TestFixture {
    pub async fn new() -> Self {
        let db = boostline_db::new_scratch_db()
            .await
            .expect("failed to create scratch database");

        let admin = create_account(&db, Role::Admin, None).await;
        let client = create_account(&db, Role::Client, None).await;
        let worker = create_account(&db, Role::Worker, None).await;

        Self {
            db,
            admin,
            client,
            worker,
        }
    }

    /// Seed an extra account, optionally pinned to a device fingerprint.
    pub async fn create_account(&self, role: Role, fingerprint: Option<&str>) -> Actor {
        create_account(&self.db, role, fingerprint).await
    }

    /// A well-formed request for the given tier.
    pub fn campaign_request(plan_type: PlanType, plan_name: &str) -> CampaignRequest {
        CampaignRequest {
            plan_type,
            plan_name: plan_name.to_string(),
            platform: Platform::Instagram,
            target_link: "https://instagram.com/boostline.demo".to_string(),
            profile_link: None,
            video_link: None,
        }
    }

    /// Proofs sufficient for the given plan type.
    pub fn proofs_for(plan_type: PlanType) -> ProofBundle {
        let url = |action: &str| Some(format!("https://cdn.example.com/proof-{action}.png"));
        match plan_type {
            PlanType::FollowGrowth => ProofBundle {
                follow: url("follow"),
                ..Default::default()
            },
            PlanType::FullEngagement => ProofBundle {
                follow: url("follow"),
                like: url("like"),
                comment: url("comment"),
                share: url("share"),
            },
        }
    }

    /// Create a campaign for the seeded client and approve it.
    pub async fn create_active_campaign(
        &self,
        plan_type: PlanType,
        plan_name: &str,
    ) -> campaign_entities::Model {
        let created = campaigns::create_campaign(
            &self.db,
            &self.client,
            Self::campaign_request(plan_type, plan_name),
        )
        .await
        .expect("failed to create campaign");

        let approved = campaigns::approve_campaign(&self.db, &self.admin, created.id)
            .await
            .expect("failed to approve campaign");
        assert_eq!(approved.status, CampaignStatus::Active);
        approved
    }

    /// Claim a slot and submit matching proofs, leaving the task in review.
    pub async fn claim_and_submit(
        &self,
        worker: &Actor,
        campaign: &campaign_entities::Model,
    ) -> task_entities::Model {
        let task = tasks::claim_task(&self.db, worker, campaign.id)
            .await
            .expect("failed to claim task");
        tasks::submit_proofs(
            &self.db,
            worker,
            task.id,
            Self::proofs_for(campaign.plan_type),
        )
        .await
        .expect("failed to submit proofs")
    }

    /// Run one full settlement for the worker: claim, submit, approve.
    pub async fn earn(
        &self,
        worker: &Actor,
        campaign: &campaign_entities::Model,
    ) -> task_entities::Model {
        let task = self.claim_and_submit(worker, campaign).await;
        tasks::approve_task(&self.db, &self.admin, task.id)
            .await
            .expect("failed to approve task")
    }

    pub async fn reload_campaign(&self, campaign_id: i32) -> campaign_entities::Model {
        campaign_entities::Entity::find_by_id(campaign_id)
            .one(&self.db)
            .await
            .expect("failed to query campaign")
            .expect("campaign disappeared")
    }

    pub async fn reload_task(&self, task_id: i32) -> task_entities::Model {
        task_entities::Entity::find_by_id(task_id)
            .one(&self.db)
            .await
            .expect("failed to query task")
            .expect("task disappeared")
    }
}

async fn create_account(
    db: &DatabaseConnection,
    role: Role,
    fingerprint: Option<&str>,
) -> Actor {
    let n = NEXT_ACCOUNT.fetch_add(1, Ordering::Relaxed);
    let label = match role {
        Role::Admin => "admin",
        Role::Client => "client",
        Role::Worker => "worker",
    };

    let account = accounts::ActiveModel {
        full_name: Set(format!("Test {label} {n}")),
        email: Set(format!("{label}{n}@boostline.test")),
        phone: Set(format!("9{n:08}")),
        role: Set(role),
        device_fingerprint: Set(fingerprint.map(str::to_string)),
        blocked: Set(false),
        blocked_reason: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("failed to seed account");

    Actor::of(&account)
}
