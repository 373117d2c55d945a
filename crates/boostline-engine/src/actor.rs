use boostline_entities::accounts::{self, Role};
use sea_orm::{ConnectionTrait, EntityTrait};

use crate::error::{EngineError, EngineResult};

/// The authenticated caller of an operation.
///
/// Identity comes from the external access provider; the engine trusts the
/// account id and role and performs authorization only. Every operation
/// gates through exactly one `require_*` call, so permissions live here
/// rather than as scattered role conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub account_id: i32,
    pub role: Role,
}

impl Actor {
    pub fn new(account_id: i32, role: Role) -> Self {
        Self { account_id, role }
    }

    /// Build an actor from a stored account row.
    pub fn of(account: &accounts::Model) -> Self {
        Self::new(account.id, account.role)
    }

    /// Look the account up and build an actor from it.
    pub async fn load<C: ConnectionTrait>(conn: &C, account_id: i32) -> EngineResult<Self> {
        let account = accounts::Entity::find_by_id(account_id)
            .one(conn)
            .await?
            .ok_or(EngineError::NotFound("account", account_id))?;
        Ok(Self::of(&account))
    }

    pub fn require_admin(&self) -> EngineResult<()> {
        self.require(Role::Admin, "admin")
    }

    pub fn require_client(&self) -> EngineResult<()> {
        self.require(Role::Client, "client")
    }

    pub fn require_worker(&self) -> EngineResult<()> {
        self.require(Role::Worker, "worker")
    }

    fn require(&self, role: Role, label: &'static str) -> EngineResult<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(EngineError::Unauthorized(label))
        }
    }
}
