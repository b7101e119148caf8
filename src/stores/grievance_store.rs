use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::grievance::{self, ActiveModel, Entity as Grievance};

/// Accepted targets for the status transition endpoint.
///
/// "Open" is the initial status only; it is not a legal target, and any
/// transition among the three targets here is legal from any prior status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTarget {
    InProgress,
    Resolved,
    Rejected,
}

impl StatusTarget {
    /// Parse a client-supplied target; anything outside the three accepted
    /// values (including "Open") is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "In Progress" => Some(StatusTarget::InProgress),
            "Resolved" => Some(StatusTarget::Resolved),
            "Rejected" => Some(StatusTarget::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTarget::InProgress => "In Progress",
            StatusTarget::Resolved => "Resolved",
            StatusTarget::Rejected => "Rejected",
        }
    }

    /// Resolved and Rejected stamp a resolution time; In Progress clears it
    fn resolution_timestamp(&self, now: i64) -> Option<i64> {
        match self {
            StatusTarget::Resolved | StatusTarget::Rejected => Some(now),
            StatusTarget::InProgress => None,
        }
    }
}

/// GrievanceStore manages grievance records and their status transitions
pub struct GrievanceStore {
    db: DatabaseConnection,
}

impl GrievanceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List all grievances in store order
    pub async fn list(&self) -> Result<Vec<grievance::Model>, InternalError> {
        Grievance::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("grievance list", e))
    }

    /// File a grievance; status always starts as Open with no resolution time
    pub async fn create(
        &self,
        user_id: String,
        subject: String,
        details: String,
        priority: Option<String>,
    ) -> Result<grievance::Model, InternalError> {
        let new_grievance = ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id),
            subject: Set(subject),
            details: Set(details),
            priority: Set(priority.unwrap_or_else(|| "low".to_string())),
            status: Set("Open".to_string()),
            filed_at: Set(Utc::now().timestamp()),
            resolved_at: Set(None),
        };

        new_grievance
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("grievance insert", e))
    }

    /// Transition a grievance to the given target and return the updated row.
    ///
    /// Moving into Resolved or Rejected stamps `resolved_at`; moving into
    /// In Progress clears any previously stamped value.
    pub async fn update_status(
        &self,
        id: &str,
        target: StatusTarget,
    ) -> Result<grievance::Model, InternalError> {
        let existing = Grievance::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("grievance lookup", e))?
            .ok_or_else(|| InternalError::not_found("grievance", id))?;

        let mut active = existing.into_active_model();
        active.status = Set(target.as_str().to_string());
        active.resolved_at = Set(target.resolution_timestamp(Utc::now().timestamp()));

        active
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("grievance update", e))
    }
}
