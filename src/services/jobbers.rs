use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::{jobber_types, jobbers};
use crate::errors::ServiceError;
use crate::models::vocab;

#[derive(Debug, Clone)]
pub struct JobberInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub jobber_type_id: Option<i64>,
    pub address: Option<String>,
    pub is_active: bool,
}

/// Service for contract-labor records and their owner-scoped type lookup.
pub struct JobberService {
    db_pool: Arc<DbPool>,
}

impl JobberService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Owner's jobbers ordered by name, with free-text search across
    /// name/phone/email/role and the type name.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        owner: Uuid,
        q: Option<&str>,
    ) -> Result<Vec<jobbers::Model>, ServiceError> {
        let mut query = jobbers::Entity::find()
            .filter(jobbers::Column::OwnerId.eq(owner))
            .order_by_asc(jobbers::Column::Name);

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            query = query
                .join(
                    sea_orm::JoinType::LeftJoin,
                    jobbers::Relation::JobberType.def(),
                )
                .filter(
                    Condition::any()
                        .add(jobbers::Column::Name.contains(q))
                        .add(jobbers::Column::Phone.contains(q))
                        .add(jobbers::Column::Email.contains(q))
                        .add(jobbers::Column::Role.contains(q))
                        .add(jobber_types::Column::Name.contains(q)),
                );
        }

        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        owner: Uuid,
        input: JobberInput,
    ) -> Result<jobbers::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let input = self.validated(owner, input, None).await?;

        let now = Utc::now();
        let jobber = jobbers::ActiveModel {
            owner_id: Set(owner),
            name: Set(input.name.clone()),
            phone: Set(input.phone.clone()),
            email: Set(input.email.clone()),
            role: Set(input
                .role
                .clone()
                .unwrap_or_else(|| vocab::DEFAULT_JOBBER_ROLE.to_string())),
            jobber_type_id: Set(input.jobber_type_id),
            address: Set(input.address.clone()),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(jobber_id = jobber.id, "jobber created");
        Ok(jobber)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        owner: Uuid,
        id: i64,
        input: JobberInput,
    ) -> Result<jobbers::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let jobber = self.get(owner, id).await?;
        let input = self.validated(owner, input, Some(id)).await?;

        let mut active: jobbers::ActiveModel = jobber.into();
        active.name = Set(input.name.clone());
        active.phone = Set(input.phone.clone());
        active.email = Set(input.email.clone());
        if let Some(role) = input.role.clone() {
            active.role = Set(role);
        }
        active.jobber_type_id = Set(input.jobber_type_id);
        active.address = Set(input.address.clone());
        active.is_active = Set(input.is_active);
        active.updated_at = Set(Utc::now());

        Ok(active.update(db).await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, owner: Uuid, id: i64) -> Result<jobbers::Model, ServiceError> {
        jobbers::Entity::find_by_id(id)
            .filter(jobbers::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Jobber {} not found", id)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, owner: Uuid, id: i64) -> Result<(), ServiceError> {
        let jobber = self.get(owner, id).await?;
        jobbers::Entity::delete_by_id(jobber.id)
            .exec(self.db_pool.as_ref())
            .await?;
        info!(jobber_id = id, "jobber deleted");
        Ok(())
    }

    async fn validated(
        &self,
        owner: Uuid,
        input: JobberInput,
        exclude_id: Option<i64>,
    ) -> Result<JobberInput, ServiceError> {
        let db = self.db_pool.as_ref();

        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::field_error("name", "This field is required."));
        }

        if let Some(role) = input.role.as_deref() {
            if !vocab::contains(vocab::JOBBER_ROLES, role) {
                return Err(ServiceError::field_error("role", "Select a valid choice."));
            }
        }

        if let Some(type_id) = input.jobber_type_id {
            let owned = jobber_types::Entity::find_by_id(type_id)
                .filter(jobber_types::Column::OwnerId.eq(owner))
                .one(db)
                .await?;
            if owned.is_none() {
                return Err(ServiceError::field_error(
                    "jobber_type_id",
                    "Select a valid choice.",
                ));
            }
        }

        let mut dup = jobbers::Entity::find()
            .filter(jobbers::Column::OwnerId.eq(owner))
            .filter(jobbers::Column::Name.eq(name.clone()));
        if let Some(id) = exclude_id {
            dup = dup.filter(jobbers::Column::Id.ne(id));
        }
        if dup.count(db).await? > 0 {
            return Err(ServiceError::conflict(
                "name",
                "A jobber with this name already exists.",
            ));
        }

        Ok(JobberInput { name, ..input })
    }

    // ---- jobber types ----

    #[instrument(skip(self))]
    pub async fn list_types(&self, owner: Uuid) -> Result<Vec<jobber_types::Model>, ServiceError> {
        Ok(jobber_types::Entity::find()
            .filter(jobber_types::Column::OwnerId.eq(owner))
            .order_by_asc(jobber_types::Column::Name)
            .all(self.db_pool.as_ref())
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn create_type(
        &self,
        owner: Uuid,
        name: &str,
    ) -> Result<jobber_types::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::field_error("name", "This field is required."));
        }
        if jobber_types::Entity::find()
            .filter(jobber_types::Column::OwnerId.eq(owner))
            .filter(jobber_types::Column::Name.eq(name.clone()))
            .count(db)
            .await?
            > 0
        {
            return Err(ServiceError::conflict(
                "name",
                "A jobber type with this name already exists.",
            ));
        }

        let now = Utc::now();
        Ok(jobber_types::ActiveModel {
            owner_id: Set(owner),
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    #[instrument(skip(self))]
    pub async fn update_type(
        &self,
        owner: Uuid,
        id: i64,
        name: &str,
    ) -> Result<jobber_types::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let existing = jobber_types::Entity::find_by_id(id)
            .filter(jobber_types::Column::OwnerId.eq(owner))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Jobber type {} not found", id)))?;

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ServiceError::field_error("name", "This field is required."));
        }
        if jobber_types::Entity::find()
            .filter(jobber_types::Column::OwnerId.eq(owner))
            .filter(jobber_types::Column::Name.eq(name.clone()))
            .filter(jobber_types::Column::Id.ne(id))
            .count(db)
            .await?
            > 0
        {
            return Err(ServiceError::conflict(
                "name",
                "A jobber type with this name already exists.",
            ));
        }

        let mut active: jobber_types::ActiveModel = existing.into();
        active.name = Set(name);
        active.updated_at = Set(Utc::now());
        Ok(active.update(db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_type(&self, owner: Uuid, id: i64) -> Result<(), ServiceError> {
        let db = self.db_pool.as_ref();
        let existing = jobber_types::Entity::find_by_id(id)
            .filter(jobber_types::Column::OwnerId.eq(owner))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Jobber type {} not found", id)))?;
        jobber_types::Entity::delete_by_id(existing.id).exec(db).await?;
        Ok(())
    }
}
