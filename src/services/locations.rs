use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::locations;
use crate::errors::ServiceError;

#[derive(Debug, Clone)]
pub struct LocationInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub pincode: String,
    pub is_active: bool,
}

/// Service for owner-scoped storage locations.
pub struct LocationService {
    db_pool: Arc<DbPool>,
}

impl LocationService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        owner: Uuid,
        q: Option<&str>,
    ) -> Result<Vec<locations::Model>, ServiceError> {
        let mut query = locations::Entity::find()
            .filter(locations::Column::OwnerId.eq(owner))
            .order_by_asc(locations::Column::Name);

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(locations::Column::Name.contains(q))
                    .add(locations::Column::City.contains(q))
                    .add(locations::Column::State.contains(q))
                    .add(locations::Column::Address.contains(q))
                    .add(locations::Column::Pincode.contains(q)),
            );
        }

        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        owner: Uuid,
        input: LocationInput,
    ) -> Result<locations::Model, ServiceError> {
        let input = self.validated(owner, input, None).await?;
        let now = Utc::now();
        let location = locations::ActiveModel {
            owner_id: Set(owner),
            name: Set(input.name),
            city: Set(input.city),
            state: Set(input.state),
            address: Set(input.address),
            pincode: Set(input.pincode),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await?;

        info!(location_id = location.id, "location created");
        Ok(location)
    }

    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        owner: Uuid,
        id: i64,
        input: LocationInput,
    ) -> Result<locations::Model, ServiceError> {
        let location = self.get(owner, id).await?;
        let input = self.validated(owner, input, Some(id)).await?;

        let mut active: locations::ActiveModel = location.into();
        active.name = Set(input.name);
        active.city = Set(input.city);
        active.state = Set(input.state);
        active.address = Set(input.address);
        active.pincode = Set(input.pincode);
        active.is_active = Set(input.is_active);
        active.updated_at = Set(Utc::now());

        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, owner: Uuid, id: i64) -> Result<locations::Model, ServiceError> {
        locations::Entity::find_by_id(id)
            .filter(locations::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Location {} not found", id)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, owner: Uuid, id: i64) -> Result<(), ServiceError> {
        let location = self.get(owner, id).await?;
        locations::Entity::delete_by_id(location.id)
            .exec(self.db_pool.as_ref())
            .await?;
        info!(location_id = id, "location deleted");
        Ok(())
    }

    async fn validated(
        &self,
        owner: Uuid,
        mut input: LocationInput,
        exclude_id: Option<i64>,
    ) -> Result<LocationInput, ServiceError> {
        input.name = input.name.trim().to_string();
        if input.name.is_empty() {
            return Err(ServiceError::field_error("name", "This field is required."));
        }

        let mut dup = locations::Entity::find()
            .filter(locations::Column::OwnerId.eq(owner))
            .filter(locations::Column::Name.eq(input.name.clone()));
        if let Some(id) = exclude_id {
            dup = dup.filter(locations::Column::Id.ne(id));
        }
        if dup.count(self.db_pool.as_ref()).await? > 0 {
            return Err(ServiceError::conflict(
                "name",
                "A location with this name already exists.",
            ));
        }

        Ok(input)
    }
}
