use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::db::DbPool;
use crate::entities::parties;
use crate::errors::ServiceError;
use crate::models::vocab;

#[derive(Debug, Clone)]
pub struct PartyInput {
    pub party_name: String,
    pub full_name: String,
    pub address: String,
    pub pan_number: String,
    pub gst_number: String,
    pub tan_number: String,
    pub state: String,
    pub phone_number: String,
    pub email: String,
}

/// Service for trading parties. Parties carry no owner column; every
/// authenticated user sees the same set.
pub struct PartyService {
    db_pool: Arc<DbPool>,
}

impl PartyService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, q: Option<&str>) -> Result<Vec<parties::Model>, ServiceError> {
        let mut query = parties::Entity::find().order_by_desc(parties::Column::Id);

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(parties::Column::PartyName.contains(q))
                    .add(parties::Column::FullName.contains(q))
                    .add(parties::Column::GstNumber.contains(q))
                    .add(parties::Column::PhoneNumber.contains(q))
                    .add(parties::Column::Email.contains(q)),
            );
        }

        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: PartyInput) -> Result<parties::Model, ServiceError> {
        let input = validated(input)?;
        let now = Utc::now();
        let party = parties::ActiveModel {
            party_name: Set(input.party_name),
            full_name: Set(input.full_name),
            address: Set(input.address),
            pan_number: Set(input.pan_number),
            gst_number: Set(input.gst_number),
            tan_number: Set(input.tan_number),
            state: Set(input.state),
            phone_number: Set(input.phone_number),
            email: Set(input.email),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await?;

        info!(party_id = party.id, "party created");
        Ok(party)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: PartyInput) -> Result<parties::Model, ServiceError> {
        let party = self.get(id).await?;
        let input = validated(input)?;

        let mut active: parties::ActiveModel = party.into();
        active.party_name = Set(input.party_name);
        active.full_name = Set(input.full_name);
        active.address = Set(input.address);
        active.pan_number = Set(input.pan_number);
        active.gst_number = Set(input.gst_number);
        active.tan_number = Set(input.tan_number);
        active.state = Set(input.state);
        active.phone_number = Set(input.phone_number);
        active.email = Set(input.email);
        active.updated_at = Set(Utc::now());

        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<parties::Model, ServiceError> {
        parties::Entity::find_by_id(id)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Party {} not found", id)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let party = self.get(id).await?;
        parties::Entity::delete_by_id(party.id)
            .exec(self.db_pool.as_ref())
            .await?;
        info!(party_id = id, "party deleted");
        Ok(())
    }
}

fn validated(mut input: PartyInput) -> Result<PartyInput, ServiceError> {
    input.party_name = input.party_name.trim().to_string();
    if input.party_name.is_empty() {
        return Err(ServiceError::field_error(
            "party_name",
            "This field is required.",
        ));
    }
    if !input.state.is_empty() && !vocab::contains(vocab::INDIA_STATE_CODES, &input.state) {
        return Err(ServiceError::field_error("state", "Select a valid choice."));
    }
    Ok(input)
}
