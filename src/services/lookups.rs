use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::{material_shades, material_types};
use crate::errors::ServiceError;
use crate::models::material::MaterialKind;

#[derive(Debug, Clone)]
pub struct MaterialTypeInput {
    pub material_kind: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MaterialShadeInput {
    pub material_kind: Option<String>,
    pub name: String,
    pub code: Option<String>,
    pub notes: Option<String>,
}

/// Service for the owner-scoped material lookup tables. The rows offered to
/// a user are always restricted to that user's own, ordered by name.
pub struct LookupService {
    db_pool: Arc<DbPool>,
}

impl LookupService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    // ---- material types ----

    #[instrument(skip(self))]
    pub async fn list_types(
        &self,
        owner: Uuid,
        q: Option<&str>,
    ) -> Result<Vec<material_types::Model>, ServiceError> {
        let mut query = material_types::Entity::find()
            .filter(material_types::Column::OwnerId.eq(owner))
            .order_by_asc(material_types::Column::Name);

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(material_types::Column::Name.contains(q))
                    .add(material_types::Column::Description.contains(q)),
            );
        }

        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_type(
        &self,
        owner: Uuid,
        input: MaterialTypeInput,
    ) -> Result<material_types::Model, ServiceError> {
        let input = validated_type(input)?;
        let now = Utc::now();
        Ok(material_types::ActiveModel {
            owner_id: Set(owner),
            material_kind: Set(input.material_kind),
            name: Set(input.name),
            description: Set(input.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn update_type(
        &self,
        owner: Uuid,
        id: i64,
        input: MaterialTypeInput,
    ) -> Result<material_types::Model, ServiceError> {
        let existing = material_types::Entity::find_by_id(id)
            .filter(material_types::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material type {} not found", id)))?;
        let input = validated_type(input)?;

        let mut active: material_types::ActiveModel = existing.into();
        active.material_kind = Set(input.material_kind);
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.updated_at = Set(Utc::now());
        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_type(&self, owner: Uuid, id: i64) -> Result<(), ServiceError> {
        let existing = material_types::Entity::find_by_id(id)
            .filter(material_types::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material type {} not found", id)))?;
        material_types::Entity::delete_by_id(existing.id)
            .exec(self.db_pool.as_ref())
            .await?;
        Ok(())
    }

    // ---- material shades ----

    #[instrument(skip(self))]
    pub async fn list_shades(
        &self,
        owner: Uuid,
        q: Option<&str>,
    ) -> Result<Vec<material_shades::Model>, ServiceError> {
        let mut query = material_shades::Entity::find()
            .filter(material_shades::Column::OwnerId.eq(owner))
            .order_by_asc(material_shades::Column::Name);

        if let Some(q) = q.map(str::trim).filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(material_shades::Column::Name.contains(q))
                    .add(material_shades::Column::Code.contains(q))
                    .add(material_shades::Column::Notes.contains(q)),
            );
        }

        Ok(query.all(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_shade(
        &self,
        owner: Uuid,
        input: MaterialShadeInput,
    ) -> Result<material_shades::Model, ServiceError> {
        let input = validated_shade(input)?;
        let now = Utc::now();
        Ok(material_shades::ActiveModel {
            owner_id: Set(owner),
            material_kind: Set(input.material_kind),
            name: Set(input.name),
            code: Set(input.code),
            notes: Set(input.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn update_shade(
        &self,
        owner: Uuid,
        id: i64,
        input: MaterialShadeInput,
    ) -> Result<material_shades::Model, ServiceError> {
        let existing = material_shades::Entity::find_by_id(id)
            .filter(material_shades::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material shade {} not found", id)))?;
        let input = validated_shade(input)?;

        let mut active: material_shades::ActiveModel = existing.into();
        active.material_kind = Set(input.material_kind);
        active.name = Set(input.name);
        active.code = Set(input.code);
        active.notes = Set(input.notes);
        active.updated_at = Set(Utc::now());
        Ok(active.update(self.db_pool.as_ref()).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_shade(&self, owner: Uuid, id: i64) -> Result<(), ServiceError> {
        let existing = material_shades::Entity::find_by_id(id)
            .filter(material_shades::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material shade {} not found", id)))?;
        material_shades::Entity::delete_by_id(existing.id)
            .exec(self.db_pool.as_ref())
            .await?;
        Ok(())
    }
}

fn validated_kind(kind: Option<String>) -> Result<Option<String>, ServiceError> {
    match kind.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
        None => Ok(None),
        Some(raw) => match MaterialKind::from_str(&raw) {
            Ok(kind) => Ok(Some(kind.to_string())),
            Err(_) => Err(ServiceError::field_error(
                "material_kind",
                "Select a valid choice.",
            )),
        },
    }
}

fn validated_type(mut input: MaterialTypeInput) -> Result<MaterialTypeInput, ServiceError> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(ServiceError::field_error("name", "This field is required."));
    }
    input.material_kind = validated_kind(input.material_kind)?;
    Ok(input)
}

fn validated_shade(mut input: MaterialShadeInput) -> Result<MaterialShadeInput, ServiceError> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(ServiceError::field_error("name", "This field is required."));
    }
    input.material_kind = validated_kind(input.material_kind)?;
    Ok(input)
}
