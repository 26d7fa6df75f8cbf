use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Iterable, QueryFilter, QueryOrder,
    Set, TransactionError, TransactionTrait,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::{material_details, material_shades, material_types, materials};
use crate::errors::ServiceError;
use crate::models::material::{MaterialDetail, MaterialKind, MaterialSubmission, ValidatedMaterial};
use crate::storage::MediaStore;

/// A new image upload accompanying a material submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A material with its detail variant, as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaterialRecord {
    pub id: i64,
    pub kind: MaterialKind,
    pub name: String,
    pub remarks: String,
    pub material_type_id: Option<i64>,
    pub material_shade_id: Option<i64>,
    pub image_path: Option<String>,
    pub detail: MaterialDetail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaterialRecord {
    fn from_pair(
        material: materials::Model,
        detail: Option<material_details::Model>,
    ) -> Result<Self, ServiceError> {
        let detail_row = detail.ok_or_else(|| {
            ServiceError::InternalError(format!("material {} has no detail row", material.id))
        })?;
        let detail = MaterialDetail::from_row(&detail_row)?;
        Ok(Self {
            id: material.id,
            kind: detail.kind(),
            name: material.name,
            remarks: material.remarks,
            material_type_id: material.material_type_id,
            material_shade_id: material.material_shade_id,
            image_path: material.image_path,
            detail,
            created_at: material.created_at,
            updated_at: material.updated_at,
        })
    }
}

/// Query parameters for the material list.
#[derive(Debug, Default, Clone)]
pub struct MaterialFilter {
    /// Free-text needle matched against name, remarks and the primary
    /// kind-specific detail fields.
    pub q: Option<String>,
    /// Restrict to materials classified with this material-type id.
    pub type_id: Option<i64>,
}

/// Service for the polymorphic material records.
///
/// The save path is the one multi-step mutation in the system: the base row
/// and the detail variant are written inside a single transaction so a
/// material can never be observed without its detail.
pub struct MaterialService {
    db_pool: Arc<DbPool>,
    media: MediaStore,
}

impl MaterialService {
    pub fn new(db_pool: Arc<DbPool>, media: MediaStore) -> Self {
        Self { db_pool, media }
    }

    #[instrument(skip(self, submission, image))]
    pub async fn create(
        &self,
        owner: Uuid,
        submission: MaterialSubmission,
        image: Option<ImageUpload>,
    ) -> Result<MaterialRecord, ServiceError> {
        let validated = submission.validate(image.is_some())?;
        self.check_lookups(owner, &validated).await?;

        let image_path = match image {
            Some(upload) => Some(
                self.media
                    .save_material_image(&upload.file_name, &upload.bytes)
                    .await?,
            ),
            None => None,
        };

        let record = self
            .db_pool
            .transaction::<_, MaterialRecord, ServiceError>(move |txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let material = materials::ActiveModel {
                        kind: Set(validated.kind.to_string()),
                        material_type_id: Set(validated.material_type_id),
                        material_shade_id: Set(validated.material_shade_id),
                        name: Set(validated.name.clone()),
                        remarks: Set(validated.remarks.clone()),
                        image_path: Set(image_path.clone()),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    let material_id = material.id;
                    let detail = validated.detail.clone();
                    detail.clone().into_row(material_id).insert(txn).await?;

                    MaterialRecord::from_pair(material, Some(detail_row(detail, material_id)))
                })
            })
            .await
            .map_err(flatten_txn_err)?;

        info!(material_id = record.id, kind = %record.kind, "material created");
        Ok(record)
    }

    #[instrument(skip(self, submission, image))]
    pub async fn update(
        &self,
        owner: Uuid,
        id: i64,
        submission: MaterialSubmission,
        image: Option<ImageUpload>,
    ) -> Result<MaterialRecord, ServiceError> {
        let db = self.db_pool.as_ref();

        let existing = materials::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material {} not found", id)))?;

        let has_image = image.is_some() || existing.image_path.is_some();
        let validated = submission.validate(has_image)?;
        self.check_lookups(owner, &validated).await?;

        // A new upload replaces the stored reference; editing without one
        // keeps the existing image.
        let previous_path = existing.image_path.clone();
        let image_path = match image {
            Some(upload) => Some(
                self.media
                    .save_material_image(&upload.file_name, &upload.bytes)
                    .await?,
            ),
            None => previous_path.clone(),
        };
        let replaced_image = image_path != previous_path;

        let record = self
            .db_pool
            .transaction::<_, MaterialRecord, ServiceError>(move |txn| {
                Box::pin(async move {
                    let mut active: materials::ActiveModel = existing.into();
                    active.kind = Set(validated.kind.to_string());
                    active.material_type_id = Set(validated.material_type_id);
                    active.material_shade_id = Set(validated.material_shade_id);
                    active.name = Set(validated.name.clone());
                    active.remarks = Set(validated.remarks.clone());
                    active.image_path = Set(image_path.clone());
                    active.updated_at = Set(Utc::now());
                    let material = active.update(txn).await?;

                    replace_detail(txn, material.id, validated.detail.clone()).await?;

                    MaterialRecord::from_pair(
                        material,
                        Some(detail_row(validated.detail.clone(), id)),
                    )
                })
            })
            .await
            .map_err(flatten_txn_err)?;

        if replaced_image {
            if let Some(old) = previous_path {
                self.media.remove(&old).await;
            }
        }

        info!(material_id = record.id, kind = %record.kind, "material updated");
        Ok(record)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<MaterialRecord, ServiceError> {
        let (material, detail) = materials::Entity::find_by_id(id)
            .find_also_related(material_details::Entity)
            .one(self.db_pool.as_ref())
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material {} not found", id)))?;
        MaterialRecord::from_pair(material, detail)
    }

    /// List materials, newest first. Cross-tenant visibility of materials is
    /// intentional-as-observed; only the lookup tables are owner-scoped.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: MaterialFilter) -> Result<Vec<MaterialRecord>, ServiceError> {
        let mut query = materials::Entity::find()
            .find_also_related(material_details::Entity)
            .order_by_desc(materials::Column::Id);

        if let Some(type_id) = filter.type_id {
            query = query.filter(materials::Column::MaterialTypeId.eq(type_id));
        }

        if let Some(q) = filter.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(materials::Column::Name.contains(q))
                    .add(materials::Column::Remarks.contains(q))
                    .add(material_details::Column::YarnType.contains(q))
                    .add(material_details::Column::FabricType.contains(q))
                    .add(material_details::Column::BaseFabricType.contains(q))
                    .add(material_details::Column::TrimType.contains(q)),
            );
        }

        query
            .all(self.db_pool.as_ref())
            .await?
            .into_iter()
            .map(|(material, detail)| MaterialRecord::from_pair(material, detail))
            .collect()
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let db = self.db_pool.as_ref();
        let material = materials::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Material {} not found", id)))?;

        let image_path = material.image_path.clone();
        // The detail row goes with it via the cascade.
        materials::Entity::delete_by_id(id).exec(db).await?;

        if let Some(path) = image_path {
            self.media.remove(&path).await;
        }

        info!(material_id = id, "material deleted");
        Ok(())
    }

    /// Submitted lookup references must resolve to rows owned by the acting
    /// user; anything else reads as an invalid choice.
    async fn check_lookups(
        &self,
        owner: Uuid,
        validated: &ValidatedMaterial,
    ) -> Result<(), ServiceError> {
        let db = self.db_pool.as_ref();

        if let Some(type_id) = validated.material_type_id {
            let found = material_types::Entity::find_by_id(type_id)
                .filter(material_types::Column::OwnerId.eq(owner))
                .one(db)
                .await?;
            if found.is_none() {
                return Err(ServiceError::field_error(
                    "material_type_id",
                    "Select a valid choice.",
                ));
            }
        }

        if let Some(shade_id) = validated.material_shade_id {
            let found = material_shades::Entity::find_by_id(shade_id)
                .filter(material_shades::Column::OwnerId.eq(owner))
                .one(db)
                .await?;
            if found.is_none() {
                return Err(ServiceError::field_error(
                    "material_shade_id",
                    "Select a valid choice.",
                ));
            }
        }

        Ok(())
    }
}

/// Atomically replace the single detail row for `material_id` with the new
/// variant value. Every column is overwritten, so whatever the previous
/// variant stored is discarded in the same statement.
async fn replace_detail(
    txn: &sea_orm::DatabaseTransaction,
    material_id: i64,
    detail: MaterialDetail,
) -> Result<(), ServiceError> {
    let row = detail.into_row(material_id);
    material_details::Entity::insert(row)
        .on_conflict(
            OnConflict::column(material_details::Column::MaterialId)
                .update_columns(
                    material_details::Column::iter()
                        .filter(|c| !matches!(c, material_details::Column::MaterialId)),
                )
                .to_owned(),
        )
        .exec(txn)
        .await?;
    Ok(())
}

fn detail_row(detail: MaterialDetail, material_id: i64) -> material_details::Model {
    use sea_orm::ActiveValue;

    let row = detail.into_row(material_id);
    let unwrap = |v: ActiveValue<Option<String>>| match v {
        ActiveValue::Set(inner) => inner,
        _ => None,
    };
    let unwrap_dec = |v: ActiveValue<Option<rust_decimal::Decimal>>| match v {
        ActiveValue::Set(inner) => inner,
        _ => None,
    };

    material_details::Model {
        material_id,
        kind: match row.kind {
            ActiveValue::Set(kind) => kind,
            _ => String::new(),
        },
        yarn_type: unwrap(row.yarn_type),
        yarn_subtype: unwrap(row.yarn_subtype),
        count_denier: unwrap(row.count_denier),
        color: unwrap(row.color),
        fabric_type: unwrap(row.fabric_type),
        construction: unwrap(row.construction),
        gsm: unwrap_dec(row.gsm),
        width: unwrap_dec(row.width),
        base_fabric_type: unwrap(row.base_fabric_type),
        finish_type: unwrap(row.finish_type),
        end_use: unwrap(row.end_use),
        trim_type: unwrap(row.trim_type),
        size: unwrap(row.size),
        brand: unwrap(row.brand),
    }
}

fn flatten_txn_err(err: TransactionError<ServiceError>) -> ServiceError {
    match err {
        TransactionError::Connection(db_err) => ServiceError::DatabaseError(db_err),
        TransactionError::Transaction(service_err) => service_err,
    }
}
