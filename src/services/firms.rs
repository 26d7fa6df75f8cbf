use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db::DbPool;
use crate::entities::firms;
use crate::errors::ServiceError;
use crate::models::vocab;

#[derive(Debug, Clone)]
pub struct FirmInput {
    pub firm_name: String,
    pub firm_type: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub gst_number: String,
    pub pan_number: String,
    pub tan_number: String,
    pub cin_number: String,
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch_name: String,
}

/// Service for the per-owner firm profile. A user has at most one firm;
/// saving is an upsert keyed on the owner.
pub struct FirmService {
    db_pool: Arc<DbPool>,
}

impl FirmService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self))]
    pub async fn get_for_owner(&self, owner: Uuid) -> Result<Option<firms::Model>, ServiceError> {
        Ok(firms::Entity::find()
            .filter(firms::Column::OwnerId.eq(owner))
            .one(self.db_pool.as_ref())
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn save_for_owner(
        &self,
        owner: Uuid,
        input: FirmInput,
    ) -> Result<firms::Model, ServiceError> {
        let db = self.db_pool.as_ref();
        let input = validated(input)?;
        let existing = self.get_for_owner(owner).await?;

        let firm = match existing {
            Some(firm) => {
                let mut active: firms::ActiveModel = firm.into();
                apply(&mut active, &input);
                active.updated_at = Set(Utc::now());
                active.update(db).await?
            }
            None => {
                let mut active = firms::ActiveModel {
                    owner_id: Set(owner),
                    updated_at: Set(Utc::now()),
                    ..Default::default()
                };
                apply(&mut active, &input);
                active.insert(db).await?
            }
        };

        info!(firm_id = firm.id, "firm profile saved");
        Ok(firm)
    }

    #[instrument(skip(self))]
    pub async fn delete_for_owner(&self, owner: Uuid) -> Result<(), ServiceError> {
        let firm = self
            .get_for_owner(owner)
            .await?
            .ok_or_else(|| ServiceError::NotFound("No firm profile on record".to_string()))?;
        firms::Entity::delete_by_id(firm.id)
            .exec(self.db_pool.as_ref())
            .await?;
        info!(firm_id = firm.id, "firm profile deleted");
        Ok(())
    }
}

fn validated(mut input: FirmInput) -> Result<FirmInput, ServiceError> {
    input.firm_name = input.firm_name.trim().to_string();
    if input.firm_name.is_empty() {
        return Err(ServiceError::field_error(
            "firm_name",
            "This field is required.",
        ));
    }
    if !vocab::contains(vocab::FIRM_TYPES, &input.firm_type) {
        return Err(ServiceError::field_error(
            "firm_type",
            "Select a valid choice.",
        ));
    }
    Ok(input)
}

fn apply(active: &mut firms::ActiveModel, input: &FirmInput) {
    active.firm_name = Set(input.firm_name.clone());
    active.firm_type = Set(input.firm_type.clone());
    active.address_line = Set(input.address_line.clone());
    active.city = Set(input.city.clone());
    active.state = Set(input.state.clone());
    active.pincode = Set(input.pincode.clone());
    active.phone = Set(input.phone.clone());
    active.email = Set(input.email.clone());
    active.website = Set(input.website.clone());
    active.gst_number = Set(input.gst_number.clone());
    active.pan_number = Set(input.pan_number.clone());
    active.tan_number = Set(input.tan_number.clone());
    active.cin_number = Set(input.cin_number.clone());
    active.bank_name = Set(input.bank_name.clone());
    active.account_holder_name = Set(input.account_holder_name.clone());
    active.account_number = Set(input.account_number.clone());
    active.ifsc_code = Set(input.ifsc_code.clone());
    active.branch_name = Set(input.branch_name.clone());
}
