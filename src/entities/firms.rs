use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "firms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub owner_id: Uuid,
    pub firm_name: String,
    /// proprietorship, partnership, llp or pvt_ltd
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
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
