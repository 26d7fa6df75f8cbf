use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "users")]
#[schema(as = User)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::jobber_types::Entity")]
    JobberTypes,
    #[sea_orm(has_many = "super::jobbers::Entity")]
    Jobbers,
    #[sea_orm(has_many = "super::locations::Entity")]
    Locations,
    #[sea_orm(has_one = "super::firms::Entity")]
    Firm,
    #[sea_orm(has_many = "super::material_types::Entity")]
    MaterialTypes,
    #[sea_orm(has_many = "super::material_shades::Entity")]
    MaterialShades,
}

impl Related<super::jobber_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobberTypes.def()
    }
}

impl Related<super::jobbers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Jobbers.def()
    }
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl Related<super::firms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Firm.def()
    }
}

impl Related<super::material_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialTypes.def()
    }
}

impl Related<super::material_shades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialShades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
