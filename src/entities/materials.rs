use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discriminator selecting the detail variant: yarn, greige, finished, trim
    pub kind: String,
    pub material_type_id: Option<i64>,
    pub material_shade_id: Option<i64>,
    pub name: String,
    pub remarks: String,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::material_details::Entity")]
    Detail,
    #[sea_orm(
        belongs_to = "super::material_types::Entity",
        from = "Column::MaterialTypeId",
        to = "super::material_types::Column::Id",
        on_delete = "SetNull"
    )]
    MaterialType,
    #[sea_orm(
        belongs_to = "super::material_shades::Entity",
        from = "Column::MaterialShadeId",
        to = "super::material_shades::Column::Id",
        on_delete = "SetNull"
    )]
    MaterialShade,
}

impl Related<super::material_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Detail.def()
    }
}

impl Related<super::material_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialType.def()
    }
}

impl Related<super::material_shades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaterialShade.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
