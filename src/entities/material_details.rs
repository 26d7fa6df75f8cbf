use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Storage row for the material detail variant.
///
/// One row per material (the material id is the primary key), holding the
/// superset of kind-specific columns; only the columns belonging to the
/// material's kind are populated. The domain-level view of this row is the
/// `MaterialDetail` tagged union in `crate::models::material`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "material_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub material_id: i64,
    pub kind: String,
    // yarn
    pub yarn_type: Option<String>,
    pub yarn_subtype: Option<String>,
    pub count_denier: Option<String>,
    // yarn + trim
    pub color: Option<String>,
    // greige
    pub fabric_type: Option<String>,
    pub construction: Option<String>,
    // greige + finished
    pub gsm: Option<Decimal>,
    pub width: Option<Decimal>,
    // finished
    pub base_fabric_type: Option<String>,
    pub finish_type: Option<String>,
    pub end_use: Option<String>,
    // trim
    pub trim_type: Option<String>,
    pub size: Option<String>,
    pub brand: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::materials::Entity",
        from = "Column::MaterialId",
        to = "super::materials::Column::Id",
        on_delete = "Cascade"
    )]
    Material,
}

impl Related<super::materials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
