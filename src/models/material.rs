//! Domain model for materials: the kind discriminator, the detail tagged
//! union, and the declarative validation rules driving kind dispatch.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use crate::entities::material_details;
use crate::errors::{FieldErrors, ServiceError};
use crate::models::vocab;

/// Discriminator selecting which detail variant applies to a material.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MaterialKind {
    Yarn,
    Greige,
    Finished,
    Trim,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct YarnDetail {
    pub yarn_type: String,
    pub yarn_subtype: String,
    pub count_denier: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GreigeDetail {
    pub fabric_type: String,
    pub gsm: Option<Decimal>,
    pub width: Option<Decimal>,
    pub construction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FinishedDetail {
    pub base_fabric_type: String,
    pub finish_type: String,
    pub gsm: Option<Decimal>,
    pub width: Option<Decimal>,
    pub end_use: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrimDetail {
    pub trim_type: String,
    pub size: String,
    pub color: String,
    pub brand: String,
}

/// The kind-specific detail carried by a material. Exactly one variant
/// exists per material at any time, and it always matches the material's
/// `kind` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MaterialDetail {
    Yarn(YarnDetail),
    Greige(GreigeDetail),
    Finished(FinishedDetail),
    Trim(TrimDetail),
}

impl MaterialDetail {
    pub fn kind(&self) -> MaterialKind {
        match self {
            Self::Yarn(_) => MaterialKind::Yarn,
            Self::Greige(_) => MaterialKind::Greige,
            Self::Finished(_) => MaterialKind::Finished,
            Self::Trim(_) => MaterialKind::Trim,
        }
    }

    /// Rehydrate the variant from its storage row.
    pub fn from_row(row: &material_details::Model) -> Result<Self, ServiceError> {
        let kind = MaterialKind::from_str(&row.kind).map_err(|_| {
            ServiceError::InternalError(format!("unknown material kind in storage: {}", row.kind))
        })?;

        let detail = match kind {
            MaterialKind::Yarn => Self::Yarn(YarnDetail {
                yarn_type: row.yarn_type.clone().unwrap_or_default(),
                yarn_subtype: row.yarn_subtype.clone().unwrap_or_default(),
                count_denier: row.count_denier.clone().unwrap_or_default(),
                color: row.color.clone().unwrap_or_default(),
            }),
            MaterialKind::Greige => Self::Greige(GreigeDetail {
                fabric_type: row.fabric_type.clone().unwrap_or_default(),
                gsm: row.gsm,
                width: row.width,
                construction: row.construction.clone().unwrap_or_default(),
            }),
            MaterialKind::Finished => Self::Finished(FinishedDetail {
                base_fabric_type: row.base_fabric_type.clone().unwrap_or_default(),
                finish_type: row.finish_type.clone().unwrap_or_default(),
                gsm: row.gsm,
                width: row.width,
                end_use: row.end_use.clone().unwrap_or_default(),
            }),
            MaterialKind::Trim => Self::Trim(TrimDetail {
                trim_type: row.trim_type.clone().unwrap_or_default(),
                size: row.size.clone().unwrap_or_default(),
                color: row.color.clone().unwrap_or_default(),
                brand: row.brand.clone().unwrap_or_default(),
            }),
        };
        Ok(detail)
    }

    /// Serialize the variant into a full storage row for `material_id`.
    ///
    /// Every column is set explicitly so an upsert overwrites whatever the
    /// previous variant left behind.
    pub fn into_row(self, material_id: i64) -> material_details::ActiveModel {
        use sea_orm::Set;

        let mut row = material_details::ActiveModel {
            material_id: Set(material_id),
            kind: Set(self.kind().to_string()),
            yarn_type: Set(None),
            yarn_subtype: Set(None),
            count_denier: Set(None),
            color: Set(None),
            fabric_type: Set(None),
            construction: Set(None),
            gsm: Set(None),
            width: Set(None),
            base_fabric_type: Set(None),
            finish_type: Set(None),
            end_use: Set(None),
            trim_type: Set(None),
            size: Set(None),
            brand: Set(None),
        };

        match self {
            Self::Yarn(d) => {
                row.yarn_type = Set(Some(d.yarn_type));
                row.yarn_subtype = Set(Some(d.yarn_subtype));
                row.count_denier = Set(Some(d.count_denier));
                row.color = Set(Some(d.color));
            }
            Self::Greige(d) => {
                row.fabric_type = Set(Some(d.fabric_type));
                row.gsm = Set(d.gsm);
                row.width = Set(d.width);
                row.construction = Set(Some(d.construction));
            }
            Self::Finished(d) => {
                row.base_fabric_type = Set(Some(d.base_fabric_type));
                row.finish_type = Set(Some(d.finish_type));
                row.gsm = Set(d.gsm);
                row.width = Set(d.width);
                row.end_use = Set(Some(d.end_use));
            }
            Self::Trim(d) => {
                row.trim_type = Set(Some(d.trim_type));
                row.size = Set(Some(d.size));
                row.color = Set(Some(d.color));
                row.brand = Set(Some(d.brand));
            }
        }
        row
    }
}

/// Validation rule set for one material kind.
pub struct KindRule {
    pub kind: MaterialKind,
    /// Submission fields that must be present for this kind.
    pub required: &'static [&'static str],
    /// Whether an image must exist (new upload or already stored).
    pub requires_image: bool,
}

/// Per-kind validation rules. Adding a kind is a row here plus a detail
/// variant, not new branching in the validation path.
pub const KIND_RULES: &[KindRule] = &[
    KindRule {
        kind: MaterialKind::Yarn,
        required: &["yarn_type"],
        requires_image: false,
    },
    KindRule {
        kind: MaterialKind::Greige,
        required: &["fabric_type"],
        requires_image: false,
    },
    KindRule {
        kind: MaterialKind::Finished,
        required: &["base_fabric_type", "finish_type"],
        requires_image: true,
    },
    KindRule {
        kind: MaterialKind::Trim,
        required: &["trim_type"],
        requires_image: false,
    },
];

pub fn rule_for(kind: MaterialKind) -> &'static KindRule {
    KIND_RULES
        .iter()
        .find(|r| r.kind == kind)
        .expect("every material kind has a rule entry")
}

/// Raw material form payload: the `kind` discriminator plus common and
/// kind-specific fields, all as submitted text. Numeric fields are parsed
/// during validation so a bad value surfaces as a field error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MaterialSubmission {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub remarks: Option<String>,
    pub material_type_id: Option<String>,
    pub material_shade_id: Option<String>,
    // yarn
    pub yarn_type: Option<String>,
    pub yarn_subtype: Option<String>,
    pub count_denier: Option<String>,
    pub yarn_color: Option<String>,
    // greige / finished
    pub fabric_type: Option<String>,
    pub gsm: Option<String>,
    pub width: Option<String>,
    pub construction: Option<String>,
    pub base_fabric_type: Option<String>,
    pub finish_type: Option<String>,
    pub end_use: Option<String>,
    // trim
    pub trim_type: Option<String>,
    pub size: Option<String>,
    pub trim_color: Option<String>,
    pub brand: Option<String>,
}

/// A submission that passed validation, ready to persist.
#[derive(Debug, Clone)]
pub struct ValidatedMaterial {
    pub kind: MaterialKind,
    pub name: String,
    pub remarks: String,
    pub material_type_id: Option<i64>,
    pub material_shade_id: Option<i64>,
    pub detail: MaterialDetail,
}

impl MaterialSubmission {
    fn text(&self, field: &'static str) -> Option<&str> {
        let raw = match field {
            "yarn_type" => &self.yarn_type,
            "yarn_subtype" => &self.yarn_subtype,
            "count_denier" => &self.count_denier,
            "yarn_color" => &self.yarn_color,
            "fabric_type" => &self.fabric_type,
            "gsm" => &self.gsm,
            "width" => &self.width,
            "construction" => &self.construction,
            "base_fabric_type" => &self.base_fabric_type,
            "finish_type" => &self.finish_type,
            "end_use" => &self.end_use,
            "trim_type" => &self.trim_type,
            "size" => &self.size,
            "trim_color" => &self.trim_color,
            "brand" => &self.brand,
            "name" => &self.name,
            "remarks" => &self.remarks,
            _ => &None,
        };
        raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    fn owned(&self, field: &'static str) -> String {
        self.text(field).unwrap_or_default().to_string()
    }

    fn decimal(&self, field: &'static str, errors: &mut FieldErrors) -> Option<Decimal> {
        match self.text(field) {
            None => None,
            Some(raw) => match Decimal::from_str(raw) {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.push(field, "Enter a valid number.");
                    None
                }
            },
        }
    }

    fn lookup_id(&self, field: &'static str, errors: &mut FieldErrors) -> Option<i64> {
        let raw = match field {
            "material_type_id" => self.material_type_id.as_deref(),
            "material_shade_id" => self.material_shade_id.as_deref(),
            _ => None,
        };
        let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
        match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push(field, "Select a valid choice.");
                None
            }
        }
    }

    /// Validate the submission against the kind rules and build the detail
    /// variant. `has_image` reports whether a new upload was supplied or the
    /// instance already carries a stored image.
    ///
    /// All violations are collected and reported together as field-scoped
    /// errors; nothing is persisted on failure.
    pub fn validate(&self, has_image: bool) -> Result<ValidatedMaterial, ServiceError> {
        let mut errors = FieldErrors::new();

        let kind = match self.kind.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                errors.push("kind", "This field is required.");
                return Err(ServiceError::ValidationFailed(errors));
            }
            Some(raw) => match MaterialKind::from_str(raw) {
                Ok(kind) => kind,
                Err(_) => {
                    errors.push("kind", "Select a valid choice.");
                    return Err(ServiceError::ValidationFailed(errors));
                }
            },
        };

        if self.text("name").is_none() {
            errors.push("name", "This field is required.");
        }

        let rule = rule_for(kind);
        if rule.requires_image && !has_image {
            errors.push("image", "An image is required for finished materials.");
        }
        for field in rule.required {
            if self.text(field).is_none() {
                errors.push(*field, "This field is required.");
            }
        }

        if let Some(finish) = self.text("finish_type") {
            if !vocab::contains(vocab::FINISH_TYPES, finish) {
                errors.push("finish_type", "Select a valid choice.");
            }
        }
        if let Some(trim) = self.text("trim_type") {
            if !vocab::contains(vocab::TRIM_TYPES, trim) {
                errors.push("trim_type", "Select a valid choice.");
            }
        }

        let material_type_id = self.lookup_id("material_type_id", &mut errors);
        let material_shade_id = self.lookup_id("material_shade_id", &mut errors);

        let detail = match kind {
            MaterialKind::Yarn => MaterialDetail::Yarn(YarnDetail {
                yarn_type: self.owned("yarn_type"),
                yarn_subtype: self.owned("yarn_subtype"),
                count_denier: self.owned("count_denier"),
                color: self.owned("yarn_color"),
            }),
            MaterialKind::Greige => MaterialDetail::Greige(GreigeDetail {
                fabric_type: self.owned("fabric_type"),
                gsm: self.decimal("gsm", &mut errors),
                width: self.decimal("width", &mut errors),
                construction: self.owned("construction"),
            }),
            MaterialKind::Finished => MaterialDetail::Finished(FinishedDetail {
                base_fabric_type: self.owned("base_fabric_type"),
                finish_type: self.owned("finish_type"),
                gsm: self.decimal("gsm", &mut errors),
                width: self.decimal("width", &mut errors),
                end_use: self.owned("end_use"),
            }),
            MaterialKind::Trim => MaterialDetail::Trim(TrimDetail {
                trim_type: self.owned("trim_type"),
                size: self.owned("size"),
                color: self.owned("trim_color"),
                brand: self.owned("brand"),
            }),
        };

        errors.into_result()?;

        Ok(ValidatedMaterial {
            kind,
            name: self.owned("name"),
            remarks: self.owned("remarks"),
            material_type_id,
            material_shade_id,
            detail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn submission(kind: &str, name: &str) -> MaterialSubmission {
        MaterialSubmission {
            kind: Some(kind.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("yarn", "yarn_type")]
    #[case("greige", "fabric_type")]
    #[case("trim", "trim_type")]
    fn missing_required_field_is_reported(#[case] kind: &str, #[case] field: &str) {
        let err = submission(kind, "Test").validate(false).unwrap_err();
        match err {
            ServiceError::ValidationFailed(fields) => {
                assert!(fields.contains_field(field), "expected error on {field}");
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn finished_reports_all_violations_at_once() {
        let err = submission("finished", "Plain").validate(false).unwrap_err();
        match err {
            ServiceError::ValidationFailed(fields) => {
                assert!(fields.contains_field("image"));
                assert!(fields.contains_field("base_fabric_type"));
                assert!(fields.contains_field("finish_type"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn finished_with_existing_image_passes_image_policy() {
        let mut sub = submission("finished", "Dyed Poplin");
        sub.base_fabric_type = Some("Poplin".into());
        sub.finish_type = Some("dyed".into());
        let validated = sub.validate(true).expect("validation should pass");
        assert_eq!(validated.kind, MaterialKind::Finished);
    }

    #[test]
    fn greige_gsm_is_parsed_as_decimal() {
        let mut sub = submission("greige", "Plain Weave");
        sub.fabric_type = Some("Poplin".into());
        sub.gsm = Some("120.50".into());
        let validated = sub.validate(false).unwrap();
        match validated.detail {
            MaterialDetail::Greige(d) => assert_eq!(d.gsm, Some(dec!(120.50))),
            other => panic!("expected greige detail, got {other:?}"),
        }
    }

    #[test]
    fn bad_gsm_surfaces_as_field_error() {
        let mut sub = submission("greige", "Plain Weave");
        sub.fabric_type = Some("Poplin".into());
        sub.gsm = Some("heavy".into());
        let err = sub.validate(false).unwrap_err();
        match err {
            ServiceError::ValidationFailed(fields) => assert!(fields.contains_field("gsm")),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = submission("canvas", "Test").validate(false).unwrap_err();
        match err {
            ServiceError::ValidationFailed(fields) => assert!(fields.contains_field("kind")),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn detail_row_round_trips_through_storage() {
        let detail = MaterialDetail::Trim(TrimDetail {
            trim_type: "Button".into(),
            size: "12mm".into(),
            color: "Black".into(),
            brand: "Acme".into(),
        });
        let row = detail.clone().into_row(7);
        let model = material_details::Model {
            material_id: 7,
            kind: "trim".into(),
            yarn_type: None,
            yarn_subtype: None,
            count_denier: None,
            color: match row.color {
                sea_orm::ActiveValue::Set(v) => v,
                _ => None,
            },
            fabric_type: None,
            construction: None,
            gsm: None,
            width: None,
            base_fabric_type: None,
            finish_type: None,
            end_use: None,
            trim_type: Some("Button".into()),
            size: Some("12mm".into()),
            brand: Some("Acme".into()),
        };
        assert_eq!(MaterialDetail::from_row(&model).unwrap(), detail);
    }

    #[test]
    fn replacing_variant_clears_previous_columns() {
        let row = MaterialDetail::Yarn(YarnDetail {
            yarn_type: "Combed".into(),
            ..Default::default()
        })
        .into_row(3);
        assert_eq!(row.trim_type, sea_orm::ActiveValue::Set(None));
        assert_eq!(row.fabric_type, sea_orm::ActiveValue::Set(None));
    }
}
