//! Row classification and required-field validation.
//!
//! `classify` decides what kind of record a row is from its `attr`,
//! `name` and `type` cells. `validate` checks that a data row carries
//! every column its category requires.

use crate::constants::attr_values;
use crate::error::ValidationError;
use crate::models::{Category, Field, Row};

const PHYSICAL_REQUIRED: &[Field] = &[
    Field::Name,
    Field::PhysMin,
    Field::PhysMax,
    Field::PhysUnit,
    Field::InitValue,
    Field::Identifier,
    Field::IdentLen,
    Field::IdentType,
    Field::ResolutionS,
    Field::Min2,
    Field::Max2,
    Field::InitValue2,
];

const FLAG_REQUIRED: &[Field] = &[
    Field::Name,
    Field::Flag0,
    Field::Flag1,
    Field::InitValue,
    Field::Identifier,
    Field::IdentLen,
    Field::IdentType,
    Field::Max2,
    Field::InitValue2,
];

const MODE_REQUIRED: &[Field] = &[
    Field::Name,
    Field::ModeVal,
    Field::ModeMin,
    Field::ModeMax,
    Field::InitValue,
    Field::Identifier,
    Field::IdentLen,
    Field::IdentType,
    Field::Max2,
    Field::InitValue2,
];

/// True if the row is ignored by every command
pub fn is_skip(row: &Row) -> bool {
    row.attr() == attr_values::SKIP || (row.name().is_empty() && row.type_label().is_empty())
}

pub fn is_module(row: &Row) -> bool {
    row.attr() == attr_values::MODULE
}

pub fn is_access_table(row: &Row) -> bool {
    row.attr() == attr_values::ACCESS_TABLE
}

/// Determine the category of a row
///
/// Precedence is Skip, Module, AccessTable, then the `type` label.
pub fn classify(row: &Row) -> Category {
    if is_skip(row) {
        Category::Skip
    } else if is_module(row) {
        Category::Module
    } else if is_access_table(row) {
        Category::AccessTable
    } else {
        Category::from_type_label(row.type_label())
    }
}

/// Columns that must be non-empty for a category, in check order
///
/// Empty for categories that are not validated.
pub fn required_fields(category: Category) -> &'static [Field] {
    match category {
        Category::Physical => PHYSICAL_REQUIRED,
        Category::Flag => FLAG_REQUIRED,
        Category::Mode => MODE_REQUIRED,
        Category::Module | Category::AccessTable | Category::Skip | Category::Unknown => &[],
    }
}

/// Check a row's required columns
///
/// Reports the first empty column only.
pub fn validate(row: &Row) -> Result<(), ValidationError> {
    let category = classify(row);
    if !category.is_data() {
        return Err(ValidationError::UnknownType);
    }

    match required_fields(category)
        .iter()
        .find(|field| row.get(**field).is_empty())
    {
        Some(field) => Err(ValidationError::MissingField {
            column: field.name(),
        }),
        None => Ok(()),
    }
}
