//! Core data structures for parameter sheet processing.
//!
//! Defines the fixed column set of a sheet row, the typed `Row` record
//! and the derived `Category` of a row.

use crate::constants::{ACCESS_COLUMN_COUNT, columns, type_labels};

/// Number of fixed columns in a sheet row
pub const FIELD_COUNT: usize = 19;

/// Fixed (non access-table) columns of the parameter sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Attr,
    Name,
    Type,
    Flag0,
    Flag1,
    ModeVal,
    ModeMin,
    ModeMax,
    PhysMin,
    PhysMax,
    PhysUnit,
    InitValue,
    Identifier,
    IdentLen,
    IdentType,
    ResolutionS,
    Min2,
    Max2,
    InitValue2,
}

impl Field {
    /// Every fixed column, in header-resolution order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Attr,
        Field::Name,
        Field::Type,
        Field::Flag0,
        Field::Flag1,
        Field::ModeVal,
        Field::ModeMin,
        Field::ModeMax,
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

    /// Header text of the column
    pub fn name(self) -> &'static str {
        match self {
            Field::Attr => columns::ATTR,
            Field::Name => columns::NAME,
            Field::Type => columns::TYPE,
            Field::Flag0 => columns::FLAG0,
            Field::Flag1 => columns::FLAG1,
            Field::ModeVal => columns::MODE_VAL,
            Field::ModeMin => columns::MODE_MIN,
            Field::ModeMax => columns::MODE_MAX,
            Field::PhysMin => columns::PHYS_MIN,
            Field::PhysMax => columns::PHYS_MAX,
            Field::PhysUnit => columns::PHYS_UNIT,
            Field::InitValue => columns::INIT_VALUE,
            Field::Identifier => columns::IDENTIFIER,
            Field::IdentLen => columns::IDENT_LEN,
            Field::IdentType => columns::IDENT_TYPE,
            Field::ResolutionS => columns::RESOLUTION_S,
            Field::Min2 => columns::MIN2,
            Field::Max2 => columns::MAX2,
            Field::InitValue2 => columns::INIT_VALUE2,
        }
    }

    /// Position of the field inside `Row::values`
    fn index(self) -> usize {
        self as usize
    }
}

/// Header name of the 0-based access column `index` (`a001` for 0)
pub fn access_column_name(index: usize) -> String {
    format!("a{:03}", index + 1)
}

/// One data line of the parameter sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// 1-based data line number (the header is not counted)
    pub line: usize,

    values: [String; FIELD_COUNT],

    /// Access-table cells `a001`..; `None` where the header has no such column
    access: Vec<Option<String>>,
}

impl Row {
    /// Create a row with every fixed field empty and no access cells
    pub fn new(line: usize) -> Self {
        Self {
            line,
            values: Default::default(),
            access: vec![None; ACCESS_COLUMN_COUNT],
        }
    }

    /// Set a fixed field, builder style
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set an access cell by 0-based index, builder style
    pub fn with_access(mut self, index: usize, value: impl Into<String>) -> Self {
        self.set_access(index, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Set an access cell; indices past the end grow the sequence
    pub fn set_access(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.access.len() {
            self.access.resize(index + 1, None);
        }
        self.access[index] = Some(value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn attr(&self) -> &str {
        self.get(Field::Attr)
    }

    pub fn name(&self) -> &str {
        self.get(Field::Name)
    }

    /// Raw value of the `type` column
    pub fn type_label(&self) -> &str {
        self.get(Field::Type)
    }

    /// Access cell by 0-based index; `None` if the header lacks the column
    pub fn access_cell(&self, index: usize) -> Option<&str> {
        self.access.get(index).and_then(|cell| cell.as_deref())
    }
}

/// Derived category of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Skip,
    Module,
    AccessTable,
    Physical,
    Flag,
    Mode,
    Unknown,
}

impl Category {
    /// Translate a raw `type` label into a data category
    ///
    /// This is the only place the locale-specific labels are compared.
    /// Anything unrecognised, including the empty string, is `Unknown`.
    pub fn from_type_label(label: &str) -> Self {
        match label {
            type_labels::PHYSICAL => Category::Physical,
            type_labels::FLAG => Category::Flag,
            type_labels::MODE => Category::Mode,
            _ => Category::Unknown,
        }
    }

    /// True for the three validated value kinds
    pub fn is_data(self) -> bool {
        matches!(self, Category::Physical | Category::Flag | Category::Mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_unique() {
        let mut names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FIELD_COUNT);
    }

    #[test]
    fn test_field_index_matches_all_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_access_column_name() {
        assert_eq!(access_column_name(0), "a001");
        assert_eq!(access_column_name(41), "a042");
        assert_eq!(access_column_name(158), "a159");
    }

    #[test]
    fn test_row_builder() {
        let row = Row::new(7)
            .with(Field::Name, "ENG_SPD")
            .with(Field::Type, type_labels::PHYSICAL)
            .with_access(2, "x");

        assert_eq!(row.line, 7);
        assert_eq!(row.name(), "ENG_SPD");
        assert_eq!(row.type_label(), "物理値");
        assert_eq!(row.attr(), "");
        assert_eq!(row.access_cell(2), Some("x"));
        assert_eq!(row.access_cell(0), None);
        assert_eq!(row.access_cell(ACCESS_COLUMN_COUNT - 1), None);
        assert_eq!(row.access_cell(500), None);
    }

    #[test]
    fn test_category_from_type_label() {
        assert_eq!(Category::from_type_label("物理値"), Category::Physical);
        assert_eq!(Category::from_type_label("フラグ"), Category::Flag);
        assert_eq!(Category::from_type_label("モード"), Category::Mode);
        assert_eq!(Category::from_type_label("配列"), Category::Unknown);
        assert_eq!(Category::from_type_label(""), Category::Unknown);
    }

    #[test]
    fn test_is_data() {
        assert!(Category::Physical.is_data());
        assert!(Category::Flag.is_data());
        assert!(Category::Mode.is_data());
        assert!(!Category::Module.is_data());
        assert!(!Category::Unknown.is_data());
        assert!(!Category::Skip.is_data());
        assert!(!Category::AccessTable.is_data());
    }
}
