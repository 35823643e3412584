//! Application constants for csvcmd
//!
//! Column names, the locale-specific type labels used by the parameter
//! sheet, and default values shared by the reader, config and CLI.

// =============================================================================
// Column Names
// =============================================================================

/// Fixed column names as they appear in the sheet header
pub mod columns {
    pub const ATTR: &str = "attr";
    pub const NAME: &str = "name";
    pub const TYPE: &str = "type";
    pub const FLAG0: &str = "flag0";
    pub const FLAG1: &str = "flag1";
    pub const MODE_VAL: &str = "mode_val";
    pub const MODE_MIN: &str = "mode_min";
    pub const MODE_MAX: &str = "mode_max";
    pub const PHYS_MIN: &str = "phys_min";
    pub const PHYS_MAX: &str = "phys_max";
    pub const PHYS_UNIT: &str = "phys_unit";
    pub const INIT_VALUE: &str = "init_value";
    pub const IDENTIFIER: &str = "identifier";
    pub const IDENT_LEN: &str = "ident_len";
    pub const IDENT_TYPE: &str = "ident_type";
    pub const RESOLUTION_S: &str = "resolution_s";
    pub const MIN2: &str = "min2";
    pub const MAX2: &str = "max2";
    pub const INIT_VALUE2: &str = "init_value2";
}

/// Pattern matching access-table column headers (`a001`..`a159`)
pub const ACCESS_COLUMN_PATTERN: &str = r"^a(\d{3})$";

/// Number of access-table columns carried by an `A` row
pub const ACCESS_COLUMN_COUNT: usize = 159;

// =============================================================================
// Attribute and Type Values
// =============================================================================

/// Values of the single-character `attr` discriminator column
pub mod attr_values {
    /// Row is ignored by every command
    pub const SKIP: &str = "X";

    /// Row declares a module
    pub const MODULE: &str = "M";

    /// Row holds the access table
    pub const ACCESS_TABLE: &str = "A";
}

/// Locale-specific values of the `type` column
pub mod type_labels {
    pub const PHYSICAL: &str = "物理値";
    pub const FLAG: &str = "フラグ";
    pub const MODE: &str = "モード";
}

// =============================================================================
// Report Labels
// =============================================================================

/// Labels used in the `count` summary lines
pub mod report_labels {
    pub const PHYSICAL: &str = "物理値";
    pub const FLAG: &str = "フラグ";
    pub const MODE: &str = "モード";
    pub const UNKNOWN: &str = "Unknown";
    pub const TOTAL: &str = "合計";
    pub const MODULES: &str = "モジュール数";
}

/// Placeholder output of the `generate` command
pub const GENERATE_PLACEHOLDER: &str = "generate_access_map";

// =============================================================================
// Defaults
// =============================================================================

/// Default input encoding (resolved by encoding_rs to Shift_JIS)
pub const DEFAULT_ENCODING: &str = "windows-31j";

/// Code page name accepted as an alias of Windows-31J
pub const CP932_ALIAS: &str = "cp932";

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Config file looked up in the user's home directory
pub const CONFIG_FILE_NAME: &str = ".csvcmd";

/// Prefix for environment variable overrides (e.g. `CSVCMD_ENCODING`)
pub const ENV_PREFIX: &str = "CSVCMD_";
