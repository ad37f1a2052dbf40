//! Column mapping metadata.
//!
//! Mirrors the `db_metadata.json` layout:
//!
//! ```json
//! {
//!   "column_mappings": {
//!     "SEXO": { "new_name": "sex", "type": "categorical", "categories": { "1": "Male" } },
//!     "EDAD": { "new_name": "age", "type": "numeric", "categories": null }
//!   }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::code::CategoryCode;
use crate::ordered::OrderedMap;

/// Value kind declared for a column.
///
/// Only `categorical` drives behavior; any other kind string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnKind {
    Categorical,
    Other(String),
}

impl ColumnKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Categorical => "categorical",
            Self::Other(kind) => kind,
        }
    }

    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Categorical)
    }
}

impl From<String> for ColumnKind {
    fn from(value: String) -> Self {
        if value == "categorical" {
            Self::Categorical
        } else {
            Self::Other(value)
        }
    }
}

impl From<ColumnKind> for String {
    fn from(value: ColumnKind) -> Self {
        match value {
            ColumnKind::Categorical => "categorical".to_string(),
            ColumnKind::Other(kind) => kind,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `column_mappings` entry, keyed by the original column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub new_name: String,
    #[serde(rename = "type")]
    pub kind: ColumnKind,
    /// Code to description table; `null` for non-categorical columns.
    #[serde(default)]
    pub categories: Option<OrderedMap<String>>,
    /// Any other keys found in the entry, written back on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnMapping {
    pub fn new(new_name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            new_name: new_name.into(),
            kind,
            categories: None,
            extra: Map::new(),
        }
    }

    /// Builds a categorical entry from `(code, description)` pairs.
    pub fn categorical<I, C, D>(new_name: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = (C, D)>,
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            categories: Some(
                categories
                    .into_iter()
                    .map(|(code, description)| (code, description.into()))
                    .collect(),
            ),
            ..Self::new(new_name, ColumnKind::Categorical)
        }
    }

    /// Categories to apply, if this entry is categorical with a non-empty table.
    pub fn active_categories(&self) -> Option<&OrderedMap<String>> {
        if !self.kind.is_categorical() {
            return None;
        }
        self.categories.as_ref().filter(|c| !c.is_empty())
    }
}

/// The whole metadata document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub column_mappings: OrderedMap<ColumnMapping>,
    /// Top-level keys other than `column_mappings`, kept for round-trip saves.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetadataConfig {
    pub fn new(column_mappings: OrderedMap<ColumnMapping>) -> Self {
        Self {
            column_mappings,
            extra: Map::new(),
        }
    }

    /// Reports entries that load fine but will not behave as their author
    /// probably intended.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (idx, (column, mapping)) in self.column_mappings.iter().enumerate() {
            if mapping.kind.is_categorical() && mapping.active_categories().is_none() {
                issues.push(ConfigIssue::EmptyCategories {
                    column: column.to_string(),
                });
            }
            if let Some(categories) = &mapping.categories {
                for code in categories.keys() {
                    if CategoryCode::classify(code).ambiguous {
                        issues.push(ConfigIssue::AmbiguousCode {
                            column: column.to_string(),
                            code: code.to_string(),
                        });
                    }
                }
            }
            let earlier = self
                .column_mappings
                .iter()
                .take(idx)
                .find(|(_, other)| other.new_name == mapping.new_name);
            if let Some((first, _)) = earlier {
                issues.push(ConfigIssue::DuplicateNewName {
                    new_name: mapping.new_name.clone(),
                    columns: (first.to_string(), column.to_string()),
                });
            }
        }
        issues
    }
}

/// A non-fatal problem found in the metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Code that is only numeric if every dot is dropped (e.g. `1.2.3`).
    /// It is matched as text.
    AmbiguousCode { column: String, code: String },
    /// Declared categorical without any categories.
    EmptyCategories { column: String },
    /// Two original columns rename to the same name.
    DuplicateNewName {
        new_name: String,
        columns: (String, String),
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousCode { column, code } => write!(
                f,
                "column '{column}': code '{code}' is not a valid number and will be matched as text"
            ),
            Self::EmptyCategories { column } => {
                write!(f, "column '{column}': categorical without categories")
            }
            Self::DuplicateNewName { new_name, columns } => write!(
                f,
                "columns '{}' and '{}' are both renamed to '{new_name}'",
                columns.0, columns.1
            ),
        }
    }
}
