//! Export records of a resource.

use serde::Serialize;

use crate::imports::SymbolSpecifier;

/// `export * from "lib"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllExport {
    pub from: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// `export { a, b as c }`, optionally re-exported `from "lib"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedExport {
    pub from: Option<String>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub specifiers: Vec<SymbolSpecifier>,
}

/// `export = Name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedExport {
    pub declaration_name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Export {
    All(AllExport),
    Named(NamedExport),
    Assigned(AssignedExport),
}

impl Export {
    /// Module the export re-exports from, if any.
    pub fn from(&self) -> Option<&str> {
        match self {
            Export::All(e) => Some(&e.from),
            Export::Named(e) => e.from.as_deref(),
            Export::Assigned(_) => None,
        }
    }
}
