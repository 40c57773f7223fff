use serde::Serialize;

use super::impl_named_declaration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub type_parameters: Vec<String>,
}

impl_named_declaration!(TypeAliasDeclaration);
