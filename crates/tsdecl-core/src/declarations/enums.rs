use serde::Serialize;

use super::impl_named_declaration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub is_const: bool,
    pub members: Vec<String>,
}

impl_named_declaration!(EnumDeclaration);
