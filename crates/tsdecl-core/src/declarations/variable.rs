use serde::Serialize;

use super::{impl_named_declaration, impl_typed_declaration};

/// One bound name of a `var`, `let`, `const` or `using` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub is_const: bool,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
}

impl_named_declaration!(VariableDeclaration);
impl_typed_declaration!(VariableDeclaration);
