use serde::Serialize;

use super::{Parameter, VariableDeclaration, impl_named_declaration, impl_typed_declaration};

/// A free function, including overload signatures and ambient declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub is_async: bool,
    pub type_parameters: Vec<String>,
    pub parameters: Vec<Parameter>,
    /// Return type annotation text, type-guard predicates included verbatim.
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    /// Bindings declared by the top-level statements of the body.
    pub variables: Vec<VariableDeclaration>,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>, is_exported: bool) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            is_exported,
            is_async: false,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            type_text: None,
            variables: Vec::new(),
        }
    }
}

impl_named_declaration!(FunctionDeclaration);
impl_typed_declaration!(FunctionDeclaration);
