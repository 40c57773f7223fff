use serde::Serialize;

use super::{AccessorDeclaration, MethodDeclaration, PropertyDeclaration, impl_named_declaration};

/// An interface. Its members never carry a visibility.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub type_parameters: Vec<String>,
    pub methods: Vec<MethodDeclaration>,
    pub properties: Vec<PropertyDeclaration>,
    pub accessors: Vec<AccessorDeclaration>,
}

impl InterfaceDeclaration {
    pub fn new(name: impl Into<String>, is_exported: bool) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            is_exported,
            type_parameters: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            accessors: Vec::new(),
        }
    }
}

impl_named_declaration!(InterfaceDeclaration);
