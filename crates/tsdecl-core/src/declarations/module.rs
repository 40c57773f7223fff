use serde::Serialize;

use super::impl_named_declaration;

/// How a nested scope was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// `declare module "name" { }`
    Module,
    /// `namespace Name { }`, `module Name { }` or `declare global { }`
    Namespace,
}

/// A module or namespace block. The statements inside it live in a nested
/// [`Resource`](crate::resource::Resource) of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub kind: ModuleKind,
}

impl_named_declaration!(ModuleDeclaration);
