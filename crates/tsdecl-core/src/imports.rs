//! Import records of a resource.

use serde::Serialize;

/// One imported binding: `specifier` is the exported name, `alias` the
/// local name when renamed (`{ a as b }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolSpecifier {
    pub specifier: String,
    pub alias: Option<String>,
}

impl SymbolSpecifier {
    pub fn new(specifier: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            specifier: specifier.into(),
            alias,
        }
    }

    /// The name the binding is known by locally.
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.specifier)
    }
}

/// `import a, { b, c as d } from "lib"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedImport {
    pub library_name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub default_alias: Option<String>,
    pub specifiers: Vec<SymbolSpecifier>,
}

/// `import * as alias from "lib"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceImport {
    pub library_name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub alias: String,
}

/// `import "lib"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringImport {
    pub library_name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

/// `import alias = require("lib")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalModuleImport {
    pub library_name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Import {
    Named(NamedImport),
    Namespace(NamespaceImport),
    String(StringImport),
    ExternalModule(ExternalModuleImport),
}

impl Import {
    pub fn library_name(&self) -> &str {
        match self {
            Import::Named(i) => &i.library_name,
            Import::Namespace(i) => &i.library_name,
            Import::String(i) => &i.library_name,
            Import::ExternalModule(i) => &i.library_name,
        }
    }

    /// Local names this import brings into scope.
    pub fn local_names(&self) -> Vec<&str> {
        match self {
            Import::Named(i) => i
                .default_alias
                .as_deref()
                .into_iter()
                .chain(i.specifiers.iter().map(SymbolSpecifier::local_name))
                .collect(),
            Import::Namespace(i) => vec![i.alias.as_str()],
            Import::String(_) => Vec::new(),
            Import::ExternalModule(i) => vec![i.alias.as_str()],
        }
    }
}
