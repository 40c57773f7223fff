//! Parse result of one file or one nested module scope.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::declarations::{Declaration, ModuleKind, NamedDeclaration};
use crate::exports::Export;
use crate::imports::Import;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Module,
    Namespace,
}

impl From<ModuleKind> for ResourceKind {
    fn from(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Module => ResourceKind::Module,
            ModuleKind::Namespace => ResourceKind::Namespace,
        }
    }
}

/// Declarations, imports and exports in source order, one nested resource
/// per module block, and the set of root identifiers the scope references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    kind: ResourceKind,
    name: Option<String>,
    start: Option<usize>,
    end: Option<usize>,
    declarations: Vec<Declaration>,
    resources: Vec<Resource>,
    imports: Vec<Import>,
    exports: Vec<Export>,
    usages: BTreeSet<String>,
}

impl Resource {
    pub fn file() -> Self {
        Self::new(ResourceKind::File, None)
    }

    pub fn new(kind: ResourceKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            start: None,
            end: None,
            declarations: Vec::new(),
            resources: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
            usages: BTreeSet::new(),
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Module or namespace name; `None` for a file.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn start(&self) -> Option<usize> {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    pub fn usages(&self) -> &BTreeSet<String> {
        &self.usages
    }

    pub fn has_usage(&self, name: &str) -> bool {
        self.usages.contains(name)
    }

    pub fn add_declaration(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn add_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn add_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn add_export(&mut self, export: Export) {
        self.exports.push(export);
    }

    /// Returns `false` when the identifier was already recorded.
    pub fn add_usage(&mut self, identifier: impl Into<String>) -> bool {
        self.usages.insert(identifier.into())
    }

    pub(crate) fn extend_usages(&mut self, usages: impl IntoIterator<Item = String>) {
        self.usages.extend(usages);
    }

    pub fn declaration(&self, name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| !matches!(d, Declaration::Default(_)) && d.name() == name)
    }

    /// The local declaration an `export default <name>` statement refers to.
    pub fn default_export(&self) -> Option<&Declaration> {
        let target = self.declarations.iter().find_map(|d| match d {
            Declaration::Default(default) => Some(default.name.as_str()),
            _ => None,
        })?;
        self.declaration(target)
    }

    pub(crate) fn mark_exported(&mut self, name: &str) {
        for declaration in &mut self.declarations {
            if !matches!(declaration, Declaration::Default(_)) && declaration.name() == name {
                declaration.set_exported();
            }
        }
    }
}
