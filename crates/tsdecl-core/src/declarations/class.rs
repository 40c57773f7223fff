//! Class declarations and their members.

use std::borrow::Cow;

use serde::Serialize;

use super::{
    NamedDeclaration, Parameter, VariableDeclaration, Visibility, impl_named_declaration,
    impl_typed_declaration,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub is_exported: bool,
    pub is_abstract: bool,
    pub type_parameters: Vec<String>,
    pub constructor: Option<ConstructorDeclaration>,
    pub methods: Vec<MethodDeclaration>,
    pub properties: Vec<PropertyDeclaration>,
    pub accessors: Vec<AccessorDeclaration>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>, is_exported: bool) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            is_exported,
            is_abstract: false,
            type_parameters: Vec::new(),
            constructor: None,
            methods: Vec::new(),
            properties: Vec::new(),
            accessors: Vec::new(),
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodDeclaration> {
        self.methods.iter().find(|m| m.name == name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDeclaration> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// The constructor of a class. Its name is always `constructor`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDeclaration {
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub parameters: Vec<Parameter>,
    pub variables: Vec<VariableDeclaration>,
}

impl NamedDeclaration for ConstructorDeclaration {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("constructor")
    }

    fn start(&self) -> Option<usize> {
        self.start
    }

    fn end(&self) -> Option<usize> {
        self.end
    }
}

/// A method of a class or a method signature of an interface.
///
/// `visibility` is `None` for interface members, which cannot carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub visibility: Option<Visibility>,
    /// Return type annotation text.
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub type_parameters: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub variables: Vec<VariableDeclaration>,
    pub is_abstract: bool,
    pub is_static: bool,
    pub is_async: bool,
    pub is_optional: bool,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, visibility: Option<Visibility>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            visibility,
            type_text: None,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            variables: Vec::new(),
            is_abstract: false,
            is_static: false,
            is_async: false,
            is_optional: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub visibility: Option<Visibility>,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub is_optional: bool,
    pub is_static: bool,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, visibility: Option<Visibility>) -> Self {
        Self {
            name: name.into(),
            start: None,
            end: None,
            visibility,
            type_text: None,
            is_optional: false,
            is_static: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// A `get`/`set` accessor. Getters carry their return type, setters the type
/// of their single parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub kind: AccessorKind,
    pub visibility: Option<Visibility>,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub is_abstract: bool,
    pub is_static: bool,
}

impl_named_declaration!(
    ClassDeclaration,
    MethodDeclaration,
    PropertyDeclaration,
    AccessorDeclaration,
);
impl_typed_declaration!(MethodDeclaration, PropertyDeclaration, AccessorDeclaration);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::TypedDeclaration;

    #[test]
    fn constructor_is_always_named_constructor() {
        let ctor = ConstructorDeclaration {
            start: Some(10),
            end: Some(40),
            parameters: Vec::new(),
            variables: Vec::new(),
        };

        assert_eq!(ctor.name(), "constructor");
        assert_eq!(ctor.start(), Some(10));
    }

    #[test]
    fn class_member_lookup_by_name() {
        let mut class = ClassDeclaration::new("Service", true);
        let mut method = MethodDeclaration::new("run", Some(Visibility::Public));
        method.type_text = Some("void".to_string());
        class.methods.push(method);
        class
            .properties
            .push(PropertyDeclaration::new("name", Some(Visibility::Private)));

        assert_eq!(
            class.method("run").and_then(|m| m.type_text()).as_deref(),
            Some("void")
        );
        assert_eq!(
            class.property("name").and_then(|p| p.visibility),
            Some(Visibility::Private)
        );
        assert!(class.method("missing").is_none());
    }

    #[test]
    fn interface_members_have_no_visibility() {
        let method = MethodDeclaration::new("call", None);

        assert!(method.visibility.is_none());
        assert!(method.type_text().is_none());
    }
}
