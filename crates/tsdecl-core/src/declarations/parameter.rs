//! Function, method and constructor parameters.

use std::borrow::Cow;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use super::{NamedDeclaration, TypedDeclaration, impl_named_declaration, impl_typed_declaration};

/// One formal parameter written as a plain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: Option<String>,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl ParameterDeclaration {
    pub fn new(name: impl Into<String>, type_text: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_text,
            start: None,
            end: None,
        }
    }

    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }
}

impl_named_declaration!(ParameterDeclaration);
impl_typed_declaration!(ParameterDeclaration);

/// Destructuring shape of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundPattern {
    Object,
    Array,
}

impl BoundPattern {
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            BoundPattern::Object => ("{", "}"),
            BoundPattern::Array => ("[", "]"),
        }
    }
}

/// A parameter written as a destructuring pattern.
///
/// `name` and `type` are not stored: both are rendered from the nested
/// parameters each time they are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundParameterDeclaration {
    pub pattern: BoundPattern,
    pub parameters: Vec<ParameterDeclaration>,
    pub type_reference: Option<String>,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl BoundParameterDeclaration {
    pub fn new(pattern: BoundPattern, start: Option<usize>, end: Option<usize>) -> Self {
        Self {
            pattern,
            parameters: Vec::new(),
            type_reference: None,
            start,
            end,
        }
    }

    pub fn object(start: Option<usize>, end: Option<usize>) -> Self {
        Self::new(BoundPattern::Object, start, end)
    }

    pub fn array(start: Option<usize>, end: Option<usize>) -> Self {
        Self::new(BoundPattern::Array, start, end)
    }

    fn placeholder(&self) -> String {
        let (open, close) = self.pattern.delimiters();
        format!("{open}{close}")
    }

    /// `"{ a, b }"` for a populated pattern, `"{}"` for an empty one.
    pub fn rendered_name(&self) -> String {
        if self.parameters.is_empty() {
            return self.placeholder();
        }
        let (open, close) = self.pattern.delimiters();
        let names: Vec<&str> = self.parameters.iter().map(|p| p.name.as_str()).collect();
        format!("{open} {} {close}", names.join(", "))
    }

    /// Nested types joined inside braces; a nested parameter without a type
    /// contributes an empty entry.
    pub fn rendered_type(&self) -> String {
        if self.type_reference.is_none() && self.parameters.is_empty() {
            return self.placeholder();
        }
        let types: Vec<&str> = self
            .parameters
            .iter()
            .map(|p| p.type_text.as_deref().unwrap_or_default())
            .collect();
        format!("{{ {} }}", types.join(", "))
    }
}

impl NamedDeclaration for BoundParameterDeclaration {
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(self.rendered_name())
    }

    fn start(&self) -> Option<usize> {
        self.start
    }

    fn end(&self) -> Option<usize> {
        self.end
    }
}

impl TypedDeclaration for BoundParameterDeclaration {
    fn type_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.rendered_type()))
    }
}

impl Serialize for BoundParameterDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BoundParameterDeclaration", 7)?;
        state.serialize_field("name", &self.rendered_name())?;
        state.serialize_field("type", &self.rendered_type())?;
        state.serialize_field("pattern", &self.pattern)?;
        state.serialize_field("parameters", &self.parameters)?;
        state.serialize_field("typeReference", &self.type_reference)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

/// A formal parameter of a function, method or constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parameter {
    Plain(ParameterDeclaration),
    Bound(BoundParameterDeclaration),
}

impl Parameter {
    pub fn as_bound(&self) -> Option<&BoundParameterDeclaration> {
        match self {
            Parameter::Bound(bound) => Some(bound),
            Parameter::Plain(_) => None,
        }
    }
}

impl NamedDeclaration for Parameter {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Parameter::Plain(p) => p.name(),
            Parameter::Bound(p) => p.name(),
        }
    }

    fn start(&self) -> Option<usize> {
        match self {
            Parameter::Plain(p) => p.start,
            Parameter::Bound(p) => p.start,
        }
    }

    fn end(&self) -> Option<usize> {
        match self {
            Parameter::Plain(p) => p.end,
            Parameter::Bound(p) => p.end,
        }
    }
}

impl TypedDeclaration for Parameter {
    fn type_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Parameter::Plain(p) => p.type_text(),
            Parameter::Bound(p) => p.type_text(),
        }
    }
}
