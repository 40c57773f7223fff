//! Declaration model
//!
//! Pure data types describing what a source file declares. Every concrete
//! declaration exposes the [`NamedDeclaration`] capability; those carrying a
//! type annotation additionally expose [`TypedDeclaration`]. The per-kind
//! declarations a resource can hold form the closed [`Declaration`] enum.

mod class;
mod default;
mod enums;
mod function;
mod interface;
mod module;
mod parameter;
mod type_alias;
mod variable;

use std::borrow::Cow;

use serde::Serialize;

pub use class::{
    AccessorDeclaration, AccessorKind, ClassDeclaration, ConstructorDeclaration,
    MethodDeclaration, PropertyDeclaration,
};
pub use default::DefaultDeclaration;
pub use enums::EnumDeclaration;
pub use function::FunctionDeclaration;
pub use interface::InterfaceDeclaration;
pub use module::{ModuleDeclaration, ModuleKind};
pub use parameter::{BoundParameterDeclaration, BoundPattern, Parameter, ParameterDeclaration};
pub use type_alias::TypeAliasDeclaration;
pub use variable::VariableDeclaration;

/// A named construct introduced by the source, optionally located by byte
/// offsets into the source text.
pub trait NamedDeclaration {
    fn name(&self) -> Cow<'_, str>;

    fn start(&self) -> Option<usize>;

    fn end(&self) -> Option<usize>;
}

/// A declaration that may carry the literal text of a type annotation.
pub trait TypedDeclaration: NamedDeclaration {
    /// Source text of the annotation, `None` when nothing is written.
    fn type_text(&self) -> Option<Cow<'_, str>>;
}

/// Implements [`NamedDeclaration`] for structs with `name`, `start` and `end`
/// fields.
macro_rules! impl_named_declaration {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::declarations::NamedDeclaration for $ty {
                fn name(&self) -> std::borrow::Cow<'_, str> {
                    std::borrow::Cow::Borrowed(&self.name)
                }

                fn start(&self) -> Option<usize> {
                    self.start
                }

                fn end(&self) -> Option<usize> {
                    self.end
                }
            }
        )+
    };
}

/// Implements [`TypedDeclaration`] for structs with a `type_text` field.
macro_rules! impl_typed_declaration {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::declarations::TypedDeclaration for $ty {
                fn type_text(&self) -> Option<std::borrow::Cow<'_, str>> {
                    self.type_text.as_deref().map(std::borrow::Cow::Borrowed)
                }
            }
        )+
    };
}

pub(crate) use impl_named_declaration;
pub(crate) use impl_typed_declaration;

/// Accessibility of a class member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Every declaration kind a resource can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Declaration {
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Function(FunctionDeclaration),
    Enum(EnumDeclaration),
    Variable(VariableDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Module(ModuleDeclaration),
    Default(DefaultDeclaration),
}

impl Declaration {
    fn as_named(&self) -> &dyn NamedDeclaration {
        match self {
            Declaration::Class(d) => d,
            Declaration::Interface(d) => d,
            Declaration::Function(d) => d,
            Declaration::Enum(d) => d,
            Declaration::Variable(d) => d,
            Declaration::TypeAlias(d) => d,
            Declaration::Module(d) => d,
            Declaration::Default(d) => d,
        }
    }

    /// Whether the declaration is visible outside its resource.
    ///
    /// Default declarations are exports by definition.
    pub fn is_exported(&self) -> bool {
        match self {
            Declaration::Class(d) => d.is_exported,
            Declaration::Interface(d) => d.is_exported,
            Declaration::Function(d) => d.is_exported,
            Declaration::Enum(d) => d.is_exported,
            Declaration::Variable(d) => d.is_exported,
            Declaration::TypeAlias(d) => d.is_exported,
            Declaration::Module(d) => d.is_exported,
            Declaration::Default(_) => true,
        }
    }

    pub(crate) fn set_exported(&mut self) {
        match self {
            Declaration::Class(d) => d.is_exported = true,
            Declaration::Interface(d) => d.is_exported = true,
            Declaration::Function(d) => d.is_exported = true,
            Declaration::Enum(d) => d.is_exported = true,
            Declaration::Variable(d) => d.is_exported = true,
            Declaration::TypeAlias(d) => d.is_exported = true,
            Declaration::Module(d) => d.is_exported = true,
            Declaration::Default(_) => {}
        }
    }

    pub fn as_class(&self) -> Option<&ClassDeclaration> {
        match self {
            Declaration::Class(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceDeclaration> {
        match self {
            Declaration::Interface(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionDeclaration> {
        match self {
            Declaration::Function(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDeclaration> {
        match self {
            Declaration::Enum(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableDeclaration> {
        match self {
            Declaration::Variable(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_module(&self) -> Option<&ModuleDeclaration> {
        match self {
            Declaration::Module(d) => Some(d),
            _ => None,
        }
    }
}

impl NamedDeclaration for Declaration {
    fn name(&self) -> Cow<'_, str> {
        self.as_named().name()
    }

    fn start(&self) -> Option<usize> {
        self.as_named().start()
    }

    fn end(&self) -> Option<usize> {
        self.as_named().end()
    }
}
