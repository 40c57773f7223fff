use serde::Serialize;

use super::impl_named_declaration;

/// `export default <identifier>`: names the local entity exported as the
/// default export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultDeclaration {
    pub name: String,
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl_named_declaration!(DefaultDeclaration);
