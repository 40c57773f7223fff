//! Declaration and usage model for TypeScript sources.
//!
//! [`TypescriptParser`] turns the text of one file into a [`Resource`]: the
//! declarations it introduces, its imports and exports, one nested resource
//! per module or namespace block, and the set of root identifiers it uses.
//!
//! ```
//! use tsdecl_core::TypescriptParser;
//!
//! let resource = TypescriptParser::new()
//!     .parse_source("export class Cache<K, V> extends Store<K> {}")
//!     .unwrap();
//!
//! assert_eq!(resource.declarations().len(), 1);
//! assert!(resource.has_usage("Store"));
//! ```

pub mod config;
pub mod declarations;
pub mod exports;
mod extract;
pub mod imports;
pub mod parser;
pub mod resource;
pub mod typescript_parser;
pub mod usage;

pub use config::{Config, ConfigError, ParserConfig};
pub use declarations::{Declaration, NamedDeclaration, TypedDeclaration, Visibility};
pub use parser::{Language, ParseError, detect_language};
pub use resource::{Resource, ResourceKind};
pub use typescript_parser::TypescriptParser;
pub use usage::{UsageOptions, UsageResolver};
