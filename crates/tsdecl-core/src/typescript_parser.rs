//! Parse entry point.
//!
//! A parse runs the declaration pass over the file's statements, builds one
//! nested resource per module block (recursively, both passes), then runs
//! the usage pass over the same statements.

use swc_ecma_ast::ModuleItem;
use tracing::debug;

use crate::config::Config;
use crate::extract::DeclarationExtractor;
use crate::parser::{Language, ParseError, ParsedSource};
use crate::resource::Resource;
use crate::usage::UsageResolver;

#[derive(Debug, Clone, Default)]
pub struct TypescriptParser {
    config: Config,
}

impl TypescriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses `text` in the configured language.
    pub fn parse_source(&self, text: &str) -> Result<Resource, ParseError> {
        self.parse_source_as(text, self.config.parser.language)
    }

    /// Parses `text` as `language`. A syntax error fails the whole parse.
    pub fn parse_source_as(&self, text: &str, language: Language) -> Result<Resource, ParseError> {
        let parsed = self.config.parser.parser(language).parse(text)?;

        let mut resource = Resource::file().with_span(0, text.len());
        self.build_scope(&parsed, &parsed.module().body, &mut resource);

        debug!(
            ?language,
            declarations = resource.declarations().len(),
            resources = resource.resources().len(),
            imports = resource.imports().len(),
            exports = resource.exports().len(),
            usages = resource.usages().len(),
            "parsed source"
        );

        Ok(resource)
    }

    fn build_scope(&self, parsed: &ParsedSource, items: &[ModuleItem], resource: &mut Resource) {
        let nested = DeclarationExtractor::new(parsed).extract(items, resource);

        for scope in nested {
            let mut child =
                Resource::new(scope.kind.into(), Some(scope.name)).with_span(scope.start, scope.end);
            self.build_scope(parsed, scope.items, &mut child);

            debug!(
                name = child.name(),
                kind = ?child.kind(),
                declarations = child.declarations().len(),
                usages = child.usages().len(),
                "parsed nested scope"
            );

            resource.add_resource(child);
        }

        resource.extend_usages(UsageResolver::resolve(items, &self.config.usages));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::NamedDeclaration;
    use crate::resource::ResourceKind;
    use crate::usage::UsageOptions;

    #[test]
    fn parses_declarations_and_usages_together() {
        let parser = TypescriptParser::new();

        let resource = parser
            .parse_source("import { Base } from './base'; export class Child extends Base {}")
            .unwrap();

        assert_eq!(resource.kind(), ResourceKind::File);
        assert_eq!(resource.declarations().len(), 1);
        assert_eq!(resource.imports().len(), 1);
        assert!(resource.has_usage("Base"));
        assert!(!resource.has_usage("Child"));
    }

    #[test]
    fn nested_scopes_get_their_own_resources() {
        let resource = TypescriptParser::new()
            .parse_source(
                r#"
namespace First {
    export const value = compute();
    namespace Deep { run(); }
}
declare module "second" {
    export function helper(): Result;
}
outer();
"#,
            )
            .unwrap();

        assert_eq!(resource.resources().len(), 2);
        assert_eq!(resource.usages().iter().collect::<Vec<_>>(), vec!["outer"]);

        let first = &resource.resources()[0];
        assert_eq!(first.kind(), ResourceKind::Namespace);
        assert_eq!(first.name(), Some("First"));
        assert_eq!(first.declarations()[0].name(), "value");
        assert!(first.has_usage("compute"));
        assert!(!first.has_usage("run"));
        assert!(first.resources()[0].has_usage("run"));

        let second = &resource.resources()[1];
        assert_eq!(second.kind(), ResourceKind::Module);
        assert_eq!(second.name(), Some("second"));
        assert!(second.has_usage("Result"));
    }

    #[test]
    fn syntax_error_returns_no_resource() {
        let error = TypescriptParser::new()
            .parse_source("class {")
            .unwrap_err();

        assert_eq!(error.line, 1);
    }

    #[test]
    fn configured_language_is_used_by_default() {
        let mut config = Config::default();
        config.parser.language = Language::Tsx;
        let parser = TypescriptParser::with_config(config);

        let resource = parser.parse_source("const el = <Panel />;").unwrap();

        assert!(resource.has_usage("Panel"));
    }

    #[test]
    fn configured_usage_options_apply() {
        let mut config = Config::default();
        config.usages = UsageOptions {
            parameters: false,
            member_names: true,
        };
        let parser = TypescriptParser::with_config(config);

        let resource = parser.parse_source("function f(unused: Kind) {}").unwrap();

        assert!(!resource.has_usage("unused"));
        assert!(resource.has_usage("Kind"));
    }

    #[test]
    fn parsing_twice_is_idempotent() {
        let parser = TypescriptParser::new();
        let code = "export interface A<T> { value: T } const a: A<number> = { value: 1 };";

        assert_eq!(parser.parse_source(code).unwrap(), parser.parse_source(code).unwrap());
    }
}
