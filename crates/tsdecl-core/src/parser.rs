//! Parser module for TypeScript source code
//!
//! Integrates with SWC for parsing source text into an AST and keeps the
//! text around so type annotations can be rendered verbatim.

use serde::Deserialize;
use swc_common::sync::Lrc;
use swc_common::{BytePos, FileName, SourceMap, Span, Spanned};
use swc_ecma_parser::{EsSyntax, StringInput, Syntax, TsSyntax, lexer::Lexer};
use tracing::debug;

pub use swc_ecma_ast::{EsVersion, Module};

/// Source flavor. The markup-embedding flavors enable JSX traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    #[default]
    TypeScript,
    Jsx,
    Tsx,
}

impl Language {
    pub fn is_typescript(self) -> bool {
        matches!(self, Language::TypeScript | Language::Tsx)
    }

    pub fn has_markup(self) -> bool {
        matches!(self, Language::Jsx | Language::Tsx)
    }
}

pub fn detect_language(filename: &str) -> Language {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    match ext.as_str() {
        "ts" | "mts" | "cts" => Language::TypeScript,
        "tsx" => Language::Tsx,
        "jsx" => Language::Jsx,
        _ => Language::JavaScript,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub span_lo: u32,
    pub span_hi: u32,
    pub message: String,
}

impl ParseError {
    fn from_swc(source_map: &SourceMap, origin: Origin, error: &swc_ecma_parser::error::Error) -> Self {
        let span = error.span();
        let loc = source_map.lookup_char_pos(span.lo);
        ParseError {
            line: loc.line,
            column: loc.col_display,
            span_lo: origin.relative(span.lo),
            span_hi: origin.relative(span.hi),
            message: error.kind().msg().to_string(),
        }
    }
}

/// Maps swc positions back to byte offsets into the caller's text.
///
/// The source map drops a leading byte-order mark, so positions are shifted
/// by the length of whatever it removed.
#[derive(Debug, Clone, Copy)]
struct Origin {
    start: u32,
    stripped: u32,
}

impl Origin {
    fn relative(self, pos: BytePos) -> u32 {
        pos.0.saturating_sub(self.start) + self.stripped
    }
}

/// A successfully parsed module together with the text it was parsed from.
pub struct ParsedSource {
    module: Module,
    text: String,
    origin: Origin,
    language: Language,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("language", &self.language)
            .field("items", &self.module.body.len())
            .field("len", &self.text.len())
            .finish()
    }
}

impl ParsedSource {
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Byte offset of `pos` into the source text.
    pub fn offset(&self, pos: BytePos) -> usize {
        (self.origin.relative(pos) as usize).min(self.text.len())
    }

    /// Start and end byte offsets of a node.
    pub fn range<N: Spanned>(&self, node: &N) -> (usize, usize) {
        let span = node.span();
        (self.offset(span.lo), self.offset(span.hi))
    }

    pub fn snippet(&self, span: Span) -> Option<&str> {
        let lo = self.offset(span.lo);
        let hi = self.offset(span.hi);

        if lo <= hi {
            self.text.get(lo..hi)
        } else {
            None
        }
    }

    /// Source text of a node, e.g. a type annotation.
    pub fn text_of<N: Spanned>(&self, node: &N) -> Option<String> {
        self.snippet(node.span()).map(str::to_string)
    }
}

#[derive(Debug, Clone)]
pub struct ParserBuilder {
    language: Language,
    decorators: bool,
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self {
            language: Language::default(),
            decorators: true,
        }
    }
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn decorators(mut self, enabled: bool) -> Self {
        self.decorators = enabled;
        self
    }

    pub fn build(self) -> Parser {
        let jsx = self.language.has_markup();
        let syntax = if self.language.is_typescript() {
            Syntax::Typescript(TsSyntax {
                tsx: jsx,
                decorators: self.decorators,
                ..Default::default()
            })
        } else {
            Syntax::Es(EsSyntax {
                jsx,
                decorators: self.decorators,
                ..Default::default()
            })
        };

        Parser {
            syntax,
            language: self.language,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parser {
    syntax: Syntax,
    language: Language,
}

impl Parser {
    pub fn new(language: Language) -> Self {
        Self::builder().language(language).build()
    }

    pub fn for_file(filename: &str) -> Self {
        Self::new(detect_language(filename))
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Parses `code` as a module. Only errors the parser cannot recover from
    /// fail the parse; recovered diagnostics are logged and the tree is kept.
    pub fn parse(&self, code: &str) -> Result<ParsedSource, ParseError> {
        let source_map: Lrc<SourceMap> = Default::default();
        let fm = source_map
            .new_source_file(FileName::Custom("input.ts".into()).into(), code.to_string());
        let origin = Origin {
            start: fm.start_pos.0,
            stripped: code.len().saturating_sub(fm.src.len()) as u32,
        };

        let lexer = Lexer::new(
            self.syntax,
            EsVersion::latest(),
            StringInput::from(&*fm),
            None,
        );

        let mut parser = swc_ecma_parser::Parser::new_from(lexer);

        let module = parser
            .parse_module()
            .map_err(|e| ParseError::from_swc(&source_map, origin, &e))?;

        for error in parser.take_errors() {
            let recovered = ParseError::from_swc(&source_map, origin, &error);
            debug!(
                line = recovered.line,
                column = recovered.column,
                message = %recovered.message,
                "recovered parse error"
            );
        }

        Ok(ParsedSource {
            module,
            text: code.to_string(),
            origin,
            language: self.language,
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swc_ecma_ast::{Decl, ModuleItem, Stmt};

    #[test]
    fn parse_simple_variable_declaration() {
        let parser = Parser::default();

        let parsed = parser.parse("const x: number = 1;").unwrap();

        assert_eq!(parsed.module().body.len(), 1);
        assert_eq!(parsed.language(), Language::TypeScript);
    }

    #[test]
    fn parse_invalid_syntax_returns_error() {
        let parser = Parser::default();

        let error = parser.parse("const = ;").unwrap_err();

        assert_eq!(error.line, 1);
        assert!(error.column > 0);
        assert!(!error.message.is_empty());
        assert!(error.span_hi >= error.span_lo);
    }

    #[test]
    fn parse_error_display_includes_position() {
        let error = Parser::default().parse("class {").unwrap_err();

        let msg = error.to_string();

        assert!(msg.contains(" at 1:"));
    }

    #[test]
    fn tsx_parser_accepts_markup() {
        let parser = Parser::new(Language::Tsx);

        let result = parser.parse("const App = () => <div className=\"x\" />;");

        assert!(result.is_ok());
    }

    #[test]
    fn typescript_parser_accepts_decorators() {
        let parser = Parser::default();
        let code = r#"
@Component()
class Widget {
    @Input() value: string;
}
"#;

        assert!(parser.parse(code).is_ok());
    }

    #[test]
    fn builder_sets_language() {
        let parser = Parser::builder()
            .language(Language::Jsx)
            .decorators(false)
            .build();

        assert_eq!(parser.language(), Language::Jsx);
        assert!(parser.parse("const el = <span>{name}</span>;").is_ok());
    }

    #[test]
    fn detect_language_from_extension() {
        assert_eq!(detect_language("file.js"), Language::JavaScript);
        assert_eq!(detect_language("file.mjs"), Language::JavaScript);
        assert_eq!(detect_language("file.jsx"), Language::Jsx);
        assert_eq!(detect_language("file.ts"), Language::TypeScript);
        assert_eq!(detect_language("file.mts"), Language::TypeScript);
        assert_eq!(detect_language("file.cts"), Language::TypeScript);
        assert_eq!(detect_language("file.tsx"), Language::Tsx);
        assert_eq!(detect_language("unknown"), Language::JavaScript);
    }

    #[test]
    fn for_file_picks_flavor() {
        assert_eq!(Parser::for_file("view.tsx").language(), Language::Tsx);
        assert_eq!(Parser::for_file("model.ts").language(), Language::TypeScript);
    }

    #[test]
    fn snippet_returns_exact_source_text() {
        let parsed = Parser::default().parse("let total: Map<string, number>;").unwrap();

        let ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) = &parsed.module().body[0] else {
            panic!("expected variable statement");
        };
        let type_ann = var.decls[0]
            .name
            .as_ident()
            .and_then(|b| b.type_ann.as_ref())
            .expect("type annotation");

        assert_eq!(
            parsed.text_of(&*type_ann.type_ann).as_deref(),
            Some("Map<string, number>")
        );
    }

    #[test]
    fn range_is_relative_to_source_start() {
        let parsed = Parser::default().parse("enum A {}").unwrap();

        let (start, end) = parsed.range(&parsed.module().body[0]);

        assert_eq!(start, 0);
        assert_eq!(end, 9);
    }

    #[test]
    fn byte_order_mark_keeps_offsets_relative_to_text() {
        let code = "\u{feff}let total: Map<string, number>;";
        let parsed = Parser::default().parse(code).unwrap();

        let ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) = &parsed.module().body[0] else {
            panic!("expected variable statement");
        };
        let type_ann = var.decls[0]
            .name
            .as_ident()
            .and_then(|b| b.type_ann.as_ref())
            .expect("type annotation");
        let (start, end) = parsed.range(&parsed.module().body[0]);

        assert_eq!(
            parsed.text_of(&*type_ann.type_ann).as_deref(),
            Some("Map<string, number>")
        );
        assert_eq!(start, '\u{feff}'.len_utf8());
        assert_eq!(&code[start..end], "let total: Map<string, number>;");
    }

    #[test]
    fn recovered_diagnostics_keep_the_tree() {
        let parser = Parser::default();

        for code in [
            "const x: number;",
            "let eval = 1;",
            "class K { override m(): void {} }",
        ] {
            let parsed = parser
                .parse(code)
                .unwrap_or_else(|e| panic!("{code:?} failed: {e}"));
            assert_eq!(parsed.module().body.len(), 1, "{code:?}");
        }
    }
}
