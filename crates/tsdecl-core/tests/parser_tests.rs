//! Integration tests parsing fixtures from tests/fixtures/typescript-parser/

use std::fs;
use std::path::Path;

use serde::Serialize;
use tsdecl_core::declarations::{AccessorKind, BoundPattern, Declaration, ModuleKind};
use tsdecl_core::{
    NamedDeclaration, Resource, ResourceKind, TypedDeclaration, TypescriptParser, Visibility,
    detect_language,
};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../tests/fixtures");

const FIXTURES: &[&str] = &[
    "class.ts",
    "enum.ts",
    "function.ts",
    "interface.ts",
    "module.ts",
    "typeAlias.ts",
    "usagesOnly.ts",
    "usagesOnly.tsx",
    "variable.ts",
];

fn read_fixture(relative_path: &str) -> String {
    let path = Path::new(FIXTURES_DIR).join(relative_path);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

fn parse_fixture(name: &str) -> Resource {
    let source = read_fixture(&format!("typescript-parser/{name}"));
    TypescriptParser::new()
        .parse_source_as(&source, detect_language(name))
        .unwrap_or_else(|e| panic!("Fixture {name} failed to parse: {e}"))
}

#[test]
fn enums() {
    let parsed = parse_fixture("enum.ts");

    assert_eq!(parsed.declarations().len(), 2);
    let first = parsed.declarations()[0].as_enum().unwrap();
    assert_eq!(first.members, vec!["Member1", "Member2", "Member3"]);
    assert!(!first.is_exported);
    let second = parsed.declarations()[1].as_enum().unwrap();
    assert!(second.is_const);
    assert!(second.is_exported);
}

#[test]
fn type_aliases() {
    let parsed = parse_fixture("typeAlias.ts");

    assert_eq!(parsed.declarations().len(), 2);
    assert!(matches!(parsed.declarations()[0], Declaration::TypeAlias(_)));
    assert_eq!(parsed.declarations()[1].name(), "Referenced");
    assert!(parsed.has_usage("Referenced"));
}

#[test]
fn functions() {
    let parsed = parse_fixture("function.ts");

    assert_eq!(parsed.declarations().len(), 4);
    let functions: Vec<_> = parsed
        .declarations()
        .iter()
        .map(|d| d.as_function().expect("function"))
        .collect();

    assert_eq!(functions[0].type_text.as_deref(), Some("string"));
    assert_eq!(functions[1].type_text.as_deref(), Some("void"));
    assert_eq!(functions[2].type_text, None);
    assert_eq!(functions[3].type_text.as_deref(), Some("str is number"));
}

#[test]
fn function_parameters() {
    let parsed = parse_fixture("function.ts");
    let function = |index: usize| parsed.declarations()[index].as_function().unwrap();

    let exported = function(0);
    assert!(exported.is_exported);
    assert_eq!(exported.parameters[0].name(), "param");
    let object = exported.parameters[1].as_bound().expect("object pattern");
    assert_eq!(object.pattern, BoundPattern::Object);
    assert_eq!(object.name(), "{ a, b }");
    assert_eq!(object.type_text().as_deref(), Some("{ string, number }"));
    assert_eq!(exported.variables[0].name, "local");

    let void_function = function(1);
    let array = void_function.parameters[0].as_bound().expect("array pattern");
    assert_eq!(array.name(), "[ first, second ]");
    assert_eq!(array.type_text().as_deref(), Some("{ string, number }"));
    assert_eq!(void_function.parameters[1].name(), "rest");
    assert_eq!(void_function.parameters[1].type_text().as_deref(), Some("number[]"));

    let untyped = function(2);
    assert!(untyped.is_async);
    assert_eq!(untyped.parameters[0].type_text().as_deref(), Some("number"));
}

#[test]
fn variables() {
    let parsed = parse_fixture("variable.ts");

    assert_eq!(parsed.declarations().len(), 7);
    let variables: Vec<_> = parsed
        .declarations()
        .iter()
        .map(|d| d.as_variable().expect("variable"))
        .collect();
    let names: Vec<_> = variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "globalVar",
            "exportedLet",
            "nonExportedConst",
            "destructuredA",
            "destructuredB",
            "multiA",
            "multiB",
        ]
    );

    let exported: Vec<_> = variables.iter().map(|v| v.is_exported).collect();
    assert_eq!(exported, vec![false, true, false, true, true, false, false]);
    assert_eq!(variables[1].type_text.as_deref(), Some("number"));
    assert!(variables[2].is_const);
    assert_eq!(variables[5].type_text.as_deref(), Some("string"));
}

#[test]
fn interfaces() {
    let parsed = parse_fixture("interface.ts");

    assert_eq!(parsed.declarations().len(), 6);
    let interface = |index: usize| parsed.declarations()[index].as_interface().unwrap();

    assert_eq!(interface(0).methods[0].type_text, None);
    assert_eq!(interface(0).methods[1].type_text.as_deref(), Some("void"));
    assert!(!interface(0).is_exported);

    assert_eq!(interface(1).properties[0].type_text.as_deref(), Some("string"));
    assert_eq!(interface(1).properties[1].type_text.as_deref(), Some("number"));

    assert_eq!(interface(2).type_parameters, vec!["T"]);
    assert_eq!(interface(3).type_parameters, vec!["TIn", "TOut", "TError"]);
    assert!(interface(3).methods[1].is_optional);

    let kinds: Vec<_> = interface(4).accessors.iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AccessorKind::Getter, AccessorKind::Setter]);

    assert_eq!(interface(5).name, "DefaultInterface");
    assert!(interface(5).is_exported);
}

#[test]
fn classes() {
    let parsed = parse_fixture("class.ts");

    assert_eq!(parsed.declarations().len(), 10);
    let class = |index: usize| parsed.declarations()[index].as_class().unwrap();

    let abstract_class = class(0);
    assert!(abstract_class.is_abstract);
    assert_eq!(abstract_class.methods[0].type_text, None);
    assert_eq!(abstract_class.methods[1].type_text.as_deref(), Some("void"));
    assert_eq!(abstract_class.methods[1].visibility, Some(Visibility::Protected));

    let constructor_class = class(1);
    assert_eq!(constructor_class.properties[0].name, "name");
    assert_eq!(constructor_class.properties[0].type_text.as_deref(), Some("string"));
    assert_eq!(constructor_class.properties[0].visibility, Some(Visibility::Private));
    assert_eq!(constructor_class.methods[0].visibility, Some(Visibility::Public));
    assert_eq!(
        constructor_class.constructor.as_ref().map(|c| c.parameters.len()),
        Some(2)
    );

    let property_class = class(2);
    assert_eq!(property_class.properties[0].type_text.as_deref(), Some("string"));
    assert_eq!(property_class.properties[1].type_text, None);
    assert!(property_class.properties[2].is_static);
    assert!(property_class.properties[3].is_optional);
    assert_eq!(property_class.properties[3].visibility, Some(Visibility::Public));

    assert_eq!(class(3).type_parameters, vec!["T"]);
    assert_eq!(class(3).properties[0].visibility, Some(Visibility::Public));
    assert_eq!(class(4).type_parameters, vec!["TIn", "TOut", "TError"]);

    assert_eq!(class(5).accessors.len(), 2);
    assert!(class(6).methods[0].is_static);
    assert!(class(8).methods[0].is_async);
    assert_eq!(class(8).properties[0].name, "#secret");

    assert_eq!(class(9).name, "default");
    assert!(class(9).is_exported);
}

#[test]
fn modules() {
    let parsed = parse_fixture("module.ts");

    assert_eq!(parsed.resources().len(), 2);
    let kinds: Vec<_> = parsed
        .declarations()
        .iter()
        .map(|d| d.as_module().map(|m| m.kind))
        .collect();
    assert_eq!(kinds, vec![Some(ModuleKind::Module), Some(ModuleKind::Namespace)]);

    let ambient = &parsed.resources()[0];
    assert_eq!(ambient.kind(), ResourceKind::Module);
    assert_eq!(ambient.declarations().len(), 2);
    assert!(ambient.declarations().iter().all(|d| d.is_exported()));

    let namespace = &parsed.resources()[1];
    assert_eq!(namespace.name(), Some("Company.Product"));
    assert_eq!(namespace.declarations().len(), 2);
    assert!(namespace.has_usage("createLogger"));
    assert!(!parsed.has_usage("createLogger"));
}

#[test]
fn declaration_offsets_stay_within_source() {
    for name in FIXTURES {
        let source = read_fixture(&format!("typescript-parser/{name}"));
        let parsed = parse_fixture(name);

        for declaration in parsed.declarations() {
            let (start, end) = (declaration.start().unwrap(), declaration.end().unwrap());
            assert!(start <= end, "{name}: {} has start after end", declaration.name());
            assert!(end <= source.len(), "{name}: {} ends past source", declaration.name());
        }
    }
}

#[test]
fn parsing_is_idempotent() {
    for name in FIXTURES {
        assert_eq!(parse_fixture(name), parse_fixture(name), "{name} parsed differently");
    }
}

#[test]
fn syntax_errors_fail_the_parse() {
    let parser = TypescriptParser::new();

    let error = parser
        .parse_source("export class Broken {\n    method( {\n}\n")
        .unwrap_err();

    assert!(error.line >= 2);
    assert!(!error.message.is_empty());
}

#[test]
fn byte_order_mark_does_not_shift_offsets() {
    let declaration = "export function g(x: number): string { return y; }";
    let source = format!("\u{feff}{declaration}");

    let parsed = TypescriptParser::new().parse_source(&source).unwrap();

    let function = parsed.declarations()[0].as_function().unwrap();
    assert_eq!(function.type_text.as_deref(), Some("string"));
    assert_eq!(function.parameters[0].type_text().as_deref(), Some("number"));
    let (start, end) = (function.start.unwrap(), function.end.unwrap());
    assert_eq!(&source[start..end], declaration);
}

#[test]
fn declaration_offsets_slice_their_own_text() {
    let source = read_fixture("typescript-parser/enum.ts");
    let parsed = parse_fixture("enum.ts");

    for declaration in parsed.declarations() {
        let text = &source[declaration.start().unwrap()..declaration.end().unwrap()];
        assert!(
            text.contains(&*declaration.name()),
            "{text:?} does not contain {}",
            declaration.name()
        );
    }
}

#[test]
fn grammar_diagnostics_do_not_fail_the_parse() {
    let parsed = TypescriptParser::new()
        .parse_source("const limit: number;\nclass K extends Base { override run(): void {} }")
        .unwrap();

    assert_eq!(parsed.declarations().len(), 2);
    assert_eq!(parsed.declarations()[0].name(), "limit");
    assert!(parsed.has_usage("Base"));
}

#[derive(Serialize)]
struct ResourceSnapshot {
    kind: String,
    name: Option<String>,
    declarations: Vec<String>,
    usages: Vec<String>,
    resources: Vec<ResourceSnapshot>,
}

fn declaration_kind(declaration: &Declaration) -> &'static str {
    match declaration {
        Declaration::Class(_) => "class",
        Declaration::Interface(_) => "interface",
        Declaration::Function(_) => "function",
        Declaration::Enum(_) => "enum",
        Declaration::Variable(_) => "variable",
        Declaration::TypeAlias(_) => "typeAlias",
        Declaration::Module(_) => "module",
        Declaration::Default(_) => "default",
    }
}

fn create_snapshot(resource: &Resource) -> ResourceSnapshot {
    ResourceSnapshot {
        kind: format!("{:?}", resource.kind()).to_lowercase(),
        name: resource.name().map(str::to_string),
        declarations: resource
            .declarations()
            .iter()
            .map(|d| format!("{} {}", declaration_kind(d), d.name()))
            .collect(),
        usages: resource.usages().iter().cloned().collect(),
        resources: resource.resources().iter().map(create_snapshot).collect(),
    }
}

#[test]
fn module_fixture_snapshot() {
    let parsed = parse_fixture("module.ts");
    let snapshot = create_snapshot(&parsed);
    insta::assert_json_snapshot!(snapshot);
}
