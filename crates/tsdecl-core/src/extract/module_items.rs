//! Imports, exports and `export default` forms.

use swc_ecma_ast::{
    DefaultDecl, ExportSpecifier, Expr, ImportDecl, ImportSpecifier, ModuleDecl, ModuleExportName,
    TsImportEqualsDecl, TsModuleRef,
};
use tracing::trace;

use super::{DeclarationExtractor, NestedScope};
use crate::declarations::{DefaultDeclaration, Declaration};
use crate::exports::{AllExport, AssignedExport, Export, NamedExport};
use crate::imports::{
    ExternalModuleImport, Import, NamedImport, NamespaceImport, StringImport, SymbolSpecifier,
};
use crate::resource::Resource;

impl<'a> DeclarationExtractor<'a> {
    pub(super) fn extract_module_decl(
        &self,
        module_decl: &'a ModuleDecl,
        resource: &mut Resource,
        nested: &mut Vec<NestedScope<'a>>,
        local_exports: &mut Vec<String>,
    ) {
        let (start, end) = self.source.range(module_decl);

        match module_decl {
            ModuleDecl::Import(import) => {
                for import in self.imports(import) {
                    resource.add_import(import);
                }
            }
            ModuleDecl::ExportDecl(export) => {
                self.extract_decl(&export.decl, true, export.span, resource, nested);
            }
            ModuleDecl::ExportDefaultDecl(export) => match &export.decl {
                DefaultDecl::Class(class_expr) => {
                    let name = class_expr
                        .ident
                        .as_ref()
                        .map_or_else(|| "default".to_string(), |i| i.sym.to_string());
                    let mut class = self.class_declaration(name, &class_expr.class, true);
                    class.start = Some(start);
                    class.end = Some(end);
                    resource.add_declaration(Declaration::Class(class));
                }
                DefaultDecl::Fn(fn_expr) => {
                    let name = fn_expr
                        .ident
                        .as_ref()
                        .map_or_else(|| "default".to_string(), |i| i.sym.to_string());
                    let mut function = self.function_declaration(name, &fn_expr.function, true);
                    function.start = Some(start);
                    function.end = Some(end);
                    resource.add_declaration(Declaration::Function(function));
                }
                DefaultDecl::TsInterfaceDecl(ts_interface) => {
                    let mut interface = self.interface_declaration(ts_interface, true);
                    interface.start = Some(start);
                    interface.end = Some(end);
                    resource.add_declaration(Declaration::Interface(interface));
                }
            },
            ModuleDecl::ExportDefaultExpr(export) => {
                if let Expr::Ident(ident) = &*export.expr {
                    resource.add_declaration(Declaration::Default(DefaultDeclaration {
                        name: ident.sym.to_string(),
                        start: Some(start),
                        end: Some(end),
                    }));
                } else {
                    trace!(start, end, "default export of an expression");
                }
            }
            ModuleDecl::ExportAll(export_all) => {
                resource.add_export(Export::All(AllExport {
                    from: export_all.src.value.to_string(),
                    start: Some(start),
                    end: Some(end),
                }));
            }
            ModuleDecl::ExportNamed(named) => {
                let specifiers: Vec<SymbolSpecifier> =
                    named.specifiers.iter().map(export_specifier).collect();
                let from = named.src.as_ref().map(|src| src.value.to_string());
                if from.is_none() {
                    local_exports.extend(specifiers.iter().map(|s| s.specifier.clone()));
                }
                resource.add_export(Export::Named(NamedExport {
                    from,
                    start: Some(start),
                    end: Some(end),
                    specifiers,
                }));
            }
            ModuleDecl::TsImportEquals(import_equals) => {
                match self.import_equals(import_equals) {
                    Some(import) => resource.add_import(import),
                    None => trace!(start, end, "import alias of an entity name"),
                }
            }
            ModuleDecl::TsExportAssignment(assignment) => {
                resource.add_export(Export::Assigned(AssignedExport {
                    declaration_name: self.source.text_of(&*assignment.expr).unwrap_or_default(),
                    start: Some(start),
                    end: Some(end),
                }));
            }
            ModuleDecl::TsNamespaceExport(_) => {
                trace!(start, end, "UMD namespace export");
            }
        }
    }

    fn imports(&self, import: &ImportDecl) -> Vec<Import> {
        let (start, end) = self.source.range(import);
        let library_name = import.src.value.to_string();

        if import.specifiers.is_empty() {
            return vec![Import::String(StringImport {
                library_name,
                start: Some(start),
                end: Some(end),
            })];
        }

        let mut imports = Vec::new();
        let mut default_alias = None;
        let mut specifiers = Vec::new();

        for specifier in &import.specifiers {
            match specifier {
                ImportSpecifier::Default(default) => {
                    default_alias = Some(default.local.sym.to_string());
                }
                ImportSpecifier::Namespace(namespace) => {
                    imports.push(Import::Namespace(NamespaceImport {
                        library_name: library_name.clone(),
                        start: Some(start),
                        end: Some(end),
                        alias: namespace.local.sym.to_string(),
                    }));
                }
                ImportSpecifier::Named(named) => {
                    let local = named.local.sym.to_string();
                    let specifier = match &named.imported {
                        Some(imported) => {
                            let imported = export_name(imported);
                            let alias = (imported != local).then_some(local);
                            SymbolSpecifier::new(imported, alias)
                        }
                        None => SymbolSpecifier::new(local, None),
                    };
                    specifiers.push(specifier);
                }
            }
        }

        if default_alias.is_some() || !specifiers.is_empty() {
            imports.push(Import::Named(NamedImport {
                library_name,
                start: Some(start),
                end: Some(end),
                default_alias,
                specifiers,
            }));
        }

        imports
    }

    fn import_equals(&self, import_equals: &TsImportEqualsDecl) -> Option<Import> {
        let TsModuleRef::TsExternalModuleRef(module_ref) = &import_equals.module_ref else {
            return None;
        };
        let (start, end) = self.source.range(import_equals);

        Some(Import::ExternalModule(ExternalModuleImport {
            library_name: module_ref.expr.value.to_string(),
            start: Some(start),
            end: Some(end),
            alias: import_equals.id.sym.to_string(),
        }))
    }
}

fn export_name(name: &ModuleExportName) -> String {
    match name {
        ModuleExportName::Ident(ident) => ident.sym.to_string(),
        ModuleExportName::Str(s) => s.value.to_string(),
    }
}

fn export_specifier(specifier: &ExportSpecifier) -> SymbolSpecifier {
    match specifier {
        ExportSpecifier::Named(named) => {
            let orig = export_name(&named.orig);
            let alias = named
                .exported
                .as_ref()
                .map(export_name)
                .filter(|exported| *exported != orig);
            SymbolSpecifier::new(orig, alias)
        }
        ExportSpecifier::Namespace(namespace) => {
            SymbolSpecifier::new("*", Some(export_name(&namespace.name)))
        }
        ExportSpecifier::Default(default) => {
            SymbolSpecifier::new("default", Some(default.exported.sym.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::declarations::{Declaration, NamedDeclaration};
    use crate::exports::Export;
    use crate::extract::DeclarationExtractor;
    use crate::imports::{Import, SymbolSpecifier};
    use crate::parser::Parser;
    use crate::resource::Resource;

    fn extract(code: &str) -> Resource {
        let parsed = Parser::default().parse(code).expect("parse failed");
        let mut resource = Resource::file();
        DeclarationExtractor::new(&parsed).extract(&parsed.module().body, &mut resource);
        resource
    }

    #[test]
    fn import_forms() {
        let resource = extract(
            r#"
import "polyfill";
import * as path from "path";
import React, { useState, useEffect as effect } from "react";
import fs = require("fs");
"#,
        );

        let imports = resource.imports();
        assert_eq!(imports.len(), 4);
        assert!(matches!(&imports[0], Import::String(i) if i.library_name == "polyfill"));
        assert!(matches!(&imports[1], Import::Namespace(i) if i.alias == "path"));
        let Import::Named(named) = &imports[2] else {
            panic!("expected named import");
        };
        assert_eq!(named.default_alias.as_deref(), Some("React"));
        assert_eq!(
            named.specifiers,
            vec![
                SymbolSpecifier::new("useState", None),
                SymbolSpecifier::new("useEffect", Some("effect".to_string())),
            ]
        );
        assert!(matches!(&imports[3], Import::ExternalModule(i) if i.alias == "fs" && i.library_name == "fs"));
    }

    #[test]
    fn default_and_namespace_import_yields_two_records() {
        let resource = extract(r#"import lib, * as all from "lib";"#);

        let kinds: Vec<_> = resource
            .imports()
            .iter()
            .map(|i| matches!(i, Import::Namespace(_)))
            .collect();
        assert_eq!(kinds, vec![true, false]);
        assert_eq!(resource.imports()[1].local_names(), vec!["lib"]);
    }

    #[test]
    fn local_export_list_marks_declarations_exported() {
        let resource = extract("export { helper as util }; function helper() {} const other = 1;");

        assert!(resource.declaration("helper").unwrap().is_exported());
        assert!(!resource.declaration("other").unwrap().is_exported());
        let Export::Named(named) = &resource.exports()[0] else {
            panic!("expected named export");
        };
        assert!(named.from.is_none());
        assert_eq!(named.specifiers[0].local_name(), "util");
    }

    #[test]
    fn re_exports_are_recorded() {
        let resource = extract(r#"export * from "./a"; export { b } from "./b";"#);

        let sources: Vec<_> = resource.exports().iter().map(|e| e.from()).collect();
        assert_eq!(sources, vec![Some("./a"), Some("./b")]);
        assert!(resource.declarations().is_empty());
    }

    #[test]
    fn default_export_of_identifier() {
        let resource = extract("class Store {} export default Store;");

        assert!(matches!(
            &resource.declarations()[1],
            Declaration::Default(d) if d.name == "Store"
        ));
        assert_eq!(resource.default_export().map(|d| d.name().into_owned()).as_deref(), Some("Store"));
    }

    #[test]
    fn anonymous_default_declarations_are_named_default() {
        let resource = extract("export default class {}");

        let class = resource.declarations()[0].as_class().unwrap();
        assert_eq!(class.name, "default");
        assert!(class.is_exported);
    }

    #[test]
    fn export_assignment() {
        let resource = extract("declare const api: object; export = api;");

        assert!(matches!(
            &resource.exports()[0],
            Export::Assigned(e) if e.declaration_name == "api"
        ));
    }
}
