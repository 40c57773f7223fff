//! Declaration pass
//!
//! Walks the statement list of one scope and turns every declaration-producing
//! statement into model types. Module and namespace blocks are not descended
//! into: they are handed back as [`NestedScope`]s so the caller can build one
//! nested resource per block.

mod class;
mod function;
mod module_items;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    Accessibility, Decl, Expr, Lit, ModuleItem, Pat, PropName, Stmt, TsModuleDecl,
    TsModuleName, TsNamespaceBody, TsTypeAnn, TsTypeParamDecl, VarDeclarator,
};
use tracing::trace;

use crate::declarations::{
    Declaration, EnumDeclaration, ModuleDeclaration, ModuleKind, TypeAliasDeclaration,
    VariableDeclaration, Visibility,
};
use crate::parser::ParsedSource;
use crate::resource::Resource;

/// A module or namespace body whose statements belong to a nested resource.
#[derive(Debug, Clone)]
pub struct NestedScope<'a> {
    pub name: String,
    pub kind: ModuleKind,
    pub items: &'a [ModuleItem],
    pub start: usize,
    pub end: usize,
}

pub struct DeclarationExtractor<'a> {
    source: &'a ParsedSource,
}

impl<'a> DeclarationExtractor<'a> {
    pub fn new(source: &'a ParsedSource) -> Self {
        Self { source }
    }

    /// Adds the declarations, imports and exports of `items` to `resource`
    /// and returns the module blocks found among them, in source order.
    pub fn extract(&self, items: &'a [ModuleItem], resource: &mut Resource) -> Vec<NestedScope<'a>> {
        let mut nested = Vec::new();
        let mut local_exports = Vec::new();

        for item in items {
            match item {
                ModuleItem::Stmt(Stmt::Decl(decl)) => {
                    self.extract_decl(decl, false, decl.span(), resource, &mut nested);
                }
                ModuleItem::ModuleDecl(module_decl) => {
                    self.extract_module_decl(module_decl, resource, &mut nested, &mut local_exports);
                }
                ModuleItem::Stmt(stmt) => {
                    trace!(span = ?stmt.span(), "statement produces no declaration");
                }
            }
        }

        for name in &local_exports {
            resource.mark_exported(name);
        }

        nested
    }

    fn extract_decl(
        &self,
        decl: &'a Decl,
        is_exported: bool,
        span: Span,
        resource: &mut Resource,
        nested: &mut Vec<NestedScope<'a>>,
    ) {
        let (start, end) = self.source.range(&span);

        match decl {
            Decl::Class(class_decl) => {
                let mut class =
                    self.class_declaration(class_decl.ident.sym.to_string(), &class_decl.class, is_exported);
                class.start = Some(start);
                class.end = Some(end);
                resource.add_declaration(Declaration::Class(class));
            }
            Decl::Fn(fn_decl) => {
                let mut function = self.function_declaration(
                    fn_decl.ident.sym.to_string(),
                    &fn_decl.function,
                    is_exported,
                );
                function.start = Some(start);
                function.end = Some(end);
                resource.add_declaration(Declaration::Function(function));
            }
            Decl::Var(var_decl) => {
                let is_const = var_decl.kind == swc_ecma_ast::VarDeclKind::Const;
                for variable in self.variables(&var_decl.decls, is_const, is_exported) {
                    resource.add_declaration(Declaration::Variable(variable));
                }
            }
            Decl::Using(using_decl) => {
                for variable in self.variables(&using_decl.decls, true, is_exported) {
                    resource.add_declaration(Declaration::Variable(variable));
                }
            }
            Decl::TsInterface(ts_interface) => {
                let mut interface = self.interface_declaration(ts_interface, is_exported);
                interface.start = Some(start);
                interface.end = Some(end);
                resource.add_declaration(Declaration::Interface(interface));
            }
            Decl::TsTypeAlias(alias) => {
                resource.add_declaration(Declaration::TypeAlias(TypeAliasDeclaration {
                    name: alias.id.sym.to_string(),
                    start: Some(start),
                    end: Some(end),
                    is_exported,
                    type_parameters: type_parameters(alias.type_params.as_deref()),
                }));
            }
            Decl::TsEnum(ts_enum) => {
                let members = ts_enum
                    .members
                    .iter()
                    .map(|member| match &member.id {
                        swc_ecma_ast::TsEnumMemberId::Ident(ident) => ident.sym.to_string(),
                        swc_ecma_ast::TsEnumMemberId::Str(s) => s.value.to_string(),
                    })
                    .collect();
                resource.add_declaration(Declaration::Enum(EnumDeclaration {
                    name: ts_enum.id.sym.to_string(),
                    start: Some(start),
                    end: Some(end),
                    is_exported,
                    is_const: ts_enum.is_const,
                    members,
                }));
            }
            Decl::TsModule(ts_module) => {
                let scope = self.nested_scope(ts_module, start, end);
                resource.add_declaration(Declaration::Module(ModuleDeclaration {
                    name: scope.name.clone(),
                    start: Some(start),
                    end: Some(end),
                    is_exported,
                    kind: scope.kind,
                }));
                nested.push(scope);
            }
        }
    }

    /// `namespace A.B { }` is one scope named `A.B` holding the innermost block.
    fn nested_scope(&self, ts_module: &'a TsModuleDecl, start: usize, end: usize) -> NestedScope<'a> {
        let (mut name, kind) = match &ts_module.id {
            TsModuleName::Ident(ident) => (ident.sym.to_string(), ModuleKind::Namespace),
            TsModuleName::Str(s) => (s.value.to_string(), ModuleKind::Module),
        };

        let mut body = ts_module.body.as_ref();
        let items: &'a [ModuleItem] = loop {
            match body {
                Some(TsNamespaceBody::TsModuleBlock(block)) => break &block.body,
                Some(TsNamespaceBody::TsNamespaceDecl(inner)) => {
                    name.push('.');
                    name.push_str(&inner.id.sym);
                    body = Some(&*inner.body);
                }
                None => break &[],
            }
        };

        NestedScope {
            name,
            kind,
            items,
            start,
            end,
        }
    }

    /// One variable per bound name; destructuring patterns are flattened in
    /// source order.
    fn variables(
        &self,
        declarators: &[VarDeclarator],
        is_const: bool,
        is_exported: bool,
    ) -> Vec<VariableDeclaration> {
        let mut variables = Vec::new();

        for declarator in declarators {
            if let Pat::Ident(binding) = &declarator.name {
                let (start, end) = self.source.range(declarator);
                let type_text = self
                    .type_text(binding.type_ann.as_deref())
                    .or_else(|| declarator.init.as_deref().and_then(literal_type));
                variables.push(VariableDeclaration {
                    name: binding.id.sym.to_string(),
                    start: Some(start),
                    end: Some(end),
                    is_exported,
                    is_const,
                    type_text,
                });
                continue;
            }

            let mut bindings = Vec::new();
            collect_bindings(&declarator.name, &mut bindings);
            for binding in bindings {
                let (start, end) = self.source.range(binding);
                variables.push(VariableDeclaration {
                    name: binding.id.sym.to_string(),
                    start: Some(start),
                    end: Some(end),
                    is_exported,
                    is_const,
                    type_text: self.type_text(binding.type_ann.as_deref()),
                });
            }
        }

        variables
    }

    /// Top-level variable statements of a function or method body.
    fn body_variables(&self, body: Option<&swc_ecma_ast::BlockStmt>) -> Vec<VariableDeclaration> {
        let Some(body) = body else {
            return Vec::new();
        };

        body.stmts
            .iter()
            .flat_map(|stmt| match stmt {
                Stmt::Decl(Decl::Var(var_decl)) => self.variables(
                    &var_decl.decls,
                    var_decl.kind == swc_ecma_ast::VarDeclKind::Const,
                    false,
                ),
                Stmt::Decl(Decl::Using(using_decl)) => {
                    self.variables(&using_decl.decls, true, false)
                }
                _ => Vec::new(),
            })
            .collect()
    }

    fn type_text(&self, type_ann: Option<&TsTypeAnn>) -> Option<String> {
        type_ann.and_then(|ann| self.source.text_of(&*ann.type_ann))
    }

    fn prop_name(&self, key: &PropName) -> String {
        match key {
            PropName::Ident(ident) => ident.sym.to_string(),
            PropName::Str(s) => s.value.to_string(),
            PropName::Num(_) | PropName::BigInt(_) | PropName::Computed(_) => {
                self.source.text_of(key).unwrap_or_default()
            }
        }
    }

    /// Name of an interface member, whose key is an arbitrary expression.
    fn signature_name(&self, key: &Expr, computed: bool) -> String {
        match key {
            Expr::Ident(ident) if !computed => ident.sym.to_string(),
            Expr::Lit(Lit::Str(s)) if !computed => s.value.to_string(),
            _ => {
                let text = self.source.text_of(key).unwrap_or_default();
                if computed { format!("[{text}]") } else { text }
            }
        }
    }
}

pub(crate) fn visibility(accessibility: Option<Accessibility>) -> Visibility {
    match accessibility {
        Some(Accessibility::Private) => Visibility::Private,
        Some(Accessibility::Protected) => Visibility::Protected,
        Some(Accessibility::Public) | None => Visibility::Public,
    }
}

pub(crate) fn type_parameters(decl: Option<&TsTypeParamDecl>) -> Vec<String> {
    decl.map(|decl| decl.params.iter().map(|p| p.name.sym.to_string()).collect())
        .unwrap_or_default()
}

/// Primitive type of a literal initializer, the only type inferred without an
/// annotation.
pub(crate) fn literal_type(expr: &Expr) -> Option<String> {
    let name = match expr {
        Expr::Lit(Lit::Str(_)) | Expr::Tpl(_) => "string",
        Expr::Lit(Lit::Num(_)) => "number",
        Expr::Lit(Lit::Bool(_)) => "boolean",
        Expr::Lit(Lit::BigInt(_)) => "bigint",
        _ => return None,
    };
    Some(name.to_string())
}

/// Binding identifiers of a pattern in source order.
pub(crate) fn collect_bindings<'p>(pat: &'p Pat, out: &mut Vec<&'p swc_ecma_ast::BindingIdent>) {
    match pat {
        Pat::Ident(binding) => out.push(binding),
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                collect_bindings(elem, out);
            }
        }
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    swc_ecma_ast::ObjectPatProp::KeyValue(kv) => collect_bindings(&kv.value, out),
                    swc_ecma_ast::ObjectPatProp::Assign(assign) => out.push(&assign.key),
                    swc_ecma_ast::ObjectPatProp::Rest(rest) => collect_bindings(&rest.arg, out),
                }
            }
        }
        Pat::Rest(rest) => collect_bindings(&rest.arg, out),
        Pat::Assign(assign) => collect_bindings(&assign.left, out),
        Pat::Invalid(_) | Pat::Expr(_) => {}
    }
}
