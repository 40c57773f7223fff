//! Usage pass
//!
//! Collects the root identifiers a scope references. The rules are the
//! overridden [`Visit`] methods below; every other node kind recurses into its
//! children, so syntax without a rule still contributes the identifiers it
//! contains.
//!
//! Member chains and qualified type names need no rule: swc stores their
//! non-root parts as `IdentName`, which never reaches [`Visit::visit_ident`].

use std::collections::BTreeSet;

use serde::Deserialize;
use swc_ecma_ast::{
    ArrayPat, ArrowExpr, AssignPat, AssignTargetPat, BindingIdent, BreakStmt, ClassDecl, ClassExpr,
    ClassProp, ContinueStmt, ExportAll, ExportSpecifier, Expr, FnDecl, FnExpr, Ident, ImportDecl,
    LabeledStmt, ModuleExportName, ModuleItem, NamedExport, ObjectPat, ObjectPatProp, Param, Pat,
    PropName, TsEnumDecl, TsEnumMember, TsFnParam, TsGetterSignature, TsImportEqualsDecl,
    TsImportType, TsInterfaceDecl, TsMethodSignature, TsModuleDecl, TsModuleRef,
    TsNamespaceExportDecl, TsParamProp, TsParamPropParam, TsPropertySignature, TsSetterSignature,
    TsTypeAliasDecl, TsTypeAnn, TsTypeParam, TsTypePredicate,
};
use swc_ecma_visit::{Visit, VisitWith};

/// Which declaration-site names count as usages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UsageOptions {
    /// Record the names of function, method and constructor parameters.
    pub parameters: bool,
    /// Record class property and interface property-signature names.
    pub member_names: bool,
}

impl Default for UsageOptions {
    fn default() -> Self {
        Self {
            parameters: true,
            member_names: true,
        }
    }
}

/// How a pattern introduces its names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    /// `let`/`const`, catch clauses, signature parameters.
    Local,
    Param,
    /// Destructuring assignment to existing names.
    Assignment,
}

pub struct UsageResolver<'o> {
    options: &'o UsageOptions,
    usages: BTreeSet<String>,
}

impl<'o> UsageResolver<'o> {
    /// Usages of one scope. Module and namespace blocks among `items` are not
    /// entered; they are resolved as scopes of their own.
    pub fn resolve(items: &[ModuleItem], options: &'o UsageOptions) -> BTreeSet<String> {
        let mut resolver = Self {
            options,
            usages: BTreeSet::new(),
        };

        for item in items {
            item.visit_with(&mut resolver);
        }

        resolver.usages
    }

    fn record(&mut self, ident: &Ident) {
        self.usages.insert(ident.sym.to_string());
    }

    fn records(&self, binding: Binding) -> bool {
        match binding {
            Binding::Local => false,
            Binding::Param => self.options.parameters,
            Binding::Assignment => true,
        }
    }

    fn visit_type_ann(&mut self, type_ann: Option<&TsTypeAnn>) {
        if let Some(type_ann) = type_ann {
            type_ann.visit_with(self);
        }
    }

    /// Binding names are recorded per `binding`; defaults, computed keys
    /// and annotations inside the pattern are always visited.
    fn bind_pat(&mut self, pat: &Pat, binding: Binding) {
        match pat {
            Pat::Ident(ident) => self.bind_ident(ident, binding),
            Pat::Array(array) => self.bind_array(array, binding),
            Pat::Object(object) => self.bind_object(object, binding),
            Pat::Rest(rest) => {
                self.bind_pat(&rest.arg, binding);
                self.visit_type_ann(rest.type_ann.as_deref());
            }
            Pat::Assign(assign) => self.bind_assign(assign, binding),
            Pat::Expr(expr) => expr.visit_with(self),
            Pat::Invalid(_) => {}
        }
    }

    fn bind_ident(&mut self, ident: &BindingIdent, binding: Binding) {
        if self.records(binding) && &*ident.id.sym != "this" {
            self.record(&ident.id);
        }
        self.visit_type_ann(ident.type_ann.as_deref());
    }

    fn bind_assign(&mut self, assign: &AssignPat, binding: Binding) {
        self.bind_pat(&assign.left, binding);
        assign.right.visit_with(self);
    }

    fn bind_array(&mut self, array: &ArrayPat, binding: Binding) {
        for elem in array.elems.iter().flatten() {
            self.bind_pat(elem, binding);
        }
        self.visit_type_ann(array.type_ann.as_deref());
    }

    fn bind_object(&mut self, object: &ObjectPat, binding: Binding) {
        for prop in &object.props {
            match prop {
                ObjectPatProp::KeyValue(kv) => {
                    if let PropName::Computed(computed) = &kv.key {
                        computed.visit_with(self);
                    }
                    self.bind_pat(&kv.value, binding);
                }
                ObjectPatProp::Assign(assign) => {
                    self.bind_ident(&assign.key, binding);
                    if let Some(value) = &assign.value {
                        value.visit_with(self);
                    }
                }
                ObjectPatProp::Rest(rest) => {
                    self.bind_pat(&rest.arg, binding);
                    self.visit_type_ann(rest.type_ann.as_deref());
                }
            }
        }
        self.visit_type_ann(object.type_ann.as_deref());
    }

    /// Property-like member key: plain names are member names, computed keys
    /// contribute their expression.
    fn member_key(&mut self, key: &Expr, computed: bool) {
        match key {
            Expr::Ident(ident) if !computed => {
                if self.options.member_names {
                    self.record(ident);
                }
            }
            _ if computed => key.visit_with(self),
            _ => {}
        }
    }

    /// Method-like member key: only a computed key contributes.
    fn signature_key(&mut self, key: &Expr, computed: bool) {
        if computed {
            key.visit_with(self);
        }
    }
}

impl Visit for UsageResolver<'_> {
    fn visit_ident(&mut self, ident: &Ident) {
        self.record(ident);
    }

    // Declaration names

    fn visit_class_decl(&mut self, class_decl: &ClassDecl) {
        class_decl.class.visit_with(self);
    }

    fn visit_class_expr(&mut self, class_expr: &ClassExpr) {
        class_expr.class.visit_with(self);
    }

    fn visit_fn_decl(&mut self, fn_decl: &FnDecl) {
        fn_decl.function.visit_with(self);
    }

    fn visit_fn_expr(&mut self, fn_expr: &FnExpr) {
        fn_expr.function.visit_with(self);
    }

    fn visit_ts_interface_decl(&mut self, interface: &TsInterfaceDecl) {
        if let Some(type_params) = &interface.type_params {
            type_params.visit_with(self);
        }
        for extends in &interface.extends {
            extends.visit_with(self);
        }
        interface.body.visit_with(self);
    }

    fn visit_ts_type_alias_decl(&mut self, alias: &TsTypeAliasDecl) {
        if let Some(type_params) = &alias.type_params {
            type_params.visit_with(self);
        }
        alias.type_ann.visit_with(self);
    }

    fn visit_ts_enum_decl(&mut self, ts_enum: &TsEnumDecl) {
        for member in &ts_enum.members {
            member.visit_with(self);
        }
    }

    fn visit_ts_enum_member(&mut self, member: &TsEnumMember) {
        if let Some(init) = &member.init {
            init.visit_with(self);
        }
    }

    fn visit_ts_type_param(&mut self, param: &TsTypeParam) {
        if let Some(constraint) = &param.constraint {
            constraint.visit_with(self);
        }
        if let Some(default) = &param.default {
            default.visit_with(self);
        }
    }

    fn visit_ts_type_predicate(&mut self, predicate: &TsTypePredicate) {
        self.visit_type_ann(predicate.type_ann.as_deref());
    }

    // Scope boundary

    fn visit_ts_module_decl(&mut self, _: &TsModuleDecl) {}

    // Module syntax

    fn visit_import_decl(&mut self, _: &ImportDecl) {}

    fn visit_export_all(&mut self, _: &ExportAll) {}

    fn visit_ts_namespace_export_decl(&mut self, _: &TsNamespaceExportDecl) {}

    fn visit_named_export(&mut self, export: &NamedExport) {
        if export.src.is_some() {
            return;
        }
        for specifier in &export.specifiers {
            if let ExportSpecifier::Named(named) = specifier {
                if let ModuleExportName::Ident(orig) = &named.orig {
                    self.record(orig);
                }
            }
        }
    }

    fn visit_ts_import_equals_decl(&mut self, import_equals: &TsImportEqualsDecl) {
        if let TsModuleRef::TsEntityName(entity) = &import_equals.module_ref {
            entity.visit_with(self);
        }
    }

    fn visit_ts_import_type(&mut self, import_type: &TsImportType) {
        if let Some(type_args) = &import_type.type_args {
            type_args.visit_with(self);
        }
    }

    // Labels

    fn visit_labeled_stmt(&mut self, labeled: &LabeledStmt) {
        labeled.body.visit_with(self);
    }

    fn visit_break_stmt(&mut self, _: &BreakStmt) {}

    fn visit_continue_stmt(&mut self, _: &ContinueStmt) {}

    // Bindings

    fn visit_pat(&mut self, pat: &Pat) {
        self.bind_pat(pat, Binding::Local);
    }

    fn visit_param(&mut self, param: &Param) {
        for decorator in &param.decorators {
            decorator.visit_with(self);
        }
        self.bind_pat(&param.pat, Binding::Param);
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        if let Some(type_params) = &arrow.type_params {
            type_params.visit_with(self);
        }
        for param in &arrow.params {
            self.bind_pat(param, Binding::Param);
        }
        self.visit_type_ann(arrow.return_type.as_deref());
        arrow.body.visit_with(self);
    }

    fn visit_ts_param_prop(&mut self, prop: &TsParamProp) {
        for decorator in &prop.decorators {
            decorator.visit_with(self);
        }
        let binding = if self.options.member_names {
            Binding::Assignment
        } else {
            Binding::Param
        };
        match &prop.param {
            TsParamPropParam::Ident(ident) => self.bind_ident(ident, binding),
            TsParamPropParam::Assign(assign) => self.bind_assign(assign, binding),
        }
    }

    fn visit_ts_fn_param(&mut self, param: &TsFnParam) {
        match param {
            TsFnParam::Ident(ident) => self.bind_ident(ident, Binding::Local),
            TsFnParam::Array(array) => self.bind_array(array, Binding::Local),
            TsFnParam::Rest(rest) => {
                self.bind_pat(&rest.arg, Binding::Local);
                self.visit_type_ann(rest.type_ann.as_deref());
            }
            TsFnParam::Object(object) => self.bind_object(object, Binding::Local),
        }
    }

    fn visit_assign_target_pat(&mut self, pat: &AssignTargetPat) {
        match pat {
            AssignTargetPat::Array(array) => self.bind_array(array, Binding::Assignment),
            AssignTargetPat::Object(object) => self.bind_object(object, Binding::Assignment),
            AssignTargetPat::Invalid(_) => {}
        }
    }

    // Members

    fn visit_class_prop(&mut self, prop: &ClassProp) {
        for decorator in &prop.decorators {
            decorator.visit_with(self);
        }
        match &prop.key {
            PropName::Ident(name) => {
                if self.options.member_names {
                    self.usages.insert(name.sym.to_string());
                }
            }
            key => key.visit_with(self),
        }
        self.visit_type_ann(prop.type_ann.as_deref());
        if let Some(value) = &prop.value {
            value.visit_with(self);
        }
    }

    fn visit_ts_property_signature(&mut self, signature: &TsPropertySignature) {
        self.member_key(&signature.key, signature.computed);
        self.visit_type_ann(signature.type_ann.as_deref());
    }

    fn visit_ts_method_signature(&mut self, signature: &TsMethodSignature) {
        self.signature_key(&signature.key, signature.computed);
        if let Some(type_params) = &signature.type_params {
            type_params.visit_with(self);
        }
        for param in &signature.params {
            param.visit_with(self);
        }
        self.visit_type_ann(signature.type_ann.as_deref());
    }

    fn visit_ts_getter_signature(&mut self, signature: &TsGetterSignature) {
        self.signature_key(&signature.key, signature.computed);
        self.visit_type_ann(signature.type_ann.as_deref());
    }

    fn visit_ts_setter_signature(&mut self, signature: &TsSetterSignature) {
        self.signature_key(&signature.key, signature.computed);
        signature.param.visit_with(self);
    }
}
