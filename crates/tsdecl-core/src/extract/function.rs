//! Functions and their parameters.

use swc_ecma_ast::{
    ArrayPat, AssignPat, BindingIdent, Function, ObjectPat, ObjectPatProp, Param, Pat, PropName,
    RestPat, TsFnParam, TsType, TsTypeElement,
};

use super::{DeclarationExtractor, literal_type, type_parameters};
use crate::declarations::{
    BoundParameterDeclaration, FunctionDeclaration, Parameter, ParameterDeclaration,
};

impl DeclarationExtractor<'_> {
    pub(super) fn function_declaration(
        &self,
        name: String,
        function: &Function,
        is_exported: bool,
    ) -> FunctionDeclaration {
        let mut declaration = FunctionDeclaration::new(name, is_exported);
        declaration.is_async = function.is_async;
        declaration.type_parameters = type_parameters(function.type_params.as_deref());
        declaration.parameters = self.parameters(&function.params);
        declaration.type_text = self.type_text(function.return_type.as_deref());
        declaration.variables = self.body_variables(function.body.as_ref());
        declaration
    }

    pub(super) fn parameters(&self, params: &[Param]) -> Vec<Parameter> {
        params.iter().map(|param| self.parameter(&param.pat)).collect()
    }

    pub(super) fn parameter(&self, pat: &Pat) -> Parameter {
        match pat {
            Pat::Ident(binding) => self.ident_parameter(binding),
            Pat::Assign(assign) => self.assign_parameter(assign),
            Pat::Rest(rest) => self.rest_parameter(rest),
            Pat::Object(object) => Parameter::Bound(self.object_parameter(object)),
            Pat::Array(array) => Parameter::Bound(self.array_parameter(array)),
            Pat::Expr(_) | Pat::Invalid(_) => {
                let (start, end) = self.source.range(pat);
                Parameter::Plain(
                    ParameterDeclaration::new(self.source.text_of(pat).unwrap_or_default(), None)
                        .with_span(start, end),
                )
            }
        }
    }

    pub(super) fn ts_fn_parameter(&self, param: &TsFnParam) -> Parameter {
        match param {
            TsFnParam::Ident(binding) => self.ident_parameter(binding),
            TsFnParam::Array(array) => Parameter::Bound(self.array_parameter(array)),
            TsFnParam::Rest(rest) => self.rest_parameter(rest),
            TsFnParam::Object(object) => Parameter::Bound(self.object_parameter(object)),
        }
    }

    pub(super) fn ident_parameter(&self, binding: &BindingIdent) -> Parameter {
        let (start, end) = self.source.range(binding);
        Parameter::Plain(
            ParameterDeclaration::new(
                binding.id.sym.to_string(),
                self.type_text(binding.type_ann.as_deref()),
            )
            .with_span(start, end),
        )
    }

    /// `x: T = value` keeps the annotation; `x = 1` infers from the literal.
    pub(super) fn assign_parameter(&self, assign: &AssignPat) -> Parameter {
        let (start, end) = self.source.range(assign);
        let mut parameter = self.parameter(&assign.left);

        match &mut parameter {
            Parameter::Plain(plain) => {
                if plain.type_text.is_none() {
                    plain.type_text = literal_type(&assign.right);
                }
                plain.start = Some(start);
                plain.end = Some(end);
            }
            Parameter::Bound(bound) => {
                bound.start = Some(start);
                bound.end = Some(end);
            }
        }

        parameter
    }

    fn rest_parameter(&self, rest: &RestPat) -> Parameter {
        let (start, end) = self.source.range(rest);
        let (name, inner_type) = match &*rest.arg {
            Pat::Ident(binding) => (
                binding.id.sym.to_string(),
                self.type_text(binding.type_ann.as_deref()),
            ),
            arg => (self.source.text_of(arg).unwrap_or_default(), None),
        };
        let type_text = self.type_text(rest.type_ann.as_deref()).or(inner_type);

        Parameter::Plain(ParameterDeclaration::new(name, type_text).with_span(start, end))
    }

    /// Nested types come from a matching member of an inline object type;
    /// any other annotation is kept whole as the type reference.
    fn object_parameter(&self, object: &ObjectPat) -> BoundParameterDeclaration {
        let (start, end) = self.source.range(object);
        let mut bound = BoundParameterDeclaration::object(Some(start), Some(end));

        let members = match object.type_ann.as_deref().map(|ann| &*ann.type_ann) {
            Some(TsType::TsTypeLit(literal)) => Some(&literal.members),
            Some(other) => {
                bound.type_reference = self.source.text_of(other);
                None
            }
            None => None,
        };

        for prop in &object.props {
            let (start, end) = self.source.range(prop);
            let (key, name) = match prop {
                ObjectPatProp::KeyValue(kv) => (self.pattern_key(&kv.key), self.binding_name(&kv.value)),
                ObjectPatProp::Assign(assign) => {
                    let name = assign.key.id.sym.to_string();
                    (name.clone(), name)
                }
                ObjectPatProp::Rest(rest) => {
                    let name = self.binding_name(&rest.arg);
                    (name.clone(), name)
                }
            };

            let type_text = members.and_then(|members| {
                members.iter().find_map(|member| match member {
                    TsTypeElement::TsPropertySignature(signature)
                        if self.signature_name(&signature.key, signature.computed) == key =>
                    {
                        self.type_text(signature.type_ann.as_deref())
                    }
                    _ => None,
                })
            });

            bound
                .parameters
                .push(ParameterDeclaration::new(name, type_text).with_span(start, end));
        }

        bound
    }

    /// Nested types come from the same position of a tuple annotation.
    fn array_parameter(&self, array: &ArrayPat) -> BoundParameterDeclaration {
        let (start, end) = self.source.range(array);
        let mut bound = BoundParameterDeclaration::array(Some(start), Some(end));

        let elements = match array.type_ann.as_deref().map(|ann| &*ann.type_ann) {
            Some(TsType::TsTupleType(tuple)) => Some(&tuple.elem_types),
            Some(other) => {
                bound.type_reference = self.source.text_of(other);
                None
            }
            None => None,
        };

        for (index, elem) in array.elems.iter().enumerate() {
            let Some(elem) = elem else {
                continue;
            };
            let (start, end) = self.source.range(elem);
            let type_text = elements
                .and_then(|elements| elements.get(index))
                .and_then(|element| self.source.text_of(&*element.ty));

            bound.parameters.push(
                ParameterDeclaration::new(self.binding_name(elem), type_text).with_span(start, end),
            );
        }

        bound
    }

    /// Local name a nested binding introduces; nested patterns keep their
    /// source text.
    fn binding_name(&self, pat: &Pat) -> String {
        match pat {
            Pat::Ident(binding) => binding.id.sym.to_string(),
            Pat::Assign(assign) => self.binding_name(&assign.left),
            Pat::Rest(rest) => self.binding_name(&rest.arg),
            _ => self.source.text_of(pat).unwrap_or_default(),
        }
    }

    fn pattern_key(&self, key: &PropName) -> String {
        match key {
            PropName::Computed(computed) => {
                format!("[{}]", self.source.text_of(&*computed.expr).unwrap_or_default())
            }
            _ => self.prop_name(key),
        }
    }
}
