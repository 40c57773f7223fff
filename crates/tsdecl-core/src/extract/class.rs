//! Class and interface members.

use swc_ecma_ast::{
    Class, ClassMember, Constructor, Key, MethodKind, ParamOrTsParamProp, TsInterfaceDecl,
    TsParamPropParam, TsTypeElement,
};
use tracing::trace;

use super::{DeclarationExtractor, literal_type, type_parameters, visibility};
use crate::declarations::{
    AccessorDeclaration, AccessorKind, ClassDeclaration, ConstructorDeclaration,
    InterfaceDeclaration, MethodDeclaration, NamedDeclaration, Parameter, PropertyDeclaration,
    TypedDeclaration, Visibility,
};

impl DeclarationExtractor<'_> {
    pub(super) fn class_declaration(
        &self,
        name: String,
        class: &Class,
        is_exported: bool,
    ) -> ClassDeclaration {
        let mut declaration = ClassDeclaration::new(name, is_exported);
        declaration.is_abstract = class.is_abstract;
        declaration.type_parameters = type_parameters(class.type_params.as_deref());

        for member in &class.body {
            self.class_member(member, &mut declaration);
        }

        declaration
    }

    fn class_member(&self, member: &ClassMember, class: &mut ClassDeclaration) {
        let (start, end) = self.source.range(member);

        match member {
            ClassMember::Constructor(ctor) => {
                // Overload signatures are replaced by the implementation.
                if class.constructor.is_none() || ctor.body.is_some() {
                    class.constructor = Some(self.constructor(ctor, start, end));
                }
                class.properties.extend(self.parameter_properties(ctor));
            }
            ClassMember::Method(method) => {
                let name = self.prop_name(&method.key);
                let function = &method.function;
                let visibility = visibility(method.accessibility);

                match method.kind {
                    MethodKind::Method => {
                        let mut declaration = MethodDeclaration::new(name, Some(visibility));
                        declaration.start = Some(start);
                        declaration.end = Some(end);
                        declaration.type_text = self.type_text(function.return_type.as_deref());
                        declaration.type_parameters =
                            type_parameters(function.type_params.as_deref());
                        declaration.parameters = self.parameters(&function.params);
                        declaration.variables = self.body_variables(function.body.as_ref());
                        declaration.is_abstract = method.is_abstract;
                        declaration.is_static = method.is_static;
                        declaration.is_async = function.is_async;
                        declaration.is_optional = method.is_optional;
                        class.methods.push(declaration);
                    }
                    MethodKind::Getter | MethodKind::Setter => {
                        let (kind, type_text) = if method.kind == MethodKind::Getter {
                            (
                                AccessorKind::Getter,
                                self.type_text(function.return_type.as_deref()),
                            )
                        } else {
                            let parameters = self.parameters(&function.params);
                            (
                                AccessorKind::Setter,
                                parameters
                                    .first()
                                    .and_then(|p| p.type_text().map(|t| t.into_owned())),
                            )
                        };
                        class.accessors.push(AccessorDeclaration {
                            name,
                            start: Some(start),
                            end: Some(end),
                            kind,
                            visibility: Some(visibility),
                            type_text,
                            is_abstract: method.is_abstract,
                            is_static: method.is_static,
                        });
                    }
                }
            }
            ClassMember::PrivateMethod(method) => {
                let function = &method.function;
                let mut declaration =
                    MethodDeclaration::new(format!("#{}", method.key.name), Some(Visibility::Private));
                declaration.start = Some(start);
                declaration.end = Some(end);
                declaration.type_text = self.type_text(function.return_type.as_deref());
                declaration.type_parameters = type_parameters(function.type_params.as_deref());
                declaration.parameters = self.parameters(&function.params);
                declaration.variables = self.body_variables(function.body.as_ref());
                declaration.is_static = method.is_static;
                declaration.is_async = function.is_async;
                class.methods.push(declaration);
            }
            ClassMember::ClassProp(prop) => {
                let mut declaration =
                    PropertyDeclaration::new(self.prop_name(&prop.key), Some(visibility(prop.accessibility)));
                declaration.start = Some(start);
                declaration.end = Some(end);
                declaration.type_text = self
                    .type_text(prop.type_ann.as_deref())
                    .or_else(|| prop.value.as_deref().and_then(literal_type));
                declaration.is_optional = prop.is_optional;
                declaration.is_static = prop.is_static;
                class.properties.push(declaration);
            }
            ClassMember::PrivateProp(prop) => {
                let mut declaration =
                    PropertyDeclaration::new(format!("#{}", prop.key.name), Some(Visibility::Private));
                declaration.start = Some(start);
                declaration.end = Some(end);
                declaration.type_text = self
                    .type_text(prop.type_ann.as_deref())
                    .or_else(|| prop.value.as_deref().and_then(literal_type));
                declaration.is_optional = prop.is_optional;
                declaration.is_static = prop.is_static;
                class.properties.push(declaration);
            }
            ClassMember::AutoAccessor(accessor) => {
                let (name, access) = match &accessor.key {
                    Key::Private(private) => (format!("#{}", private.name), Visibility::Private),
                    Key::Public(key) => (self.prop_name(key), visibility(accessor.accessibility)),
                };
                let mut declaration = PropertyDeclaration::new(name, Some(access));
                declaration.start = Some(start);
                declaration.end = Some(end);
                declaration.type_text = self
                    .type_text(accessor.type_ann.as_deref())
                    .or_else(|| accessor.value.as_deref().and_then(literal_type));
                declaration.is_static = accessor.is_static;
                class.properties.push(declaration);
            }
            ClassMember::TsIndexSignature(_) | ClassMember::StaticBlock(_) | ClassMember::Empty(_) => {
                trace!(start, end, "class member produces no declaration");
            }
        }
    }

    fn constructor(&self, ctor: &Constructor, start: usize, end: usize) -> ConstructorDeclaration {
        let parameters = ctor
            .params
            .iter()
            .map(|param| match param {
                ParamOrTsParamProp::Param(param) => self.parameter(&param.pat),
                ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                    TsParamPropParam::Ident(binding) => self.ident_parameter(binding),
                    TsParamPropParam::Assign(assign) => self.assign_parameter(assign),
                },
            })
            .collect();

        ConstructorDeclaration {
            start: Some(start),
            end: Some(end),
            parameters,
            variables: self.body_variables(ctor.body.as_ref()),
        }
    }

    /// `constructor(private readonly name: string)` also declares a property.
    fn parameter_properties(&self, ctor: &Constructor) -> Vec<PropertyDeclaration> {
        ctor.params
            .iter()
            .filter_map(|param| match param {
                ParamOrTsParamProp::TsParamProp(prop)
                    if prop.accessibility.is_some() || prop.readonly =>
                {
                    Some(prop)
                }
                _ => None,
            })
            .map(|prop| {
                let parameter = match &prop.param {
                    TsParamPropParam::Ident(binding) => self.ident_parameter(binding),
                    TsParamPropParam::Assign(assign) => self.assign_parameter(assign),
                };
                let (start, end) = self.source.range(prop);
                let mut declaration = PropertyDeclaration::new(
                    parameter.name().into_owned(),
                    Some(visibility(prop.accessibility)),
                );
                declaration.start = Some(start);
                declaration.end = Some(end);
                declaration.type_text = parameter.type_text().map(|t| t.into_owned());
                declaration.is_optional = match &prop.param {
                    TsParamPropParam::Ident(binding) => binding.id.optional,
                    TsParamPropParam::Assign(_) => false,
                };
                declaration
            })
            .collect()
    }

    pub(super) fn interface_declaration(
        &self,
        ts_interface: &TsInterfaceDecl,
        is_exported: bool,
    ) -> InterfaceDeclaration {
        let mut declaration = InterfaceDeclaration::new(ts_interface.id.sym.to_string(), is_exported);
        declaration.type_parameters = type_parameters(ts_interface.type_params.as_deref());

        for element in &ts_interface.body.body {
            let (start, end) = self.source.range(element);

            match element {
                TsTypeElement::TsPropertySignature(signature) => {
                    let mut property = PropertyDeclaration::new(
                        self.signature_name(&signature.key, signature.computed),
                        None,
                    );
                    property.start = Some(start);
                    property.end = Some(end);
                    property.type_text = self.type_text(signature.type_ann.as_deref());
                    property.is_optional = signature.optional;
                    declaration.properties.push(property);
                }
                TsTypeElement::TsMethodSignature(signature) => {
                    let mut method = MethodDeclaration::new(
                        self.signature_name(&signature.key, signature.computed),
                        None,
                    );
                    method.start = Some(start);
                    method.end = Some(end);
                    method.type_text = self.type_text(signature.type_ann.as_deref());
                    method.type_parameters = type_parameters(signature.type_params.as_deref());
                    method.parameters = signature
                        .params
                        .iter()
                        .map(|param| self.ts_fn_parameter(param))
                        .collect();
                    method.is_optional = signature.optional;
                    declaration.methods.push(method);
                }
                TsTypeElement::TsGetterSignature(signature) => {
                    declaration.accessors.push(AccessorDeclaration {
                        name: self.signature_name(&signature.key, signature.computed),
                        start: Some(start),
                        end: Some(end),
                        kind: AccessorKind::Getter,
                        visibility: None,
                        type_text: self.type_text(signature.type_ann.as_deref()),
                        is_abstract: false,
                        is_static: false,
                    });
                }
                TsTypeElement::TsSetterSignature(signature) => {
                    let parameter: Parameter = self.ts_fn_parameter(&signature.param);
                    declaration.accessors.push(AccessorDeclaration {
                        name: self.signature_name(&signature.key, signature.computed),
                        start: Some(start),
                        end: Some(end),
                        kind: AccessorKind::Setter,
                        visibility: None,
                        type_text: parameter.type_text().map(|t| t.into_owned()),
                        is_abstract: false,
                        is_static: false,
                    });
                }
                TsTypeElement::TsCallSignatureDecl(_)
                | TsTypeElement::TsConstructSignatureDecl(_)
                | TsTypeElement::TsIndexSignature(_) => {
                    trace!(start, end, "interface signature produces no declaration");
                }
            }
        }

        declaration
    }
}
