//! Expressions, patterns, functions and classes.

use tsg_ir::ast::{
    Argument, ArrayElement, ArrowBody, ArrowFunction, CallSignature, Class, ClassMember,
    ClassMemberKind, Expr, ExprKind, Function, Modifiers, ObjectPatternProp, Param, Pattern,
    PatternKind, Property, PropertyKind, PropertyName, Template, UnaryOp,
};

use super::Printer;
use crate::emitter::Emitter;

impl<E: Emitter> Printer<'_, E> {
    pub fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::This => self.text("this"),
            ExprKind::Super => self.text("super"),
            ExprKind::Ident(name)
            | ExprKind::Number(name)
            | ExprKind::String(name)
            | ExprKind::Regex(name) => self.name(*name),
            ExprKind::Null => self.text("null"),
            ExprKind::Bool(value) => self.text(if *value { "true" } else { "false" }),
            ExprKind::Template(template) => self.template(template),
            ExprKind::TaggedTemplate { tag, quasi } => {
                self.expr(tag);
                self.template(quasi);
            }
            ExprKind::Array(elements) => self.array_literal(elements),
            ExprKind::Object(properties) => {
                if properties.is_empty() {
                    self.text("{}");
                } else {
                    self.text("{ ");
                    self.comma_list(properties, Self::property);
                    self.text(" }");
                }
            }
            ExprKind::Function(function) => self.function(function),
            ExprKind::Arrow(arrow) => self.arrow(arrow),
            ExprKind::Class(class) => self.class(class),
            ExprKind::Paren(inner) => {
                self.text("(");
                self.expr(inner);
                self.text(")");
            }
            ExprKind::Sequence(items) => self.comma_list(items, Self::expr),
            ExprKind::Unary { op, operand } => {
                self.text(op.as_str());
                // `- -a` must not become the decrement `--a`.
                let clash =
                    matches!(op, UnaryOp::Plus | UnaryOp::Minus) && starts_with_sign(operand);
                if op.is_word() || clash {
                    self.space();
                }
                self.expr(operand);
            }
            ExprKind::Update {
                op,
                prefix,
                operand,
            } => {
                if *prefix {
                    self.text(op.as_str());
                    self.expr(operand);
                } else {
                    self.expr(operand);
                    self.text(op.as_str());
                }
            }
            ExprKind::Binary { op, left, right } => {
                self.expr(left);
                self.space();
                self.text(op.as_str());
                self.space();
                self.expr(right);
            }
            ExprKind::Assign { op, target, value } => {
                self.pattern(target);
                self.space();
                self.text(op.as_str());
                self.space();
                self.expr(value);
            }
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.expr(test);
                self.text(" ? ");
                self.expr(consequent);
                self.text(" : ");
                self.expr(alternate);
            }
            ExprKind::Call {
                callee,
                type_args,
                args,
            } => {
                self.expr(callee);
                if let Some(type_args) = type_args {
                    self.type_args(type_args);
                }
                self.arguments(args);
            }
            ExprKind::New {
                callee,
                type_args,
                args,
            } => {
                self.text("new ");
                self.expr(callee);
                if let Some(type_args) = type_args {
                    self.type_args(type_args);
                }
                if let Some(args) = args {
                    self.arguments(args);
                }
            }
            ExprKind::Member { object, property } => {
                self.expr(object);
                if self.is_integer_literal(object) {
                    // `1.x` would read as the number `1.` followed by `x`.
                    self.space();
                }
                self.text(".");
                self.ident(*property);
            }
            ExprKind::Index { object, index } => {
                self.expr(object);
                self.text("[");
                self.expr(index);
                self.text("]");
            }
            ExprKind::NewTarget => self.text("new.target"),
            ExprKind::Yield { delegate, argument } => {
                self.text(if *delegate { "yield*" } else { "yield" });
                if let Some(argument) = argument {
                    self.space();
                    self.expr(argument);
                }
            }
            ExprKind::TypeAssertion { ty, expr } => {
                self.text("<");
                self.ty(ty);
                self.text(">");
                self.expr(expr);
            }
            ExprKind::As { expr, ty } => {
                self.expr(expr);
                self.text(" as ");
                self.ty(ty);
            }
            ExprKind::Error => {}
        }
    }

    fn is_integer_literal(&self, expr: &Expr) -> bool {
        match expr.kind {
            ExprKind::Number(name) => self
                .interner
                .lookup(name)
                .bytes()
                .all(|byte| byte.is_ascii_digit()),
            _ => false,
        }
    }

    fn template(&mut self, template: &Template) {
        for (index, quasi) in template.quasis.iter().enumerate() {
            self.name(*quasi);
            if let Some(expr) = template.exprs.get(index) {
                self.expr(expr);
            }
        }
    }

    fn array_literal(&mut self, elements: &[ArrayElement]) {
        self.text("[");
        self.comma_list(elements, |this, element| match element {
            ArrayElement::Hole(_) => {}
            ArrayElement::Item(expr) => this.expr(expr),
            ArrayElement::Spread(expr, _) => {
                this.text("...");
                this.expr(expr);
            }
        });
        if matches!(elements.last(), Some(ArrayElement::Hole(_))) {
            // A trailing comma terminates; a trailing hole needs one more.
            self.text(",");
        }
        self.text("]");
    }

    fn arguments(&mut self, args: &[Argument]) {
        self.text("(");
        self.comma_list(args, |this, arg| {
            if arg.spread {
                this.text("...");
            }
            this.expr(&arg.expr);
        });
        self.text(")");
    }

    fn property(&mut self, property: &Property) {
        match &property.kind {
            PropertyKind::KeyValue { key, value } => {
                self.property_name(*key);
                self.text(": ");
                self.expr(value);
            }
            PropertyKind::Shorthand(name) => self.ident(*name),
            PropertyKind::CoverInitialized { name, default } => {
                self.ident(*name);
                self.text(" = ");
                self.expr(default);
            }
            PropertyKind::Method { key, function } => self.method(*key, false, function),
            PropertyKind::Getter {
                key,
                return_type,
                body,
            } => {
                self.text("get ");
                self.property_name(*key);
                self.text("()");
                self.type_annotation(return_type.as_ref());
                self.space();
                self.block(body);
            }
            PropertyKind::Setter { key, param, body } => {
                self.text("set ");
                self.property_name(*key);
                self.text("(");
                self.param(param);
                self.text(") ");
                self.block(body);
            }
            PropertyKind::Error => {}
        }
    }

    pub(super) fn property_name(&mut self, key: PropertyName) {
        self.name(key.name);
    }

    pub(super) fn pattern(&mut self, pattern: &Pattern) {
        match &pattern.kind {
            PatternKind::Ident(name) => self.name(*name),
            PatternKind::Object(props) => {
                if props.is_empty() {
                    self.text("{}");
                    return;
                }
                self.text("{ ");
                self.comma_list(props, |this, prop| match prop {
                    ObjectPatternProp::KeyValue { key, value, .. } => {
                        this.property_name(*key);
                        this.text(": ");
                        this.pattern(value);
                    }
                    ObjectPatternProp::Shorthand { name, default, .. } => {
                        this.ident(*name);
                        if let Some(default) = default {
                            this.text(" = ");
                            this.expr(default);
                        }
                    }
                });
                self.text(" }");
            }
            PatternKind::Array { elements, rest } => {
                self.text("[");
                self.comma_list(elements, |this, element| {
                    if let Some(element) = element {
                        this.pattern(element);
                    }
                });
                match rest {
                    Some(rest) => {
                        if !elements.is_empty() {
                            self.text(", ");
                        }
                        self.text("...");
                        self.pattern(rest);
                    }
                    None if matches!(elements.last(), Some(None)) => self.text(","),
                    None => {}
                }
                self.text("]");
            }
            PatternKind::Assign { target, default } => {
                self.pattern(target);
                self.text(" = ");
                self.expr(default);
            }
            PatternKind::Expr(expr) => self.expr(expr),
            PatternKind::Error => {}
        }
    }

    pub(super) fn function(&mut self, function: &Function) {
        self.text(if function.generator {
            "function*"
        } else {
            "function"
        });
        if let Some(name) = function.name {
            self.space();
            self.ident(name);
        }
        self.signature(&function.signature);
        self.function_body(function);
    }

    /// Object literal or class method: `*key?<T>(params): R { ... }`.
    fn method(&mut self, key: PropertyName, optional: bool, function: &Function) {
        if function.generator {
            self.text("*");
        }
        self.property_name(key);
        if optional {
            self.text("?");
        }
        self.signature(&function.signature);
        self.function_body(function);
    }

    fn function_body(&mut self, function: &Function) {
        match &function.body {
            Some(body) => {
                self.space();
                self.block(body);
            }
            None => self.text(";"),
        }
    }

    fn arrow(&mut self, arrow: &ArrowFunction) {
        self.signature(&arrow.signature);
        self.text(" => ");
        match &arrow.body {
            ArrowBody::Block(block) => self.block(block),
            ArrowBody::Expr(expr) => self.expr(expr),
        }
    }

    /// `<T>(params): R`
    pub(super) fn signature(&mut self, signature: &CallSignature) {
        self.type_params(&signature.type_params);
        self.params(&signature.params);
        self.type_annotation(signature.return_type.as_ref());
    }

    pub(super) fn params(&mut self, params: &[Param]) {
        self.text("(");
        self.comma_list(params, Self::param);
        self.text(")");
    }

    fn param(&mut self, param: &Param) {
        self.modifiers(param.modifiers);
        if param.rest {
            self.text("...");
        }
        self.pattern(&param.pattern);
        if param.optional {
            self.text("?");
        }
        self.type_annotation(param.ty.as_ref());
        if let Some(default) = &param.default {
            self.text(" = ");
            self.expr(default);
        }
    }

    /// Modifier keywords, each followed by a space.
    pub(super) fn modifiers(&mut self, modifiers: Modifiers) {
        for keyword in modifiers.keywords() {
            self.text(keyword);
            self.space();
        }
    }

    pub(super) fn class(&mut self, class: &Class) {
        self.text("class");
        if let Some(name) = class.name {
            self.space();
            self.ident(name);
        }
        self.heritage(&class.type_params, class.extends.as_ref(), &class.implements);
        self.space();
        let members = class
            .members
            .iter()
            .filter(|member| !matches!(member.kind, ClassMemberKind::Error));
        self.braced_lines(members, Self::class_member);
    }

    fn class_member(&mut self, member: &ClassMember) {
        self.modifiers(member.modifiers);
        match &member.kind {
            ClassMemberKind::Constructor { params, body } => {
                self.text("constructor");
                self.params(params);
                match body {
                    Some(body) => {
                        self.space();
                        self.block(body);
                    }
                    None => self.text(";"),
                }
            }
            ClassMemberKind::Property {
                key,
                optional,
                ty,
                init,
            } => {
                self.property_name(*key);
                if *optional {
                    self.text("?");
                }
                self.type_annotation(ty.as_ref());
                if let Some(init) = init {
                    self.text(" = ");
                    self.expr(init);
                }
                self.text(";");
            }
            ClassMemberKind::Method {
                key,
                optional,
                function,
            } => self.method(*key, *optional, function),
            ClassMemberKind::Getter {
                key,
                return_type,
                body,
            } => {
                self.text("get ");
                self.property_name(*key);
                self.text("()");
                self.type_annotation(return_type.as_ref());
                self.space();
                self.block(body);
            }
            ClassMemberKind::Setter { key, param, body } => {
                self.text("set ");
                self.property_name(*key);
                self.text("(");
                self.param(param);
                self.text(") ");
                self.block(body);
            }
            ClassMemberKind::Index(index) => {
                self.index_signature(index);
                self.text(";");
            }
            ClassMemberKind::Error => {}
        }
    }
}

/// Whether the printed operand begins with `+` or `-`.
fn starts_with_sign(expr: &Expr) -> bool {
    matches!(
        expr.kind,
        ExprKind::Unary {
            op: UnaryOp::Plus | UnaryOp::Minus,
            ..
        } | ExprKind::Update { prefix: true, .. }
    )
}
