//! Typed tree to uniform view.

use tsg_stack::ensure_sufficient_stack;

use crate::ast::{
    AmbientClass, AmbientElementKind, AmbientKind, AmbientMemberKind, Argument, ArrayElement,
    ArrowBody, Block, CallSignature, Class, ClassMemberKind, EntityName, EnumDecl, Export,
    ExportDefault, Expr, ExprKind, ForHead, ForInit, Function, Goal, Ident, ImportDecl,
    ImportSpecifier, IndexSignature, InterfaceDecl, LiteralType, Modifiers, ObjectPatternProp,
    Param, Pattern, PatternKind, PropertyKind, PropertyName, SourceFile, SourceKind, Stmt,
    StmtKind, Template, Type, TypeKind, TypeMember, TypeMemberKind, TypeParam, TypeReference,
    VarDecl,
};
use crate::{Name, Span, StringInterner};

use super::{NodeKind, SyntaxNode};

pub(super) struct Lower<'a> {
    interner: &'a StringInterner,
}

fn node(kind: NodeKind, span: Span, children: Vec<SyntaxNode>) -> SyntaxNode {
    SyntaxNode {
        kind,
        span,
        text: None,
        children,
    }
}

fn leaf(kind: NodeKind, span: Span, text: &'static str) -> SyntaxNode {
    SyntaxNode {
        kind,
        span,
        text: Some(text),
        children: Vec::new(),
    }
}

fn with_text(mut node: SyntaxNode, text: Option<&'static str>) -> SyntaxNode {
    node.text = text;
    node
}

fn optional_marker(optional: bool, span: Span) -> Option<SyntaxNode> {
    optional.then(|| node(NodeKind::OptionalMarker, span, Vec::new()))
}

fn modifiers(modifiers: Modifiers, span: Span) -> impl Iterator<Item = SyntaxNode> {
    modifiers
        .keywords()
        .map(move |word| leaf(NodeKind::Modifier, span, word))
}

impl<'a> Lower<'a> {
    pub(super) fn new(interner: &'a StringInterner) -> Self {
        Lower { interner }
    }

    #[inline]
    fn text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    fn ident(&self, kind: NodeKind, ident: Ident) -> SyntaxNode {
        leaf(kind, ident.span, self.text(ident.name))
    }

    pub(super) fn source_file(&self, file: &SourceFile) -> SyntaxNode {
        let label = match (file.kind, file.goal) {
            (SourceKind::Implementation, Goal::Script) => "implementation script",
            (SourceKind::Implementation, Goal::Module) => "implementation module",
            (SourceKind::Declaration, Goal::Script) => "declaration script",
            (SourceKind::Declaration, Goal::Module) => "declaration module",
        };
        with_text(
            node(NodeKind::SourceFile, file.span, self.stmts(&file.items)),
            Some(label),
        )
    }

    fn stmts(&self, stmts: &[Stmt]) -> Vec<SyntaxNode> {
        stmts.iter().map(|stmt| self.stmt(stmt)).collect()
    }

    fn block(&self, kind: NodeKind, block: &Block) -> SyntaxNode {
        node(kind, block.span, self.stmts(&block.stmts))
    }

    fn stmt(&self, stmt: &Stmt) -> SyntaxNode {
        ensure_sufficient_stack(|| self.stmt_inner(stmt))
    }

    fn stmt_inner(&self, stmt: &Stmt) -> SyntaxNode {
        let span = stmt.span;
        match &stmt.kind {
            StmtKind::Block(block) => self.block(NodeKind::BlockStatement, block),
            StmtKind::Empty => node(NodeKind::EmptyStatement, span, Vec::new()),
            StmtKind::Expr(expr) => node(NodeKind::ExpressionStatement, span, vec![self.expr(expr)]),
            StmtKind::Var(decl) => self.var_decl(decl),
            StmtKind::If {
                test,
                consequent,
                alternate,
            } => {
                let mut children = vec![self.expr(test), self.stmt(consequent)];
                children.extend(alternate.as_deref().map(|alt| self.stmt(alt)));
                node(NodeKind::IfStatement, span, children)
            }
            StmtKind::For {
                init,
                test,
                update,
                body,
            } => {
                let empty = || node(NodeKind::EmptySlot, Span::point(span.start), Vec::new());
                let init = match init {
                    Some(ForInit::Var(decl)) => self.var_decl(decl),
                    Some(ForInit::Expr(expr)) => self.expr(expr),
                    None => empty(),
                };
                let test = test.as_deref().map_or_else(empty, |e| self.expr(e));
                let update = update.as_deref().map_or_else(empty, |e| self.expr(e));
                node(
                    NodeKind::ForStatement,
                    span,
                    vec![init, test, update, self.stmt(body)],
                )
            }
            StmtKind::ForIn { left, right, body } => node(
                NodeKind::ForInStatement,
                span,
                vec![self.for_head(left), self.expr(right), self.stmt(body)],
            ),
            StmtKind::ForOf { left, right, body } => node(
                NodeKind::ForOfStatement,
                span,
                vec![self.for_head(left), self.expr(right), self.stmt(body)],
            ),
            StmtKind::While { test, body } => node(
                NodeKind::WhileStatement,
                span,
                vec![self.expr(test), self.stmt(body)],
            ),
            StmtKind::DoWhile { body, test } => node(
                NodeKind::DoWhileStatement,
                span,
                vec![self.stmt(body), self.expr(test)],
            ),
            StmtKind::Switch {
                discriminant,
                cases,
            } => {
                let mut children = vec![self.expr(discriminant)];
                for case in cases {
                    let (kind, mut items) = match &case.test {
                        Some(test) => (NodeKind::CaseClause, vec![self.expr(test)]),
                        None => (NodeKind::DefaultClause, Vec::new()),
                    };
                    items.extend(case.body.iter().map(|s| self.stmt(s)));
                    children.push(node(kind, case.span, items));
                }
                node(NodeKind::SwitchStatement, span, children)
            }
            StmtKind::Try {
                block,
                handler,
                finalizer,
            } => {
                let mut children = vec![self.block(NodeKind::BlockStatement, block)];
                if let Some(handler) = handler {
                    children.push(node(
                        NodeKind::CatchClause,
                        handler.span,
                        vec![
                            self.pattern(&handler.param),
                            self.block(NodeKind::BlockStatement, &handler.body),
                        ],
                    ));
                }
                children.extend(
                    finalizer
                        .as_ref()
                        .map(|f| self.block(NodeKind::FinallyClause, f)),
                );
                node(NodeKind::TryStatement, span, children)
            }
            StmtKind::Labeled { label, body } => node(
                NodeKind::LabelledStatement,
                span,
                vec![self.ident(NodeKind::LabelIdentifier, *label), self.stmt(body)],
            ),
            StmtKind::With { object, body } => node(
                NodeKind::WithStatement,
                span,
                vec![self.expr(object), self.stmt(body)],
            ),
            StmtKind::Debugger => node(NodeKind::DebuggerStatement, span, Vec::new()),
            StmtKind::Return(argument) => node(
                NodeKind::ReturnStatement,
                span,
                argument.iter().map(|e| self.expr(e)).collect(),
            ),
            StmtKind::Throw(argument) => {
                node(NodeKind::ThrowStatement, span, vec![self.expr(argument)])
            }
            StmtKind::Break(label) => node(
                NodeKind::BreakStatement,
                span,
                label
                    .iter()
                    .map(|l| self.ident(NodeKind::LabelIdentifier, *l))
                    .collect(),
            ),
            StmtKind::Continue(label) => node(
                NodeKind::ContinueStatement,
                span,
                label
                    .iter()
                    .map(|l| self.ident(NodeKind::LabelIdentifier, *l))
                    .collect(),
            ),
            StmtKind::Function(function) => self.function(NodeKind::FunctionDeclaration, function),
            StmtKind::Class(class) => self.class(NodeKind::ClassDeclaration, class),
            StmtKind::Interface(decl) => self.interface(decl),
            StmtKind::TypeAlias(decl) => {
                let mut children = vec![self.ident(NodeKind::BindingIdentifier, decl.name)];
                children.extend(self.type_params(&decl.type_params));
                children.push(self.ty(&decl.ty));
                node(NodeKind::TypeAliasDeclaration, decl.span, children)
            }
            StmtKind::Enum(decl) => self.enum_decl(NodeKind::EnumDeclaration, decl),
            StmtKind::Namespace(decl) => {
                let mut children = vec![self.identifier_path(&decl.path, decl.span)];
                children.extend(self.stmts(&decl.body));
                node(NodeKind::NamespaceDeclaration, decl.span, children)
            }
            StmtKind::Ambient(decl) => self.ambient(&decl.kind, decl.span),
            StmtKind::AmbientModule(decl) => {
                let mut children = vec![leaf(NodeKind::ModuleSpecifier, span, self.text(decl.name))];
                children.extend(self.stmts(&decl.body));
                node(NodeKind::AmbientModuleDeclaration, decl.span, children)
            }
            StmtKind::ImportAlias { name, target } => node(
                NodeKind::ImportAliasDeclaration,
                span,
                vec![
                    self.ident(NodeKind::BindingIdentifier, *name),
                    self.entity_name(target),
                ],
            ),
            StmtKind::ImportRequire { name, module } => node(
                NodeKind::ImportRequireDeclaration,
                span,
                vec![
                    self.ident(NodeKind::BindingIdentifier, *name),
                    leaf(NodeKind::ModuleSpecifier, span, self.text(*module)),
                ],
            ),
            StmtKind::Import(decl) => self.import(decl),
            StmtKind::Export(export) => self.export(export, span),
            StmtKind::Error => node(NodeKind::Error, span, Vec::new()),
        }
    }

    fn var_decl(&self, decl: &VarDecl) -> SyntaxNode {
        let children = decl
            .declarators
            .iter()
            .map(|d| {
                let mut children = vec![self.pattern(&d.pattern)];
                children.extend(d.ty.as_ref().map(|t| self.type_annotation(t)));
                children.extend(d.init.as_ref().map(|e| self.initializer(e)));
                node(NodeKind::VariableDeclarator, d.span, children)
            })
            .collect();
        with_text(
            node(NodeKind::VariableDeclaration, decl.span, children),
            Some(decl.kind.as_str()),
        )
    }

    fn for_head(&self, head: &ForHead) -> SyntaxNode {
        match head {
            ForHead::Var(decl) => self.var_decl(decl),
            ForHead::Pattern(pattern) => self.pattern(pattern),
        }
    }

    fn initializer(&self, expr: &Expr) -> SyntaxNode {
        node(NodeKind::Initializer, expr.span, vec![self.expr(expr)])
    }

    fn type_annotation(&self, ty: &Type) -> SyntaxNode {
        node(NodeKind::TypeAnnotation, ty.span, vec![self.ty(ty)])
    }

    fn property_name(&self, key: &PropertyName) -> SyntaxNode {
        leaf(NodeKind::PropertyName, key.span, self.text(key.name))
    }

    fn identifier_path(&self, path: &[Ident], span: Span) -> SyntaxNode {
        node(
            NodeKind::IdentifierPath,
            path.first()
                .zip(path.last())
                .map_or(span, |(first, last)| first.span.merge(last.span)),
            path.iter()
                .map(|id| self.ident(NodeKind::BindingIdentifier, *id))
                .collect(),
        )
    }

    fn function(&self, kind: NodeKind, function: &Function) -> SyntaxNode {
        let mut children = Vec::new();
        children.extend(
            function
                .name
                .map(|name| self.ident(NodeKind::BindingIdentifier, name)),
        );
        children.push(self.call_signature(&function.signature));
        children.extend(
            function
                .body
                .as_ref()
                .map(|body| self.block(NodeKind::FunctionBody, body)),
        );
        with_text(
            node(kind, function.span, children),
            function.generator.then_some("*"),
        )
    }

    fn call_signature(&self, sig: &CallSignature) -> SyntaxNode {
        let mut children = Vec::new();
        children.extend(self.type_params(&sig.type_params));
        children.push(self.params(&sig.params, sig.span));
        children.extend(sig.return_type.as_ref().map(|t| self.type_annotation(t)));
        node(NodeKind::CallSignature, sig.span, children)
    }

    fn params(&self, params: &[Param], span: Span) -> SyntaxNode {
        node(
            NodeKind::FormalParameters,
            span,
            params.iter().map(|p| self.param(p)).collect(),
        )
    }

    fn param(&self, param: &Param) -> SyntaxNode {
        let kind = if param.rest {
            NodeKind::RestParameter
        } else {
            NodeKind::FormalParameter
        };
        let mut children: Vec<SyntaxNode> = modifiers(param.modifiers, param.span).collect();
        children.push(self.pattern(&param.pattern));
        children.extend(optional_marker(param.optional, param.span));
        children.extend(param.ty.as_ref().map(|t| self.type_annotation(t)));
        children.extend(param.default.as_ref().map(|e| self.initializer(e)));
        node(kind, param.span, children)
    }

    fn type_params(&self, params: &[TypeParam]) -> Option<SyntaxNode> {
        let first = params.first()?;
        let span = params
            .iter()
            .fold(first.span, |span, param| span.merge(param.span));
        let children = params
            .iter()
            .map(|param| {
                let mut children = vec![self.ident(NodeKind::BindingIdentifier, param.name)];
                children.extend(
                    param
                        .constraint
                        .as_ref()
                        .map(|c| node(NodeKind::Constraint, c.span, vec![self.ty(c)])),
                );
                node(NodeKind::TypeParameter, param.span, children)
            })
            .collect();
        Some(node(NodeKind::TypeParameters, span, children))
    }

    fn type_args(&self, args: &[Type], span: Span) -> SyntaxNode {
        node(
            NodeKind::TypeArguments,
            span,
            args.iter().map(|t| self.ty(t)).collect(),
        )
    }

    fn heritage(
        &self,
        extends: Option<&TypeReference>,
        implements: &[TypeReference],
        span: Span,
    ) -> Option<SyntaxNode> {
        if extends.is_none() && implements.is_empty() {
            return None;
        }
        let mut children = Vec::new();
        children.extend(extends.map(|r| {
            node(
                NodeKind::ClassExtends,
                r.span,
                vec![self.type_reference(r)],
            )
        }));
        if let Some(first) = implements.first() {
            children.push(node(
                NodeKind::ImplementsClause,
                first.span,
                implements.iter().map(|r| self.type_reference(r)).collect(),
            ));
        }
        Some(node(NodeKind::ClassHeritage, span, children))
    }

    fn class(&self, kind: NodeKind, class: &Class) -> SyntaxNode {
        let mut children = Vec::new();
        children.extend(class.name.map(|n| self.ident(NodeKind::BindingIdentifier, n)));
        children.extend(self.type_params(&class.type_params));
        children.extend(self.heritage(class.extends.as_ref(), &class.implements, class.span));
        let members = class
            .members
            .iter()
            .map(|member| {
                let mut children: Vec<SyntaxNode> =
                    modifiers(member.modifiers, member.span).collect();
                let kind = match &member.kind {
                    ClassMemberKind::Constructor { params, body } => {
                        children.push(self.params(params, member.span));
                        children.extend(body.as_ref().map(|b| self.block(NodeKind::FunctionBody, b)));
                        NodeKind::ConstructorDeclaration
                    }
                    ClassMemberKind::Property {
                        key,
                        optional,
                        ty,
                        init,
                    } => {
                        children.push(self.property_name(key));
                        children.extend(optional_marker(*optional, key.span));
                        children.extend(ty.as_ref().map(|t| self.type_annotation(t)));
                        children.extend(init.as_ref().map(|e| self.initializer(e)));
                        NodeKind::MemberVariableDeclaration
                    }
                    ClassMemberKind::Method {
                        key,
                        optional,
                        function,
                    } => {
                        children.push(self.property_name(key));
                        children.extend(optional_marker(*optional, key.span));
                        children.push(self.call_signature(&function.signature));
                        children.extend(
                            function
                                .body
                                .as_ref()
                                .map(|b| self.block(NodeKind::FunctionBody, b)),
                        );
                        let mut method = node(NodeKind::MemberFunctionDeclaration, member.span, children);
                        method.text = function.generator.then_some("*");
                        return method;
                    }
                    ClassMemberKind::Getter {
                        key,
                        return_type,
                        body,
                    } => {
                        children.push(self.property_name(key));
                        children.extend(return_type.as_ref().map(|t| self.type_annotation(t)));
                        children.push(self.block(NodeKind::FunctionBody, body));
                        NodeKind::GetAccessor
                    }
                    ClassMemberKind::Setter { key, param, body } => {
                        children.push(self.property_name(key));
                        children.push(self.param(param));
                        children.push(self.block(NodeKind::FunctionBody, body));
                        NodeKind::SetAccessor
                    }
                    ClassMemberKind::Index(sig) => {
                        children.push(self.index_signature(sig));
                        NodeKind::IndexMemberDeclaration
                    }
                    ClassMemberKind::Error => NodeKind::Error,
                };
                node(kind, member.span, children)
            })
            .collect();
        children.push(node(NodeKind::ClassBody, class.span, members));
        node(kind, class.span, children)
    }

    fn interface(&self, decl: &InterfaceDecl) -> SyntaxNode {
        let mut children = vec![self.ident(NodeKind::BindingIdentifier, decl.name)];
        children.extend(self.type_params(&decl.type_params));
        if let Some(first) = decl.extends.first() {
            children.push(node(
                NodeKind::InterfaceExtends,
                first.span,
                decl.extends.iter().map(|r| self.type_reference(r)).collect(),
            ));
        }
        children.push(node(
            NodeKind::ObjectType,
            decl.span,
            decl.members.iter().map(|m| self.type_member(m)).collect(),
        ));
        node(NodeKind::InterfaceDeclaration, decl.span, children)
    }

    fn enum_decl(&self, kind: NodeKind, decl: &EnumDecl) -> SyntaxNode {
        let mut children = vec![self.ident(NodeKind::BindingIdentifier, decl.name)];
        children.extend(decl.members.iter().map(|member| {
            let mut children = vec![self.property_name(&member.name)];
            children.extend(member.init.as_ref().map(|e| self.initializer(e)));
            node(NodeKind::EnumMember, member.span, children)
        }));
        with_text(node(kind, decl.span, children), decl.is_const.then_some("const"))
    }

    fn ambient(&self, kind: &AmbientKind, span: Span) -> SyntaxNode {
        match kind {
            AmbientKind::Var { kind, bindings } => with_text(
                node(
                    NodeKind::AmbientVariableDeclaration,
                    span,
                    bindings
                        .iter()
                        .map(|b| {
                            let mut children = vec![self.ident(NodeKind::BindingIdentifier, b.name)];
                            children.extend(b.ty.as_ref().map(|t| self.type_annotation(t)));
                            node(NodeKind::AmbientBinding, b.span, children)
                        })
                        .collect(),
                ),
                Some(kind.as_str()),
            ),
            AmbientKind::Function(function) => node(
                NodeKind::AmbientFunctionDeclaration,
                function.span,
                vec![
                    self.ident(NodeKind::BindingIdentifier, function.name),
                    self.call_signature(&function.signature),
                ],
            ),
            AmbientKind::Class(class) => self.ambient_class(class),
            AmbientKind::Enum(decl) => self.enum_decl(NodeKind::AmbientEnumDeclaration, decl),
            AmbientKind::Namespace(ns) => {
                let mut children = vec![self.identifier_path(&ns.path, ns.span)];
                children.extend(ns.elements.iter().map(|element| {
                    let inner = match &element.kind {
                        AmbientElementKind::Decl(kind) => self.ambient(kind, element.span),
                        AmbientElementKind::Interface(decl) => self.interface(decl),
                        AmbientElementKind::TypeAlias(decl) => {
                            let mut children = vec![self.ident(NodeKind::BindingIdentifier, decl.name)];
                            children.extend(self.type_params(&decl.type_params));
                            children.push(self.ty(&decl.ty));
                            node(NodeKind::TypeAliasDeclaration, decl.span, children)
                        }
                        AmbientElementKind::ImportAlias { name, target } => node(
                            NodeKind::ImportAliasDeclaration,
                            element.span,
                            vec![
                                self.ident(NodeKind::BindingIdentifier, *name),
                                self.entity_name(target),
                            ],
                        ),
                        AmbientElementKind::Error => node(NodeKind::Error, element.span, Vec::new()),
                    };
                    with_text(
                        node(NodeKind::AmbientNamespaceElement, element.span, vec![inner]),
                        element.exported.then_some("export"),
                    )
                }));
                node(NodeKind::AmbientNamespaceDeclaration, ns.span, children)
            }
        }
    }

    fn ambient_class(&self, class: &AmbientClass) -> SyntaxNode {
        let mut children = vec![self.ident(NodeKind::BindingIdentifier, class.name)];
        children.extend(self.type_params(&class.type_params));
        children.extend(self.heritage(class.extends.as_ref(), &class.implements, class.span));
        let members = class
            .members
            .iter()
            .map(|member| {
                let mut children: Vec<SyntaxNode> =
                    modifiers(member.modifiers, member.span).collect();
                let kind = match &member.kind {
                    AmbientMemberKind::Constructor { params } => {
                        children.push(self.params(params, member.span));
                        NodeKind::AmbientConstructorDeclaration
                    }
                    AmbientMemberKind::Property { key, optional, ty } => {
                        children.push(self.property_name(key));
                        children.extend(optional_marker(*optional, key.span));
                        children.extend(ty.as_ref().map(|t| self.type_annotation(t)));
                        NodeKind::AmbientPropertyMember
                    }
                    AmbientMemberKind::Method {
                        key,
                        optional,
                        signature,
                    } => {
                        children.push(self.property_name(key));
                        children.extend(optional_marker(*optional, key.span));
                        children.push(self.call_signature(signature));
                        NodeKind::AmbientMethodMember
                    }
                    AmbientMemberKind::Index(sig) => {
                        children.push(self.index_signature(sig));
                        NodeKind::IndexMemberDeclaration
                    }
                    AmbientMemberKind::Error => NodeKind::Error,
                };
                node(kind, member.span, children)
            })
            .collect();
        children.push(node(NodeKind::ClassBody, class.span, members));
        node(NodeKind::AmbientClassDeclaration, class.span, children)
    }

    fn specifier(&self, kind: NodeKind, spec: &ImportSpecifier) -> SyntaxNode {
        let mut children = vec![self.ident(NodeKind::Identifier, spec.name)];
        children.extend(spec.alias.map(|a| self.ident(NodeKind::BindingIdentifier, a)));
        node(kind, spec.span, children)
    }

    fn import(&self, decl: &ImportDecl) -> SyntaxNode {
        let mut children = Vec::new();
        if let Some(clause) = &decl.clause {
            children.extend(clause.default.map(|d| self.ident(NodeKind::BindingIdentifier, d)));
            children.extend(clause.namespace.map(|ns| {
                node(
                    NodeKind::NamespaceImport,
                    ns.span,
                    vec![self.ident(NodeKind::BindingIdentifier, ns)],
                )
            }));
            if let Some(named) = &clause.named {
                children.push(node(
                    NodeKind::NamedImports,
                    decl.span,
                    named
                        .iter()
                        .map(|s| self.specifier(NodeKind::ImportSpecifier, s))
                        .collect(),
                ));
            }
        }
        children.push(leaf(NodeKind::ModuleSpecifier, decl.span, self.text(decl.source)));
        node(NodeKind::ImportDeclaration, decl.span, children)
    }

    fn export(&self, export: &Export, span: Span) -> SyntaxNode {
        match export {
            Export::Decl(stmt) => node(NodeKind::ExportDeclaration, span, vec![self.stmt(stmt)]),
            Export::Default(default) => {
                let inner = match default {
                    ExportDefault::Function(f) => self.function(NodeKind::FunctionDeclaration, f),
                    ExportDefault::Class(c) => self.class(NodeKind::ClassDeclaration, c),
                    ExportDefault::Expr(e) => self.expr(e),
                    ExportDefault::AmbientFunction(f) => node(
                        NodeKind::AmbientFunctionDeclaration,
                        f.span,
                        vec![
                            self.ident(NodeKind::BindingIdentifier, f.name),
                            self.call_signature(&f.signature),
                        ],
                    ),
                    ExportDefault::AmbientClass(c) => self.ambient_class(c),
                };
                node(NodeKind::ExportDefault, span, vec![inner])
            }
            Export::All { source } => node(
                NodeKind::ExportAll,
                span,
                vec![leaf(NodeKind::ModuleSpecifier, span, self.text(*source))],
            ),
            Export::Named { specifiers, source } => {
                let mut children: Vec<SyntaxNode> = specifiers
                    .iter()
                    .map(|s| self.specifier(NodeKind::ExportSpecifier, s))
                    .collect();
                children.extend(source.map(|s| leaf(NodeKind::ModuleSpecifier, span, self.text(s))));
                node(NodeKind::ExportClause, span, children)
            }
            Export::Assignment(ident) => node(
                NodeKind::ExportAssignment,
                span,
                vec![self.ident(NodeKind::Identifier, *ident)],
            ),
        }
    }

    fn expr(&self, expr: &Expr) -> SyntaxNode {
        ensure_sufficient_stack(|| self.expr_inner(expr))
    }

    fn expr_inner(&self, expr: &Expr) -> SyntaxNode {
        let span = expr.span;
        match &expr.kind {
            ExprKind::This => node(NodeKind::This, span, Vec::new()),
            ExprKind::Super => node(NodeKind::Super, span, Vec::new()),
            ExprKind::Ident(name) => leaf(NodeKind::Identifier, span, self.text(*name)),
            ExprKind::Null => node(NodeKind::NullLiteral, span, Vec::new()),
            ExprKind::Bool(value) => leaf(
                NodeKind::BooleanLiteral,
                span,
                if *value { "true" } else { "false" },
            ),
            ExprKind::Number(raw) => leaf(NodeKind::NumberLiteral, span, self.text(*raw)),
            ExprKind::String(raw) => leaf(NodeKind::StringLiteral, span, self.text(*raw)),
            ExprKind::Regex(raw) => leaf(NodeKind::RegexLiteral, span, self.text(*raw)),
            ExprKind::Template(template) => self.template(template),
            ExprKind::TaggedTemplate { tag, quasi } => node(
                NodeKind::TaggedTemplate,
                span,
                vec![self.expr(tag), self.template(quasi)],
            ),
            ExprKind::Array(elements) => node(
                NodeKind::ArrayLiteral,
                span,
                elements
                    .iter()
                    .map(|element| match element {
                        ArrayElement::Hole(span) => node(NodeKind::Elision, *span, Vec::new()),
                        ArrayElement::Item(e) => self.expr(e),
                        ArrayElement::Spread(e, span) => {
                            node(NodeKind::SpreadElement, *span, vec![self.expr(e)])
                        }
                    })
                    .collect(),
            ),
            ExprKind::Object(props) => node(
                NodeKind::ObjectLiteral,
                span,
                props
                    .iter()
                    .map(|prop| self.property(&prop.kind, prop.span))
                    .collect(),
            ),
            ExprKind::Function(function) => self.function(NodeKind::FunctionExpression, function),
            ExprKind::Arrow(arrow) => {
                let body = match &arrow.body {
                    ArrowBody::Block(block) => self.block(NodeKind::FunctionBody, block),
                    ArrowBody::Expr(e) => self.expr(e),
                };
                node(
                    NodeKind::ArrowFunction,
                    span,
                    vec![self.call_signature(&arrow.signature), body],
                )
            }
            ExprKind::Class(class) => self.class(NodeKind::ClassExpression, class),
            ExprKind::Paren(inner) => {
                node(NodeKind::ParenthesizedExpression, span, vec![self.expr(inner)])
            }
            ExprKind::Sequence(items) => node(
                NodeKind::SequenceExpression,
                span,
                items.iter().map(|e| self.expr(e)).collect(),
            ),
            ExprKind::Unary { op, operand } => with_text(
                node(NodeKind::UnaryExpression, span, vec![self.expr(operand)]),
                Some(op.as_str()),
            ),
            ExprKind::Update {
                op,
                prefix,
                operand,
            } => {
                let kind = if *prefix {
                    NodeKind::PrefixUpdateExpression
                } else {
                    NodeKind::PostfixUpdateExpression
                };
                with_text(node(kind, span, vec![self.expr(operand)]), Some(op.as_str()))
            }
            ExprKind::Binary { op, left, right } => with_text(
                node(
                    NodeKind::BinaryExpression,
                    span,
                    vec![self.expr(left), self.expr(right)],
                ),
                Some(op.as_str()),
            ),
            ExprKind::Assign { op, target, value } => with_text(
                node(
                    NodeKind::AssignmentExpression,
                    span,
                    vec![self.pattern(target), self.expr(value)],
                ),
                Some(op.as_str()),
            ),
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => node(
                NodeKind::ConditionalExpression,
                span,
                vec![self.expr(test), self.expr(consequent), self.expr(alternate)],
            ),
            ExprKind::Call {
                callee,
                type_args,
                args,
            } => {
                let mut children = vec![self.expr(callee)];
                children.extend(type_args.as_deref().map(|t| self.type_args(t, span)));
                children.push(self.arguments(args, span));
                node(NodeKind::CallExpression, span, children)
            }
            ExprKind::New {
                callee,
                type_args,
                args,
            } => {
                let mut children = vec![self.expr(callee)];
                children.extend(type_args.as_deref().map(|t| self.type_args(t, span)));
                children.extend(args.as_deref().map(|a| self.arguments(a, span)));
                node(NodeKind::NewExpression, span, children)
            }
            ExprKind::Member { object, property } => node(
                NodeKind::MemberExpression,
                span,
                vec![
                    self.expr(object),
                    self.ident(NodeKind::PropertyName, *property),
                ],
            ),
            ExprKind::Index { object, index } => node(
                NodeKind::IndexExpression,
                span,
                vec![self.expr(object), self.expr(index)],
            ),
            ExprKind::NewTarget => node(NodeKind::NewTarget, span, Vec::new()),
            ExprKind::Yield { delegate, argument } => with_text(
                node(
                    NodeKind::YieldExpression,
                    span,
                    argument.iter().map(|e| self.expr(e)).collect(),
                ),
                delegate.then_some("*"),
            ),
            ExprKind::TypeAssertion { ty, expr } => node(
                NodeKind::TypeAssertion,
                span,
                vec![self.ty(ty), self.expr(expr)],
            ),
            ExprKind::As { expr, ty } => node(
                NodeKind::AsExpression,
                span,
                vec![self.expr(expr), self.ty(ty)],
            ),
            ExprKind::Error => node(NodeKind::Error, span, Vec::new()),
        }
    }

    fn template(&self, template: &Template) -> SyntaxNode {
        let mut children = Vec::with_capacity(template.quasis.len() + template.exprs.len());
        for (i, quasi) in template.quasis.iter().enumerate() {
            children.push(leaf(NodeKind::TemplateChunk, template.span, self.text(*quasi)));
            if let Some(expr) = template.exprs.get(i) {
                children.push(self.expr(expr));
            }
        }
        node(NodeKind::TemplateLiteral, template.span, children)
    }

    fn arguments(&self, args: &[Argument], span: Span) -> SyntaxNode {
        node(
            NodeKind::Arguments,
            span,
            args.iter()
                .map(|arg| {
                    if arg.spread {
                        node(NodeKind::SpreadElement, arg.span, vec![self.expr(&arg.expr)])
                    } else {
                        self.expr(&arg.expr)
                    }
                })
                .collect(),
        )
    }

    fn property(&self, kind: &PropertyKind, span: Span) -> SyntaxNode {
        match kind {
            PropertyKind::KeyValue { key, value } => node(
                NodeKind::PropertyAssignment,
                span,
                vec![self.property_name(key), self.expr(value)],
            ),
            PropertyKind::Shorthand(ident) => self.ident(NodeKind::ShorthandProperty, *ident),
            PropertyKind::CoverInitialized { name, default } => node(
                NodeKind::CoverInitializedName,
                span,
                vec![self.ident(NodeKind::Identifier, *name), self.initializer(default)],
            ),
            PropertyKind::Method { key, function } => {
                let mut children = vec![self.property_name(key), self.call_signature(&function.signature)];
                children.extend(
                    function
                        .body
                        .as_ref()
                        .map(|b| self.block(NodeKind::FunctionBody, b)),
                );
                with_text(
                    node(NodeKind::MethodDefinition, span, children),
                    function.generator.then_some("*"),
                )
            }
            PropertyKind::Getter {
                key,
                return_type,
                body,
            } => {
                let mut children = vec![self.property_name(key)];
                children.extend(return_type.as_ref().map(|t| self.type_annotation(t)));
                children.push(self.block(NodeKind::FunctionBody, body));
                node(NodeKind::GetAccessor, span, children)
            }
            PropertyKind::Setter { key, param, body } => node(
                NodeKind::SetAccessor,
                span,
                vec![
                    self.property_name(key),
                    self.param(param),
                    self.block(NodeKind::FunctionBody, body),
                ],
            ),
            PropertyKind::Error => node(NodeKind::Error, span, Vec::new()),
        }
    }

    fn pattern(&self, pattern: &Pattern) -> SyntaxNode {
        ensure_sufficient_stack(|| self.pattern_inner(pattern))
    }

    fn pattern_inner(&self, pattern: &Pattern) -> SyntaxNode {
        let span = pattern.span;
        match &pattern.kind {
            PatternKind::Ident(name) => leaf(NodeKind::BindingIdentifier, span, self.text(*name)),
            PatternKind::Object(props) => node(
                NodeKind::ObjectBindingPattern,
                span,
                props
                    .iter()
                    .map(|prop| match prop {
                        ObjectPatternProp::KeyValue { key, value, span } => node(
                            NodeKind::BindingProperty,
                            *span,
                            vec![self.property_name(key), self.pattern(value)],
                        ),
                        ObjectPatternProp::Shorthand {
                            name,
                            default,
                            span,
                        } => with_text(
                            node(
                                NodeKind::ShorthandBindingProperty,
                                *span,
                                default.iter().map(|d| self.initializer(d)).collect(),
                            ),
                            Some(self.text(name.name)),
                        ),
                    })
                    .collect(),
            ),
            PatternKind::Array { elements, rest } => {
                let mut children: Vec<SyntaxNode> = elements
                    .iter()
                    .map(|element| match element {
                        Some(p) => self.pattern(p),
                        None => node(NodeKind::Elision, Span::point(span.start), Vec::new()),
                    })
                    .collect();
                children.extend(
                    rest.as_deref()
                        .map(|r| node(NodeKind::RestElement, r.span, vec![self.pattern(r)])),
                );
                node(NodeKind::ArrayBindingPattern, span, children)
            }
            PatternKind::Assign { target, default } => node(
                NodeKind::AssignmentPattern,
                span,
                vec![self.pattern(target), self.expr(default)],
            ),
            PatternKind::Expr(expr) => self.expr(expr),
            PatternKind::Error => node(NodeKind::Error, span, Vec::new()),
        }
    }

    fn entity_name(&self, name: &EntityName) -> SyntaxNode {
        node(
            NodeKind::EntityName,
            name.span,
            name.segments
                .iter()
                .map(|id| self.ident(NodeKind::Identifier, *id))
                .collect(),
        )
    }

    fn type_reference(&self, reference: &TypeReference) -> SyntaxNode {
        let mut children = vec![self.entity_name(&reference.name)];
        if !reference.type_args.is_empty() {
            children.push(self.type_args(&reference.type_args, reference.span));
        }
        node(NodeKind::TypeReference, reference.span, children)
    }

    fn ty(&self, ty: &Type) -> SyntaxNode {
        ensure_sufficient_stack(|| self.ty_inner(ty))
    }

    fn ty_inner(&self, ty: &Type) -> SyntaxNode {
        let span = ty.span;
        match &ty.kind {
            TypeKind::Predefined(p) => leaf(NodeKind::PredefinedType, span, p.as_str()),
            TypeKind::Reference(r) => self.type_reference(r),
            TypeKind::Object(members) => node(
                NodeKind::ObjectType,
                span,
                members.iter().map(|m| self.type_member(m)).collect(),
            ),
            TypeKind::Array(element) => node(NodeKind::ArrayType, span, vec![self.ty(element)]),
            TypeKind::Tuple(types) => node(
                NodeKind::TupleType,
                span,
                types.iter().map(|t| self.ty(t)).collect(),
            ),
            TypeKind::Union(types) => node(
                NodeKind::UnionType,
                span,
                types.iter().map(|t| self.ty(t)).collect(),
            ),
            TypeKind::Intersection(types) => node(
                NodeKind::IntersectionType,
                span,
                types.iter().map(|t| self.ty(t)).collect(),
            ),
            TypeKind::Function(f) | TypeKind::Constructor(f) => {
                let kind = if matches!(ty.kind, TypeKind::Function(_)) {
                    NodeKind::FunctionType
                } else {
                    NodeKind::ConstructorType
                };
                let mut children = Vec::new();
                children.extend(self.type_params(&f.type_params));
                children.push(self.params(&f.params, span));
                children.push(self.ty(&f.return_type));
                node(kind, span, children)
            }
            TypeKind::Query(name) => node(NodeKind::TypeQuery, span, vec![self.entity_name(name)]),
            TypeKind::This => node(NodeKind::ThisType, span, Vec::new()),
            TypeKind::Paren(inner) => node(NodeKind::ParenthesizedType, span, vec![self.ty(inner)]),
            TypeKind::Literal(literal) => {
                let text = match literal {
                    LiteralType::String(raw) | LiteralType::Number(raw) => self.text(*raw),
                    LiteralType::Bool(true) => "true",
                    LiteralType::Bool(false) => "false",
                };
                leaf(NodeKind::LiteralType, span, text)
            }
            TypeKind::Error => node(NodeKind::Error, span, Vec::new()),
        }
    }

    fn type_member(&self, member: &TypeMember) -> SyntaxNode {
        let span = member.span;
        match &member.kind {
            TypeMemberKind::Property { key, optional, ty } => {
                let mut children = vec![self.property_name(key)];
                children.extend(optional_marker(*optional, key.span));
                children.extend(ty.as_ref().map(|t| self.type_annotation(t)));
                node(NodeKind::PropertySignature, span, children)
            }
            TypeMemberKind::Call(sig) => {
                node(NodeKind::CallSignatureMember, span, vec![self.call_signature(sig)])
            }
            TypeMemberKind::Construct(sig) => {
                node(NodeKind::ConstructSignature, span, vec![self.call_signature(sig)])
            }
            TypeMemberKind::Index(sig) => self.index_signature(sig),
            TypeMemberKind::Method {
                key,
                optional,
                signature,
            } => {
                let mut children = vec![self.property_name(key)];
                children.extend(optional_marker(*optional, key.span));
                children.push(self.call_signature(signature));
                node(NodeKind::MethodSignature, span, children)
            }
            TypeMemberKind::Error => node(NodeKind::Error, span, Vec::new()),
        }
    }

    fn index_signature(&self, sig: &IndexSignature) -> SyntaxNode {
        with_text(
            node(
                NodeKind::IndexSignature,
                sig.span,
                vec![
                    self.ident(NodeKind::BindingIdentifier, sig.param),
                    self.type_annotation(&sig.ty),
                ],
            ),
            Some(sig.key_type.as_str()),
        )
    }
}
