//! TypeScript structure extraction
//!
//! Parses a source file with tree-sitter and extracts the owned, byte-offset
//! based view the augmentation engine and the locator work on: top-level
//! imports, exports and classes with their decorators, members and first
//! constructor.

use std::ops::Range;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{Result, source::parser_unavailable};

/// Structural view of one TypeScript file
#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    pub imports: Vec<ImportDecl>,
    pub exports: Vec<ExportDecl>,
    pub classes: Vec<ClassDecl>,
}

/// One-based position of the first syntax error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxErrorPosition {
    pub line: usize,
    pub column: usize,
}

/// Result of parsing: the extracted tree and the first syntax error, if any
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub tree: SourceTree,
    pub syntax_error: Option<SyntaxErrorPosition>,
}

/// A top-level `import` statement
#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub range: Range<usize>,
    /// Module specifier without quotes
    pub module: String,
    /// Quote character used around the specifier
    pub quote: char,
    /// `import type ...`
    pub type_only: bool,
    /// Default binding and the byte offset where it ends
    pub default_binding: Option<(String, usize)>,
    pub named: Option<NamedImports>,
    pub namespace: bool,
}

/// The `{ ... }` clause of an import
#[derive(Debug, Clone)]
pub struct NamedImports {
    pub range: Range<usize>,
    /// Local names bound by the clause
    pub names: Vec<String>,
    pub last_specifier_end: Option<usize>,
}

impl ImportDecl {
    /// Whether this import binds `name` locally
    pub fn binds(&self, name: &str) -> bool {
        self.default_binding.as_ref().is_some_and(|(n, _)| n == name)
            || self
                .named
                .as_ref()
                .is_some_and(|named| named.names.iter().any(|n| n == name))
    }
}

/// A top-level `export` statement
#[derive(Debug, Clone)]
pub struct ExportDecl {
    /// Module re-exported from, for `export ... from "..."`
    pub module: Option<String>,
}

/// A decorator applied to a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    /// Callee text, e.g. `BotDeclaration`
    pub name: String,
    /// Source text of each argument, comments excluded
    pub arguments: Vec<String>,
}

impl Decorator {
    /// Match by name, also accepting a namespaced callee (`hosts.BotDeclaration`)
    pub fn is(&self, marker: &str) -> bool {
        self.name == marker || self.name.rsplit('.').next() == Some(marker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
    Other,
}

/// A class body member, including its decorators and trailing separator
#[derive(Debug, Clone)]
pub struct ClassMember {
    pub kind: MemberKind,
    pub name: Option<String>,
    pub range: Range<usize>,
}

/// A statement directly inside a constructor body
#[derive(Debug, Clone)]
pub struct StatementInfo {
    pub range: Range<usize>,
    /// `super(...)` call
    pub is_super_call: bool,
    /// Left-hand side of an assignment statement, whitespace removed
    pub assignment_target: Option<String>,
}

/// The first constructor of a class
#[derive(Debug, Clone)]
pub struct ConstructorDecl {
    pub start: usize,
    /// Statement block including braces
    pub body: Range<usize>,
    pub statements: Vec<StatementInfo>,
}

/// A top-level class declaration
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub decorators: Vec<Decorator>,
    /// Start of the declaration, including `export` and decorators
    pub start: usize,
    /// Class body including braces
    pub body: Range<usize>,
    pub members: Vec<ClassMember>,
    pub constructor: Option<ConstructorDecl>,
}

impl ClassDecl {
    pub fn decorator(&self, marker: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.is(marker))
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.members
            .iter()
            .any(|m| m.kind == MemberKind::Field && m.name.as_deref() == Some(name))
    }
}

impl SourceTree {
    /// The first class carrying `marker`, optionally restricted to a class name
    pub fn find_class(&self, marker: &str, class_name: Option<&str>) -> Option<&ClassDecl> {
        self.classes.iter().find(|class| {
            class.decorator(marker).is_some() && class_name.is_none_or(|name| class.name == name)
        })
    }

    /// Whether any export re-exports from `module`
    pub fn exports_from(&self, module: &str) -> bool {
        self.exports
            .iter()
            .any(|e| e.module.as_deref() == Some(module))
    }
}

/// Parse TypeScript text
///
/// Syntax errors do not fail the parse; tree-sitter recovers and the first
/// error position is reported alongside the best-effort tree.
pub fn parse(text: &str) -> Result<ParsedSource> {
    let tree = parse_tree(text)?;
    let root = tree.root_node();
    let syntax_error = root
        .has_error()
        .then(|| error_position(text, first_error(root).unwrap_or(root)));

    Ok(ParsedSource {
        tree: extract(root, text),
        syntax_error,
    })
}

fn parse_tree(text: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| parser_unavailable(e.to_string()))?;
    parser
        .parse(text, None)
        .ok_or_else(|| parser_unavailable("parsing was cancelled"))
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn error_position(text: &str, node: Node<'_>) -> SyntaxErrorPosition {
    let offset = node.start_byte().min(text.len());
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    SyntaxErrorPosition {
        line: node.start_position().row + 1,
        column: text[line_start..offset].chars().count() + 1,
    }
}

fn node_text<'s>(node: Node<'_>, src: &'s str) -> &'s str {
    node.utf8_text(src.as_bytes()).unwrap_or_default()
}

fn named_children_of(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn extract(root: Node<'_>, src: &str) -> SourceTree {
    let mut tree = SourceTree::default();
    for child in named_children_of(root) {
        match child.kind() {
            "import_statement" => {
                if let Some(import) = import_decl(child, src) {
                    tree.imports.push(import);
                }
            }
            "export_statement" => {
                tree.exports.push(ExportDecl {
                    module: child
                        .child_by_field_name("source")
                        .map(|s| unquote(node_text(s, src)).0.to_string()),
                });
                if let Some(declaration) = child
                    .child_by_field_name("declaration")
                    .filter(|d| is_class(*d))
                {
                    tree.classes.push(class_decl(declaration, Some(child), src));
                }
            }
            kind if is_class_kind(kind) => tree.classes.push(class_decl(child, None, src)),
            _ => {}
        }
    }
    tree
}

fn is_class_kind(kind: &str) -> bool {
    matches!(kind, "class_declaration" | "abstract_class_declaration")
}

fn is_class(node: Node<'_>) -> bool {
    is_class_kind(node.kind())
}

fn unquote(literal: &str) -> (&str, char) {
    let quote = literal.chars().next().unwrap_or('"');
    let inner = literal
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(literal);
    (inner, quote)
}

fn import_decl(node: Node<'_>, src: &str) -> Option<ImportDecl> {
    let source = node.child_by_field_name("source")?;
    let (module, quote) = unquote(node_text(source, src));

    let mut cursor = node.walk();
    let type_only = node
        .children(&mut cursor)
        .any(|c| !c.is_named() && matches!(c.kind(), "type" | "typeof"));

    let mut import = ImportDecl {
        range: node.byte_range(),
        module: module.to_string(),
        quote,
        type_only,
        default_binding: None,
        named: None,
        namespace: false,
    };

    let clause = named_children_of(node)
        .into_iter()
        .find(|c| c.kind() == "import_clause");
    for part in clause.map(named_children_of).unwrap_or_default() {
        match part.kind() {
            "identifier" => {
                import.default_binding = Some((node_text(part, src).to_string(), part.end_byte()));
            }
            "namespace_import" => import.namespace = true,
            "named_imports" => import.named = Some(named_imports(part, src)),
            _ => {}
        }
    }
    Some(import)
}

fn named_imports(node: Node<'_>, src: &str) -> NamedImports {
    let specifiers: Vec<Node<'_>> = named_children_of(node)
        .into_iter()
        .filter(|c| c.kind() == "import_specifier")
        .collect();
    let names = specifiers
        .iter()
        .filter_map(|spec| {
            spec.child_by_field_name("alias")
                .or_else(|| spec.child_by_field_name("name"))
                .map(|n| unquote_if_string(node_text(n, src)))
        })
        .collect();
    NamedImports {
        range: node.byte_range(),
        names,
        last_specifier_end: specifiers.last().map(Node::end_byte),
    }
}

fn unquote_if_string(text: &str) -> String {
    if text.starts_with(['"', '\'']) {
        unquote(text).0.to_string()
    } else {
        text.to_string()
    }
}

fn decorator(node: Node<'_>, src: &str) -> Option<Decorator> {
    let expression = named_children_of(node).into_iter().next()?;
    if expression.kind() == "call_expression" {
        let function = expression.child_by_field_name("function")?;
        let arguments = expression
            .child_by_field_name("arguments")
            .map(named_children_of)
            .unwrap_or_default()
            .into_iter()
            .map(|arg| node_text(arg, src).to_string())
            .collect();
        Some(Decorator {
            name: node_text(function, src).to_string(),
            arguments,
        })
    } else {
        Some(Decorator {
            name: node_text(expression, src).to_string(),
            arguments: Vec::new(),
        })
    }
}

fn decorators_of(node: Node<'_>, src: &str) -> Vec<Decorator> {
    let mut cursor = node.walk();
    let nodes: Vec<Node<'_>> = node.children_by_field_name("decorator", &mut cursor).collect();
    nodes.into_iter().filter_map(|d| decorator(d, src)).collect()
}

fn class_decl(node: Node<'_>, export: Option<Node<'_>>, src: &str) -> ClassDecl {
    let mut decorators = export.map(|e| decorators_of(e, src)).unwrap_or_default();
    decorators.extend(decorators_of(node, src));

    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, src).to_string())
        .unwrap_or_default();
    let start = export.map_or_else(|| node.start_byte(), |e| e.start_byte());

    let Some(body) = node.child_by_field_name("body") else {
        return ClassDecl {
            name,
            decorators,
            start,
            body: node.end_byte()..node.end_byte(),
            members: Vec::new(),
            constructor: None,
        };
    };

    let (members, constructor) = class_members(body, src);
    ClassDecl {
        name,
        decorators,
        start,
        body: body.byte_range(),
        members,
        constructor,
    }
}

fn class_members(body: Node<'_>, src: &str) -> (Vec<ClassMember>, Option<ConstructorDecl>) {
    let mut members: Vec<ClassMember> = Vec::new();
    let mut constructor = None;
    let mut pending_start: Option<usize> = None;

    let mut cursor = body.walk();
    let children: Vec<Node<'_>> = body.children(&mut cursor).collect();
    for child in children {
        match child.kind() {
            "{" | "}" | "comment" => {}
            "decorator" => {
                pending_start.get_or_insert(child.start_byte());
            }
            ";" | "," => {
                if let Some(last) = members.last_mut() {
                    last.range.end = child.end_byte();
                }
            }
            kind => {
                let start = pending_start.take().unwrap_or_else(|| child.start_byte());
                let name = child
                    .child_by_field_name("name")
                    .map(|n| node_text(n, src).to_string());
                let member_kind = match kind {
                    "public_field_definition" => MemberKind::Field,
                    "method_definition" if name.as_deref() == Some("constructor") => {
                        if constructor.is_none() {
                            constructor = constructor_decl(child, src);
                        }
                        MemberKind::Constructor
                    }
                    "method_definition" => MemberKind::Method,
                    _ => MemberKind::Other,
                };
                members.push(ClassMember {
                    kind: member_kind,
                    name,
                    range: start..child.end_byte(),
                });
            }
        }
    }
    (members, constructor)
}

fn constructor_decl(node: Node<'_>, src: &str) -> Option<ConstructorDecl> {
    let body = node.child_by_field_name("body")?;
    let statements = named_children_of(body)
        .into_iter()
        .map(|statement| statement_info(statement, src))
        .collect();
    Some(ConstructorDecl {
        start: node.start_byte(),
        body: body.byte_range(),
        statements,
    })
}

fn statement_info(node: Node<'_>, src: &str) -> StatementInfo {
    let expression = (node.kind() == "expression_statement")
        .then(|| named_children_of(node).into_iter().next())
        .flatten();

    let is_super_call = expression.is_some_and(|e| {
        e.kind() == "call_expression"
            && e.child_by_field_name("function")
                .is_some_and(|f| f.kind() == "super")
    });
    let assignment_target = expression
        .filter(|e| e.kind() == "assignment_expression")
        .and_then(|e| e.child_by_field_name("left"))
        .map(|left| {
            node_text(left, src)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect()
        });

    StatementInfo {
        range: node.byte_range(),
        is_super_call,
        assignment_target,
    }
}
