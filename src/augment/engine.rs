//! Source augmentation engine
//!
//! [`apply`] wires a component into its host class and [`apply_export`]
//! re-exports its client modules. Both are pure text-to-text functions: they
//! parse the original text once, compute splices against it and never touch
//! the file system. Text outside the insertion points is kept byte for byte.

use super::edits::EditBuffer;
use super::parser::{self, ClassDecl, ImportDecl, SourceTree};
use super::plan::{
    DefaultImportEdit, ExportPlan, FieldEdit, ImportEdit, ReapplyPolicy, SourceAugmentationPlan,
    StatementEdit,
};
use super::style::{SourceStyle, line_indent, line_start, starts_line};
use crate::error::{HostwireError, Result, host, source};

/// Result of applying a plan
#[derive(Debug)]
pub struct AugmentOutcome {
    pub text: String,
    /// Non-fatal problems, e.g. a host class without constructor
    pub warnings: Vec<HostwireError>,
    /// One line per edit performed
    pub changes: Vec<String>,
}

impl AugmentOutcome {
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Apply `plan` to the host file text
///
/// # Errors
/// `SourceParseFailed` when the text has a syntax error and `HostNotFound`
/// when no class matches the plan's host selector. Nothing is produced in
/// either case.
pub fn apply(path: &str, text: &str, plan: &SourceAugmentationPlan) -> Result<AugmentOutcome> {
    let tree = parse_strict(path, text)?;
    let class = tree
        .find_class(&plan.host.marker, plan.host.class_name.as_deref())
        .ok_or_else(|| host::not_found(path, plan.host.describe()))?;

    let style = SourceStyle::detect(text);
    let mut augmenter = Augmenter {
        text,
        tree: &tree,
        style: &style,
        policy: plan.policy,
        edits: EditBuffer::new(text),
        warnings: Vec::new(),
        changes: Vec::new(),
    };

    if let Some(edit) = &plan.import {
        augmenter.named_import(edit);
    }
    if let Some(edit) = &plan.default_import {
        augmenter.default_import(edit);
    }
    if let Some(edit) = &plan.field {
        augmenter.field(class, edit);
    }
    if let Some(edit) = &plan.statement {
        augmenter.statement(class, edit);
    }
    Ok(augmenter.finish())
}

/// Append the re-exports of `plan` that the file does not have yet
pub fn apply_export(path: &str, text: &str, plan: &ExportPlan) -> Result<AugmentOutcome> {
    let tree = parse_strict(path, text)?;
    let style = SourceStyle::detect(text);

    let mut out = text.to_string();
    style.terminate(&mut out);

    let mut changes = Vec::new();
    for export in &plan.exports {
        if tree.exports_from(&export.module) {
            continue;
        }
        let line = format!("export * from \"{}\";", export.module);
        out.push_str(&export.comment);
        out.push_str(style.eol);
        out.push_str(&line);
        out.push_str(style.eol);
        changes.push(line);
    }

    Ok(AugmentOutcome {
        text: out,
        warnings: Vec::new(),
        changes,
    })
}

fn parse_strict(path: &str, text: &str) -> Result<SourceTree> {
    let parsed = parser::parse(text)?;
    match parsed.syntax_error {
        Some(position) => Err(source::parse_failed(path, position.line, position.column)),
        None => Ok(parsed.tree),
    }
}

struct Augmenter<'a> {
    text: &'a str,
    tree: &'a SourceTree,
    style: &'a SourceStyle,
    policy: ReapplyPolicy,
    edits: EditBuffer<'a>,
    warnings: Vec<HostwireError>,
    changes: Vec<String>,
}

impl Augmenter<'_> {
    fn guarded(&self) -> bool {
        self.policy == ReapplyPolicy::Guarded
    }

    /// Start of the line holding the first import, or the file start
    fn import_anchor(&self) -> usize {
        self.tree.imports.first().map_or(0, |import| {
            if starts_line(self.text, import.range.start) {
                line_start(self.text, import.range.start)
            } else {
                import.range.start
            }
        })
    }

    fn quote(&self) -> char {
        self.tree.imports.first().map_or('"', |import| import.quote)
    }

    fn named_import(&mut self, edit: &ImportEdit) {
        let candidates: Vec<&ImportDecl> = self
            .tree
            .imports
            .iter()
            .filter(|import| import.module == edit.module && !import.type_only)
            .collect();
        let missing: Vec<&str> = edit
            .names
            .iter()
            .map(String::as_str)
            .filter(|name| !candidates.iter().any(|import| import.binds(name)))
            .collect();
        if missing.is_empty() {
            return;
        }

        let list = missing.join(", ");
        if let Some(named) = candidates.iter().find_map(|import| import.named.as_ref()) {
            match named.last_specifier_end {
                Some(end) => self.edits.insert(end, format!(", {list}")),
                None => self.edits.replace(named.range.clone(), format!("{{ {list} }}")),
            }
        } else if let Some((_, end)) = candidates
            .iter()
            .filter(|import| !import.namespace)
            .find_map(|import| import.default_binding.as_ref())
        {
            self.edits.insert(*end, format!(", {{ {list} }}"));
        } else {
            let quote = self.quote();
            let import = format!(
                "import {{ {list} }} from {quote}{}{quote};{}",
                edit.module, self.style.eol
            );
            self.edits.insert(self.import_anchor(), import);
        }
        self.changes
            .push(format!("import {{ {list} }} from \"{}\"", edit.module));
    }

    fn default_import(&mut self, edit: &DefaultImportEdit) {
        let present = self.tree.imports.iter().any(|import| {
            import.module == edit.module
                && import
                    .default_binding
                    .as_ref()
                    .is_some_and(|(name, _)| *name == edit.binding)
        });
        if present && self.guarded() {
            return;
        }

        let quote = self.quote();
        let import = format!(
            "import {} from {quote}{}{quote};{}",
            edit.binding, edit.module, self.style.eol
        );
        self.edits.insert(self.import_anchor(), import);
        self.changes
            .push(format!("import {} from \"{}\"", edit.binding, edit.module));
    }

    fn field(&mut self, class: &ClassDecl, edit: &FieldEdit) {
        if self.guarded() && class.has_field(&edit.name) {
            return;
        }

        let class_indent = line_indent(self.text, class.start);
        let (anchor, indent) = match class.members.first() {
            Some(first) => (first.range.end, self.indent_at(first.range.start, class_indent)),
            None => (
                (class.body.start + 1).min(self.text.len()),
                self.style.nested(class_indent),
            ),
        };
        self.insert_lines_after(anchor, &indent, class_indent, &edit.lines());
        self.changes
            .push(format!("field {} in class {}", edit.name, class.name));
    }

    fn statement(&mut self, class: &ClassDecl, edit: &StatementEdit) {
        let Some(constructor) = &class.constructor else {
            self.warnings.push(host::malformed(
                &class.name,
                format!("no constructor found, add `{}` manually", edit.statement),
            ));
            return;
        };
        let present = constructor
            .statements
            .iter()
            .any(|s| s.assignment_target.as_deref() == Some(edit.target.as_str()));
        if present && self.guarded() {
            return;
        }

        let constructor_indent = line_indent(self.text, constructor.start);
        let first = constructor.statements.first();
        let indent = first.map_or_else(
            || self.style.nested(constructor_indent),
            |s| self.indent_at(s.range.start, constructor_indent),
        );
        let anchor = first
            .filter(|s| s.is_super_call)
            .map_or(constructor.body.start + 1, |s| s.range.end);
        self.insert_lines_after(anchor, &indent, constructor_indent, &edit.lines());
        self.changes
            .push(format!("constructor statement in class {}", class.name));
    }

    /// Indentation of the line at `pos`, or one level below `parent`
    fn indent_at(&self, pos: usize, parent: &str) -> String {
        if starts_line(self.text, pos) {
            line_indent(self.text, pos).to_string()
        } else {
            self.style.nested(parent)
        }
    }

    /// Insert whole lines after the code ending at `pos`
    ///
    /// Goes on the next line when only whitespace or a comment follows `pos`.
    /// Otherwise the line is broken at `pos` and its remainder moves below
    /// the inserted lines, at `parent` indentation for a closing brace and
    /// at `indent` for anything else.
    fn insert_lines_after(&mut self, pos: usize, indent: &str, parent: &str, lines: &[String]) {
        let eol = self.style.eol;
        let rest = &self.text[pos..];
        let line_end = rest.find('\n');
        let line = &rest[..line_end.unwrap_or(rest.len())];
        let tail = line.trim();
        let block = self.style.render_lines(indent, lines);

        if tail.is_empty() || is_trailing_comment(tail) {
            match line_end {
                Some(end) => self.edits.insert(pos + end + 1, block),
                None => self
                    .edits
                    .insert(pos + line.trim_end().len(), format!("{eol}{block}")),
            }
            return;
        }

        let leading = line.len() - line.trim_start().len();
        let moved_indent = if tail.starts_with('}') { parent } else { indent };
        self.edits
            .replace(pos..pos + leading, format!("{eol}{block}{moved_indent}"));
    }

    fn finish(self) -> AugmentOutcome {
        let mut text = self.edits.apply();
        self.style.terminate(&mut text);
        AugmentOutcome {
            text,
            warnings: self.warnings,
            changes: self.changes,
        }
    }
}

/// A `//` comment, or a `/* */` comment closed on the same line
fn is_trailing_comment(tail: &str) -> bool {
    tail.starts_with("//") || (tail.starts_with("/*") && tail.ends_with("*/"))
}
