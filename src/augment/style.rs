//! Source style detection
//!
//! Inserted text follows the host file's own conventions: its indentation
//! unit, line terminator and import quote character.

const DEFAULT_INDENT: &str = "    ";

/// Formatting conventions of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStyle {
    /// One level of indentation
    pub indent: String,
    /// Line terminator
    pub eol: &'static str,
}

impl SourceStyle {
    pub fn detect(text: &str) -> Self {
        Self {
            indent: detect_indent(text),
            eol: if text.contains("\r\n") { "\r\n" } else { "\n" },
        }
    }

    /// `base` indentation plus one level
    pub fn nested(&self, base: &str) -> String {
        format!("{base}{}", self.indent)
    }

    /// Make sure `text` ends with a line terminator
    pub fn terminate(&self, text: &mut String) {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push_str(self.eol);
        }
    }

    /// Render lines at `indent`, each followed by the line terminator
    pub fn render_lines(&self, indent: &str, lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| format!("{indent}{line}{}", self.eol))
            .collect()
    }
}

impl Default for SourceStyle {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            eol: "\n",
        }
    }
}

fn detect_indent(text: &str) -> String {
    let mut smallest: Option<usize> = None;
    for line in text.lines() {
        let content = line.trim_start_matches([' ', '\t']);
        if content.trim().is_empty() || content.starts_with('*') {
            continue;
        }
        let leading = &line[..line.len() - content.len()];
        if leading.starts_with('\t') {
            return "\t".to_string();
        }
        let width = leading.len();
        if width > 0 && smallest.is_none_or(|s| width < s) {
            smallest = Some(width);
        }
    }
    smallest.map_or_else(|| DEFAULT_INDENT.to_string(), |width| " ".repeat(width))
}

/// Byte offset of the start of the line containing `pos`
pub fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

/// Leading whitespace of the line containing `pos`
pub fn line_indent(text: &str, pos: usize) -> &str {
    let start = line_start(text, pos);
    let line = &text[start..];
    let content = line.trim_start_matches([' ', '\t']);
    &line[..line.len() - content.len()]
}

/// Whether only whitespace precedes `pos` on its line
pub fn starts_line(text: &str, pos: usize) -> bool {
    text[line_start(text, pos)..pos].trim().is_empty()
}
