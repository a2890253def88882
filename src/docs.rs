//! XML doc comment (`///`) → JSDoc translation.
//!
//! Body lines left empty by a bare `<summary>` or `</summary>` render as
//! `<indent> *` with no trailing space. The C# generator this replaces wrote
//! `<indent> * `, so those lines differ from its output by one space.

use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<param name="(.+?)">(.+?)</param>"#).unwrap());

const DOC_PREFIX: &str = "///";

/// A JSDoc block ready to be rendered above a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// Leading whitespace of the line the block documents.
    pub indent: String,
    /// Body lines without the ` * ` decoration.
    pub lines: Vec<String>,
}

impl DocComment {
    /// Render as output lines: a blank separator, then the `/** ... */` block.
    pub fn render_lines(&self) -> Vec<String> {
        let indent = &self.indent;
        let mut out = Vec::with_capacity(self.lines.len() + 3);
        out.push(String::new());
        out.push(format!("{indent}/**"));
        for line in &self.lines {
            if line.is_empty() {
                out.push(format!("{indent} *"));
            } else {
                out.push(format!("{indent} * {line}"));
            }
        }
        out.push(format!("{indent} */"));
        out
    }
}

/// Collect the `///` block directly above `annotation_index` and translate it.
///
/// Returns `None` when the preceding line is not a doc comment.
pub fn extract_doc(lines: &[&str], annotation_index: usize) -> Option<DocComment> {
    let annotation = lines.get(annotation_index)?;
    let indent = &annotation[..annotation.len() - annotation.trim_start().len()];

    let mut comment: Vec<&str> = lines[..annotation_index]
        .iter()
        .rev()
        .map(|line| line.trim())
        .take_while(|line| line.starts_with(DOC_PREFIX))
        .map(|line| line[DOC_PREFIX.len()..].trim())
        .collect();
    if comment.is_empty() {
        return None;
    }
    comment.reverse();

    Some(DocComment {
        indent: indent.to_string(),
        lines: translate(&comment),
    })
}

fn translate(comment: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for line in comment.iter().filter(|line| !line.is_empty()) {
        if line.starts_with("<summary>") {
            out.push(strip_tag(line, "summary"));
        } else if line.starts_with("<param") {
            if let Some(caps) = RE_PARAM.captures(line) {
                out.push(format!("@param {} {}", &caps[1], &caps[2]));
            }
        } else if line.starts_with("<returns>") {
            out.push(format!("@returns {}", strip_tag(line, "returns")));
        } else {
            out.push(line.replace("</summary>", ""));
        }
    }
    out
}

fn strip_tag(line: &str, tag: &str) -> String {
    line.replace(&format!("<{tag}>"), "")
        .replace(&format!("</{tag}>"), "")
        .trim()
        .to_string()
}
