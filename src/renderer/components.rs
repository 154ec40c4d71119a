use anyhow::{bail, Result};

use crate::model::Comment;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, PartialEq)]
enum Block<'a> {
    Paragraph(Vec<&'a str>),
    Heading(&'a str),
    Preformatted(Vec<String>),
}

/// Helper for rendering doc comment text into HTML blocks
pub struct DocRenderer;

impl DocRenderer {
    pub fn render_html(&self, text: &str) -> String {
        let mut output = String::new();
        for block in self.blocks(text) {
            match block {
                Block::Paragraph(lines) => {
                    output.push_str("<p>\n");
                    for line in lines {
                        output.push_str(&escape(line));
                        output.push('\n');
                    }
                    output.push_str("</p>\n");
                }
                Block::Heading(line) => {
                    output.push_str(&format!(
                        "<h3 id=\"{}\">{}</h3>\n",
                        heading_anchor(line),
                        escape(line)
                    ));
                }
                Block::Preformatted(lines) => {
                    output.push_str("<pre>");
                    for line in lines {
                        output.push_str(&escape(&line));
                        output.push('\n');
                    }
                    output.push_str("</pre>\n");
                }
            }
        }
        output
    }

    fn blocks<'a>(&self, text: &'a str) -> Vec<Block<'a>> {
        let lines: Vec<&str> = text.lines().collect();
        let mut blocks = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            if is_blank(lines[i]) {
                i += 1;
                continue;
            }

            let start = i;
            if is_indented(lines[i]) {
                while i < lines.len() && (is_blank(lines[i]) || is_indented(lines[i])) {
                    i += 1;
                }
                let mut code = lines[start..i].to_vec();
                while code.last().is_some_and(|line| is_blank(line)) {
                    code.pop();
                }
                blocks.push(Block::Preformatted(unindent(&code)));
            } else {
                while i < lines.len() && !is_blank(lines[i]) && !is_indented(lines[i]) {
                    i += 1;
                }
                blocks.push(Block::Paragraph(lines[start..i].to_vec()));
            }
        }

        // A lone line between two paragraphs reads as a section heading.
        for idx in 1..blocks.len().saturating_sub(1) {
            let heading = match (&blocks[idx - 1], &blocks[idx], &blocks[idx + 1]) {
                (Block::Paragraph(_), Block::Paragraph(lines), Block::Paragraph(_))
                    if lines.len() == 1 && is_heading(lines[0]) =>
                {
                    Some(lines[0].trim())
                }
                _ => None,
            };
            if let Some(line) = heading {
                blocks[idx] = Block::Heading(line);
            }
        }

        blocks
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_indented(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

fn unindent(lines: &[&str]) -> Vec<String> {
    let indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .reduce(|common, ws| {
            let shared: usize = common
                .chars()
                .zip(ws.chars())
                .take_while(|(a, b)| a == b)
                .map(|(c, _)| c.len_utf8())
                .sum();
            &common[..shared]
        })
        .unwrap_or("");

    lines
        .iter()
        .map(|line| line.strip_prefix(indent).unwrap_or(line.trim_start()).to_string())
        .collect()
}

fn is_heading(line: &str) -> bool {
    let line = line.trim();
    let Some(first) = line.chars().next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if !line.chars().last().is_some_and(|c| c.is_alphanumeric()) {
        return false;
    }
    !line.contains(|c: char| ".;:!?+*/=[]{}_^&~%#@<>\"\\`".contains(c))
}

fn heading_anchor(line: &str) -> String {
    let id: String = line
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("hdr-{}", id)
}

/// Helper for shortening declarations to a single line
pub struct SynopsisRenderer;

impl SynopsisRenderer {
    /// Collapse a declaration onto one line; multi-line bodies opened by a
    /// trailing `{` or `(` are elided.
    pub fn one_line(&self, text: &str) -> String {
        let text = text.trim();
        let mut lines = text.lines();
        let first = lines.next().unwrap_or_default().trim_end();

        if lines.next().is_some() {
            let close = match first.chars().last() {
                Some('{') => Some('}'),
                Some('(') => Some(')'),
                _ => None,
            };
            if let Some(close) = close {
                return format!("{} ... {}", collapse_whitespace(first), close);
            }
        }

        collapse_whitespace(text)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Insert attached comments into an example body. Each comment lands before
/// the body line it is anchored to and takes that line's indentation; a
/// comment anchored just past the last line is appended.
pub fn merge_comments(code: &str, comments: &[Comment]) -> Result<String> {
    let lines: Vec<&str> = code.lines().collect();

    let mut sorted: Vec<&Comment> = comments.iter().collect();
    sorted.sort_by_key(|comment| comment.line);
    if let Some(last) = sorted.last() {
        if last.line > lines.len() {
            bail!(
                "comment anchored at line {} past end of example body ({} lines)",
                last.line,
                lines.len()
            );
        }
    }

    let mut output = String::new();
    let mut pending = sorted.into_iter().peekable();
    for (i, line) in lines.iter().enumerate() {
        let indent = leading_whitespace(line);
        while let Some(comment) = pending.next_if(|comment| comment.line == i) {
            push_comment(&mut output, indent, &comment.text);
        }
        output.push_str(line);
        output.push('\n');
    }
    for comment in pending {
        push_comment(&mut output, "", &comment.text);
    }

    Ok(output)
}

fn push_comment(output: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        output.push_str(indent);
        output.push_str(line);
        output.push('\n');
    }
}
