//! Human-readable rendering of a changeset.

use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;
use crate::sentence_diff::{diff_lines, DiffKind, DiffLine};
use crate::types::{Change, ChangeSet};

/// Wrap one diff line behind its marker, indenting continuation lines.
fn wrap_diff_line(line: &DiffLine, width: usize) -> String {
    let initial = format!("  {} ", line.kind.marker());
    let options = Options::new(width)
        .initial_indent(&initial)
        .subsequent_indent("    ");
    fill(&line.text, &options)
}

/// Describe a heading for the change header line.
fn heading_suffix(heading: &str) -> String {
    if heading.is_empty() {
        String::new()
    } else {
        format!(": {heading}")
    }
}

/// Article label for a change header: the id, plus the display number when
/// it adds something.
fn article_label(id: &str, display_number: &str) -> String {
    if display_number.is_empty() || display_number == id {
        id.to_string()
    } else {
        format!("{id} ({display_number})")
    }
}

/// Render a changeset as plain text, wrapped at `width` columns.
///
/// Substitutions are annotated with a sentence-level diff of their text;
/// insertions and repeals list their sentences as added or removed.
#[must_use]
pub fn render_text_with_width(changeset: &ChangeSet, width: usize) -> String {
    let mut out: Vec<String> = Vec::new();

    out.push(format!("--- {}", changeset.base));
    out.push(format!("+++ {}", changeset.result));

    if changeset.is_empty() {
        out.push(String::new());
        out.push("No article changes.".to_string());
        return out.join("\n") + "\n";
    }

    for change in &changeset.changes {
        out.push(String::new());

        let lines = match change {
            Change::Substitution(s) => {
                out.push(format!(
                    "~ substitution {}{}",
                    article_label(&s.id, &s.display_number),
                    heading_suffix(&s.new_heading)
                ));
                if s.old_heading != s.new_heading {
                    out.push(format!("  heading: {} -> {}", s.old_heading, s.new_heading));
                }
                diff_lines(&s.old_text, &s.new_text)
            }
            Change::Insertion(i) => {
                let placement = match &i.after {
                    Some(after) => format!(" after {after}"),
                    None => " at start".to_string(),
                };
                out.push(format!(
                    "+ insertion {}{}{}",
                    article_label(&i.id, &i.display_number),
                    placement,
                    heading_suffix(&i.new_heading)
                ));
                diff_lines("", &i.new_text)
            }
            Change::Repeal(r) => {
                out.push(format!(
                    "- repeal {}{}",
                    article_label(&r.id, &r.display_number),
                    heading_suffix(&r.old_heading)
                ));
                diff_lines(&r.old_text, "")
            }
        };

        out.extend(lines.iter().map(|line| wrap_diff_line(line, width)));
    }

    let stats = &changeset.stats;
    out.push(String::new());
    out.push(format!(
        "{} substituted, {} inserted, {} repealed",
        stats.substituted, stats.inserted, stats.repealed
    ));

    out.join("\n") + "\n"
}

/// Render a changeset as plain text with the default wrap width.
#[must_use]
pub fn render_text(changeset: &ChangeSet) -> String {
    render_text_with_width(changeset, TEXT_WRAP_WIDTH)
}

/// Count the sentence-level additions and removals across all changes.
#[must_use]
pub fn sentence_counts(changeset: &ChangeSet) -> (usize, usize) {
    let mut added = 0;
    let mut removed = 0;

    for change in &changeset.changes {
        let lines = match change {
            Change::Substitution(s) => diff_lines(&s.old_text, &s.new_text),
            Change::Insertion(i) => diff_lines("", &i.new_text),
            Change::Repeal(r) => diff_lines(&r.old_text, ""),
        };
        for line in lines {
            match line.kind {
                DiffKind::Added => added += 1,
                DiffKind::Removed => removed += 1,
                DiffKind::Same => {}
            }
        }
    }

    (added, removed)
}
