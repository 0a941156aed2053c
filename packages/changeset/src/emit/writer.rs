//! JSON and YAML writers for changesets.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::ChangeSet;

/// Indent YAML sequences to comply with `indent-sequences: true`.
///
/// serde_yaml_ng places sequence items (`- `) at the same indent as their
/// parent key. This adds 2 spaces per open sequence so items sit under it:
///
/// ```yaml
/// # Before:             # After:
/// changes:              changes:
/// - type: repeal          - type: repeal
///   id: a3                  id: a3
/// ```
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    // Stack of indent levels where sequences start
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();

        // Pop sequences we've left: shallower indent, or same indent but not an item
        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !trimmed.starts_with("- ")) {
                seq_indents.pop();
            } else {
                break;
            }
        }

        if trimmed.starts_with("- ") {
            let is_continuation = seq_indents.last().is_some_and(|&si| si == indent);
            if !is_continuation {
                seq_indents.push(indent);
            }
        }

        let extra = seq_indents.len() * 2;
        if extra > 0 {
            result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
        } else {
            result.push(line.to_string());
        }
    }

    result.join("\n")
}

/// Serialize a changeset as pretty-printed JSON.
pub fn generate_json(changeset: &ChangeSet) -> Result<String> {
    let mut json = serde_json::to_string_pretty(changeset)?;
    json.push('\n');
    Ok(json)
}

/// Serialize a changeset as YAML with a document start marker.
pub fn generate_yaml(changeset: &ChangeSet) -> Result<String> {
    let yaml_string = serde_yaml_ng::to_string(changeset)?;
    let yaml_string = indent_yaml_sequences(&yaml_string);

    let lines: Vec<&str> = yaml_string.lines().map(|l| l.trim_end()).collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Parse a changeset previously written by [`generate_json`].
pub fn parse_json(json: &str) -> Result<ChangeSet> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a changeset previously written by [`generate_yaml`].
pub fn parse_yaml(yaml: &str) -> Result<ChangeSet> {
    Ok(serde_yaml_ng::from_str(yaml)?)
}

/// Write rendered output to a file.
///
/// Uses the atomic write pattern: writes to a temp file next to the target,
/// syncs to disk, then renames, so an interrupted run never leaves a
/// truncated changeset behind.
pub fn save_output(content: &str, path: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "changeset".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    Ok(())
}
