//! Native package installation into project files
//!
//! Adds `<PackageReference Include="..." />` items to SDK-style project files. The
//! edit is textual so the rest of the file (comments, formatting, unknown
//! elements) is preserved byte for byte.

use std::ops::Range;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info, warn};

use super::{ApplyOutcome, NativePackageInstaller, file_ops};
use crate::domain::{NativePackageDependency, ProjectFile};
use crate::error::{Result, project};

const PACKAGE_REFERENCE_TAG: &str = "<PackageReference";
const ITEM_GROUP_OPEN: &str = "<ItemGroup";
const ITEM_GROUP_CLOSE: &str = "</ItemGroup>";
const PROJECT_CLOSE: &str = "</Project>";
const CONDITION_ATTRIBUTE: &str = "Condition";
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Writes package references into project files
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageReferenceInstaller {
    /// Run `dotnet restore` on the project after adding a reference
    restore: bool,
}

impl PackageReferenceInstaller {
    pub fn new(restore: bool) -> Self {
        Self { restore }
    }
}

impl NativePackageInstaller for PackageReferenceInstaller {
    fn apply_native(
        &self,
        target: &ProjectFile,
        dependency: &NativePackageDependency,
    ) -> Result<ApplyOutcome> {
        let content = file_ops::read_target(&target.path)?;

        if has_package_reference(&content, &dependency.name) {
            debug!(package = %dependency.name, project = %target.name, "Package already referenced");
            return Ok(ApplyOutcome::AlreadyPresent);
        }

        let updated = add_package_reference(&content, &dependency.name, dependency.version.as_deref())
            .ok_or_else(|| project::write_failed(&target.path, "no closing </Project> element"))?;
        file_ops::write_atomic(&target.path, &updated)?;

        info!(package = %dependency.name, project = %target.name, "Added package reference");

        if self.restore {
            restore(&target.path);
        }

        Ok(ApplyOutcome::Added)
    }
}

/// Whether the project already references `package` (package ids compare case-insensitively)
pub fn has_package_reference(content: &str, package: &str) -> bool {
    referenced_packages(content).any(|name| name.eq_ignore_ascii_case(package))
}

/// Package ids of every `<PackageReference Include="...">` in the project
pub fn referenced_packages(content: &str) -> impl Iterator<Item = &str> {
    let comments = comment_spans(content);
    content
        .match_indices(PACKAGE_REFERENCE_TAG)
        .filter_map(move |(start, _)| {
            if in_comment(&comments, start) {
                return None;
            }
            let tag = &content[start..];
            let end = tag.find('>')?;
            attribute_value(&tag[..end], "Include")
        })
}

/// Insert a package reference; `None` when the project has no `</Project>` element
pub fn add_package_reference(content: &str, package: &str, version: Option<&str>) -> Option<String> {
    let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
    let element = reference_element(package, version);
    let comments = comment_spans(content);

    if let Some((insert_at, indent)) = package_item_group_insertion(content, &comments) {
        let mut updated = String::with_capacity(content.len() + element.len() + 16);
        updated.push_str(&content[..insert_at]);
        match indent {
            Some(indent) => {
                updated.push_str(indent);
                updated.push_str(&element);
                updated.push_str(newline);
            }
            None => updated.push_str(&element),
        }
        updated.push_str(&content[insert_at..]);
        return Some(updated);
    }

    let close = content
        .rmatch_indices(PROJECT_CLOSE)
        .map(|(index, _)| index)
        .find(|index| !in_comment(&comments, *index))?;
    let line_start = line_start(content, close);
    let base = &content[line_start..close];
    let (insert_at, base) = if base.trim().is_empty() {
        (line_start, base)
    } else {
        (close, "")
    };

    let group = format!(
        "{base}  <ItemGroup>{nl}{base}    {element}{nl}{base}  </ItemGroup>{nl}{nl}",
        nl = newline
    );

    let mut updated = String::with_capacity(content.len() + group.len());
    updated.push_str(&content[..insert_at]);
    updated.push_str(&group);
    updated.push_str(&content[insert_at..]);
    Some(updated)
}

/// Position before the `</ItemGroup>` of the first unconditional item group
/// holding package references, and the indentation for a new child line (`None`
/// when the group is written on a single line).
///
/// Groups with a `Condition` only apply to some builds and are never extended.
fn package_item_group_insertion<'c>(
    content: &'c str,
    comments: &[Range<usize>],
) -> Option<(usize, Option<&'c str>)> {
    for (open, _) in content.match_indices(ITEM_GROUP_OPEN) {
        if in_comment(comments, open) {
            continue;
        }
        let Some(close_offset) = content[open..].find(ITEM_GROUP_CLOSE) else {
            break;
        };
        let close = open + close_offset;
        let group = &content[open..close];

        let open_tag = &group[..group.find('>').unwrap_or(group.len())];
        if attribute_value(open_tag, CONDITION_ATTRIBUTE).is_some() {
            continue;
        }

        let Some(child) = group
            .match_indices(PACKAGE_REFERENCE_TAG)
            .map(|(offset, _)| open + offset)
            .find(|child| !in_comment(comments, *child))
        else {
            continue;
        };

        let child_indent = &content[line_start(content, child)..child];
        let close_line_start = line_start(content, close);

        let own_lines = child_indent.trim().is_empty()
            && content[close_line_start..close].trim().is_empty();
        return Some(if own_lines {
            (close_line_start, Some(child_indent))
        } else {
            (close, None)
        });
    }
    None
}

/// Byte ranges of `<!-- ... -->` comments; an unterminated comment runs to the end
fn comment_spans(content: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut from = 0;
    while let Some(offset) = content[from..].find(COMMENT_OPEN) {
        let start = from + offset;
        let body = start + COMMENT_OPEN.len();
        let end = content[body..]
            .find(COMMENT_CLOSE)
            .map_or(content.len(), |close| body + close + COMMENT_CLOSE.len());
        spans.push(start..end);
        from = end;
    }
    spans
}

fn in_comment(comments: &[Range<usize>], index: usize) -> bool {
    comments.iter().any(|span| span.contains(&index))
}

fn line_start(content: &str, index: usize) -> usize {
    content[..index].rfind('\n').map_or(0, |nl| nl + 1)
}

fn reference_element(package: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!(
            r#"<PackageReference Include="{}" Version="{}" />"#,
            escape_attribute(package),
            escape_attribute(version)
        ),
        None => format!(r#"<PackageReference Include="{}" />"#, escape_attribute(package)),
    }
}

fn attribute_value<'a>(tag: &'a str, attribute: &str) -> Option<&'a str> {
    let mut search_from = 0;
    while let Some(offset) = tag[search_from..].find(attribute) {
        let at = search_from + offset;
        search_from = at + attribute.len();

        let preceded_by_space = tag[..at].ends_with(char::is_whitespace);
        let rest = tag[search_from..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        if !preceded_by_space {
            continue;
        }

        let rest = rest.trim_start();
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let value = &rest[1..];
        let end = value.find(quote)?;
        return Some(value[..end].trim());
    }
    None
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn restore(project_path: &Path) {
    debug!(project = %project_path.display(), "Running dotnet restore");
    match Command::new("dotnet").arg("restore").arg(project_path).output() {
        Ok(output) if output.status.success() => {}
        Ok(output) => warn!(
            project = %project_path.display(),
            status = %output.status,
            "dotnet restore failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        Err(e) => warn!(project = %project_path.display(), "Could not run dotnet restore: {e}"),
    }
}
