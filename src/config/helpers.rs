use std::path::{Path, PathBuf};

use crate::TomlError;

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_home(path: &Path) -> Result<PathBuf, TomlError> {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| TomlError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}

/// Every way to read `path` as `(section, key)`, global first.
///
/// Section names may themselves contain dots, so `a.b.c` yields
/// `(None, "a.b.c")`, `(Some("a"), "b.c")` and `(Some("a.b"), "c")`.
pub(super) fn split_candidates(path: &str) -> Vec<(Option<&str>, &str)> {
    let mut out = vec![(None, path)];
    out.extend(
        path.match_indices('.')
            .map(|(idx, _)| (Some(&path[..idx]), &path[idx + 1..])),
    );
    out
}

/// Key spellings to try, exact first, then `_`/`-` swapped.
pub(super) fn key_variants(key: &str) -> Vec<String> {
    let mut out = vec![key.to_string()];

    let snake = key.replace('-', "_");
    if snake != key {
        out.push(snake);
    }

    let kebab = key.replace('_', "-");
    if kebab != key {
        out.push(kebab);
    }

    out
}

/// Where a dotted path actually resolved: the section (`None` for
/// globals) and the key spelling that was found.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct KeyLocation<'a> {
    pub section: Option<&'a str>,
    pub key: String,
}

/// Locate the line where `location` was assigned, for diagnostics.
///
/// Tracks the current section the same way the parser does and returns the
/// last matching assignment, since that is the one that took effect.
/// Returns `(0, "<key not found>")` when nothing matches.
pub(super) fn find_config_line(location: &KeyLocation, raw_content: &str) -> (usize, String) {
    let mut section: Option<&str> = None;
    let mut found = (0, "<key not found>".to_string());

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(inner) = trimmed.strip_prefix('[') {
            if let Some(end) = inner.find(']') {
                section = Some(inner[..end].trim());
            }
            continue;
        }

        let Some((line_key, _)) = trimmed.split_once('=') else {
            continue;
        };

        if section == location.section && line_key.trim() == location.key {
            found = (idx + 1, trimmed.to_string());
        }
    }

    found
}
