use std::borrow::Cow;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Formats a path for display, replacing the home directory prefix with `~`
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use prompt_extract::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/opt/exports/extracted_prompts.json");
/// assert!(format_path_with_tilde(&path).ends_with("extracted_prompts.json"));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty() && *h != "/");

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && let Some(rest) = path_str.strip_prefix(home)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return format!("~{}", rest);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Write `contents` to `path` via a sibling temp file and rename
///
/// Readers never observe a partially written file.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    write_all_atomic(&[(path, contents)])
}

/// Write several files so that either all of them land or none do
///
/// Every file is first written to a sibling `.tmp` file. Only when all temp files exist
/// are they renamed into place. On failure, temp files are removed and any target
/// already renamed during this call is removed again.
pub fn write_all_atomic(files: &[(&Path, &[u8])]) -> Result<()> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(files.len());

    for (path, contents) in files {
        let temp_path = match temp_path_for(path) {
            Ok(temp_path) => temp_path,
            Err(e) => {
                discard(staged.iter().map(|(temp, _)| temp.as_path()));
                return Err(e);
            }
        };
        if let Err(e) = fs::write(&temp_path, contents) {
            discard(staged.iter().map(|(temp, _)| temp.as_path()).chain([temp_path.as_path()]));
            return Err(e)
                .with_context(|| format!("Failed to write temp file: {}", temp_path.display()));
        }
        staged.push((temp_path, *path));
    }

    for (index, (temp_path, path)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(temp_path, path) {
            discard(staged[index..].iter().map(|(temp, _)| temp.as_path()));
            discard(staged[..index].iter().map(|(_, target)| *target));
            return Err(e)
                .with_context(|| format!("Failed to rename temp file to {}", path.display()));
        }
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Output path has no file name: {}", path.display()))?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn discard<'a>(paths: impl Iterator<Item = &'a Path>) {
    for path in paths {
        // Best effort: the original error is what gets reported
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/Downloads/extracted_prompts.csv");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/Downloads/extracted_prompts.csv");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/local/bin");

        // Shared prefix that is not a path boundary
        let path3 = PathBuf::from("/Users/testuser2/file.json");
        assert_eq!(
            format_path_with_tilde_internal(&path3, Some("/Users/testuser")),
            "/Users/testuser2/file.json"
        );
    }

    #[test]
    fn test_format_path_relative_is_unchanged() {
        let path = PathBuf::from("./extracted_prompts.json");
        let formatted = format_path_with_tilde_internal(&path, Some("/home/me"));
        assert_eq!(formatted, "./extracted_prompts.json");
    }

    #[test]
    fn test_write_atomic_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_removes_temp_file_when_rename_fails() {
        let dir = TempDir::new().unwrap();
        // Renaming a file over a non-empty directory fails
        let path = dir.path().join("out.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner"), "x").unwrap();

        let err = write_atomic(&path, b"new").unwrap_err();

        assert!(err.to_string().contains("Failed to rename temp file"));
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_all_atomic_rolls_back_earlier_targets() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.csv");
        fs::create_dir(&second).unwrap();
        fs::write(second.join("inner"), "x").unwrap();

        let result = write_all_atomic(&[(first.as_path(), b"a"), (second.as_path(), b"b")]);

        assert!(result.is_err());
        assert!(!first.exists());
        assert!(!dir.path().join("a.json.tmp").exists());
        assert!(!dir.path().join("b.csv.tmp").exists());
    }

    #[test]
    fn test_write_all_atomic_writes_every_file() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.csv");

        write_all_atomic(&[(first.as_path(), b"a"), (second.as_path(), b"b")]).unwrap();

        assert_eq!(fs::read_to_string(&first).unwrap(), "a");
        assert_eq!(fs::read_to_string(&second).unwrap(), "b");
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_atomic(&path, b"x").unwrap_err();
        assert!(err.to_string().contains("Failed to write temp file"));
    }
}
