// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Finding `.java` files on disk.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic, Result};

/// The extension of Javalite source files.
pub const SOURCE_EXTENSION: &str = "java";

/// All source files named by `paths`, sorted, without duplicates.
///
/// A file must have the `.java` extension. A directory is searched
/// recursively.
pub fn find_source_files(paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            if path.extension() == Some(SOURCE_EXTENSION) {
                files.push(path.clone());
            } else {
                miette::bail!("File '{}' is not a .{SOURCE_EXTENSION} source file", path);
            }
        } else if path.is_dir() {
            collect_java_files_recursive(path, &mut files)?;
        } else {
            miette::bail!("Path '{}' does not exist", path);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Recursively collect all `.java` files from a directory tree.
///
/// Symlinks are skipped to avoid potential infinite recursion from circular links.
fn collect_java_files_recursive(dir: &Utf8Path, files: &mut Vec<Utf8PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read directory '{dir}'"))?
    {
        let entry = entry.into_diagnostic()?;
        let file_type = entry.file_type().into_diagnostic()?;
        if file_type.is_symlink() {
            continue;
        }
        let entry_path = Utf8PathBuf::from_path_buf(entry.path())
            .map_err(|_| miette::miette!("Non-UTF-8 path"))?;

        if file_type.is_dir() {
            collect_java_files_recursive(&entry_path, files)?;
        } else if file_type.is_file() && entry_path.extension() == Some(SOURCE_EXTENSION) {
            files.push(entry_path);
        }
    }
    Ok(())
}

/// Reads a source file, dropping a leading byte order mark.
pub fn read_source(path: &Utf8Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{path}'"))?;
    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn root(temp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn finds_java_files_recursively_and_sorted() {
        let temp = TempDir::new().unwrap();
        let dir = root(&temp);
        fs::create_dir_all(dir.join("b/c")).unwrap();
        fs::write(dir.join("b/c/Deep.java"), "").unwrap();
        fs::write(dir.join("A.java"), "").unwrap();
        fs::write(dir.join("notes.txt"), "").unwrap();

        let files = find_source_files(&[dir.clone()]).unwrap();
        assert_eq!(files, vec![dir.join("A.java"), dir.join("b/c/Deep.java")]);
    }

    #[test]
    fn explicit_file_and_its_directory_are_deduplicated() {
        let temp = TempDir::new().unwrap();
        let dir = root(&temp);
        fs::write(dir.join("A.java"), "").unwrap();
        let files = find_source_files(&[dir.join("A.java"), dir.clone()]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn wrong_extension_is_an_error() {
        let temp = TempDir::new().unwrap();
        let dir = root(&temp);
        fs::write(dir.join("a.txt"), "").unwrap();
        let err = find_source_files(&[dir.join("a.txt")]).unwrap_err();
        assert!(err.to_string().contains("is not a .java source file"));
    }

    #[test]
    fn missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = find_source_files(&[root(&temp).join("nope")]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_skipped() {
        let temp = TempDir::new().unwrap();
        let dir = root(&temp);
        fs::create_dir(dir.join("real")).unwrap();
        fs::write(dir.join("real/A.java"), "").unwrap();
        std::os::unix::fs::symlink(dir.join("real"), dir.join("loop")).unwrap();
        std::os::unix::fs::symlink(dir.join("real/A.java"), dir.join("B.java")).unwrap();

        let files = find_source_files(&[dir.clone()]).unwrap();
        assert_eq!(files, vec![dir.join("real/A.java")]);
    }

    #[test]
    fn read_source_reports_path() {
        let temp = TempDir::new().unwrap();
        let err = read_source(&root(&temp).join("Gone.java")).unwrap_err();
        assert!(format!("{err:?}").contains("Gone.java"));
    }

    #[test]
    fn read_source_strips_byte_order_mark() {
        let temp = TempDir::new().unwrap();
        let path = root(&temp).join("Bom.java");
        fs::write(&path, "\u{FEFF}class A {}\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "class A {}\n");
    }
}
