use crate::data_processing::extraction_error::ExtractionError;

use std::fs::read_dir;
use std::path::{Path, PathBuf};

/// Suffix every save file name ends with. Matched literally, not as an extension.
const SAVE_FILE_SUFFIX: &str = "fl";

/// Recursively collects all save files under the given directory.
///
/// Entries are visited depth-first and in name order within a directory.
/// Symlinks are not followed.
///
/// # Arguments
///
/// * `dir_path` - The root of the save directory tree.
///
/// # Returns
///
/// The paths of every file whose name ends in `fl`, or an `ExtractionError`
/// if any directory in the tree cannot be read.
pub fn collect_save_files(dir_path: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let mut save_files = Vec::new();
    walk_directory(dir_path, &mut save_files)?;
    Ok(save_files)
}

fn walk_directory(dir_path: &Path, save_files: &mut Vec<PathBuf>) -> Result<(), ExtractionError> {
    let read_dir_error = |source| ExtractionError::ReadDir {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut entries = read_dir(dir_path)
        .map_err(read_dir_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        if entry.file_type().map_err(read_dir_error)?.is_dir() {
            walk_directory(&path, save_files)?;
        } else if is_save_file(&path) {
            save_files.push(path);
        }
    }
    Ok(())
}

fn is_save_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(SAVE_FILE_SUFFIX.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_save_files_recursively() {
        let tmp = TempDir::new().unwrap();
        let account = tmp.path().join("Accts").join("MultiPlayer").join("abc");
        fs::create_dir_all(&account).unwrap();
        fs::write(account.join("01-0a1b2c3d.fl"), "").unwrap();
        fs::write(account.join("name"), "").unwrap();
        fs::write(tmp.path().join("noextfl"), "").unwrap();
        fs::write(tmp.path().join("upper.FL"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();

        let mut names: Vec<String> = collect_save_files(tmp.path())
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["01-0a1b2c3d.fl", "noextfl"]);
    }

    #[test]
    fn missing_root_fails_the_walk() {
        let tmp = TempDir::new().unwrap();
        let result = collect_save_files(&tmp.path().join("missing"));
        assert!(matches!(result, Err(ExtractionError::ReadDir { .. })));
    }
}
