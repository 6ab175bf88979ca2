use crate::archetype::flhash::nickname_hash;
use crate::archetype::lookup_error::LookupError;
use crate::save_format::parse_save_text;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves numeric archetype ids to their nicknames.
///
/// Extraction runs on a thread pool, so implementations must be `Sync`.
pub trait ArchetypeResolver: Sync {
    fn resolve(&self, id: u32) -> Option<&str>;
}

/// Id to nickname map built from the game's data files.
#[derive(Debug, Default, Clone)]
pub struct NicknameTable {
    nicknames: HashMap<u32, String>,
}

impl NicknameTable {
    /// Builds the table from every nickname found in the install directory.
    ///
    /// All `.ini` files below `install_dir` are read and each `nickname = ...`
    /// entry is hashed. Files that are not text (the game also ships binary
    /// ini files) are skipped with a warning.
    ///
    /// # Arguments
    ///
    /// * `install_dir` - The game's `DATA` directory, or any directory above it.
    ///
    /// # Returns
    ///
    /// The populated table, or a `LookupError` if a directory or file cannot be read.
    pub fn from_install_dir(install_dir: &Path) -> Result<Self, LookupError> {
        let mut ini_files = Vec::new();
        collect_ini_files(install_dir, &mut ini_files)?;

        let mut table = NicknameTable::default();
        for path in &ini_files {
            let bytes = fs::read(path).map_err(|source| LookupError::ReadFile {
                path: path.clone(),
                source,
            })?;
            match String::from_utf8(bytes) {
                Ok(text) => table.add_from_text(&text),
                Err(_) => log::warn!("Skipping non-text data file {}", path.display()),
            }
        }

        log::info!(
            "Loaded {} nicknames from {} data files under {}",
            table.len(),
            ini_files.len(),
            install_dir.display()
        );
        Ok(table)
    }

    /// Builds the table from an explicit list of nicknames.
    pub fn from_nicknames<I, S>(nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = NicknameTable::default();
        for nickname in nicknames {
            table.insert(nickname.into());
        }
        table
    }

    pub fn len(&self) -> usize {
        self.nicknames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nicknames.is_empty()
    }

    fn add_from_text(&mut self, text: &str) {
        let document = parse_save_text(text);
        for section in document.sections.values() {
            for nickname in section.field("nickname").values() {
                self.insert(nickname.to_owned());
            }
        }
    }

    fn insert(&mut self, nickname: String) {
        self.nicknames.insert(nickname_hash(&nickname), nickname);
    }
}

impl ArchetypeResolver for NicknameTable {
    fn resolve(&self, id: u32) -> Option<&str> {
        self.nicknames.get(&id).map(String::as_str)
    }
}

fn collect_ini_files(dir: &Path, ini_files: &mut Vec<PathBuf>) -> Result<(), LookupError> {
    let read_dir_error = |source| LookupError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(read_dir_error)?;
        if file_type.is_dir() {
            collect_ini_files(&path, ini_files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ini"))
        {
            ini_files.push(path);
        }
    }
    Ok(())
}
