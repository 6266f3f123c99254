//! Id-keyed registries for races, items, magic and skills.
//!
//! Each registry is a directory of one file per entry, named `<id>.<ext>`.
//! Entries are loaded lazily on lookup; nothing is cached.
//!
//! ```text
//! data_dir/
//! ├── races/
//! │   └── human.yaml
//! ├── items/
//! ├── magic/
//! └── skills/
//!     └── slash.ron
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use status_core::{Record, Value};

use crate::error::RegistryError;
use crate::loaders::DataFormat;

/// The kinds of content a [`RegistrySet`] can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistryKind {
    Race,
    Item,
    Magic,
    Skill,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 4] = [
        RegistryKind::Race,
        RegistryKind::Item,
        RegistryKind::Magic,
        RegistryKind::Skill,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RegistryKind::Race => "race",
            RegistryKind::Item => "item",
            RegistryKind::Magic => "magic",
            RegistryKind::Skill => "skill",
        }
    }

    /// Subdirectory used by [`RegistrySet::from_data_dir`].
    pub const fn default_dir(self) -> &'static str {
        match self {
            RegistryKind::Race => "races",
            RegistryKind::Item => "items",
            RegistryKind::Magic => "magic",
            RegistryKind::Skill => "skills",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name || kind.default_dir() == name)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registry entry: its id and the raw mapping from its file.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryEntry {
    pub kind: RegistryKind,
    pub id: String,
    pub fields: Record,
}

impl RegistryEntry {
    /// `name` field, falling back to the id.
    pub fn name(&self) -> &str {
        self.text("name").unwrap_or(&self.id)
    }

    pub fn description(&self) -> Option<&str> {
        self.text("description")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_text)
    }
}

/// A directory of entries of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    kind: RegistryKind,
    dir: PathBuf,
}

impl Registry {
    pub fn new(kind: RegistryKind, dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            dir: dir.into(),
        }
    }

    pub const fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `id`, trying each extension in [`DataFormat::EXTENSIONS`]
    /// order.
    ///
    /// # Errors
    ///
    /// `RegistryError::NotFound` if no file exists, or if `id` is not a plain
    /// file stem (contains a separator or `..`).
    pub fn path_for(&self, id: &str) -> Result<PathBuf, RegistryError> {
        if !is_plain_id(id) {
            tracing::warn!("rejecting {} id {id:?}: not a plain file name", self.kind);
            return Err(self.not_found(id));
        }

        DataFormat::EXTENSIONS
            .iter()
            .map(|extension| self.dir.join(format!("{id}.{extension}")))
            .find(|path| path.is_file())
            .ok_or_else(|| self.not_found(id))
    }

    /// Loads the entry stored under `id`.
    pub fn load_by_id(&self, id: &str) -> Result<RegistryEntry, RegistryError> {
        let path = self.path_for(id)?;
        let content = std::fs::read_to_string(&path).map_err(|source| RegistryError::Io {
            path: path.clone(),
            source,
        })?;

        // path_for only yields paths with a known extension
        let format = DataFormat::from_path(&path).unwrap_or(DataFormat::Ron);
        let fields = format
            .parse_record(&content)
            .map_err(|e| RegistryError::Parse {
                path: path.clone(),
                message: format!("{e:#}"),
            })?;

        tracing::debug!("loaded {} `{id}` from {}", self.kind, path.display());
        Ok(RegistryEntry {
            kind: self.kind,
            id: id.to_owned(),
            fields,
        })
    }

    /// Ids of every entry file in the directory, sorted.
    pub fn ids(&self) -> Result<Vec<String>, RegistryError> {
        let io_error = |source| RegistryError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if DataFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_owned());
            }
        }
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    fn not_found(&self, id: &str) -> RegistryError {
        RegistryError::NotFound {
            kind: self.kind,
            id: id.to_owned(),
            dir: self.dir.clone(),
        }
    }
}

fn is_plain_id(id: &str) -> bool {
    let mut components = Path::new(id).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// One registry per kind.
#[derive(Clone, Debug, Default)]
pub struct RegistrySet {
    registries: BTreeMap<RegistryKind, Registry>,
}

impl RegistrySet {
    pub fn builder() -> RegistrySetBuilder {
        RegistrySetBuilder::default()
    }

    /// Every kind registered under its default subdirectory of `data_dir`.
    pub fn from_data_dir(data_dir: &Path) -> Result<Self, RegistryError> {
        RegistryKind::ALL
            .into_iter()
            .fold(Self::builder(), |builder, kind| {
                builder.register(kind, data_dir.join(kind.default_dir()))
            })
            .build()
    }

    pub fn get(&self, kind: RegistryKind) -> Option<&Registry> {
        self.registries.get(&kind)
    }

    pub fn races(&self) -> Option<&Registry> {
        self.get(RegistryKind::Race)
    }

    pub fn items(&self) -> Option<&Registry> {
        self.get(RegistryKind::Item)
    }

    pub fn magic(&self) -> Option<&Registry> {
        self.get(RegistryKind::Magic)
    }

    pub fn skills(&self) -> Option<&Registry> {
        self.get(RegistryKind::Skill)
    }

    /// Looks `id` up in the registry for `kind`.
    ///
    /// An unregistered kind reports `NotFound` with an empty directory.
    pub fn lookup(&self, kind: RegistryKind, id: &str) -> Result<RegistryEntry, RegistryError> {
        match self.get(kind) {
            Some(registry) => registry.load_by_id(id),
            None => Err(RegistryError::NotFound {
                kind,
                id: id.to_owned(),
                dir: PathBuf::new(),
            }),
        }
    }
}

/// Builder for [`RegistrySet`].
#[derive(Clone, Debug, Default)]
pub struct RegistrySetBuilder {
    dirs: Vec<(RegistryKind, PathBuf)>,
}

impl RegistrySetBuilder {
    /// Register `dir` for `kind`; a later call for the same kind wins.
    pub fn register(mut self, kind: RegistryKind, dir: impl Into<PathBuf>) -> Self {
        self.dirs.retain(|(existing, _)| *existing != kind);
        self.dirs.push((kind, dir.into()));
        self
    }

    pub fn races(self, dir: impl Into<PathBuf>) -> Self {
        self.register(RegistryKind::Race, dir)
    }

    pub fn items(self, dir: impl Into<PathBuf>) -> Self {
        self.register(RegistryKind::Item, dir)
    }

    pub fn magic(self, dir: impl Into<PathBuf>) -> Self {
        self.register(RegistryKind::Magic, dir)
    }

    pub fn skills(self, dir: impl Into<PathBuf>) -> Self {
        self.register(RegistryKind::Skill, dir)
    }

    /// # Errors
    ///
    /// `RegistryError::DuplicateDirectory` if two kinds share a directory.
    pub fn build(self) -> Result<RegistrySet, RegistryError> {
        let mut seen: BTreeMap<PathBuf, RegistryKind> = BTreeMap::new();
        for (kind, dir) in &self.dirs {
            if let Some(first) = seen.insert(normalize(dir), *kind) {
                return Err(RegistryError::DuplicateDirectory {
                    dir: dir.clone(),
                    first,
                    second: *kind,
                });
            }
        }

        let registries = self
            .dirs
            .into_iter()
            .map(|(kind, dir)| (kind, Registry::new(kind, dir)))
            .collect();
        Ok(RegistrySet { registries })
    }
}

/// Canonical form when the directory exists, lexical form otherwise.
fn normalize(dir: &Path) -> PathBuf {
    dir.canonicalize()
        .unwrap_or_else(|_| dir.components().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_by_name_or_directory() {
        assert_eq!(RegistryKind::parse("Race"), Some(RegistryKind::Race));
        assert_eq!(RegistryKind::parse("skills"), Some(RegistryKind::Skill));
        assert_eq!(RegistryKind::parse("spells"), None);
    }

    #[test]
    fn ids_must_be_plain_names() {
        assert!(is_plain_id("human"));
        assert!(is_plain_id("fire-ball"));
        assert!(!is_plain_id("../secret"));
        assert!(!is_plain_id("a/b"));
        assert!(!is_plain_id(""));
        assert!(!is_plain_id("/etc"));
    }

    #[test]
    fn same_directory_twice_is_rejected() {
        let err = RegistrySet::builder()
            .races("data/shared")
            .items("data/./shared")
            .build()
            .unwrap_err();

        match err {
            RegistryError::DuplicateDirectory { first, second, .. } => {
                assert_eq!(first, RegistryKind::Race);
                assert_eq!(second, RegistryKind::Item);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reregistering_a_kind_replaces_it() {
        let set = RegistrySet::builder()
            .races("data/a")
            .races("data/b")
            .build()
            .unwrap();
        assert_eq!(set.races().unwrap().dir(), Path::new("data/b"));
        assert!(set.items().is_none());
    }
}
