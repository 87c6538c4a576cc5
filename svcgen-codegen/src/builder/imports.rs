//! Import collection.

use std::collections::BTreeMap;

/// A single import: a path with an optional local alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }

    /// The name the import is referred to by in code: the alias, or the
    /// last path segment.
    pub fn local_name(&self) -> &str {
        match &self.alias {
            Some(alias) => alias,
            None => self.path.rsplit('/').next().unwrap_or(&self.path),
        }
    }
}

/// A deduplicated set of imports ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    imports: BTreeMap<String, Option<String>>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import. A later alias for the same path replaces an absent one.
    pub fn add(&mut self, import: Import) -> &mut Self {
        let entry = self.imports.entry(import.path).or_insert(None);
        if import.alias.is_some() {
            *entry = import.alias;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Iterate imports in path order.
    pub fn iter(&self) -> impl Iterator<Item = Import> + '_ {
        self.imports.iter().map(|(path, alias)| Import {
            path: path.clone(),
            alias: alias.clone(),
        })
    }
}

impl FromIterator<Import> for ImportSet {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        let mut set = Self::new();
        for import in iter {
            set.add(import);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_set_sorted_and_deduplicated() {
        let set: ImportSet = [
            Import::new("github.com/golang/protobuf/ptypes"),
            Import::new("github.com/dictyBase/apihelpers/aphgrpc"),
            Import::new("github.com/golang/protobuf/ptypes"),
        ]
        .into_iter()
        .collect();

        let paths: Vec<_> = set.iter().map(|i| i.path).collect();
        assert_eq!(
            paths,
            [
                "github.com/dictyBase/apihelpers/aphgrpc",
                "github.com/golang/protobuf/ptypes",
            ]
        );
    }

    #[test]
    fn test_alias_is_kept() {
        let runner = "gopkg.in/mgutz/dat.v1/sqlx-runner";
        let mut set = ImportSet::new();
        set.add(Import::aliased(runner, "runner"));
        set.add(Import::new(runner));
        let import = set.iter().next().unwrap();
        assert_eq!(import.alias.as_deref(), Some("runner"));
        assert_eq!(import.local_name(), "runner");
    }

    #[test]
    fn test_local_name_is_last_segment() {
        let import = Import::new("github.com/golang/protobuf/ptypes/any");
        assert_eq!(import.local_name(), "any");
    }
}
