//! Template library: a directory of template files, listed and filtered the
//! way the template gallery browses them.

use std::path::Path;

use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use indexmap::IndexMap;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::constants::TEMPLATE_PATTERNS;
use crate::error::{Error, Result};
use crate::loader::load_template;
use crate::template::{Template, TemplateCategory};

fn template_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in TEMPLATE_PATTERNS {
        builder.add(
            Glob::new(pattern).map_err(|e| Error::LibraryError(format!("bad pattern: {e}")))?,
        );
    }
    builder.build().map_err(|e| Error::LibraryError(format!("bad pattern set: {e}")))
}

/// Templates found in a directory, keyed by file stem and sorted by key.
#[derive(Debug, Default)]
pub struct TemplateLibrary {
    templates: IndexMap<String, Template>,
}

impl TemplateLibrary {
    /// Walks `dir` and loads every template file in it.
    ///
    /// Files that fail to parse or validate are skipped with a warning. When two files
    /// share a stem, the first one in walk order wins.
    ///
    /// # Errors
    /// * `Error::LibraryError` if `dir` is not a directory or cannot be walked
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::LibraryError(format!(
                "'{}' is not a directory",
                dir.display()
            )));
        }

        let patterns = template_globset()?;
        let mut templates = IndexMap::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::LibraryError(e.to_string()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = path.file_name() else { continue };
            if !patterns.is_match(file_name) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else { continue };
            if templates.contains_key(key) {
                warn!("Duplicate template key '{key}', ignoring {}", path.display());
                continue;
            }

            match load_template(path) {
                Ok(template) => {
                    debug!("Found template '{key}' at {}", path.display());
                    templates.insert(key.to_string(), template);
                }
                Err(e) => warn!("Skipping {}: {e}", path.display()),
            }
        }

        templates.sort_keys();
        Ok(Self { templates })
    }

    pub fn from_templates<I: IntoIterator<Item = (String, Template)>>(entries: I) -> Self {
        let mut templates: IndexMap<String, Template> = entries.into_iter().collect();
        templates.sort_keys();
        Self { templates }
    }

    pub fn get(&self, key: &str) -> Option<&Template> {
        self.templates.get(key)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Entries matching every criterion of `filter`, in key order.
    pub fn filter<'a>(
        &'a self,
        filter: &'a TemplateFilter,
    ) -> impl Iterator<Item = (&'a str, &'a Template)> + 'a {
        self.iter().filter(move |(key, template)| filter.matches(key, template))
    }
}

/// Gallery filter. Empty criteria match everything; set criteria combine
/// with AND.
#[derive(Debug, Default)]
pub struct TemplateFilter {
    /// Template must be in one of these categories
    pub categories: Vec<TemplateCategory>,
    /// Template must carry all of these tags (case-insensitive)
    pub tags: Vec<String>,
    /// Glob matched against the library key
    pub name: Option<GlobMatcher>,
    /// Case-insensitive substring of name, description or a tag
    pub query: Option<String>,
    pub public_only: bool,
}

impl TemplateFilter {
    /// Sets the key glob.
    ///
    /// # Errors
    /// * `Error::ValidationError` if `pattern` is not a valid glob
    pub fn with_name_pattern(mut self, pattern: &str) -> Result<Self> {
        let glob = Glob::new(pattern)
            .map_err(|e| Error::ValidationError(format!("invalid name pattern: {e}")))?;
        self.name = Some(glob.compile_matcher());
        Ok(self)
    }

    pub fn matches(&self, key: &str, template: &Template) -> bool {
        if self.public_only && !template.is_public {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&template.category) {
            return false;
        }
        if !self.tags.iter().all(|tag| template.has_tag(tag)) {
            return false;
        }
        if let Some(matcher) = &self.name {
            if !matcher.is_match(key) {
                return false;
            }
        }
        match &self.query {
            Some(query) => {
                let query = query.to_lowercase();
                template.name.to_lowercase().contains(&query)
                    || template.description.to_lowercase().contains(&query)
                    || template.tags.iter().any(|t| t.to_lowercase().contains(&query))
            }
            None => true,
        }
    }
}
