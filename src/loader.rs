//! Loading of templates and resume data from JSON or YAML documents.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use crate::constants::STDIN_PATH;
use crate::error::{Error, Result};
use crate::library::TemplateLibrary;
use crate::template::Template;

/// Parses `content` as JSON, falling back to YAML.
///
/// # Arguments
/// * `content` - Raw document text
/// * `origin` - Where the text came from, used in error messages
///
/// # Errors
/// * `Error::ParseError` if the content is neither valid JSON nor valid YAML
///   for `T`
pub fn parse_document<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(json_err) => {
            debug!("{origin} is not JSON ({json_err}), trying YAML");
            serde_yaml::from_str(content).map_err(|e| Error::ParseError {
                origin: origin.to_string(),
                message: e.to_string(),
            })
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::TemplateNotFound(path.display().to_string()));
    }
    debug!("Reading {}", path.display());
    std::fs::read_to_string(path).map_err(Error::IoError)
}

/// Loads a template from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
/// * `Error::TemplateNotFound` if `path` is not a file
/// * `Error::ParseError` if the file is not a template document
/// * `Error::ValidationError` if the template breaks [`Template::validate`]
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<Template> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let template: Template = parse_document(&content, &path.display().to_string())?;
    template.validate()?;
    Ok(template)
}

/// Loads resume data from a file, or from stdin when `path` is `-`.
pub fn load_data<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    if path == Path::new(STDIN_PATH) {
        return load_data_from_reader(std::io::stdin().lock(), "stdin");
    }
    let content = read_file(path)?;
    parse_document(&content, &path.display().to_string())
}

/// Reads resume data from any reader until end of input.
pub fn load_data_from_reader<R: Read>(mut reader: R, origin: &str) -> Result<serde_json::Value> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_document(buffer.trim(), origin)
}

/// Where a template is taken from.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// A single template file
    File(PathBuf),
    /// An entry of a template library directory, by key
    Library { dir: PathBuf, key: String },
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::File(path) => write!(f, "file: '{}'", path.display()),
            TemplateSource::Library { dir, key } => {
                write!(f, "library entry '{key}' in '{}'", dir.display())
            }
        }
    }
}

impl TemplateSource {
    /// Interprets a template argument.
    ///
    /// With a library directory, anything that is not an existing file is
    /// treated as a library key.
    pub fn from_arg(template: &str, library: Option<&Path>) -> Self {
        let path = PathBuf::from(template);
        match library {
            Some(dir) if !path.is_file() => TemplateSource::Library {
                dir: dir.to_path_buf(),
                key: template.to_string(),
            },
            _ => TemplateSource::File(path),
        }
    }

    /// Loads the template this source points at.
    pub fn load(&self) -> Result<Template> {
        debug!("Using template from {self}");
        match self {
            TemplateSource::File(path) => load_template(path),
            TemplateSource::Library { dir, key } => TemplateLibrary::discover(dir)?
                .get(key)
                .cloned()
                .ok_or_else(|| Error::TemplateNotFound(format!("{key} (in {})", dir.display()))),
        }
    }
}
