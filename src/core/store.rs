//! Gradebook persistence
//!
//! A store keeps one gradebook document in a durable slot. Loading never
//! fails: a missing or unusable document yields the default two-term
//! gradebook, so a corrupt file can cost data but never block startup.

use crate::core::models::Gradebook;
use crate::{info, warn};
use std::cell::RefCell;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// A durable slot holding one gradebook
pub trait GradebookStore {
    /// Load the stored gradebook, or the default one if nothing usable is stored
    fn load(&self) -> Gradebook;

    /// Replace the stored gradebook
    ///
    /// # Errors
    /// Returns an error if the gradebook cannot be serialized or written
    fn save(&self, gradebook: &Gradebook) -> Result<(), Box<dyn Error>>;
}

/// Serialize a gradebook to the pretty JSON layout used on disk
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(gradebook: &Gradebook) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(gradebook)
}

/// Parse a stored gradebook document
///
/// A document without any term is rejected so the caller falls back to the
/// seeded default.
///
/// # Errors
/// Returns an error if the JSON is malformed, does not match the layout or holds no term
pub fn from_json(json: &str) -> Result<Gradebook, Box<dyn Error>> {
    let gradebook: Gradebook = serde_json::from_str(json)?;
    if gradebook.terms().is_empty() {
        return Err("gradebook document has no terms".into());
    }
    let over_budget = gradebook
        .terms()
        .iter()
        .flat_map(|t| t.units())
        .flat_map(|u| u.courses())
        .filter(|c| !c.is_within_budget())
        .count();
    if over_budget > 0 {
        warn!("{over_budget} stored course(s) have assessment weights above 100%");
    }
    Ok(gradebook)
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GradebookStore for JsonFileStore {
    fn load(&self) -> Gradebook {
        if !self.path.exists() {
            info!(
                "No gradebook at {}, starting with default terms",
                self.path.display()
            );
            return Gradebook::new();
        }

        match fs::read_to_string(&self.path)
            .map_err(Box::<dyn Error>::from)
            .and_then(|content| from_json(&content))
        {
            Ok(gradebook) => gradebook,
            Err(e) => {
                warn!(
                    "Ignoring unreadable gradebook {}: {e}",
                    self.path.display()
                );
                Gradebook::new()
            }
        }
    }

    fn save(&self, gradebook: &Gradebook) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, to_json(gradebook)?)?;
        Ok(())
    }
}

/// In-memory store holding the last saved document as JSON text
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with raw document text
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(contents.into())),
        }
    }

    /// Raw text of the stored document, if any
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl GradebookStore for MemoryStore {
    fn load(&self) -> Gradebook {
        self.slot
            .borrow()
            .as_deref()
            .and_then(|json| from_json(json).ok())
            .unwrap_or_default()
    }

    fn save(&self, gradebook: &Gradebook) -> Result<(), Box<dyn Error>> {
        *self.slot.borrow_mut() = Some(to_json(gradebook)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_starts_with_defaults() {
        let store = MemoryStore::new();
        assert!(store.contents().is_none());
        assert_eq!(store.load(), Gradebook::new());
    }

    #[test]
    fn memory_store_keeps_saved_document() {
        let store = MemoryStore::new();
        let mut book = Gradebook::new();
        book.add_credit_unit(0, "Maths", Some(2.0)).unwrap();
        book.dark_mode = true;

        store.save(&book).unwrap();
        assert_eq!(store.load(), book);
    }

    #[test]
    fn rejects_documents_without_terms() {
        assert!(from_json(r#"{"terms": [], "dark_mode": true}"#).is_err());
    }

    #[test]
    fn missing_theme_flag_defaults_to_light() {
        let book = from_json(r#"{"terms": [{"name": "Semester 1", "units": []}]}"#).unwrap();
        assert!(!book.dark_mode);
        assert_eq!(book.terms().len(), 1);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let store = MemoryStore::with_contents("{not json");
        assert_eq!(store.load(), Gradebook::new());
    }
}
