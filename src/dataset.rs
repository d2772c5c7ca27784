//! The read-only dataset of experience entries.
//!
//! Panels never reach for a global table: a [`Dataset`] is handed to them at
//! construction. [`Catalog`] is the in-memory implementation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::buffer::PixelBuffer;
use crate::content::{Navigator, PageContent};
use crate::error::{Error, Result};
use crate::identifier::Identifier;

/// Produces the content of one page.
///
/// Receives the [`Navigator`] capability so the page can link deeper.
pub type PageProducer = Arc<dyn Fn(&Navigator) -> PageContent + Send + Sync>;

/// A value with light and dark variants.
#[derive(Clone, Debug, PartialEq)]
pub struct Themed<T> {
    pub light: T,
    pub dark: T,
}

impl<T> Themed<T> {
    #[must_use]
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    /// The variant for the given scheme.
    #[must_use]
    pub fn select(&self, dark: bool) -> &T {
        if dark { &self.dark } else { &self.light }
    }
}

impl<T: Clone> Themed<T> {
    /// The same value for both schemes.
    #[must_use]
    pub fn uniform(value: T) -> Self {
        Self {
            light: value.clone(),
            dark: value,
        }
    }
}

/// An image asset: where it came from plus its decoded raster.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub source: String,
    pub pixels: PixelBuffer,
}

impl Image {
    #[must_use]
    pub fn new(source: impl Into<String>, pixels: PixelBuffer) -> Self {
        Self {
            source: source.into(),
            pixels,
        }
    }
}

/// One work or project experience.
#[derive(Clone)]
pub struct ExperienceEntry {
    pub name: String,
    pub role: String,
    pub logo: Themed<Image>,
    pub cover: Themed<Image>,
    pages: BTreeMap<String, PageProducer>,
}

impl ExperienceEntry {
    /// Entry without pages.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        logo: Themed<Image>,
        cover: Themed<Image>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            logo,
            cover,
            pages: BTreeMap::new(),
        }
    }

    /// Add (or replace) the producer for `path`.
    #[must_use]
    pub fn with_page<F>(mut self, path: impl Into<String>, producer: F) -> Self
    where
        F: Fn(&Navigator) -> PageContent + Send + Sync + 'static,
    {
        self.pages.insert(path.into(), Arc::new(producer));
        self
    }

    /// Producer for a page path.
    #[must_use]
    pub fn page(&self, path: &str) -> Option<&PageProducer> {
        self.pages.get(path)
    }

    /// Known page paths in sorted order.
    pub fn page_paths(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Invoke the producer for `path`.
    pub fn produce(&self, path: &str) -> Result<PageContent> {
        let producer = self.page(path).ok_or_else(|| Error::PageNotFound {
            page: path.to_string(),
        })?;
        Ok(producer(&Navigator::new(path)))
    }
}

impl fmt::Debug for ExperienceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperienceEntry")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("logo", &self.logo.light.source)
            .field("cover", &self.cover.light.source)
            .field("pages", &self.pages.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Read-only access to experience entries by key.
pub trait Dataset {
    /// Entry for a key.
    fn entry(&self, key: &str) -> Option<Arc<ExperienceEntry>>;

    /// All keys, sorted.
    fn keys(&self) -> Vec<String>;

    /// Resolve an identifier to its entry.
    fn resolve(&self, identifier: &Identifier) -> Result<Arc<ExperienceEntry>> {
        let key = identifier.key()?;
        self.entry(key).ok_or_else(|| Error::Lookup {
            key: key.to_string(),
        })
    }
}

/// In-memory dataset.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<String, Arc<ExperienceEntry>>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry under `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: ExperienceEntry) {
        self.entries.insert(key.into(), Arc::new(entry));
    }

    /// Builder form of [`Catalog::insert`].
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, entry: ExperienceEntry) -> Self {
        self.insert(key, entry);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dataset for Catalog {
    fn entry(&self, key: &str) -> Option<Arc<ExperienceEntry>> {
        self.entries.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn image(name: &str) -> Image {
        Image::new(name, PixelBuffer::filled(2, 2, Rgba::RED))
    }

    fn entry() -> ExperienceEntry {
        ExperienceEntry::new(
            "Alpha Corp",
            "Engineer",
            Themed::new(image("logo-light"), image("logo-dark")),
            Themed::uniform(image("cover")),
        )
        .with_page("/", |nav| PageContent::new().line(nav.link("more", "more")))
    }

    #[test]
    fn test_themed_select() {
        let themed = Themed::new("light", "dark");
        assert_eq!(*themed.select(false), "light");
        assert_eq!(*themed.select(true), "dark");
    }

    #[test]
    fn test_produce_page() {
        let entry = entry();
        let page = entry.produce("/").unwrap();
        assert_eq!(page.links().collect::<Vec<_>>(), vec!["more"]);

        let err = entry.produce("more").unwrap_err();
        assert!(matches!(err, Error::PageNotFound { ref page } if page == "more"));
    }

    #[test]
    fn test_catalog_resolve() {
        let catalog = Catalog::new().with_entry("alpha", entry());
        assert_eq!(catalog.keys(), vec!["alpha".to_string()]);

        let resolved = catalog.resolve(&Identifier::new("chip:alpha")).unwrap();
        assert_eq!(resolved.name, "Alpha Corp");

        let err = catalog.resolve(&Identifier::new("chip:missing")).unwrap_err();
        assert!(matches!(err, Error::Lookup { ref key } if key == "missing"));

        let err = catalog.resolve(&Identifier::new("alpha")).unwrap_err();
        assert!(err.is_lookup());
    }

    #[test]
    fn test_entries_are_shared() {
        let catalog = Catalog::new().with_entry("alpha", entry());
        let a = catalog.entry("alpha").unwrap();
        let b = catalog.entry("alpha").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_debug_lists_pages() {
        let debug = format!("{:?}", entry());
        assert!(debug.contains("Alpha Corp"));
        assert!(debug.contains("\"/\""));
    }
}
