//! Primitive extraction sources.
//!
//! A [`PrimitiveSource`] supplies the unordered primitives of every page,
//! plus document metadata. Decoding a concrete file format into primitives
//! is the source's business; the rest of the pipeline only sees
//! [`PageLayout`]s whose boxes share one top-left-origin coordinate system.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{PageLayout, Primitive, Rect, DEFAULT_IMAGE_TYPE, META_FILE_NAME};

use super::options::PageSelection;

/// Supplies positioned primitives for each page of a document.
pub trait PrimitiveSource {
    /// Document metadata (title, author, ...).
    fn metadata(&self) -> BTreeMap<String, String>;

    /// The selected pages, in ascending page-number order.
    ///
    /// Pages outside the selection are never loaded.
    fn pages(&self, selection: &PageSelection) -> Result<Vec<PageLayout>>;
}

/// A source holding its pages in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    metadata: BTreeMap<String, String>,
    pages: Vec<PageLayout>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from pages.
    pub fn from_pages(pages: Vec<PageLayout>) -> Self {
        Self {
            metadata: BTreeMap::new(),
            pages,
        }
    }

    /// Add a page.
    pub fn with_page(mut self, page: PageLayout) -> Self {
        self.pages.push(page);
        self
    }

    /// Set a metadata value.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl PrimitiveSource for MemorySource {
    fn metadata(&self) -> BTreeMap<String, String> {
        self.metadata.clone()
    }

    fn pages(&self, selection: &PageSelection) -> Result<Vec<PageLayout>> {
        let mut pages: Vec<PageLayout> = self
            .pages
            .iter()
            .filter(|p| selection.includes(p.number))
            .cloned()
            .collect();
        pages.sort_by_key(|p| p.number);
        Ok(pages)
    }
}

/// A page layout stored as JSON.
///
/// ```json
/// {
///   "metadata": { "title": "Sample" },
///   "pages": [
///     { "number": 1, "primitives": [
///       { "type": "text", "bbox": { "left": 72, "top": 72, "right": 540, "bottom": 90 },
///         "text": "Sample PDF" },
///       { "type": "image", "bbox": { "left": 72, "top": 100, "right": 300, "bottom": 300 },
///         "path": "figure1.png" }
///     ] }
///   ]
/// }
/// ```
///
/// Image paths are relative to the layout file. The MIME type may be given
/// as `mimeType`; otherwise it is inferred from the file extension.
#[derive(Debug, Clone)]
pub struct LayoutFile {
    base_dir: PathBuf,
    file_name: Option<String>,
    layout: RawLayout,
}

#[derive(Debug, Clone, Deserialize)]
struct RawLayout {
    #[serde(default)]
    metadata: BTreeMap<String, String>,
    #[serde(default)]
    pages: Vec<RawPage>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawPage {
    number: u32,
    #[serde(default)]
    primitives: Vec<RawPrimitive>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawPrimitive {
    Text {
        bbox: Rect,
        text: String,
    },
    Image {
        bbox: Rect,
        path: PathBuf,
        #[serde(rename = "mimeType")]
        mime_type: Option<String>,
    },
}

impl LayoutFile {
    /// Open a layout file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut file = Self::from_json(&content, base_dir)?;
        file.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(file)
    }

    /// Parse a layout from JSON, resolving image paths against `base_dir`.
    pub fn from_json(json: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let layout: RawLayout = serde_json::from_str(json)?;

        let mut seen = BTreeSet::new();
        for page in &layout.pages {
            if page.number == 0 {
                return Err(Error::Layout("page numbers start at 1".to_string()));
            }
            if !seen.insert(page.number) {
                return Err(Error::Layout(format!("duplicate page {}", page.number)));
            }
        }

        Ok(Self {
            base_dir: base_dir.into(),
            file_name: None,
            layout,
        })
    }

    /// Number of pages in the layout.
    pub fn page_count(&self) -> usize {
        self.layout.pages.len()
    }

    fn load_page(&self, page: &RawPage) -> Result<PageLayout> {
        let mut layout = PageLayout::new(page.number);
        for primitive in &page.primitives {
            let primitive = match primitive {
                RawPrimitive::Text { bbox, text } => Primitive::text(*bbox, text.clone()),
                RawPrimitive::Image {
                    bbox,
                    path,
                    mime_type,
                } => {
                    let full_path = self.base_dir.join(path);
                    let data = fs::read(&full_path).map_err(|e| {
                        Error::Layout(format!(
                            "page {}: cannot read image {}: {}",
                            page.number,
                            full_path.display(),
                            e
                        ))
                    })?;
                    let mime_type = mime_type
                        .clone()
                        .unwrap_or_else(|| mime_type_for_path(path).to_string());
                    Primitive::image(*bbox, data, mime_type)
                }
            };
            layout.push(primitive);
        }

        if layout.is_empty() {
            log::warn!("Page {} has no primitives", page.number);
        }
        Ok(layout)
    }
}

impl PrimitiveSource for LayoutFile {
    fn metadata(&self) -> BTreeMap<String, String> {
        let mut metadata = self.layout.metadata.clone();
        if let Some(name) = &self.file_name {
            metadata.insert(META_FILE_NAME.to_string(), name.clone());
        }
        metadata
    }

    fn pages(&self, selection: &PageSelection) -> Result<Vec<PageLayout>> {
        let mut pages = self
            .layout
            .pages
            .iter()
            .filter(|page| selection.includes(page.number))
            .map(|page| self.load_page(page))
            .collect::<Result<Vec<_>>>()?;
        pages.sort_by_key(|p| p.number);
        Ok(pages)
    }
}

/// Guess an image MIME type from a file extension.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => {
            log::warn!(
                "Unknown image extension for {}, assuming {}",
                path.display(),
                DEFAULT_IMAGE_TYPE
            );
            DEFAULT_IMAGE_TYPE
        }
    }
}
