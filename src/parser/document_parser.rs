//! Document parser driving ordering and coalescing over every page.

use rayon::prelude::*;

use crate::config::AnalysisConfig;
use crate::describe::ImageDescriber;
use crate::error::Result;
use crate::model::{DocumentInfo, PageLayout, Primitive};
use crate::order::order_page;

use super::coalesce::Coalescer;
use super::options::ParseOptions;
use super::source::PrimitiveSource;

/// Turns the primitives of a document into ordered elements.
pub struct DocumentParser<'a> {
    describer: &'a dyn ImageDescriber,
    config: AnalysisConfig,
    options: ParseOptions,
}

impl<'a> DocumentParser<'a> {
    /// Create a parser with default configuration and options.
    pub fn new(describer: &'a dyn ImageDescriber) -> Self {
        Self {
            describer,
            config: AnalysisConfig::default(),
            options: ParseOptions::default(),
        }
    }

    /// Set the analysis configuration handed to the describer.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Set parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a document.
    ///
    /// Pages are ordered independently (in parallel unless disabled), then
    /// coalesced one after another so images are described in page order.
    /// The first describer failure aborts the whole document.
    pub fn parse(&self, source: &dyn PrimitiveSource) -> Result<DocumentInfo> {
        self.options.validate()?;

        let mut document = DocumentInfo::new();
        for (key, value) in source.metadata() {
            document.set_metadata(key, value);
        }

        let pages = source.pages(&self.options.pages)?;
        log::debug!("Parsing {} pages", pages.len());

        let ordered = self.order_pages(pages);

        let coalescer = Coalescer::new(self.describer, &self.config);
        for (number, primitives) in ordered {
            let elements = coalescer.coalesce(number, primitives)?;
            log::debug!("Page {}: {} elements", number, elements.len());
            document.extend(elements);
        }

        Ok(document)
    }

    /// Order every page, returning `(page number, primitives)` in page order.
    pub fn order_pages(&self, pages: Vec<PageLayout>) -> Vec<(u32, Vec<Primitive>)> {
        let tolerance = self.options.tolerance;
        let order = |page: PageLayout| (page.number, order_page(page, tolerance));

        if self.options.parallel {
            pages.into_par_iter().map(order).collect()
        } else {
            pages.into_iter().map(order).collect()
        }
    }
}
