//! Page extraction.
//!
//! A segment document starts as a copy of the source whose root page node is
//! pointed at just the segment's pages. Attributes the pages inherited from
//! intermediate page nodes are copied onto the pages first, then everything
//! no longer reachable from the catalog is pruned.

use lopdf::{Document, Object, ObjectId};
use std::ops::Range;

use crate::error::{Result, SplitError};
use crate::io::PdfDocument;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Builds standalone documents from page ranges of a source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageExtractor;

impl PageExtractor {
    /// Create a new page extractor.
    pub fn new() -> Self {
        Self
    }

    /// Build a document holding exactly the pages in `range` (0-indexed,
    /// half-open), in source order.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::ExtractionFailed`] if the page tree is malformed
    /// or the rebuilt tree does not list the requested pages.
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past the last page of `source`.
    pub fn extract(&self, source: &PdfDocument, range: Range<usize>) -> Result<Document> {
        let wanted = source.pages(range.clone());

        let mut doc = source.document().clone();
        for &page_id in wanted {
            self.flatten_inherited(&mut doc, page_id)?;
        }
        self.update_page_tree(&mut doc, wanted)?;
        doc.prune_objects();

        let kept: Vec<ObjectId> = doc.get_pages().into_values().collect();
        if kept != wanted {
            return Err(SplitError::extraction_failed(format!(
                "expected pages {}-{} ({} page(s)), page tree holds {} page(s)",
                range.start + 1,
                range.end,
                wanted.len(),
                kept.len()
            )));
        }

        Ok(doc)
    }

    /// Copy inherited attributes from the page's ancestors onto the page.
    fn flatten_inherited(&self, doc: &mut Document, page_id: ObjectId) -> Result<()> {
        let page = doc
            .get_dictionary(page_id)
            .map_err(|e| SplitError::extraction_failed(format!("Failed to get page: {e}")))?;

        let mut missing: Vec<&[u8]> = INHERITABLE
            .iter()
            .copied()
            .filter(|key| !page.has(key))
            .collect();
        let mut inherited = Vec::new();
        let mut visited = vec![page_id];
        let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

        while let Some(node_id) = parent {
            if missing.is_empty() || visited.contains(&node_id) {
                break;
            }
            visited.push(node_id);

            let Ok(node) = doc.get_dictionary(node_id) else {
                break;
            };
            missing.retain(|key| match node.get(key) {
                Ok(value) => {
                    inherited.push((key.to_vec(), value.clone()));
                    false
                }
                Err(_) => true,
            });
            parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        }

        if !inherited.is_empty() {
            let page = doc
                .get_dictionary_mut(page_id)
                .map_err(|e| SplitError::extraction_failed(format!("Failed to get page: {e}")))?;
            for (key, value) in inherited {
                page.set(key, value);
            }
        }
        Ok(())
    }

    /// Make `page_ids` the only children of the root page node.
    fn update_page_tree(&self, doc: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let pages_id = doc
            .catalog()
            .and_then(|catalog| catalog.get(b"Pages"))
            .and_then(Object::as_reference)
            .map_err(|e| {
                SplitError::extraction_failed(format!("Failed to get pages reference: {e}"))
            })?;

        for &page_id in page_ids {
            if let Ok(page) = doc.get_dictionary_mut(page_id) {
                page.set("Parent", pages_id);
            }
        }

        let pages = doc.get_dictionary_mut(pages_id).map_err(|e| {
            SplitError::extraction_failed(format!("Failed to get pages object: {e}"))
        })?;
        let kids: Vec<Object> = page_ids.iter().copied().map(Object::Reference).collect();
        pages.set("Kids", kids);
        pages.set("Count", page_ids.len() as i64);
        pages.remove(b"Parent");

        Ok(())
    }
}
