//! Locating the `{% schema %}` block inside a Liquid template

/// Opening delimiter of a section schema
pub const OPEN_TAG: &str = "{% schema %}";

/// Closing delimiter of a section schema
pub const CLOSE_TAG: &str = "{% endschema %}";

/// A configuration block found in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaBlock<'a> {
    /// Text between the delimiters, untrimmed
    pub inner: &'a str,
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset just past the closing delimiter
    pub end: usize,
}

impl<'a> SchemaBlock<'a> {
    /// Inner text with surrounding whitespace removed
    pub fn json_text(&self) -> &'a str {
        self.inner.trim()
    }

    /// 1-based line in the template where the opening delimiter sits
    pub fn line_in(&self, content: &str) -> usize {
        content[..self.start].matches('\n').count() + 1
    }
}

/// Find the first schema block in `content`.
///
/// Returns the shortest span starting at the first opening delimiter and
/// ending at the next closing delimiter. The inner text may span lines.
pub fn find_schema_block(content: &str) -> Option<SchemaBlock<'_>> {
    let start = content.find(OPEN_TAG)?;
    let inner_start = start + OPEN_TAG.len();
    let inner_len = content[inner_start..].find(CLOSE_TAG)?;
    let inner_end = inner_start + inner_len;

    Some(SchemaBlock {
        inner: &content[inner_start..inner_end],
        start,
        end: inner_end + CLOSE_TAG.len(),
    })
}
