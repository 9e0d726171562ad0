//! The open-element stack used for context-sensitive dispatch.

/// Tracks the chain of currently open elements in document order.
///
/// Membership is tested anywhere in the chain, not just at the immediate
/// parent. This lets context checks like "are we inside BODY.HEAD" ignore
/// how deeply nested the current element is. If two same-named
/// disambiguating elements could legally nest the test could not tell them
/// apart; the NITF schema does not nest any of the tags used for dispatch.
#[derive(Debug, Default)]
pub struct Ancestry {
    tags: Vec<String>,
}

impl Ancestry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element start.
    pub fn push(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Record an element end. Returns `None` on underflow, which callers
    /// must surface as a fatal parse error.
    pub fn pop(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Whether the named element is open anywhere in the current chain.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The most recently opened, still-open element.
    pub fn innermost(&self) -> Option<&str> {
        self.tags.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.tags.len()
    }
}
