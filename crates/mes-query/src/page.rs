//! LIMIT / OFFSET compilation.

/// Optional limit/offset pair as received from a list request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Page {
    /// A page with both bounds.
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// No limit, no offset.
    pub fn all() -> Self {
        Self::default()
    }

    /// Render as a trailing clause; see [`compile_pagination`].
    pub fn to_sql(&self) -> String {
        compile_pagination(self.limit, self.offset)
    }
}

/// Render `LIMIT n OFFSET m`, `LIMIT n`, `OFFSET m` or an empty string.
///
/// Zero counts as "not provided" for both bounds, so `LIMIT 0` cannot be
/// requested through this path. Callers that need an empty page must handle it
/// before compiling. Bounds are plain integers and are rendered as literals
/// rather than bound parameters.
pub fn compile_pagination(limit: Option<u64>, offset: Option<u64>) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(n) = limit.filter(|n| *n > 0) {
        parts.push(format!("LIMIT {n}"));
    }
    if let Some(n) = offset.filter(|n| *n > 0) {
        parts.push(format!("OFFSET {n}"));
    }
    parts.join(" ")
}
