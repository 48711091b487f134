//! Source extraction
//!
//! Derives a source label for a log call from its message text or, failing
//! that, from a pluggable call-site strategy. Extraction is best-effort and
//! infallible: no path through here panics or errors.

/// Extract a bracket-delimited source from the start of a message.
///
/// `"[Net] timeout"` yields `Some("Net")`. The message itself is left
/// intact by callers; the bracket prefix stays part of the visible text.
/// Labels are case-sensitive and taken verbatim (no trimming).
pub fn extract_source(message: &str) -> Option<&str> {
    let rest = message.strip_prefix('[')?;
    let end = rest.find(']')?;
    let token = &rest[..end];
    if token.is_empty() {
        return None;
    }
    Some(token)
}

/// Strategy for inferring a source from the call site when no bracket
/// prefix exists.
///
/// Stack-based inference is inherently environment-specific, so it lives
/// behind this trait: implementations must be best-effort and must never
/// panic. Failures yield `None` silently.
pub trait CallSiteStrategy: Send + Sync {
    fn detect(&self) -> Option<String>;
}

/// Default strategy: call-site detection disabled
pub struct NoCallSite;

impl CallSiteStrategy for NoCallSite {
    fn detect(&self) -> Option<String> {
        None
    }
}

/// Strategy returning a fixed label, for tests and embedding hosts that
/// already know their component name
pub struct StaticCallSite {
    label: String,
}

impl StaticCallSite {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl CallSiteStrategy for StaticCallSite {
    fn detect(&self) -> Option<String> {
        Some(self.label.clone())
    }
}

/// Prepend a detected source to a message, producing the formatted text
/// used for storage and emission.
///
/// Only used for call-site-detected sources; bracket-prefixed messages
/// already carry their label.
pub fn prefix_source(source: &str, message: &str) -> String {
    format!("[{}] {}", source, message)
}
