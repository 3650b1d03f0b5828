//! Aggregated error reporting.
//!
//! The async chains in this crate (fetch → extract → sync, uninstall
//! fan-out) report failures as diagnostics instead of propagating them:
//! the user keeps an installed panel with possibly-empty contents rather
//! than a failed subscription.  A chain collects its failures into an
//! [`ErrorReport`] and emits them through `tracing` in one place.

/// A headline message plus the individual errors collected from a
/// multi-step chain.
pub struct ErrorReport {
    message: String,
    errors: Vec<anyhow::Error>,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, error: anyhow::Error) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Emit the report through the diagnostic channel.  A report with no
    /// errors emits nothing.
    pub fn emit(&self) {
        if self.errors.is_empty() {
            return;
        }
        tracing::error!("{}", self.message);
        for error in &self.errors {
            tracing::error!("{error:#}");
        }
    }
}
