//! Summation context configuration

/// How operands that are not numbers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Non-numeric text becomes NaN, which then propagates through the sum.
    #[default]
    Lenient,
    /// Non-numeric text is an error.
    Strict,
}

/// What happens when integer addition leaves the i64 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Redo the addition in f64.
    #[default]
    Widen,
    /// Fail with [`crate::AddError::IntegerOverflow`].
    Error,
}

/// Configuration for a summation.
///
/// This is passed to [`crate::sum`] and controls coercion, overflow
/// handling, and tracing of each accumulation step.
#[derive(Debug, Clone, Default)]
pub struct SumContext {
    /// Treatment of non-numeric operands
    pub coercion: Coercion,

    /// Treatment of integer overflow
    pub overflow: Overflow,

    /// Whether to emit a trace event per accumulation step
    pub trace: bool,
}

impl SumContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that rejects non-numeric operands and overflow.
    pub fn strict() -> Self {
        Self {
            coercion: Coercion::Strict,
            overflow: Overflow::Error,
            ..Default::default()
        }
    }

    /// Set the coercion mode.
    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = coercion;
        self
    }

    /// Set the overflow mode.
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Enable or disable per-step tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Check if non-numeric operands are rejected.
    pub fn is_strict(&self) -> bool {
        self.coercion == Coercion::Strict
    }
}
