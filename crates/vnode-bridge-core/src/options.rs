//! Configuration options for node conversion

/// How falsy primitive leaves (`false`, `0`, `NaN`, `""`) are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FalsyLeaves {
    /// Emit the leaf unchanged; only the absent value renders nothing
    #[default]
    Keep,
    /// Treat every falsy leaf as the absent value
    Suppress,
}

/// Options for node conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Falsy leaf handling
    pub falsy_leaves: FalsyLeaves,

    /// Maximum nesting depth accepted before conversion fails.
    /// `None` means unlimited; conversion then recurses once per level, so
    /// callers converting untrusted trees should set a limit.
    pub max_depth: Option<usize>,
}
