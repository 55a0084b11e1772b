//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Headers, fields and warnings.
    #[default]
    Normal,
    /// Fields only (`--quiet`).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows headers and warnings.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
