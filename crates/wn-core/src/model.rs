//! Detection model selector shared across all detection-related crates.

/// Names one of the two simulated detection models.
///
/// The models share a single scoring algorithm and differ only in their
/// parameter profiles; `ModelKind` selects which profile drives navigation
/// and keys each model's independent RNG stream.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelKind {
    /// Conventional detector with strict thresholds.
    #[default]
    Baseline,
    /// Quantum-inspired approximation with more forgiving thresholds and a
    /// reported-time discount.
    Qina,
}

impl ModelKind {
    /// Both kinds, in display order.
    pub const ALL: [ModelKind; 2] = [ModelKind::Baseline, ModelKind::Qina];

    /// Human-readable label, useful for table/report column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelKind::Baseline => "baseline",
            ModelKind::Qina     => "qina",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
