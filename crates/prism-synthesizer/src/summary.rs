//! Batch summary

/// Aggregate view of a batch of validation results
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of results
    pub total: usize,

    /// Results with a proved verdict
    pub proved: usize,

    /// Results with a disproved verdict
    pub disproved: usize,

    /// Results that could not be decided; display with caution
    pub unprovable: usize,

    /// Same as `proved`
    pub valid: usize,

    /// Same as `disproved`
    pub invalid: usize,

    /// Distinct contradictions across the batch
    pub contradiction_count: usize,

    /// Distinct contradictions rated critical
    pub critical_contradictions: usize,

    /// Mean result confidence after the contradiction penalty
    pub overall_confidence: f64,

    /// One-paragraph description of the above
    pub narrative: String,
}

impl Summary {
    /// Whether any contradiction was found
    pub fn has_contradictions(&self) -> bool {
        self.contradiction_count > 0
    }
}
