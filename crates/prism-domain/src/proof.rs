//! Proof steps

/// What a proof step applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// A premise evaluated against evidence
    Premise,
    /// The rule applied to the evaluated premises
    Inference,
}

/// One line of a proof chain
///
/// Step numbers within a chain are contiguous starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofStep {
    /// 1-based position in the chain
    pub step: usize,

    /// Premise or inference
    pub kind: StepKind,

    /// The proposition statement or rule id being applied
    pub subject: String,

    /// Why this step holds
    pub justification: String,
}

impl ProofStep {
    /// Create a step
    pub fn new(
        step: usize,
        kind: StepKind,
        subject: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            step,
            kind,
            subject: subject.into(),
            justification: justification.into(),
        }
    }
}

/// Check that step numbers run 1, 2, 3, ...
pub fn is_contiguous(chain: &[ProofStep]) -> bool {
    chain.iter().enumerate().all(|(i, s)| s.step == i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contiguity() {
        let good = vec![
            ProofStep::new(1, StepKind::Premise, "a", "true"),
            ProofStep::new(2, StepKind::Inference, "R1", "therefore b"),
        ];
        assert!(is_contiguous(&good));

        let gap = vec![
            ProofStep::new(1, StepKind::Premise, "a", "true"),
            ProofStep::new(3, StepKind::Inference, "R1", "therefore b"),
        ];
        assert!(!is_contiguous(&gap));
        assert!(is_contiguous(&[]));
    }
}
