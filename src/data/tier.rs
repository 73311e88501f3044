//! Confidence tiers derived from classifier scores.

/// Lower bound (inclusive) of the high tier.
pub const HIGH_CONFIDENCE: f64 = 0.7;
/// Lower bound (inclusive) of the medium tier.
pub const MEDIUM_CONFIDENCE: f64 = 0.4;

/// Bucket of a confidence score, used for styling and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceTier {
    Unknown,
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Classify an optional confidence score.
    pub fn from_confidence(confidence: Option<f64>) -> Self {
        match confidence {
            None => ConfidenceTier::Unknown,
            Some(c) if c >= HIGH_CONFIDENCE => ConfidenceTier::High,
            Some(c) if c >= MEDIUM_CONFIDENCE => ConfidenceTier::Medium,
            Some(_) => ConfidenceTier::Low,
        }
    }

    /// Style key for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::Unknown => "unknown",
            ConfidenceTier::Low => "low",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ConfidenceTier::from_confidence(None), ConfidenceTier::Unknown);
        assert_eq!(ConfidenceTier::from_confidence(Some(1.0)), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(Some(0.7)), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(Some(0.6999)), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(Some(0.4)), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(Some(0.3999)), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(Some(0.0)), ConfidenceTier::Low);
    }

    #[test]
    fn test_tier_sweep() {
        for i in 0..=100 {
            let c = i as f64 / 100.0;
            let tier = ConfidenceTier::from_confidence(Some(c));
            let expected = if c >= 0.7 {
                "high"
            } else if c >= 0.4 {
                "medium"
            } else {
                "low"
            };
            assert_eq!(tier.as_str(), expected, "confidence {}", c);
        }
    }
}
