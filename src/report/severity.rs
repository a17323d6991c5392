use colored::Color;

use super::types::RiskLevel;

/// Visual tier derived from a risk level. Drives border and background color.
///
/// Ordered from least to most severe; `Neutral` sorts below `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityTier {
    /// Fallback for labels outside the known set.
    Neutral,
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityTier {
    /// Total over every input: unknown labels land in `Neutral`.
    pub fn classify(level: &RiskLevel) -> Self {
        match level {
            RiskLevel::Critical => SeverityTier::Critical,
            RiskLevel::High => SeverityTier::High,
            RiskLevel::Medium => SeverityTier::Medium,
            RiskLevel::Low => SeverityTier::Low,
            RiskLevel::Unrecognized(_) => SeverityTier::Neutral,
        }
    }

    pub fn border(&self) -> Color {
        match self {
            SeverityTier::Critical => Color::Red,
            SeverityTier::High => Color::TrueColor { r: 249, g: 115, b: 22 },
            SeverityTier::Medium => Color::Yellow,
            SeverityTier::Low => Color::Green,
            SeverityTier::Neutral => Color::BrightBlack,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            SeverityTier::Critical => Color::TrueColor { r: 254, g: 242, b: 242 },
            SeverityTier::High => Color::TrueColor { r: 255, g: 247, b: 237 },
            SeverityTier::Medium => Color::TrueColor { r: 254, g: 252, b: 232 },
            SeverityTier::Low => Color::TrueColor { r: 240, g: 253, b: 244 },
            SeverityTier::Neutral => Color::White,
        }
    }

    /// Marker used where color is unavailable (markdown output).
    pub fn marker(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "🔴",
            SeverityTier::High => "🟠",
            SeverityTier::Medium => "🟡",
            SeverityTier::Low => "🟢",
            SeverityTier::Neutral => "⚪",
        }
    }
}

/// The page-level warning banner is shown only for high and critical reports.
pub fn shows_alert_banner(level: &RiskLevel) -> bool {
    SeverityTier::classify(level) >= SeverityTier::High
}

/// Factors at high or critical severity start expanded.
pub fn expanded_by_default(severity: &RiskLevel) -> bool {
    shows_alert_banner(severity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_label(label: &str) -> SeverityTier {
        SeverityTier::classify(&RiskLevel::from(label))
    }

    #[test]
    fn test_known_levels_map_to_distinct_tiers() {
        let tiers = [
            classify_label("critical"),
            classify_label("high"),
            classify_label("medium"),
            classify_label("low"),
        ];
        assert_eq!(
            tiers,
            [SeverityTier::Critical, SeverityTier::High, SeverityTier::Medium, SeverityTier::Low]
        );
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.border(), b.border());
                assert_ne!(a.background(), b.background());
            }
        }
    }

    #[test]
    fn test_unknown_labels_fall_back_to_neutral() {
        for label in ["", "Critical", "HIGH", "severe", "none", "unknown", " low"] {
            assert_eq!(classify_label(label), SeverityTier::Neutral, "{label:?}");
        }
        assert_eq!(SeverityTier::Neutral.border(), Color::BrightBlack);
    }

    #[test]
    fn test_tiers_ordered_by_severity() {
        let mut tiers = vec![
            classify_label("medium"),
            classify_label("critical"),
            classify_label("bogus"),
            classify_label("low"),
            classify_label("high"),
        ];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![
                SeverityTier::Neutral,
                SeverityTier::Low,
                SeverityTier::Medium,
                SeverityTier::High,
                SeverityTier::Critical,
            ]
        );
        assert!(SeverityTier::Critical > SeverityTier::High);
    }

    #[test]
    fn test_alert_banner_only_for_high_and_critical() {
        assert!(shows_alert_banner(&RiskLevel::Critical));
        assert!(shows_alert_banner(&RiskLevel::High));
        assert!(!shows_alert_banner(&RiskLevel::Medium));
        assert!(!shows_alert_banner(&RiskLevel::Low));
        assert!(!shows_alert_banner(&RiskLevel::from("extreme")));
    }

    #[test]
    fn test_default_expansion_follows_severity() {
        assert!(expanded_by_default(&RiskLevel::Critical));
        assert!(expanded_by_default(&RiskLevel::High));
        assert!(!expanded_by_default(&RiskLevel::Medium));
        assert!(!expanded_by_default(&RiskLevel::Low));
        assert!(!expanded_by_default(&RiskLevel::from("bogus")));
    }
}
