//! Threshold-based alert classification for reported densities.
//!
//! Alerts are derived at report time and never persisted: the event log
//! stores raw densities only, and the classification is recomputed for
//! each report response.

/// Density above which a location is considered critically overcrowded.
const CRITICAL_THRESHOLD: f64 = 90.0;

/// Density above which a location is considered to be nearing its limit.
const WARNING_THRESHOLD: f64 = 70.0;

/// Severity of a density alert.
///
/// Both boundaries are strictly greater-than: a density of exactly 90
/// classifies as [`Warning`](Self::Warning), and exactly 70 as no alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Density above 70 and at most 90.
    Warning,
    /// Density above 90.
    Critical,
}

impl AlertLevel {
    /// Classify a reported density against the alert thresholds.
    ///
    /// Returns `None` for densities at or below the warning threshold.
    /// Out-of-range values are not special-cased: a density of 150 is
    /// critical, a negative density is no alert.
    pub fn classify(density: f64) -> Option<Self> {
        if density > CRITICAL_THRESHOLD {
            Some(Self::Critical)
        } else if density > WARNING_THRESHOLD {
            Some(Self::Warning)
        } else {
            None
        }
    }

    /// Render the alert message referencing the affected location.
    pub fn message(self, location: &str) -> String {
        match self {
            Self::Critical => format!("🚨 Critical: {location} overcrowded!"),
            Self::Warning => format!("⚠️ Warning: {location} nearing limit."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_above_critical_threshold_is_critical() {
        assert_eq!(AlertLevel::classify(95.0), Some(AlertLevel::Critical));
    }

    #[test]
    fn density_in_warning_band_is_warning() {
        assert_eq!(AlertLevel::classify(80.0), Some(AlertLevel::Warning));
    }

    #[test]
    fn density_at_or_below_warning_threshold_is_none() {
        assert_eq!(AlertLevel::classify(50.0), None);
        assert_eq!(AlertLevel::classify(70.0), None);
        assert_eq!(AlertLevel::classify(0.0), None);
    }

    #[test]
    fn critical_boundary_is_strictly_greater_than() {
        // Exactly 90 stays in the warning band; anything above it is critical.
        assert_eq!(AlertLevel::classify(90.0), Some(AlertLevel::Warning));
        assert_eq!(AlertLevel::classify(90.0001), Some(AlertLevel::Critical));
    }

    #[test]
    fn warning_boundary_is_strictly_greater_than() {
        assert_eq!(AlertLevel::classify(70.0), None);
        assert_eq!(AlertLevel::classify(70.0001), Some(AlertLevel::Warning));
    }

    #[test]
    fn out_of_range_densities_use_the_same_thresholds() {
        assert_eq!(AlertLevel::classify(150.0), Some(AlertLevel::Critical));
        assert_eq!(AlertLevel::classify(-5.0), None);
    }

    #[test]
    fn messages_reference_the_location() {
        let critical = AlertLevel::Critical.message("north-gate");
        assert!(critical.contains("Critical"));
        assert!(critical.contains("north-gate"));

        let warning = AlertLevel::Warning.message("plaza");
        assert!(warning.contains("Warning"));
        assert!(warning.contains("plaza"));
    }
}
