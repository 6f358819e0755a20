use crate::error::GateError;
use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};

/// Availability gating checked once at bootstrap, before any terminal or
/// session state is set up. Operation is refused during a nightly blackout
/// window and after a fixed expiry date, both in a fixed local zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityGate {
    pub blackout_start_hour: u32,
    pub blackout_end_hour: u32,
    pub expires_on: NaiveDate,
    pub utc_offset_hours: i32,
}

impl Default for AvailabilityGate {
    fn default() -> Self {
        Self {
            blackout_start_hour: 0,
            blackout_end_hour: 6,
            expires_on: NaiveDate::from_ymd_opt(2025, 10, 31).unwrap(),
            utc_offset_hours: 9,
        }
    }
}

impl AvailabilityGate {
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap()
    }

    pub fn local_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset())
    }

    /// The expiry date itself is still usable; only later dates are refused.
    pub fn check(&self, now: DateTime<FixedOffset>) -> Result<(), GateError> {
        let hour = now.hour();
        if hour >= self.blackout_start_hour && hour < self.blackout_end_hour {
            return Err(GateError::Blackout {
                start: self.blackout_start_hour,
                end: self.blackout_end_hour,
            });
        }
        if now.date_naive() > self.expires_on {
            return Err(GateError::Expired(self.expires_on));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_daytime_before_expiry_is_open() {
        let gate = AvailabilityGate::default();
        assert!(gate.check(at(2025, 9, 14, 12)).is_ok());
    }

    #[test]
    fn test_blackout_window_refused() {
        let gate = AvailabilityGate::default();
        assert_eq!(
            gate.check(at(2025, 9, 14, 0)),
            Err(GateError::Blackout { start: 0, end: 6 })
        );
        assert_eq!(
            gate.check(at(2025, 9, 14, 5)),
            Err(GateError::Blackout { start: 0, end: 6 })
        );
    }

    #[test]
    fn test_blackout_boundary_is_exclusive() {
        let gate = AvailabilityGate::default();
        assert!(gate.check(at(2025, 9, 14, 6)).is_ok());
    }

    #[test]
    fn test_expiry_date_itself_is_usable() {
        let gate = AvailabilityGate::default();
        assert!(gate.check(at(2025, 10, 31, 12)).is_ok());
    }

    #[test]
    fn test_past_expiry_refused() {
        let gate = AvailabilityGate::default();
        assert_eq!(
            gate.check(at(2025, 11, 1, 12)),
            Err(GateError::Expired(
                NaiveDate::from_ymd_opt(2025, 10, 31).unwrap()
            ))
        );
    }

    #[test]
    fn test_blackout_checked_before_expiry() {
        let gate = AvailabilityGate::default();
        assert!(matches!(
            gate.check(at(2026, 1, 1, 3)),
            Err(GateError::Blackout { .. })
        ));
    }
}
