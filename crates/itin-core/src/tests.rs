//! Unit tests for itin-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, DayId};

    #[test]
    fn fresh_ids_are_distinct() {
        let a = DayId::fresh();
        let b = DayId::fresh();
        let c = ActivityId::fresh();
        assert_ne!(a, b);
        assert_ne!(a.0, c.0); // shared counter: never collides across types
    }

    #[test]
    fn display() {
        assert_eq!(DayId(7).to_string(), "DayId(7)");
        assert_eq!(ActivityId(9).to_string(), "ActivityId(9)");
    }

    #[test]
    fn serializes_transparent() {
        assert_eq!(serde_json::to_string(&DayId(42)).unwrap(), "42");
        assert_eq!(serde_json::from_str::<DayId>("42").unwrap(), DayId(42));
    }
}

#[cfg(test)]
mod time {
    use crate::TimeOfDay;

    #[test]
    fn parse_hh_mm() {
        let t: TimeOfDay = "09:05".parse().unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.minutes_from_midnight(), 545);
    }

    #[test]
    fn parse_ignores_seconds() {
        let t: TimeOfDay = "14:30:59".parse().unwrap();
        assert_eq!(t, TimeOfDay::new(14, 30).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<TimeOfDay>().is_err());
        assert!("9".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("12:30:xx".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(TimeOfDay::new(9, 5).unwrap().to_string(), "09:05");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn ordering_is_chronological() {
        let early: TimeOfDay = "09:00".parse().unwrap();
        let late: TimeOfDay = "10:30".parse().unwrap();
        assert!(early < late);
        // chronological order == lexicographic order of the HH:MM rendering
        assert!(early.to_string() < late.to_string());
    }

    #[test]
    fn subtraction_is_signed() {
        let a: TimeOfDay = "10:00".parse().unwrap();
        let b: TimeOfDay = "09:15".parse().unwrap();
        assert_eq!(a - b, 45);
        assert_eq!(b - a, -45); // wraparound is the caller's problem
    }

    #[test]
    fn twelve_hour_rendering() {
        assert_eq!(TimeOfDay::MIDNIGHT.to_12h(), "12:00 AM");
        assert_eq!(TimeOfDay::new(9, 0).unwrap().to_12h(), "9:00 AM");
        assert_eq!(TimeOfDay::new(12, 30).unwrap().to_12h(), "12:30 PM");
        assert_eq!(TimeOfDay::new(23, 59).unwrap().to_12h(), "11:59 PM");
    }

    #[test]
    fn serde_round_trips_as_hh_mm() {
        let t: TimeOfDay = "07:45".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"07:45\"");
        assert_eq!(serde_json::from_str::<TimeOfDay>(&json).unwrap(), t);
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }

    #[test]
    fn from_minutes_bounds() {
        assert_eq!(TimeOfDay::from_minutes(0), Some(TimeOfDay::MIDNIGHT));
        assert!(TimeOfDay::from_minutes(1439).is_some());
        assert!(TimeOfDay::from_minutes(1440).is_none());
    }
}

#[cfg(test)]
mod fmt {
    use crate::fmt::{format_currency, format_date, format_duration, format_time};

    #[test]
    fn date_formatting() {
        assert_eq!(format_date("2024-05-10"), "May 10, 2024");
        assert_eq!(format_date(" 2024-12-01 "), "Dec 01, 2024");
    }

    #[test]
    fn date_fails_soft_to_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("not-a-date"), "");
        assert_eq!(format_date("2024-13-40"), "");
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time("09:00"), "9:00 AM");
        assert_eq!(format_time("15:45"), "3:45 PM");
    }

    #[test]
    fn time_fails_soft_to_input() {
        assert_eq!(format_time(""), "");
        assert_eq!(format_time("noonish"), "noonish");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0 min");
        assert_eq!(format_duration(45), "45 min");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(150), "2h 30m");
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(25.0), "$25.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(9.999), "$10.00");
        assert_eq!(format_currency(0.004), "$0.00");
    }
}

#[cfg(test)]
mod transport {
    use crate::TransportMode;

    #[test]
    fn estimates_scale_the_baseline() {
        assert_eq!(TransportMode::Walking.estimate_travel_min(), 60);
        assert_eq!(TransportMode::Bike.estimate_travel_min(), 45);
        assert_eq!(TransportMode::Metro.estimate_travel_min(), 21);
        assert_eq!(TransportMode::Train.estimate_travel_min(), 9);
        assert_eq!(TransportMode::Flight.estimate_travel_min(), 3);
    }

    #[test]
    fn default_is_walking() {
        assert_eq!(TransportMode::default(), TransportMode::Walking);
    }

    #[test]
    fn wire_labels() {
        assert_eq!(TransportMode::Taxi.to_string(), "taxi");
        assert_eq!(
            serde_json::to_string(&TransportMode::Flight).unwrap(),
            "\"flight\""
        );
    }
}
