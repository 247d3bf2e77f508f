//! Unit tests for the export/import boundary.

use chrono::NaiveDate;

use itin_plan::{Activity, ActivityKind, Itinerary, generate_days};

use crate::{export_file_name, from_json, read_file, to_json, write_file};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// An itinerary exercising every serializable field.
fn full_itinerary() -> Itinerary {
    let start = date(2024, 5, 10);
    let end = date(2024, 5, 12);

    let mut it = Itinerary::new("Tokyo Adventure", "Tokyo");
    it.start_date = Some(start);
    it.end_date = Some(end);
    it.travelers = 2;
    it.budget = 3_000.0;
    it.days = generate_days(start, end, &[]);

    let mut act = Activity::new(ActivityKind::Attraction, "Senso-ji Temple");
    act.time = Some("09:00".parse().unwrap());
    act.duration_min = Some(90);
    act.start_time = Some("09:00".parse().unwrap());
    act.end_time = Some("10:30".parse().unwrap());
    act.location = "Asakusa".to_owned();
    act.cost = Some(0.0);
    act.notes = "arrive before the crowds".to_owned();
    act.tags = ["historical", "outdoor"].iter().map(|s| s.to_string()).collect();
    it.days[0].activities.push(act);

    it.days[1].transportation = Some(
        [("mode", "train"), ("line", "JR Yamanote")]
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .into(),
    );
    it.days[1].accommodation = Some(
        [("name", "Park Hotel"), ("check_in", "15:00")]
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .into(),
    );
    it.days[2].notes = "departure day".to_owned();
    it
}

// ── JSON round trip ───────────────────────────────────────────────────────────

#[cfg(test)]
mod round_trip {
    use super::*;

    #[test]
    fn full_record_survives() {
        let original = full_itinerary();
        let json = to_json(&original).unwrap();
        let restored = from_json(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn blank_record_survives() {
        let original = Itinerary::default();
        let restored = from_json(&to_json(&original).unwrap()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn sparse_json_loads_with_defaults() {
        let it = from_json(r#"{ "title": "T", "destination": "D" }"#).unwrap();
        assert_eq!(it.travelers, 1);
        assert!(it.days.is_empty());
        assert!(it.start_date.is_none());
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        assert!(from_json("{ not json").is_err());
        assert!(from_json(r#"{ "title": 7 }"#).is_err());
    }

    #[test]
    fn times_appear_as_hh_mm_strings() {
        let json = to_json(&full_itinerary()).unwrap();
        assert!(json.contains("\"09:00\""));
        assert!(json.contains("\"2024-05-10\""));
    }
}

// ── File naming ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod file_name {
    use super::export_file_name;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(
            export_file_name("Tokyo Adventure"),
            "Tokyo_Adventure_itinerary.json"
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(export_file_name("My  Big\tTrip"), "My_Big_Trip_itinerary.json");
    }

    #[test]
    fn single_word_title() {
        assert_eq!(export_file_name("Kyoto"), "Kyoto_itinerary.json");
    }
}

// ── File I/O ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod file_io {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let original = full_itinerary();
        let path = dir.path().join(export_file_name(&original.title));

        write_file(&original, &path).unwrap();
        let restored = read_file(&path).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::ExportError::Io(_)));
    }
}
