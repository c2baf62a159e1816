//! Tests for timing normalization and conflict detection

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use agenda::schedule::{EventTiming, Slot, StartMoment, TimedEntry, has_conflict};

    fn entry(id: &str, timing: EventTiming) -> TimedEntry {
        TimedEntry {
            id: id.to_string(),
            slot: timing.normalize(),
        }
    }

    fn fields(date: &str, time: &str) -> EventTiming {
        EventTiming::Fields {
            date: date.to_string(),
            time: time.to_string(),
        }
    }

    /// An occupied slot conflicts for a new event; a different time does not
    #[test]
    fn it_detects_exact_slot_collisions() {
        let entries = vec![entry("a", fields("2024-06-01", "09:00"))];

        assert!(has_conflict(
            None,
            &Slot::new("2024-06-01", "09:00"),
            &entries
        ));
        assert!(!has_conflict(
            None,
            &Slot::new("2024-06-01", "09:30"),
            &entries
        ));
        assert!(!has_conflict(
            None,
            &Slot::new("2024-06-02", "09:00"),
            &entries
        ));
    }

    /// An event never conflicts with itself during edit or move,
    /// whichever shape its timing arrives in
    #[test]
    fn it_excludes_the_candidate_event_itself() {
        let shapes = [
            fields("2024-06-01", "09:00"),
            EventTiming::Combined("2024-06-01T09:00:00".to_string()),
            EventTiming::Start(StartMoment::Text("2024-06-01T09:00:00".to_string())),
            EventTiming::Start(StartMoment::Instant(
                "2024-06-01T09:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            )),
        ];

        for shape in shapes {
            let entries = vec![entry("a", shape)];
            let target = Slot::new("2024-06-01", "09:00");

            assert!(!has_conflict(Some("a"), &target, &entries));
            // Another event in the same slot still conflicts
            assert!(has_conflict(Some("b"), &target, &entries));
        }
    }

    /// Two distinct events in the same slot conflict even when the
    /// candidate is one of them
    #[test]
    fn it_flags_the_other_occupant_of_a_shared_slot() {
        let entries = vec![
            entry("a", fields("2024-06-01", "09:00")),
            entry("b", fields("2024-06-01", "09:00")),
        ];

        let target = Slot::new("2024-06-01", "09:00");
        assert!(has_conflict(Some("a"), &target, &entries));
        assert!(has_conflict(Some("b"), &target, &entries));
    }

    /// A combined timestamp splits into a date and an hour:minute time
    #[test]
    fn it_normalizes_combined_timestamps() {
        let slot = EventTiming::Combined("2024-06-01T09:00:00".to_string())
            .normalize()
            .unwrap();

        assert_eq!(slot, Slot::new("2024-06-01", "09:00"));
    }

    /// A combined string with no time separator is all date
    #[test]
    fn it_normalizes_date_only_strings() {
        let slot = EventTiming::Combined("2024-06-01".to_string())
            .normalize()
            .unwrap();

        assert_eq!(slot.date, "2024-06-01");
        assert_eq!(slot.time, "");
    }

    /// A structured instant yields the same canonical pair as its text form
    #[test]
    fn it_normalizes_structured_instants() {
        let instant = "2024-06-01T09:00:42Z".parse::<DateTime<Utc>>().unwrap();
        let slot = EventTiming::Start(StartMoment::Instant(instant))
            .normalize()
            .unwrap();

        assert_eq!(slot, Slot::new("2024-06-01", "09:00"));
    }

    /// Seconds are discarded from textual start moments
    #[test]
    fn it_truncates_seconds_from_text_moments() {
        let slot = EventTiming::Start(StartMoment::Text("2024-06-01T09:00:30".to_string()))
            .normalize()
            .unwrap();

        assert_eq!(slot.time, "09:00");
    }

    /// An event with no usable timing can never conflict
    #[test]
    fn it_treats_missing_timing_as_non_blocking() {
        assert!(EventTiming::Unknown.normalize().is_none());

        let entries = vec![entry("a", EventTiming::Unknown)];
        assert!(!has_conflict(
            None,
            &Slot::new("2024-06-01", "09:00"),
            &entries
        ));
    }

    /// The combined timestamp wins over every other representation
    #[test]
    fn it_prioritizes_combined_timestamps() {
        let timing = EventTiming::from_parts(
            Some("2024-06-01T09:00:00"),
            Some("2099-01-01"),
            Some("23:59"),
            Some(StartMoment::Text("2098-01-01T00:00:00".to_string())),
        );

        assert_eq!(
            timing.normalize().unwrap(),
            Slot::new("2024-06-01", "09:00")
        );
    }

    /// The field pair is used only when both halves are present
    #[test]
    fn it_falls_back_through_the_priority_order() {
        let timing = EventTiming::from_parts(None, Some("2024-06-01"), Some("09:00"), None);
        assert_eq!(
            timing.normalize().unwrap(),
            Slot::new("2024-06-01", "09:00")
        );

        // A lone date is not enough; the start moment takes over
        let timing = EventTiming::from_parts(
            None,
            Some("2024-06-01"),
            None,
            Some(StartMoment::Text("2024-06-02T10:00:00".to_string())),
        );
        assert_eq!(
            timing.normalize().unwrap(),
            Slot::new("2024-06-02", "10:00")
        );

        // Nothing usable at all
        let timing = EventTiming::from_parts(None, None, None, None);
        assert!(timing.normalize().is_none());
    }

    /// The check is a pure function; identical inputs yield identical results
    #[test]
    fn it_is_idempotent_over_identical_inputs() {
        let entries = vec![
            entry("a", fields("2024-06-01", "09:00")),
            entry("b", EventTiming::Combined("2024-06-02T10:00:00".to_string())),
        ];
        let target = Slot::new("2024-06-02", "10:00");

        let first = has_conflict(Some("a"), &target, &entries);
        let second = has_conflict(Some("a"), &target, &entries);

        assert!(first);
        assert_eq!(first, second);
    }
}
