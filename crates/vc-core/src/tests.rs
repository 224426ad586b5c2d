//! Unit tests for vc-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::BTreeMap;

    use crate::{EntityId, ZoneId};

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
        assert!(ZoneId::from("alpha") < ZoneId::from("beta"));
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
        assert_eq!(ZoneId::from("world_nether").to_string(), "world_nether");
    }

    #[test]
    fn zone_map_lookup_by_str() {
        let mut map = BTreeMap::new();
        map.insert(ZoneId::from("world"), 1);
        assert_eq!(map.get("world"), Some(&1));
        assert_eq!(map.get("world_the_end"), None);
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, MonotonicClock, Tick};

    #[test]
    fn seconds_and_millis_conversions() {
        assert_eq!(Tick::from_secs(10), Tick(200));
        assert_eq!(Tick::from_millis(500), Tick(10));
        assert_eq!(Tick::from_millis(549), Tick(10));
        assert_eq!(Tick(20).as_millis(), 1_000);
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(220).since(Tick(20)), 200);
        assert_eq!(Tick(5).since(Tick(9)), 0);
        assert_eq!(Tick(9) - Tick(5), 4);
    }

    #[test]
    fn add_saturates_at_the_end_of_time() {
        assert_eq!(Tick(u64::MAX) + 5, Tick(u64::MAX));
        assert_eq!(Tick::from_secs(u64::MAX), Tick(u64::MAX));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(Tick(3));
        let handle = clock.clone();
        assert_eq!(handle.advance(7), Tick(10));
        assert_eq!(clock.now(), Tick(10));
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::default();
        clock.set(Tick(50));
        clock.set(Tick(10));
        assert_eq!(clock.now(), Tick(50));
    }

    #[test]
    fn monotonic_clock_starts_near_zero() {
        let clock = MonotonicClock::new();
        let first = clock.now();
        assert!(first <= Tick::from_secs(1));
        assert!(clock.now() >= first);
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use crate::{CoreError, VacancyConfig, ZoneConfig, ZoneId};

    const SAMPLE: &str = r#"{
        "cooldown-seconds": 30,
        "worlds": {
            "world":        { "view-distance": 4, "simulation-distance": 3 },
            "world_nether": { "view-distance": 2, "simulation-distance": 2 }
        }
    }"#;

    #[test]
    fn parses_host_keys() {
        let config = VacancyConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.cooldown_secs, 30);
        assert_eq!(config.cooldown_ticks(), 600);
        assert_eq!(config.zones.len(), 2);
        assert_eq!(
            config.zone("world"),
            Some(&ZoneConfig {
                name:                  ZoneId::from("world"),
                reduced_view_distance: 4,
                reduced_sim_distance:  3,
            })
        );
    }

    #[test]
    fn optional_keys_fall_back_to_defaults() {
        let config = VacancyConfig::from_json_str("{}").unwrap();
        assert_eq!(config, VacancyConfig::default());
        assert_eq!(config.cooldown_secs, 10);
        assert_eq!(config.settle_delay_ticks, 20);
        assert_eq!(config.reload_settle_ticks, 10);
        assert_eq!(config.command_prefix, "viewdistancetweaks");
        assert!(config.zones.is_empty());
    }

    #[test]
    fn negative_distance_rejected() {
        let err = VacancyConfig::from_json_str(
            r#"{ "worlds": { "world": { "view-distance": -1, "simulation-distance": 3 } } }"#,
        )
        .unwrap_err();
        match err {
            CoreError::InvalidDistance { zone, field, value } => {
                assert_eq!(zone.as_str(), "world");
                assert_eq!(field, "view-distance");
                assert_eq!(value, -1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_distance_allowed() {
        let config = VacancyConfig::from_json_str(
            r#"{ "worlds": { "world": { "view-distance": 0, "simulation-distance": 0 } } }"#,
        )
        .unwrap();
        assert_eq!(config.zone("world").unwrap().reduced_view_distance, 0);
    }

    #[test]
    fn non_positive_cooldown_rejected() {
        for text in [r#"{ "cooldown-seconds": 0 }"#, r#"{ "cooldown-seconds": -5 }"#] {
            let err = VacancyConfig::from_json_str(text).unwrap_err();
            assert!(matches!(err, CoreError::NonPositive { field: "cooldown-seconds", .. }));
        }
    }

    #[test]
    fn oversized_cooldown_rejected() {
        let err = VacancyConfig::from_json_str(r#"{ "cooldown-seconds": 1000000000000000000 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::TooLarge { field: "cooldown-seconds", max: VacancyConfig::MAX_COOLDOWN_SECS, .. }
        ));

        let err = VacancyConfig::new(u64::MAX).validate().unwrap_err();
        assert!(matches!(err, CoreError::TooLarge { field: "cooldown-seconds", value: u64::MAX, .. }));
        assert_eq!(VacancyConfig::new(u64::MAX).cooldown_ticks(), u64::MAX);

        let longest = VacancyConfig::new(VacancyConfig::MAX_COOLDOWN_SECS);
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn oversized_delays_rejected() {
        let mut config = VacancyConfig::new(10);
        config.settle_delay_ticks = VacancyConfig::MAX_DELAY_TICKS + 1;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::TooLarge { field: "settle-delay-ticks", .. }));

        let mut config = VacancyConfig::new(10);
        config.reload_settle_ticks = u64::MAX;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CoreError::TooLarge { field: "reload-settle-ticks", .. }));
    }

    #[test]
    fn missing_distance_is_a_parse_error() {
        let err = VacancyConfig::from_json_str(r#"{ "worlds": { "world": { "view-distance": 4 } } }"#)
            .unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn validate_catches_code_built_mistakes() {
        assert!(VacancyConfig::new(0).validate().is_err());

        let mut config = VacancyConfig::default().with_zone("world", 4, 3);
        config.reload_settle_ticks = 0;
        assert!(config.validate().is_err());

        let config = VacancyConfig::default().with_zone("", 4, 3);
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        assert!(VacancyConfig::default().with_zone("world", 4, 3).validate().is_ok());
    }

    #[test]
    fn load_json_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = VacancyConfig::load_json(file.path()).unwrap();
        assert_eq!(config.zones.len(), 2);
    }

    #[test]
    fn load_json_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VacancyConfig::load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
