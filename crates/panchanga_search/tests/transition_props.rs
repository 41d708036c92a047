//! Transition-list invariants over random instants and observers.

use panchanga_ephem::{AnalyticEphemeris, AyanamsaModel, GeoLocation, RiseSetConfig};
use panchanga_search::{
    ElementKind, LocatorConfig, SegmentStatus, transitions_in, vedic_day_containing,
};
use panchanga_time::CivilOffset;
use proptest::prelude::*;

// 2000-01-01 .. 2040-01-01
const JD_MIN: f64 = 2_451_544.5;
const JD_MAX: f64 = 2_466_154.5;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn lists_cover_the_vedic_day(
        jd in JD_MIN..JD_MAX,
        lat in -60.0f64..60.0,
        lon in -180.0f64..180.0,
    ) {
        let gw = AnalyticEphemeris::new();
        let loc = GeoLocation::new(lat, lon, 0.0);
        let offset = CivilOffset::from_longitude(lon);
        let day = vedic_day_containing(&gw, &loc, jd, offset, &RiseSetConfig::default()).unwrap();
        prop_assert!(!day.polar);
        prop_assert!(day.window.contains(jd));

        for kind in ElementKind::ALL {
            let list = transitions_in(&gw, kind, day.window, AyanamsaModel::Lahiri, &LocatorConfig::default())
                .unwrap();
            prop_assert!(!list.is_empty());
            prop_assert!(list.len() <= 5, "{kind:?}: {}", list.len());
            prop_assert_eq!(list[0].start_jd, day.window.start_jd);
            prop_assert_eq!(list[list.len() - 1].end_jd, day.window.end_jd);
            prop_assert_eq!(list[0].status, SegmentStatus::Primary);
            for pair in list.windows(2) {
                prop_assert_eq!(pair[0].end_jd, pair[1].start_jd);
                prop_assert!(pair[0].start_jd < pair[0].end_jd);
                prop_assert_eq!((pair[0].index + 1) % kind.count(), pair[1].index);
            }
        }
    }
}
