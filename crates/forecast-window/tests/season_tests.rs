//! Tests for seasonal color scale selection.

use forecast_window::{ColorScale, ScaleFamily, Season};
use test_utils::utc;

const FAMILIES: [ScaleFamily; 4] = [
    ScaleFamily::MaximumTemperature,
    ScaleFamily::MinimumTemperature,
    ScaleFamily::ExtremeHeat,
    ScaleFamily::FrostFreeze,
];

#[test]
fn test_month_partition() {
    for month in 4..=10 {
        assert_eq!(Season::for_month(month).unwrap(), Season::Warm, "month {}", month);
    }
    for month in [11, 12, 1, 2, 3] {
        assert_eq!(Season::for_month(month).unwrap(), Season::Cold, "month {}", month);
    }
}

#[test]
fn test_partition_is_exhaustive_and_disjoint() {
    let warm = (1..=12).filter(|&m| Season::for_month(m).unwrap() == Season::Warm).count();
    let cold = (1..=12).filter(|&m| Season::for_month(m).unwrap() == Season::Cold).count();
    assert_eq!(warm, 7);
    assert_eq!(cold, 5);
}

#[test]
fn test_at_matches_for_month() {
    for month in 1..=12 {
        for hour in [0, 23] {
            let t = utc(2025, month, 1, hour);
            assert_eq!(Season::at(t), Season::for_month(month).unwrap());
        }
    }
}

#[test]
fn test_levels_are_ascending_whole_degrees() {
    for family in FAMILIES {
        for season in [Season::Warm, Season::Cold] {
            let scale = ColorScale::seasonal(family, season);
            assert!(!scale.levels.is_empty());
            for pair in scale.levels.windows(2) {
                assert_eq!(pair[1] - pair[0], 1.0);
            }
            assert_eq!(scale.season, Some(season));
            assert_eq!(scale.units, "°F");
        }
    }
}

#[test]
fn test_warm_season_max_temp_is_warmer() {
    let warm = ColorScale::seasonal(ScaleFamily::MaximumTemperature, Season::Warm);
    let cold = ColorScale::seasonal(ScaleFamily::MaximumTemperature, Season::Cold);
    assert!(warm.threshold().unwrap() > cold.threshold().unwrap());
    assert!(warm.levels.last().unwrap() > cold.levels.last().unwrap());
}
