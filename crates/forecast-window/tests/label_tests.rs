//! Tests that panel labels reproduce the period times they were built from.

use chrono::Duration;
use forecast_window::{PanelLabel, RenderPlan};
use ndfd_common::{ElementKind, ForecastKind, ForecastPeriod, ForecastPeriodSet, MapExtent, NdfdError};
use test_utils::{forecast_period, lat_lon_grids, period_set, temperature_grid, utc};

#[test]
fn test_labels_round_trip_period_times() {
    for element in [ElementKind::MaxTemp, ElementKind::MinTemp] {
        for kind in [ForecastKind::ShortTerm, ForecastKind::Extended] {
            for count in 1..=5 {
                let set = period_set(count, element, utc(2024, 12, 29, 0));
                for hour in [0, 12, 23] {
                    let plan = RenderPlan::build(&set, hour, kind, element, true).unwrap();
                    for panel in &plan.panels {
                        let text = panel.label.to_string();
                        let parsed: PanelLabel = text.parse().unwrap();
                        let period = set.get(panel.source.period()).unwrap();

                        assert_eq!(parsed.start, period.start, "{}", text);
                        assert_eq!(parsed.end, period.end, "{}", text);
                        assert_eq!(parsed, panel.label);
                    }
                }
            }
        }
    }
}

#[test]
fn test_label_across_year_boundary() {
    let set = period_set(2, ElementKind::MaxTemp, utc(2024, 12, 31, 0));
    let plan = RenderPlan::build(&set, 6, ForecastKind::ShortTerm, ElementKind::MaxTemp, false).unwrap();

    assert_eq!(
        plan.panels[1].label.to_string(),
        "Day 2 Forecast\nStart: 01/01/2025 12Z\nEnd: 01/02/2025 00Z"
    );
}

#[test]
fn test_partial_hour_periods_cannot_be_labelled() {
    let start = utc(2024, 7, 1, 12) + Duration::minutes(30);
    let (lats, lons) = lat_lon_grids(6, 4, &MapExtent::new(-125.0, -65.0, 24.0, 50.0));

    let result = ForecastPeriod::new(
        temperature_grid(6, 4, 70.0),
        lats,
        lons,
        start,
        start + Duration::hours(12),
    );

    // A label could only reproduce 12Z, so the period never reaches a plan
    assert!(matches!(result, Err(NdfdError::InvalidPeriod(_))));
}

#[test]
fn test_hour_aligned_period_round_trips() {
    let period = forecast_period(utc(2024, 5, 4, 12), 12, 70.0);
    let set = ForecastPeriodSet::new(vec![period.clone()]).unwrap();
    let plan = RenderPlan::build(&set, 6, ForecastKind::ShortTerm, ElementKind::MaxTemp, false).unwrap();

    let parsed: PanelLabel = plan.panels[0].label.to_string().parse().unwrap();
    assert_eq!(parsed.start, period.start);
    assert_eq!(parsed.end, period.end);
}
