//! The forecast window rule table.
//!
//! Each row maps (forecast range, element, period count, UTC hour range) to
//! the periods that are displayed and the day/night number of the first
//! panel. The hour cutoffs follow NDFD issuance times: once a short-term
//! period has mostly elapsed it is dropped and the remaining panels are
//! renumbered from 1. Extended ranges always drop their first period, which
//! overlaps the short-term range.
//!
//! A period count of 5 stands for "5 or more".

use std::ops::Range;

use ndfd_common::{ElementKind, ForecastKind};

/// Largest number of panels in one figure.
pub const MAX_PANELS: usize = 5;

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRule {
    pub forecast_kind: ForecastKind,
    pub element: ElementKind,
    /// 1 through 5, where 5 means "5 or more"
    pub period_count: usize,
    /// UTC hours this row applies to
    pub hours: Range<u32>,
    /// Indices into the period set, in panel order
    pub periods: &'static [usize],
    /// Day/night number of the first panel
    pub first_number: u32,
}

impl WindowRule {
    pub fn matches(
        &self,
        forecast_kind: ForecastKind,
        element: ElementKind,
        period_count: usize,
        utc_hour: u32,
    ) -> bool {
        self.forecast_kind == forecast_kind
            && self.element == element
            && self.period_count == period_count.min(MAX_PANELS)
            && self.hours.contains(&utc_hour)
    }
}

const fn rule(
    forecast_kind: ForecastKind,
    element: ElementKind,
    period_count: usize,
    hours: Range<u32>,
    periods: &'static [usize],
    first_number: u32,
) -> WindowRule {
    WindowRule {
        forecast_kind,
        element,
        period_count,
        hours,
        periods,
        first_number,
    }
}

use ElementKind::{MaxTemp, MinTemp};
use ForecastKind::{Extended, ShortTerm};

const ALL_DAY: Range<u32> = 0..24;

/// Every window rule. Exactly one row matches any valid request.
pub static WINDOW_RULES: &[WindowRule] = &[
    // Short-term maximum temperature
    rule(ShortTerm, MaxTemp, 1, ALL_DAY, &[0], 1),
    rule(ShortTerm, MaxTemp, 2, 0..19, &[0, 1], 1),
    rule(ShortTerm, MaxTemp, 2, 19..24, &[1], 1),
    rule(ShortTerm, MaxTemp, 3, 0..21, &[0, 1, 2], 1),
    rule(ShortTerm, MaxTemp, 3, 21..24, &[1, 2], 1),
    rule(ShortTerm, MaxTemp, 4, 0..21, &[0, 1, 2, 3], 1),
    rule(ShortTerm, MaxTemp, 4, 21..24, &[1, 2, 3], 1),
    rule(ShortTerm, MaxTemp, 5, 0..21, &[0, 1, 2, 3, 4], 1),
    rule(ShortTerm, MaxTemp, 5, 21..24, &[1, 2, 3, 4], 1),
    // Short-term minimum temperature
    rule(ShortTerm, MinTemp, 1, ALL_DAY, &[0], 1),
    rule(ShortTerm, MinTemp, 2, 0..14, &[0, 1], 1),
    rule(ShortTerm, MinTemp, 2, 14..24, &[1], 1),
    rule(ShortTerm, MinTemp, 3, 0..11, &[0, 1, 2], 1),
    rule(ShortTerm, MinTemp, 3, 11..24, &[1, 2], 1),
    rule(ShortTerm, MinTemp, 4, 0..11, &[0, 1, 2, 3], 1),
    rule(ShortTerm, MinTemp, 4, 11..24, &[1, 2, 3], 1),
    rule(ShortTerm, MinTemp, 5, 0..11, &[0, 1, 2, 3, 4], 1),
    rule(ShortTerm, MinTemp, 5, 11..24, &[1, 2, 3, 4], 1),
    // Extended maximum temperature
    rule(Extended, MaxTemp, 1, ALL_DAY, &[0], 4),
    rule(Extended, MaxTemp, 2, ALL_DAY, &[1], 4),
    rule(Extended, MaxTemp, 3, ALL_DAY, &[1, 2], 4),
    rule(Extended, MaxTemp, 4, ALL_DAY, &[1, 2, 3], 4),
    rule(Extended, MaxTemp, 5, ALL_DAY, &[1, 2, 3, 4], 4),
    // Extended minimum temperature
    rule(Extended, MinTemp, 1, ALL_DAY, &[0], 4),
    rule(Extended, MinTemp, 2, ALL_DAY, &[1], 4),
    rule(Extended, MinTemp, 3, ALL_DAY, &[1, 2], 4),
    rule(Extended, MinTemp, 4, ALL_DAY, &[1, 2, 3], 4),
    rule(Extended, MinTemp, 5, ALL_DAY, &[1, 2, 3, 4], 3),
];

/// Find the rule for a request. Counts above [`MAX_PANELS`] use the
/// "5 or more" rows.
pub fn find_rule(
    forecast_kind: ForecastKind,
    element: ElementKind,
    period_count: usize,
    utc_hour: u32,
) -> Option<&'static WindowRule> {
    WINDOW_RULES
        .iter()
        .find(|r| r.matches(forecast_kind, element, period_count, utc_hour))
}
