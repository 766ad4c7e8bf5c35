//! Forecast window selection.
//!
//! [`select_window`] is a pure lookup over the rule table: period count and
//! hour in, panel sources and numbering out. [`RenderPlan::build`] applies
//! it to a decoded period set and attaches labels.

use ndfd_common::{ElementKind, ForecastKind, ForecastPeriodSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::label::{DayPart, PanelLabel};
use crate::layout::PanelLayout;
use crate::rules::find_rule;
use crate::{WindowError, WindowResult};

/// Inputs to window selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRequest {
    /// Number of decoded periods
    pub period_count: usize,
    /// Current UTC hour, 0-23
    pub utc_hour: u32,
    pub forecast_kind: ForecastKind,
    pub element: ElementKind,
    /// Panels after the first show the change from the previous panel
    pub trends: bool,
}

/// Where a panel's values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelSource {
    /// The values of one period.
    Raw { period: usize },
    /// `current - previous`.
    Trend { current: usize, previous: usize },
}

impl PanelSource {
    /// The period whose valid window labels the panel.
    pub fn period(&self) -> usize {
        match *self {
            PanelSource::Raw { period } => period,
            PanelSource::Trend { current, .. } => current,
        }
    }

    pub fn is_trend(&self) -> bool {
        matches!(self, PanelSource::Trend { .. })
    }
}

/// One panel of a selected window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPanel {
    pub position: usize,
    pub source: PanelSource,
    /// Day/night number shown in the label
    pub number: u32,
}

/// The panels to draw for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub forecast_kind: ForecastKind,
    pub element: ElementKind,
    pub day_part: DayPart,
    pub layout: PanelLayout,
    pub panels: Vec<WindowPanel>,
}

impl ForecastWindow {
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Periods shown, in panel order.
    pub fn period_indices(&self) -> Vec<usize> {
        self.panels.iter().map(|p| p.source.period()).collect()
    }
}

/// Select the forecast window for a request.
///
/// Trend pairs are consecutive displayed periods: panel `i > 0` shows
/// `period[p_i] - period[p_(i-1)]`.
pub fn select_window(request: &WindowRequest) -> WindowResult<ForecastWindow> {
    if request.period_count == 0 {
        return Err(WindowError::NoPeriods);
    }
    if request.utc_hour > 23 {
        return Err(WindowError::InvalidHour(request.utc_hour));
    }

    let rule = find_rule(
        request.forecast_kind,
        request.element,
        request.period_count,
        request.utc_hour,
    )
    .ok_or(WindowError::NoMatchingRule {
        forecast_kind: request.forecast_kind,
        element: request.element,
        period_count: request.period_count,
        utc_hour: request.utc_hour,
    })?;

    let panels: Vec<WindowPanel> = rule
        .periods
        .iter()
        .enumerate()
        .map(|(position, &period)| {
            let source = if request.trends && position > 0 {
                PanelSource::Trend {
                    current: period,
                    previous: rule.periods[position - 1],
                }
            } else {
                PanelSource::Raw { period }
            };
            WindowPanel {
                position,
                source,
                number: rule.first_number + position as u32,
            }
        })
        .collect();

    let layout = PanelLayout::for_panel_count(panels.len()).ok_or(WindowError::NoMatchingRule {
        forecast_kind: request.forecast_kind,
        element: request.element,
        period_count: request.period_count,
        utc_hour: request.utc_hour,
    })?;

    debug!(
        forecast_kind = %request.forecast_kind,
        element = %request.element,
        period_count = request.period_count,
        utc_hour = request.utc_hour,
        panels = panels.len(),
        "Selected forecast window"
    );

    Ok(ForecastWindow {
        forecast_kind: request.forecast_kind,
        element: request.element,
        day_part: DayPart::for_element(request.element),
        layout,
        panels,
    })
}

/// A panel ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedPanel {
    pub position: usize,
    pub source: PanelSource,
    pub label: PanelLabel,
}

/// Everything the renderer needs to lay out a figure's panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub forecast_kind: ForecastKind,
    pub element: ElementKind,
    pub day_part: DayPart,
    pub layout: PanelLayout,
    pub panels: Vec<PlannedPanel>,
}

impl RenderPlan {
    /// Select a window for `periods` and label each panel with the valid
    /// window of the period it shows.
    pub fn build(
        periods: &ForecastPeriodSet,
        utc_hour: u32,
        forecast_kind: ForecastKind,
        element: ElementKind,
        trends: bool,
    ) -> WindowResult<Self> {
        let window = select_window(&WindowRequest {
            period_count: periods.len(),
            utc_hour,
            forecast_kind,
            element,
            trends,
        })?;

        let panels = window
            .panels
            .iter()
            .map(|panel| {
                let index = panel.source.period();
                let period = periods.get(index).ok_or(WindowError::MissingPeriod {
                    index,
                    available: periods.len(),
                })?;
                Ok(PlannedPanel {
                    position: panel.position,
                    source: panel.source,
                    label: PanelLabel {
                        day_part: window.day_part,
                        number: panel.number,
                        trend: panel.source.is_trend(),
                        start: period.start,
                        end: period.end,
                    },
                })
            })
            .collect::<WindowResult<Vec<_>>>()?;

        Ok(Self {
            forecast_kind,
            element,
            day_part: window.day_part,
            layout: window.layout,
            panels,
        })
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(period_count: usize, utc_hour: u32) -> WindowRequest {
        WindowRequest {
            period_count,
            utc_hour,
            forecast_kind: ForecastKind::ShortTerm,
            element: ElementKind::MaxTemp,
            trends: false,
        }
    }

    #[test]
    fn test_zero_periods() {
        assert!(matches!(select_window(&request(0, 12)), Err(WindowError::NoPeriods)));
    }

    #[test]
    fn test_invalid_hour() {
        assert!(matches!(
            select_window(&request(3, 24)),
            Err(WindowError::InvalidHour(24))
        ));
    }

    #[test]
    fn test_trend_sources() {
        let window = select_window(&WindowRequest {
            trends: true,
            ..request(4, 22)
        })
        .unwrap();

        assert_eq!(
            window.panels.iter().map(|p| p.source).collect::<Vec<_>>(),
            vec![
                PanelSource::Raw { period: 1 },
                PanelSource::Trend { current: 2, previous: 1 },
                PanelSource::Trend { current: 3, previous: 2 },
            ]
        );
    }

    #[test]
    fn test_panel_source_serializes_tagged() {
        let json = serde_json::to_string(&PanelSource::Trend { current: 2, previous: 1 }).unwrap();
        assert_eq!(json, r#"{"type":"trend","current":2,"previous":1}"#);
    }
}
