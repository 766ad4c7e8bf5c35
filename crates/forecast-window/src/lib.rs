//! Forecast window selection for NDFD temperature graphics.
//!
//! Given how many forecast periods were decoded and the current UTC hour,
//! decides how many map panels to draw, which periods feed each panel and
//! how each panel is labelled. Also picks the warm- or cold-season color
//! scale for a product.
//!
//! - [`rules`]: the declarative branch table
//! - [`selector`]: table lookup and [`RenderPlan`] construction
//! - [`label`]: panel label formatting and parsing
//! - [`layout`]: panel grid arrangement
//! - [`season`]: seasonal color scale selection

pub mod error;
pub mod label;
pub mod layout;
pub mod rules;
pub mod season;
pub mod selector;

pub use error::{WindowError, WindowResult};
pub use label::{DayPart, LabelParseError, PanelLabel};
pub use layout::PanelLayout;
pub use rules::{WindowRule, MAX_PANELS, WINDOW_RULES};
pub use season::{ColorScale, ScaleFamily, Season};
pub use selector::{
    select_window, ForecastWindow, PanelSource, PlannedPanel, RenderPlan, WindowPanel,
    WindowRequest,
};
