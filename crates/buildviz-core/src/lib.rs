//! Static content and pure rendering logic for the Rustc multi-core build
//! visualizer dashboard.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod i18n;
pub mod state;
pub mod ticker;

pub use chart::{
    bar_scene, core_meters, points_attr, progress_width, radar_scene, BarRect, BarScene,
    BarStyle, CoreMeter, Point, RadarScene, RadarStyle, RadarVertex, TextAnchor, TextLabel,
    Viewport,
};
pub use config::DashboardConfig;
pub use dataset::{CoreUsage, PerformanceBar, RadarPoint, CORE_USAGE, PERFORMANCE_DATA, RADAR_DATA};
pub use error::{DashboardError, Result};
pub use i18n::{Bundle, Language};
pub use state::DashboardState;
pub use ticker::{Ticker, TickerState};
