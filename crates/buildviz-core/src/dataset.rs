//! Fixed datasets behind the charts and meters.

use serde::Serialize;

use crate::error::{DashboardError, Result};

pub const HEADING: &str = "Rustc Multi-core Build Visualizer";
pub const INDUSTRY_HEADING: &str = "Industry Integration";
pub const RADAR_CAPTION: &str = "Market Impact Radar";
pub const RADAR_SERIES_NAME: &str = "Impact Index";
pub const PERFORMANCE_HEADING: &str = "Performance Metrics";
pub const PERFORMANCE_NOTE: &str = "User Time > Real Time";
pub const CPU_HEADING: &str = "CPU Load (8 Core)";
pub const FOOTER: &str = "© 2024 Rust Architecture Visualizer • Global Economic Insights";

/// Upper bound of the radar's radial axis.
pub const RADAR_DOMAIN_MAX: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarPoint {
    pub subject: &'static str,
    pub series_a: f64,
    pub series_b: f64,
    pub full_mark: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceBar {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoreUsage {
    pub core: &'static str,
    pub usage: f64,
}

pub const RADAR_DATA: [RadarPoint; 5] = [
    radar("Cost Efficiency", 120.0, 110.0),
    radar("Scalability", 98.0, 130.0),
    radar("Reliability", 86.0, 130.0),
    radar("Talent Growth", 99.0, 100.0),
    radar("Market Speed", 85.0, 90.0),
];

pub const PERFORMANCE_DATA: [PerformanceBar; 3] = [
    PerformanceBar { name: "Real Time", value: 21.0, color: "#38bdf8" },
    PerformanceBar { name: "User Time", value: 84.0, color: "#f97316" },
    PerformanceBar { name: "Sys Time", value: 5.0, color: "#94a3b8" },
];

pub const CORE_USAGE: [CoreUsage; 8] = [
    CoreUsage { core: "Core 1", usage: 95.0 },
    CoreUsage { core: "Core 2", usage: 88.0 },
    CoreUsage { core: "Core 3", usage: 92.0 },
    CoreUsage { core: "Core 4", usage: 85.0 },
    CoreUsage { core: "Core 5", usage: 78.0 },
    CoreUsage { core: "Core 6", usage: 91.0 },
    CoreUsage { core: "Core 7", usage: 89.0 },
    CoreUsage { core: "Core 8", usage: 94.0 },
];

const fn radar(subject: &'static str, series_a: f64, series_b: f64) -> RadarPoint {
    RadarPoint {
        subject,
        series_a,
        series_b,
        full_mark: RADAR_DOMAIN_MAX,
    }
}

impl RadarPoint {
    pub fn validate(&self) -> Result<()> {
        for (series, value) in [("A", self.series_a), ("B", self.series_b)] {
            if !value.is_finite() || !(0.0..=self.full_mark).contains(&value) {
                return Err(DashboardError::InvalidDataset(format!(
                    "radar `{}` series {series} value {value} outside [0, {}]",
                    self.subject, self.full_mark
                )));
            }
        }
        Ok(())
    }
}

impl PerformanceBar {
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(DashboardError::InvalidDataset(format!(
                "bar `{}` has negative or non-finite value {}",
                self.name, self.value
            )));
        }
        if !is_hex_color(self.color) {
            return Err(DashboardError::InvalidDataset(format!(
                "bar `{}` has malformed color {}",
                self.name, self.color
            )));
        }
        Ok(())
    }
}

impl CoreUsage {
    pub fn validate(&self) -> Result<()> {
        if !self.usage.is_finite() || !(0.0..=100.0).contains(&self.usage) {
            return Err(DashboardError::InvalidDataset(format!(
                "`{}` usage {} outside [0, 100]",
                self.core, self.usage
            )));
        }
        Ok(())
    }
}

/// `#rrggbb`
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn validate_all() -> Result<()> {
    RADAR_DATA.iter().try_for_each(RadarPoint::validate)?;
    PERFORMANCE_DATA.iter().try_for_each(PerformanceBar::validate)?;
    CORE_USAGE.iter().try_for_each(CoreUsage::validate)
}
