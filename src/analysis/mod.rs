mod geometry;
mod risk;
mod scan;
mod stats;

pub use geometry::{distance_km, CartesianPoint, GeometryConfig, EARTH_RADIUS_KM};
pub use risk::{RiskLevel, RiskThresholds};
pub use scan::{scan_catalog, AnalysisConfig, ObjectReport, ProximityAlert, ScanOutcome};
pub use stats::{summarize, CatalogStats};
