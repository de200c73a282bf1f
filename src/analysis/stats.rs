use serde::Serialize;
use utoipa::ToSchema;

use crate::analysis::risk::RiskLevel;
use crate::analysis::scan::ProximityAlert;
use crate::catalog::SpaceObject;

/// Catalog-wide counts derived from one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CatalogStats {
    pub total_objects: usize,
    pub satellites_count: usize,
    pub debris_count: usize,
    pub high_risk_count: usize,
}

pub fn summarize(catalog: &[SpaceObject], alerts: &[ProximityAlert]) -> CatalogStats {
    CatalogStats {
        total_objects: catalog.len(),
        satellites_count: catalog.iter().filter(|o| o.is_satellite()).count(),
        debris_count: catalog.iter().filter(|o| o.is_debris()).count(),
        high_risk_count: alerts
            .iter()
            .filter(|a| a.risk_level == RiskLevel::High)
            .count(),
    }
}
