use serde::Serialize;
use utoipa::ToSchema;

use crate::analysis::geometry::{distance_km, GeometryConfig};
use crate::analysis::risk::{RiskLevel, RiskThresholds};
use crate::catalog::SpaceObject;

/// A satellite/debris pair whose separation classified as High or Medium.
/// Low-risk pairs never materialize an alert.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProximityAlert {
    pub satellite: String,
    pub debris: String,
    /// Separation rounded to 2 decimal places for presentation; the tier is
    /// assigned from the unrounded value.
    pub distance_km: f64,
    pub risk_level: RiskLevel,
}

/// A catalog object echoed back to the caller, with the alerts involving it
/// attached when it is a satellite.
///
/// `risks` is `Some` (possibly empty) for satellites and absent for debris,
/// so a consumer rendering one satellite never re-scans the global list.
/// Entries are value copies of the global alerts, not shared references.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ObjectReport {
    #[serde(flatten)]
    pub object: SpaceObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risks: Option<Vec<ProximityAlert>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisConfig {
    pub geometry: GeometryConfig,
    pub thresholds: RiskThresholds,
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// All catalog objects in their original order.
    pub objects: Vec<ObjectReport>,
    /// Qualifying pairs in outer (satellite) then inner (debris) catalog
    /// order. This ordering is part of the contract.
    pub alerts: Vec<ProximityAlert>,
}

/// Check every satellite against every debris object and record the pairs
/// that classify as High or Medium risk.
///
/// Brute-force O(S·D) scan; deterministic for a given catalog order. No
/// deduplication: a debris object may appear in alerts for many satellites.
pub fn scan_catalog(config: &AnalysisConfig, catalog: &[SpaceObject]) -> ScanOutcome {
    let mut objects: Vec<ObjectReport> = catalog
        .iter()
        .map(|o| ObjectReport {
            object: o.clone(),
            risks: o.is_satellite().then(Vec::new),
        })
        .collect();

    let satellite_indices: Vec<usize> = (0..catalog.len())
        .filter(|&i| catalog[i].is_satellite())
        .collect();
    let debris_indices: Vec<usize> = (0..catalog.len())
        .filter(|&i| catalog[i].is_debris())
        .collect();

    let mut alerts = Vec::new();
    for &si in &satellite_indices {
        let sat = &catalog[si];
        let sat_point = config.geometry.to_cartesian(sat.lat, sat.lon, sat.alt);

        for &di in &debris_indices {
            let debris = &catalog[di];
            let debris_point = config.geometry.to_cartesian(debris.lat, debris.lon, debris.alt);
            let distance = distance_km(&sat_point, &debris_point);

            let risk_level = config.thresholds.classify(distance);
            if risk_level >= RiskLevel::Medium {
                let alert = ProximityAlert {
                    satellite: sat.name.clone(),
                    debris: debris.name.clone(),
                    distance_km: round_2dp(distance),
                    risk_level,
                };
                if let Some(risks) = objects[si].risks.as_mut() {
                    risks.push(alert.clone());
                }
                alerts.push(alert);
            }
        }
    }

    ScanOutcome { objects, alerts }
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ObjectKind;
    use approx::assert_relative_eq;

    fn sat(name: &str, lat: f64, lon: f64, alt: f64) -> SpaceObject {
        SpaceObject {
            name: name.to_string(),
            kind: ObjectKind::Satellite,
            lat,
            lon,
            alt,
        }
    }

    fn deb(name: &str, lat: f64, lon: f64, alt: f64) -> SpaceObject {
        SpaceObject {
            name: name.to_string(),
            kind: ObjectKind::Debris,
            lat,
            lon,
            alt,
        }
    }

    #[test]
    fn coincident_pair_yields_one_high_alert_at_zero_distance() {
        let catalog = vec![sat("A", 10.0, 20.0, 500.0), deb("B", 10.0, 20.0, 500.0)];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);

        assert_eq!(outcome.alerts.len(), 1);
        let alert = &outcome.alerts[0];
        assert_eq!(alert.satellite, "A");
        assert_eq!(alert.debris, "B");
        assert_eq!(alert.distance_km, 0.0);
        assert_eq!(alert.risk_level, RiskLevel::High);
    }

    #[test]
    fn small_radial_separation_is_high_risk() {
        let catalog = vec![sat("A", 0.0, 0.0, 500.0), deb("B", 0.0, 0.0, 500.01)];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);

        assert_eq!(outcome.alerts.len(), 1);
        assert_relative_eq!(outcome.alerts[0].distance_km, 0.01, epsilon = 1e-9);
        assert_eq!(outcome.alerts[0].risk_level, RiskLevel::High);
    }

    #[test]
    fn low_risk_pairs_are_discarded() {
        // Opposite sides of the planet.
        let catalog = vec![sat("A", 0.0, 0.0, 500.0), deb("B", 0.0, 180.0, 500.0)];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);

        assert!(outcome.alerts.is_empty());
        assert_eq!(outcome.objects[0].risks.as_deref(), Some(&[][..]));
    }

    #[test]
    fn alerts_follow_outer_satellite_then_inner_debris_order() {
        let catalog = vec![
            sat("Sat-1", 0.0, 0.0, 500.0),
            deb("Deb-1", 0.0, 0.0, 500.1),
            sat("Sat-2", 0.0, 0.0, 500.2),
            deb("Deb-2", 0.0, 0.0, 500.3),
        ];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);

        let pairs: Vec<(&str, &str)> = outcome
            .alerts
            .iter()
            .map(|a| (a.satellite.as_str(), a.debris.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Sat-1", "Deb-1"),
                ("Sat-1", "Deb-2"),
                ("Sat-2", "Deb-1"),
                ("Sat-2", "Deb-2"),
            ]
        );
    }

    #[test]
    fn per_satellite_lists_partition_the_global_list() {
        let catalog = vec![
            sat("Sat-1", 0.0, 0.0, 500.0),
            sat("Sat-2", 0.0, 1.0, 500.0),
            deb("Deb-1", 0.0, 0.5, 500.0),
            deb("Deb-2", 0.0, 90.0, 500.0),
        ];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);

        let per_satellite_total: usize = outcome
            .objects
            .iter()
            .filter_map(|o| o.risks.as_ref())
            .map(|r| r.len())
            .sum();
        assert_eq!(per_satellite_total, outcome.alerts.len());
        assert!(!outcome.alerts.is_empty());
    }

    #[test]
    fn debris_objects_carry_no_risk_list() {
        let catalog = vec![sat("A", 0.0, 0.0, 500.0), deb("B", 0.0, 0.0, 500.0)];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);

        assert!(outcome.objects[0].risks.is_some());
        assert!(outcome.objects[1].risks.is_none());
    }

    #[test]
    fn no_debris_means_no_alerts() {
        let catalog = vec![
            sat("A", 0.0, 0.0, 500.0),
            sat("B", 0.0, 0.0, 500.0),
            sat("C", 10.0, 10.0, 600.0),
        ];
        let outcome = scan_catalog(&AnalysisConfig::default(), &catalog);
        assert!(outcome.alerts.is_empty());
    }

    #[test]
    fn scan_is_deterministic() {
        let catalog = vec![
            sat("Sat-1", 10.0, 20.0, 500.0),
            deb("Deb-1", 10.0, 20.1, 500.0),
            deb("Deb-2", 10.1, 20.0, 501.0),
            sat("Sat-2", 10.05, 20.05, 500.5),
        ];
        let first = scan_catalog(&AnalysisConfig::default(), &catalog);
        let second = scan_catalog(&AnalysisConfig::default(), &catalog);
        assert_eq!(first.alerts, second.alerts);
    }

    #[test]
    fn distance_is_rounded_but_tier_uses_raw_value() {
        let thresholds = RiskThresholds {
            high_km: 0.008,
            medium_km: 200.0,
        };
        let config = AnalysisConfig {
            thresholds,
            ..Default::default()
        };
        // Raw separation 0.01 km rounds to 0.01 and sits above high_km.
        let catalog = vec![sat("A", 0.0, 0.0, 500.0), deb("B", 0.0, 0.0, 500.01)];
        let outcome = scan_catalog(&config, &catalog);
        assert_eq!(outcome.alerts[0].risk_level, RiskLevel::Medium);
    }
}
