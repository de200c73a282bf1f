use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Satellite,
    Debris,
}

/// A tracked object as it appears in the catalog file. Names are not
/// guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpaceObject {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    /// Geodetic latitude in degrees.
    pub lat: f64,
    /// Geodetic longitude in degrees.
    pub lon: f64,
    /// Altitude above mean Earth radius, in kilometers.
    pub alt: f64,
}

impl SpaceObject {
    pub fn is_satellite(&self) -> bool {
        self.kind == ObjectKind::Satellite
    }

    pub fn is_debris(&self) -> bool {
        self.kind == ObjectKind::Debris
    }
}
