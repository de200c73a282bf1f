/// Mean Earth radius for the idealized spherical model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth-centered Cartesian coordinates in kilometers. Intermediate value
/// only, never serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    pub earth_radius_km: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl GeometryConfig {
    /// Convert a geodetic position to Earth-centered Cartesian coordinates
    /// on a spherical Earth.
    ///
    /// Inputs are not range-checked: lat/lon outside [-90, 90] / [-180, 180]
    /// still produce a geometrically valid point.
    pub fn to_cartesian(&self, lat_deg: f64, lon_deg: f64, alt_km: f64) -> CartesianPoint {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        let r = self.earth_radius_km + alt_km;

        CartesianPoint {
            x: r * lat.cos() * lon.cos(),
            y: r * lat.cos() * lon.sin(),
            z: r * lat.sin(),
        }
    }
}

/// Euclidean distance between two points, in kilometers.
pub fn distance_km(a: &CartesianPoint, b: &CartesianPoint) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}
