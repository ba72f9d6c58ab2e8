//! Great-circle distance computation.

/// Default Earth radius in kilometers.
///
/// The Earth is not perfectly spherical, so there is no single right number.
/// Callers needing higher geodesic fidelity must supply their own radius via
/// [`RelateConfig::with_radius`](crate::RelateConfig::with_radius).
pub const DEFAULT_RADIUS_KM: f64 = 6367.0;

/// Computes haversine great-circle distances between two point lists.
///
/// Element-wise over the four equal-length coordinate slices (decimal
/// degrees), in the units of `radius`:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// d = radius · 2·asin(√a)
/// ```
///
/// Latitude/longitude ranges are not validated; out-of-range values yield
/// numerically valid but geographically meaningless results, and NaN inputs
/// propagate to NaN outputs. `distance(p, p)` is exactly zero and the
/// function is symmetric in its two point lists.
///
/// # Panics
///
/// Debug-asserts that all four slices have equal length.
pub fn haversine(
    p1_lat: &[f64],
    p1_lon: &[f64],
    p2_lat: &[f64],
    p2_lon: &[f64],
    radius: f64,
) -> Vec<f64> {
    debug_assert_eq!(p1_lat.len(), p1_lon.len());
    debug_assert_eq!(p1_lat.len(), p2_lat.len());
    debug_assert_eq!(p1_lat.len(), p2_lon.len());

    let mut out = Vec::with_capacity(p1_lat.len());
    for i in 0..p1_lat.len() {
        let lat1 = p1_lat[i].to_radians();
        let lon1 = p1_lon[i].to_radians();
        let lat2 = p2_lat[i].to_radians();
        let lon2 = p2_lon[i].to_radians();

        let d_lat = lat2 - lat1;
        let d_lon = lon2 - lon1;

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        out.push(radius * 2.0 * a.sqrt().asin());
    }
    out
}
