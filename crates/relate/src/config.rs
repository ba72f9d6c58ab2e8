//! Configuration for geospatial join operations.

use crate::distance::DEFAULT_RADIUS_KM;
use crate::error::RelateError;

/// Disambiguating suffix pair for column names shared by both sides.
///
/// Either element may be absent, in which case that side's name is left
/// unsuffixed. When a shared name is actually encountered, at least one
/// element must be present or the operation fails with
/// [`RelateError::AmbiguousKeyCollision`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffixes {
    left: Option<String>,
    right: Option<String>,
}

impl Suffixes {
    /// Creates a suffix pair. Empty strings are treated as absent.
    pub fn new(left: Option<&str>, right: Option<&str>) -> Self {
        let normalize = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            left: normalize(left),
            right: normalize(right),
        }
    }

    /// The left-side suffix, if present.
    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    /// The right-side suffix, if present.
    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }
}

impl Default for Suffixes {
    /// The conventional `("_left", "_right")` pair.
    fn default() -> Self {
        Self::new(Some("_left"), Some("_right"))
    }
}

/// Configuration for a join operation.
///
/// Use the builder methods to customise parameters; all have defaults.
///
/// # Example
///
/// ```
/// use georelate_relate::RelateConfig;
///
/// let config = RelateConfig::new()
///     .with_left_key("local_id")
///     .with_right_key("project_id")
///     .with_right_coords("lat_aid", "lon_aid")
///     .with_k_closest(3);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RelateConfig {
    /// Explicit left key column; `None` means the row identifier.
    left_key: Option<String>,
    /// Explicit right key column; `None` means the row identifier.
    right_key: Option<String>,
    /// Left latitude column name.
    left_lat: String,
    /// Left longitude column name.
    left_lon: String,
    /// Right latitude column name.
    right_lat: String,
    /// Right longitude column name.
    right_lon: String,
    /// Suffix pair for shared column names.
    suffixes: Suffixes,
    /// Nearest matches to attach per left record; 0 attaches none.
    k_closest: usize,
    /// Earth radius for distance computation.
    radius: f64,
}

impl RelateConfig {
    /// Creates a configuration with the defaults: row-identifier keys,
    /// `"lat"`/`"lon"` coordinates on both sides, `("_left", "_right")`
    /// suffixes, `k_closest = 0`, radius [`DEFAULT_RADIUS_KM`].
    pub fn new() -> Self {
        Self {
            left_key: None,
            right_key: None,
            left_lat: "lat".to_string(),
            left_lon: "lon".to_string(),
            right_lat: "lat".to_string(),
            right_lon: "lon".to_string(),
            suffixes: Suffixes::default(),
            k_closest: 0,
            radius: DEFAULT_RADIUS_KM,
        }
    }

    /// Sets the explicit left key column.
    pub fn with_left_key(mut self, name: impl Into<String>) -> Self {
        self.left_key = Some(name.into());
        self
    }

    /// Sets the explicit right key column.
    pub fn with_right_key(mut self, name: impl Into<String>) -> Self {
        self.right_key = Some(name.into());
        self
    }

    /// Sets the left coordinate column names.
    pub fn with_left_coords(mut self, lat: impl Into<String>, lon: impl Into<String>) -> Self {
        self.left_lat = lat.into();
        self.left_lon = lon.into();
        self
    }

    /// Sets the right coordinate column names.
    pub fn with_right_coords(mut self, lat: impl Into<String>, lon: impl Into<String>) -> Self {
        self.right_lat = lat.into();
        self.right_lon = lon.into();
        self
    }

    /// Sets the suffix pair.
    pub fn with_suffixes(mut self, suffixes: Suffixes) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Sets the number of nearest matches to attach per left record.
    pub fn with_k_closest(mut self, k: usize) -> Self {
        self.k_closest = k;
        self
    }

    /// Sets the Earth radius used for distances.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Explicit left key column, if configured.
    pub fn left_key(&self) -> Option<&str> {
        self.left_key.as_deref()
    }

    /// Explicit right key column, if configured.
    pub fn right_key(&self) -> Option<&str> {
        self.right_key.as_deref()
    }

    /// Left latitude column name.
    pub fn left_lat(&self) -> &str {
        &self.left_lat
    }

    /// Left longitude column name.
    pub fn left_lon(&self) -> &str {
        &self.left_lon
    }

    /// Right latitude column name.
    pub fn right_lat(&self) -> &str {
        &self.right_lat
    }

    /// Right longitude column name.
    pub fn right_lon(&self) -> &str {
        &self.right_lon
    }

    /// The suffix pair.
    pub fn suffixes(&self) -> &Suffixes {
        &self.suffixes
    }

    /// Nearest matches to attach per left record.
    pub fn k_closest(&self) -> usize {
        self.k_closest
    }

    /// Earth radius used for distances.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RelateError::InvalidRadius`] if the radius is non-finite or
    /// non-positive.
    pub fn validate(&self) -> Result<(), RelateError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(RelateError::InvalidRadius {
                radius: self.radius,
            });
        }
        Ok(())
    }
}

impl Default for RelateConfig {
    fn default() -> Self {
        Self::new()
    }
}
