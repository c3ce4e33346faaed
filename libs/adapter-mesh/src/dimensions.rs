//! # Dimensions
//!
//! The immutable set of user dimensions and every quantity derived from
//! them. Derived values are computed once at construction.

use config::constants::{LABEL_TRUNCATION_EPSILON, SUPPORT_CLEARANCE};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// One of the two tube ends of an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TubeEnd {
    /// The larger-diameter tube, built first along the axis.
    Base,
    /// The smaller-diameter tube, beyond the junction.
    Top,
}

/// Normalized adapter dimensions.
///
/// Outer diameters are ordered so that `base ≥ top`; the original order is
/// remembered in [`Dimensions::swapped`].
///
/// # Example
///
/// ```rust
/// use adapter_mesh::Dimensions;
///
/// let dims = Dimensions::new(27.0, 39.0, 2.0).unwrap();
/// assert_eq!(dims.base_outer_diameter(), 39.0);
/// assert!(dims.swapped());
/// assert_eq!(dims.label(), "35 x 27");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    base_outer_diameter: f64,
    top_outer_diameter: f64,
    thickness: f64,
    swapped: bool,
    junction_height: f64,
    label: String,
}

impl Dimensions {
    /// Normalizes and validates the three user dimensions.
    ///
    /// # Errors
    ///
    /// [`MeshError::Configuration`] when a value is not finite and
    /// positive, or when the wall is at least as thick as the smaller outer
    /// radius (the bore would vanish).
    pub fn new(
        base_outer_diameter: f64,
        top_outer_diameter: f64,
        thickness: f64,
    ) -> Result<Self, MeshError> {
        for (name, value) in [
            ("base outer diameter", base_outer_diameter),
            ("top outer diameter", top_outer_diameter),
            ("wall thickness", thickness),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(MeshError::configuration(format!(
                    "{name} must be positive: {value}"
                )));
            }
        }

        let swapped = base_outer_diameter < top_outer_diameter;
        let (base, top) = if swapped {
            (top_outer_diameter, base_outer_diameter)
        } else {
            (base_outer_diameter, top_outer_diameter)
        };

        if thickness >= top / 2.0 {
            return Err(MeshError::configuration(format!(
                "wall thickness {thickness} leaves no bore in a tube of diameter {top}"
            )));
        }

        let junction_height = junction_height(base, top, thickness);
        let label = format!(
            "{} x {}",
            format_dimension(base - 2.0 * thickness),
            format_dimension(top)
        );

        Ok(Self {
            base_outer_diameter: base,
            top_outer_diameter: top,
            thickness,
            swapped,
            junction_height,
            label,
        })
    }

    /// Larger outer diameter.
    #[inline]
    pub fn base_outer_diameter(&self) -> f64 {
        self.base_outer_diameter
    }

    /// Smaller outer diameter.
    #[inline]
    pub fn top_outer_diameter(&self) -> f64 {
        self.top_outer_diameter
    }

    /// Wall thickness shared by every part.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// True when the caller supplied the smaller diameter first.
    #[inline]
    pub fn swapped(&self) -> bool {
        self.swapped
    }

    /// Bore diameter of the base tube.
    #[inline]
    pub fn base_inner_diameter(&self) -> f64 {
        self.base_outer_diameter - 2.0 * self.thickness
    }

    /// Bore diameter of the top tube.
    #[inline]
    pub fn top_inner_diameter(&self) -> f64 {
        self.top_outer_diameter - 2.0 * self.thickness
    }

    #[inline]
    pub fn base_outer_radius(&self) -> f64 {
        self.base_outer_diameter / 2.0
    }

    #[inline]
    pub fn base_inner_radius(&self) -> f64 {
        self.base_outer_radius() - self.thickness
    }

    #[inline]
    pub fn top_outer_radius(&self) -> f64 {
        self.top_outer_diameter / 2.0
    }

    #[inline]
    pub fn top_inner_radius(&self) -> f64 {
        self.top_outer_radius() - self.thickness
    }

    /// Vertical extent of the tapered junction between the two tubes.
    #[inline]
    pub fn junction_height(&self) -> f64 {
        self.junction_height
    }

    /// Display label `"<base bore> x <top outer>"`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The tube that carries the dimension label.
    ///
    /// Follows the end whose diameter was not moved during normalization.
    pub fn label_end(&self) -> TubeEnd {
        if self.swapped {
            TubeEnd::Top
        } else {
            TubeEnd::Base
        }
    }
}

/// Junction height for outer diameters `base`, `top` and wall `thickness`.
///
/// `|base − top| / 2 + √3 + thickness / 2 + thickness`; not configurable.
pub fn junction_height(base: f64, top: f64, thickness: f64) -> f64 {
    (base - top).abs() / 2.0 + SUPPORT_CLEARANCE + thickness / 2.0 + thickness
}

/// Formats a dimension truncated to one decimal, without a trailing `.0`.
///
/// # Example
///
/// ```rust
/// use adapter_mesh::dimensions::format_dimension;
///
/// assert_eq!(format_dimension(35.04), "35");
/// assert_eq!(format_dimension(27.4), "27.4");
/// assert_eq!(format_dimension(35.69), "35.6");
/// ```
pub fn format_dimension(value: f64) -> String {
    let tenths = (value * 10.0 + LABEL_TRUNCATION_EPSILON).floor() as i64;
    let (whole, fraction) = (tenths / 10, (tenths % 10).abs());
    if fraction == 0 {
        format!("{whole}")
    } else {
        format!("{whole}.{fraction}")
    }
}
