//! # Configuration Constants
//!
//! Centralized constants for the adapter generator. Tessellation defaults,
//! fixed design offsets of the adapter geometry and precision values are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Ring segment counts
//! - **Geometry**: Fixed offsets baked into the adapter design
//! - **Text**: Relief depth and layout ratios for embossed lettering
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance below which a triangle is considered to have zero area, or
/// two section points are treated as one.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Nudge added before truncating a dimension to one decimal, so that
/// values such as `27.4` (stored as `27.39999…`) keep their last digit.
pub const LABEL_TRUNCATION_EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of points per ring for the adapter body.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_segments: Option<u32> = None;
/// assert_eq!(user_segments.unwrap_or(DEFAULT_SEGMENTS), 64);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 64;

/// Number of points per ring for the standalone collar rings.
///
/// Collars are short and printed on their own, so they get a finer ring.
pub const COLLAR_SEGMENTS: u32 = 128;

/// Minimum number of points a ring needs to enclose any area.
pub const MIN_SEGMENTS: u32 = 3;

/// Maximum number of points per ring.
///
/// Safety limit to keep a mistyped segment count from exhausting memory.
pub const MAX_SEGMENTS: u32 = 4096;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Radius decrement applied to both top radii of a hollow frustum.
///
/// Models the lead-in taper that lets a tube slide into its mating part.
///
/// # Example
///
/// ```rust
/// use config::constants::FRUSTUM_TOP_TAPER;
///
/// let outer_radius = 18.5;
/// assert_eq!(outer_radius - FRUSTUM_TOP_TAPER, 18.0);
/// ```
pub const FRUSTUM_TOP_TAPER: f64 = 0.5;

/// Vertical clearance added to the junction so it clears a 60° support.
///
/// Equal to `√3`, the rise of a 60° flank over a run of one unit.
pub const SUPPORT_CLEARANCE: f64 = 1.732_050_807_568_877_2;

/// Rotation about the X axis applied once to every finished body, moving
/// the main axis from Y (build orientation) to Z (print orientation).
pub const EXPORT_ROTATION_X: f64 = std::f64::consts::FRAC_PI_2;

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Default radial depth of embossed or engraved lettering.
pub const DEFAULT_RELIEF_DEPTH: f64 = 0.6;

/// Largest fraction of the circumference a line of text may wrap around.
///
/// Wider text is scaled down along its baseline until it fits.
pub const TEXT_MAX_WRAP_FRACTION: f64 = 0.9;

/// Font size of the dimension label as a fraction of the tube length.
pub const LABEL_FONT_RATIO: f64 = 0.4;

/// Font size of the insert hint on collar rings as a fraction of the
/// collar length.
pub const INSERT_FONT_RATIO: f64 = 0.6;

/// Advance of one glyph cell of the block outliner, relative to font size.
pub const BLOCK_GLYPH_ADVANCE: f64 = 0.7;

/// Width of one block glyph relative to font size.
pub const BLOCK_GLYPH_WIDTH: f64 = 0.55;

/// Height of one block glyph relative to font size.
pub const BLOCK_GLYPH_HEIGHT: f64 = 0.7;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
