//! Minimal 2D and 3D value types carried by scene parameters.
//!
//! These are plain carriers: construction, comparison, and printing. The
//! renderer's geometry arithmetic lives elsewhere and is out of scope here.

use crate::Float;

/// A point in 2D space.
///
/// # Examples
/// ```
/// use lumen_params::geometry::Point2f;
///
/// let p = Point2f::from([1., 2.]);
/// assert_eq!(p.x, 1.);
/// assert_eq!(p.y, 2.);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2f {
    /// The x coordinate.
    pub x: Float,
    /// The y coordinate.
    pub y: Float,
}

impl From<[Float; 2]> for Point2f {
    fn from(xy: [Float; 2]) -> Self {
        Point2f { x: xy[0], y: xy[1] }
    }
}

/// A direction in 2D space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2f {
    /// The x component.
    pub x: Float,
    /// The y component.
    pub y: Float,
}

impl From<[Float; 2]> for Vector2f {
    fn from(xy: [Float; 2]) -> Self {
        Vector2f { x: xy[0], y: xy[1] }
    }
}

/// A point in 3D space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3f {
    /// The x coordinate.
    pub x: Float,
    /// The y coordinate.
    pub y: Float,
    /// The z coordinate.
    pub z: Float,
}

impl From<[Float; 3]> for Point3f {
    fn from(xyz: [Float; 3]) -> Self {
        Point3f {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

/// A direction in 3D space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3f {
    /// The x component.
    pub x: Float,
    /// The y component.
    pub y: Float,
    /// The z component.
    pub z: Float,
}

impl From<[Float; 3]> for Vector3f {
    fn from(xyz: [Float; 3]) -> Self {
        Vector3f {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

/// A surface normal.
///
/// Normals transform differently from vectors, so they get a distinct type
/// even though the representation is the same.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Normal3f {
    /// The x component.
    pub x: Float,
    /// The y component.
    pub y: Float,
    /// The z component.
    pub z: Float,
}

impl From<[Float; 3]> for Normal3f {
    fn from(xyz: [Float; 3]) -> Self {
        Normal3f {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}
