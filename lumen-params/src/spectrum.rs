//! RGB spectrum values carried by scene parameters.

use crate::Float;

/// A color sample stored as an RGB triple.
///
/// Parameters only need construction and comparison; spectral math is the
/// renderer's concern.
///
/// # Examples
/// ```
/// use lumen_params::spectrum::Spectrum;
///
/// let s = Spectrum::from_rgb([0.25, 0.5, 0.75]);
/// assert_eq!(s.to_rgb(), [0.25, 0.5, 0.75]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    c: [Float; 3],
}

impl Spectrum {
    /// Creates a spectrum from an RGB triple.
    pub fn from_rgb(c: [Float; 3]) -> Spectrum {
        Spectrum { c }
    }

    /// Returns the sample as an RGB triple.
    pub fn to_rgb(&self) -> [Float; 3] {
        self.c
    }
}
