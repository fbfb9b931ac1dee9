//! Two-endpoint linear colormaps.

use crate::error::{ExoatlasError, Result};

use super::{resolve_color, Rgba};

/// An immutable, named sequence of RGBA samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColormap {
    name: String,
    samples: Vec<Rgba>,
}

impl LinearColormap {
    /// The colormap's name (`"{bottom}2{top}"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the colormap has no samples (never true for constructed maps).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples, bottom to top.
    pub fn samples(&self) -> &[Rgba] {
        &self.samples
    }

    /// The sample at an index.
    pub fn sample(&self, i: usize) -> Option<Rgba> {
        self.samples.get(i).copied()
    }
}

/// Create a colormap that goes smoothly (linearly in RGBA) from `bottom`
/// to `top`.
///
/// Each of R, G, B, and alpha is interpolated independently; sample 0 is
/// exactly the bottom endpoint and sample `n - 1` exactly the top. Endpoint
/// colors accept anything [`resolve_color`] accepts.
///
/// # Errors
///
/// Fails on unresolvable endpoint colors or `n < 2`.
pub fn linear_colormap(
    bottom: &str,
    top: &str,
    alpha_bottom: f64,
    alpha_top: f64,
    n: usize,
) -> Result<LinearColormap> {
    if n < 2 {
        return Err(ExoatlasError::ColormapTooShort { n });
    }

    let lo = resolve_color(bottom)?.with_alpha(alpha_bottom);
    let hi = resolve_color(top)?.with_alpha(alpha_top);

    let samples = (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Rgba {
                r: lerp(lo.r, hi.r, t),
                g: lerp(lo.g, hi.g, t),
                b: lerp(lo.b, hi.b, t),
                a: lerp(lo.a, hi.a, t),
            }
        })
        .collect();

    Ok(LinearColormap {
        name: format!("{}2{}", bottom, top),
        samples,
    })
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::resolve_color;

    #[test]
    fn endpoints_match_resolved_colors() {
        for (c1, c2, n) in [("white", "red", 2), ("black", "#336699", 7), ("navy", "gold", 256)] {
            let cmap = linear_colormap(c1, c2, 1.0, 1.0, n).unwrap();
            assert_eq!(cmap.len(), n);

            let lo = resolve_color(c1).unwrap();
            let hi = resolve_color(c2).unwrap();
            let first = cmap.sample(0).unwrap();
            let last = cmap.sample(n - 1).unwrap();

            assert_eq!((first.r, first.g, first.b), (lo.r, lo.g, lo.b));
            assert_eq!((last.r, last.g, last.b), (hi.r, hi.g, hi.b));
        }
    }

    #[test]
    fn name_concatenates_endpoints() {
        let cmap = linear_colormap("white", "red", 1.0, 1.0, 16).unwrap();
        assert_eq!(cmap.name(), "white2red");
    }

    #[test]
    fn alpha_ramps_independently() {
        let cmap = linear_colormap("black", "black", 0.0, 1.0, 3).unwrap();
        assert_eq!(cmap.sample(0).unwrap().a, 0.0);
        assert_eq!(cmap.sample(1).unwrap().a, 0.5);
        assert_eq!(cmap.sample(2).unwrap().a, 1.0);
        // RGB stays constant while alpha ramps.
        assert!(cmap.samples().iter().all(|s| s.r == 0.0 && s.g == 0.0));
    }

    #[test]
    fn midpoint_is_halfway() {
        let cmap = linear_colormap("black", "white", 1.0, 1.0, 3).unwrap();
        let mid = cmap.sample(1).unwrap();
        assert!((mid.r - 0.5).abs() < 1e-12);
        assert!((mid.g - 0.5).abs() < 1e-12);
        assert!((mid.b - 0.5).abs() < 1e-12);
    }

    #[test]
    fn too_few_samples_is_an_error() {
        for n in [0, 1] {
            let err = linear_colormap("white", "red", 1.0, 1.0, n).unwrap_err();
            assert!(matches!(err, ExoatlasError::ColormapTooShort { .. }));
        }
    }

    #[test]
    fn unknown_endpoint_propagates() {
        assert!(linear_colormap("blurple", "red", 1.0, 1.0, 8).is_err());
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = linear_colormap("white", "red", 0.2, 0.9, 64).unwrap();
        let b = linear_colormap("white", "red", 0.2, 0.9, 64).unwrap();
        assert_eq!(a, b);
    }
}
