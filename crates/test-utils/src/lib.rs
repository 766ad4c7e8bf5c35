//! Test support for the NDFD graphics crates.
//!
//! - [`generators`]: synthetic temperature grids and daily period sets
//! - [`fixtures`]: hour-aligned instants, map extents and map parameters
//! - float assertions for temperatures and grids
//!
//! Everything is re-exported at the crate root:
//!
//! ```ignore
//! use test_utils::{conus_map_params, period_set, utc};
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Assert two temperatures (or any floats) agree within `epsilon`.
///
/// ```ignore
/// assert_approx_eq!(grid.get(0, 0).unwrap(), 65.0, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right, epsilon) = ($left as f64, $right as f64, $epsilon as f64);
        assert!(
            (left - right).abs() <= epsilon,
            "values differ by more than {}: {} vs {}",
            epsilon,
            left,
            right
        );
    }};
}

/// Assert two grids agree point by point within `epsilon`, naming the first
/// index that does not.
///
/// ```ignore
/// assert_grid_approx_eq!(trend.values(), &[5.0, -4.0], 1e-6);
/// ```
#[macro_export]
macro_rules! assert_grid_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: &[f32] = $left;
        let right: &[f32] = $right;
        assert_eq!(left.len(), right.len(), "grid lengths differ");
        let epsilon = $epsilon as f32;
        if let Some((index, (l, r))) = left
            .iter()
            .zip(right.iter())
            .enumerate()
            .find(|(_, (l, r))| (*l - *r).abs() > epsilon)
        {
            panic!("grids differ at index {}: {} vs {}", index, l, r);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq!(32.0001_f32, 32.0, 0.001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "values differ")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(80.1, 80.0, 0.001);
    }

    #[test]
    fn test_assert_grid_approx_eq() {
        assert_grid_approx_eq!(&[1.0001, 2.0], &[1.0, 2.0], 0.001);
    }

    #[test]
    #[should_panic(expected = "grids differ at index 1")]
    fn test_assert_grid_approx_eq_names_index() {
        assert_grid_approx_eq!(&[1.0, 2.5, 3.0], &[1.0, 2.0, 3.0], 0.001);
    }
}
