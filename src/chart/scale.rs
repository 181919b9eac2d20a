//! Categorical x-scale helpers.
//! The series is plotted at integer x positions (index = plot coordinate), so
//! inverting a plot-space x means snapping to the nearest index within the
//! band domain.

/// Snap a plot-space x to the nearest sample index.
///
/// Returns `None` for an empty series or when `x` lies outside the plottable
/// band domain `(-0.5, len - 0.5)`, i.e. when no tick is nearest.
pub fn nearest_index(x: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let snapped = x.round();
    if snapped < 0.0 || snapped >= len as f64 {
        return None;
    }
    Some(snapped as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_tick() {
        assert_eq!(nearest_index(0.0, 4), Some(0));
        assert_eq!(nearest_index(1.4, 4), Some(1));
        assert_eq!(nearest_index(1.6, 4), Some(2));
        assert_eq!(nearest_index(3.2, 4), Some(3));
    }

    #[test]
    fn edges_of_the_band_still_match() {
        assert_eq!(nearest_index(-0.49, 4), Some(0));
        assert_eq!(nearest_index(3.49, 4), Some(3));
    }

    #[test]
    fn outside_the_domain_is_no_match() {
        assert_eq!(nearest_index(-0.51, 4), None);
        assert_eq!(nearest_index(3.51, 4), None);
        assert_eq!(nearest_index(100.0, 4), None);
    }

    #[test]
    fn empty_series_never_matches() {
        assert_eq!(nearest_index(0.0, 0), None);
    }
}
