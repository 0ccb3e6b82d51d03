//! Layout constants for the terminal demo.

/// Points of composer height per terminal row.
///
/// Keeps a 291pt keyboard at ten rows and the 34pt safe area at two.
pub const POINTS_PER_ROW: f64 = 30.0;

/// Composer row: border + text line + border.
pub const COMPOSER_ROW_HEIGHT: u16 = 3;

/// Width of each composer button cell.
pub const BUTTON_WIDTH: u16 = 12;

/// Key hint line at the very bottom.
pub const HELP_LINE_HEIGHT: u16 = 1;

/// Rows needed to draw a bottom inset of `points`.
///
/// Any positive inset takes at least one row.
pub fn rows_for_points(points: f64) -> u16 {
    if !points.is_finite() || points <= 0.0 {
        return 0;
    }
    let rows = (points / POINTS_PER_ROW).ceil();
    if rows >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        rows as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heights_map_to_rows() {
        assert_eq!(rows_for_points(291.0), 10);
        assert_eq!(rows_for_points(34.0), 2);
        assert_eq!(rows_for_points(400.0), 14);
        assert_eq!(rows_for_points(260.0), 9);
    }

    #[test]
    fn small_positive_inset_takes_a_row() {
        assert_eq!(rows_for_points(1.0), 1);
    }

    #[test]
    fn zero_and_invalid_take_no_rows() {
        assert_eq!(rows_for_points(0.0), 0);
        assert_eq!(rows_for_points(-3.0), 0);
        assert_eq!(rows_for_points(f64::NAN), 0);
    }

    #[test]
    fn huge_inset_saturates() {
        assert_eq!(rows_for_points(1e12), u16::MAX);
    }
}
