use crate::error::CoreError;

pub const DEFAULT_MAX_STARS: u32 = 5;
pub const MAX_MAX_STARS: u32 = 10;

const FULL_STAR: char = '★';
const HALF_STAR: char = '½';
const EMPTY_STAR: char = '☆';

/// Renders a rating as a row of `max_stars` glyphs.
///
/// Position `i` is full when `i <= rating`, half when `i - 0.5 <= rating`
/// and empty otherwise, so NaN renders an empty row.
pub fn render_stars(rating: f64, max_stars: u32) -> String {
    (1..=max_stars)
        .map(|position| {
            let position = f64::from(position);
            if position <= rating {
                FULL_STAR
            } else if position - 0.5 <= rating {
                HALF_STAR
            } else {
                EMPTY_STAR
            }
        })
        .collect()
}

pub fn validate_max_stars(max_stars: u32) -> Result<u32, CoreError> {
    if max_stars == 0 || max_stars > MAX_MAX_STARS {
        return Err(CoreError::InvalidMaxStars(max_stars));
    }
    Ok(max_stars)
}

#[cfg(test)]
mod tests {
    use super::{render_stars, validate_max_stars, DEFAULT_MAX_STARS};

    #[test]
    fn renders_half_star_for_fractional_rating() {
        assert_eq!(render_stars(4.8, DEFAULT_MAX_STARS), "★★★★½");
        assert_eq!(render_stars(3.5, DEFAULT_MAX_STARS), "★★★½☆");
    }

    #[test]
    fn rounds_down_below_half() {
        assert_eq!(render_stars(4.4, DEFAULT_MAX_STARS), "★★★★☆");
    }

    #[test]
    fn whole_ratings() {
        assert_eq!(render_stars(0.0, DEFAULT_MAX_STARS), "☆☆☆☆☆");
        assert_eq!(render_stars(5.0, DEFAULT_MAX_STARS), "★★★★★");
        assert_eq!(render_stars(2.0, 3), "★★☆");
    }

    #[test]
    fn out_of_range_ratings_are_clamped_by_shape() {
        assert_eq!(render_stars(9.0, DEFAULT_MAX_STARS), "★★★★★");
        assert_eq!(render_stars(-1.0, DEFAULT_MAX_STARS), "☆☆☆☆☆");
        assert_eq!(render_stars(f64::NAN, DEFAULT_MAX_STARS), "☆☆☆☆☆");
    }

    #[test]
    fn zero_max_renders_nothing() {
        assert_eq!(render_stars(3.0, 0), "");
    }

    #[test]
    fn max_stars_bounds() {
        assert!(validate_max_stars(0).is_err());
        assert!(validate_max_stars(11).is_err());
        assert_eq!(validate_max_stars(10).unwrap(), 10);
    }
}
