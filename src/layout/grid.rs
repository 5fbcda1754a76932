use super::geometry::{printable_area, PrintableArea};
use crate::config::PaperSizeConfiguration;
use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Physical size of one badge
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDimensions {
    pub width: Mm,
    pub height: Mm,
}

impl BadgeDimensions {
    pub fn new<W: Into<Mm>, H: Into<Mm>>(width: W, height: H) -> BadgeDimensions {
        BadgeDimensions {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// A uniform grid of badge cells inside the printable area. Badges are never
/// rotated to squeeze more onto a sheet; the grid matches what gets rendered.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BadgeGrid {
    pub columns: u32,
    pub rows: u32,
}

impl BadgeGrid {
    /// Cells on the grid, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        self.columns.saturating_mul(self.rows)
    }
}

fn fit(available: Mm, cell: Mm) -> u32 {
    let count = (*available / *cell).floor();
    if *cell > 0.0 && count >= 1.0 {
        // saturating float-to-int cast
        count as u32
    } else {
        0
    }
}

/// Lay out as many badges as fit in `area` on a uniform grid
pub fn grid_for_area(area: PrintableArea, badge: BadgeDimensions) -> BadgeGrid {
    BadgeGrid {
        columns: fit(area.width, badge.width),
        rows: fit(area.height, badge.height),
    }
}

/// Lay out badges on the printable area of a configuration
pub fn badge_grid(config: &PaperSizeConfiguration, badge: BadgeDimensions) -> BadgeGrid {
    grid_for_area(printable_area(config), badge)
}

/// How many badges fit on one sheet: `floor(w / badge_w) × floor(h / badge_h)`.
/// Zero when the badge is larger than the printable area on either axis.
///
/// ```
/// use badge_print::{badges_per_page, BadgeDimensions, Margins, PaperSizeConfiguration, PaperSizeType};
///
/// let config = PaperSizeConfiguration::new(PaperSizeType::A4).with_margins(Margins::all(10.0));
/// // 190 × 277 printable: 2 columns of 85.6, 5 rows of 53.98
/// assert_eq!(badges_per_page(&config, BadgeDimensions::new(85.6, 53.98)), 10);
/// ```
pub fn badges_per_page(config: &PaperSizeConfiguration, badge: BadgeDimensions) -> u32 {
    badge_grid(config, badge).total()
}

/// Number of sheets needed to print `badge_count` badges, or `None` when not a
/// single badge fits on a sheet.
pub fn pages_needed(
    badge_count: u32,
    config: &PaperSizeConfiguration,
    badge: BadgeDimensions,
) -> Option<u32> {
    match badges_per_page(config, badge) {
        0 => None,
        per_page => Some(badge_count.div_ceil(per_page)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::layout::Margins;
    use crate::pagesize::PaperSizeType;

    #[test]
    fn count_matches_floor_formula() {
        let badges = [
            (50.0, 50.0),
            (53.98, 85.6),
            (85.6, 53.98),
            (76.2, 101.6),
            (100.0, 150.0),
            (210.0, 297.0),
            (300.0, 60.0),
        ];
        for size_type in PaperSizeType::ALL {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                for margin in [0.0, 5.0, 10.0, 50.0] {
                    let config = PaperSizeConfiguration::new(size_type)
                        .with_orientation(orientation)
                        .with_margins(Margins::all(margin));
                    let area = printable_area(&config);
                    for (w, h) in badges {
                        let badge = BadgeDimensions::new(w, h);
                        let count = badges_per_page(&config, badge);
                        let expected = if *area.width < w || *area.height < h {
                            0
                        } else {
                            (*area.width / w).floor() as u32 * (*area.height / h).floor() as u32
                        };
                        assert_eq!(count, expected, "{size_type} {orientation:?} {margin} {w}x{h}");
                    }
                }
            }
        }
    }

    #[test]
    fn oversized_badge_fits_zero_times() {
        let config = PaperSizeConfiguration::new(PaperSizeType::A6);
        assert_eq!(badges_per_page(&config, BadgeDimensions::new(106.0, 10.0)), 0);
        assert_eq!(badges_per_page(&config, BadgeDimensions::new(10.0, 149.0)), 0);
    }

    #[test]
    fn exact_fit_counts_one() {
        let config = PaperSizeConfiguration::new(PaperSizeType::Cr80);
        assert_eq!(badges_per_page(&config, BadgeDimensions::new(53.98, 85.6)), 1);
    }

    #[test]
    fn degenerate_area_and_badges_count_zero() {
        let config = PaperSizeConfiguration::new(PaperSizeType::Cr80)
            .with_margins(Margins::all(50.0));
        assert_eq!(badges_per_page(&config, BadgeDimensions::new(10.0, 10.0)), 0);

        let config = PaperSizeConfiguration::new(PaperSizeType::A4);
        assert_eq!(badges_per_page(&config, BadgeDimensions::new(0.0, 10.0)), 0);
        assert_eq!(badges_per_page(&config, BadgeDimensions::new(-5.0, 10.0)), 0);
    }

    #[test]
    fn tiny_badges_saturate_instead_of_overflowing() {
        let config = PaperSizeConfiguration::new(PaperSizeType::A3);
        let badge = BadgeDimensions::new(0.001, 0.001);
        let grid = badge_grid(&config, badge);
        assert!(grid.columns >= 296_000);
        assert!(grid.rows >= 419_000);
        assert_eq!(badges_per_page(&config, badge), u32::MAX);
        assert_eq!(pages_needed(10, &config, badge), Some(1));

        let grid = BadgeGrid {
            columns: u32::MAX,
            rows: u32::MAX,
        };
        assert_eq!(grid.total(), u32::MAX);
    }

    #[test]
    fn grid_reports_columns_and_rows() {
        let config = PaperSizeConfiguration::new(PaperSizeType::A4).with_margins(Margins::all(10.0));
        let grid = badge_grid(&config, BadgeDimensions::new(85.6, 53.98));
        assert_eq!(grid, BadgeGrid { columns: 2, rows: 5 });
        assert_eq!(grid.total(), 10);
    }

    #[test]
    fn pages_needed_rounds_up() {
        let config = PaperSizeConfiguration::new(PaperSizeType::A4).with_margins(Margins::all(10.0));
        let badge = BadgeDimensions::new(85.6, 53.98);
        assert_eq!(pages_needed(0, &config, badge), Some(0));
        assert_eq!(pages_needed(10, &config, badge), Some(1));
        assert_eq!(pages_needed(11, &config, badge), Some(2));
        assert_eq!(pages_needed(5, &config, BadgeDimensions::new(400.0, 400.0)), None);
    }
}
