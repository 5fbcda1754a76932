use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Paper margins in millimetres. They are subtracted from the paper size to
/// get the [`PrintableArea`](crate::layout::PrintableArea), and written verbatim
/// into the `@page` rule of the print stylesheet.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Top, right, bottom, left, each in millimetres
    pub fn trbl(top: Mm, right: Mm, bottom: Mm, left: Mm) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same margin on every side of the sheet
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` for the top and bottom edges, `horizontal` for the left and right
    pub fn symmetric(vertical: Mm, horizontal: Mm) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Edge-to-edge printing, as on card printers
    pub fn empty() -> Margins {
        Margins::all(Mm(0.0))
    }

    /// The four sides paired with their names, in CSS order.
    pub fn sides(&self) -> [(&'static str, Mm); 4] {
        [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_place_values_clockwise() {
        let m = Margins::trbl(Mm(1.0), Mm(2.0), Mm(3.0), Mm(4.0));
        assert_eq!(
            m.sides(),
            [
                ("top", Mm(1.0)),
                ("right", Mm(2.0)),
                ("bottom", Mm(3.0)),
                ("left", Mm(4.0))
            ]
        );
        assert_eq!(
            Margins::symmetric(Mm(5.0), Mm(7.0)),
            Margins::trbl(Mm(5.0), Mm(7.0), Mm(5.0), Mm(7.0))
        );
        assert_eq!(Margins::all(10.0), Margins::trbl(Mm(10.0), Mm(10.0), Mm(10.0), Mm(10.0)));
        assert_eq!(Margins::empty(), Margins::default());
    }
}
