//! Mask shape resolution.
//!
//! Turns (mode, geometry, cursor, container) into the region that is cut out
//! of the overlay. Coordinates are top-left origin. Regions are never
//! clamped to the container.

use super::configuration::FocusGeometry;
use super::focus::FocusMode;
use super::geometry::{Point, Rect, Size};

/// Region subtracted from the opaque overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskRegion {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Ellipse inscribed in the given rectangle.
    Ellipse(Rect),
}

impl MaskRegion {
    /// Bounding rectangle of the region.
    pub fn bounds(&self) -> Rect {
        match *self {
            MaskRegion::Rect(r) | MaskRegion::Ellipse(r) => r,
        }
    }
}

/// Compute the mask region for `mode` with the cursor at `cursor`.
pub fn resolve_mask(
    mode: FocusMode,
    geometry: &FocusGeometry,
    cursor: Point,
    container: Rect,
) -> MaskRegion {
    match mode {
        FocusMode::Rectangle => {
            let h = geometry.rectangle_height;
            MaskRegion::Rect(Rect::new(
                container.min_x(),
                cursor.y - h / 2.0,
                container.size.width,
                h,
            ))
        }
        FocusMode::CenterColumn => MaskRegion::Rect(Rect::centered_at(
            Point::new(container.mid_x(), cursor.y),
            geometry.center_column_size,
        )),
        FocusMode::Square => MaskRegion::Rect(Rect::centered_at(cursor, geometry.square_size)),
        FocusMode::Circle => {
            let d = geometry.circle_diameter;
            MaskRegion::Ellipse(Rect::centered_at(cursor, Size::new(d, d)))
        }
    }
}
