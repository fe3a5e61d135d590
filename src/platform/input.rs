//! Pointer input mapping
//!
//! The canvas may be drawn at any CSS size; the simulation always works in
//! board pixels. These helpers convert between the two.

use glam::Vec2;

use crate::consts::BOARD_HEIGHT;

/// Convert a pointer's client y to board y
///
/// `rect_top` and `css_height` describe the canvas' bounding rect. A
/// zero-height canvas maps everything to the top edge.
pub fn pointer_to_board_y(client_y: f32, rect_top: f32, css_height: f32) -> f32 {
    if css_height <= 0.0 {
        return 0.0;
    }
    (client_y - rect_top) * BOARD_HEIGHT / css_height
}

/// Maps client coordinates to board coordinates for a canvas of known size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    /// Canvas bounding rect origin (client pixels)
    pub origin: Vec2,
    /// Canvas CSS size (client pixels)
    pub size: Vec2,
}

impl PointerMapper {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    /// Board y for a pointer at client `y`
    pub fn board_y(&self, client_y: f32) -> f32 {
        pointer_to_board_y(client_y, self.origin.y, self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unscaled_canvas_is_identity() {
        assert_eq!(pointer_to_board_y(300.0, 0.0, BOARD_HEIGHT), 300.0);
    }

    #[test]
    fn test_scaled_and_offset_canvas() {
        let mapper = PointerMapper::new(100.0, 50.0, 400.0, 300.0);
        assert_eq!(mapper.board_y(200.0), 300.0);
        assert_eq!(mapper.board_y(50.0), 0.0);
    }

    #[test]
    fn test_degenerate_canvas() {
        assert_eq!(pointer_to_board_y(42.0, 0.0, 0.0), 0.0);
        assert_eq!(PointerMapper::new(0.0, 0.0, 0.0, 0.0).board_y(42.0), 0.0);
    }
}
