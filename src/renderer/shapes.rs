//! Shape generation for 2D primitives
//!
//! All shapes are emitted in board coordinates (origin top-left, y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

// Segment bits: a=top, b=upper right, c=lower right, d=bottom,
// e=lower left, f=upper left, g=middle
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,
    SEG_F | SEG_G | SEG_B | SEG_C,
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D,
    SEG_A | SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// Segment mask for a decimal digit (0 for anything above 9)
pub fn digit_segments(digit: u32) -> u8 {
    DIGIT_SEGMENTS.get(digit as usize).copied().unwrap_or(0)
}

/// Generate vertices for one seven-segment digit with its top-left at `origin`
pub fn seven_segment_digit(
    digit: u32,
    origin: Vec2,
    size: Vec2,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mask = digit_segments(digit);
    let (w, h, t) = (size.x, size.y, thickness);
    let half = (h - t) / 2.0;

    // (bit, offset, extent) per segment
    let segments = [
        (SEG_A, Vec2::new(0.0, 0.0), Vec2::new(w, t)),
        (SEG_B, Vec2::new(w - t, 0.0), Vec2::new(t, half + t)),
        (SEG_C, Vec2::new(w - t, half), Vec2::new(t, half + t)),
        (SEG_D, Vec2::new(0.0, h - t), Vec2::new(w, t)),
        (SEG_E, Vec2::new(0.0, half), Vec2::new(t, half + t)),
        (SEG_F, Vec2::new(0.0, 0.0), Vec2::new(t, half + t)),
        (SEG_G, Vec2::new(0.0, half), Vec2::new(w, t)),
    ];

    segments
        .iter()
        .filter(|(bit, _, _)| mask & bit != 0)
        .flat_map(|(_, offset, extent)| rect(origin + *offset, *extent, color))
        .collect()
}

/// Generate vertices for a non-negative number, horizontally centred on `center_x`
///
/// `top` is the y of the digits' top edge.
pub fn number(value: u32, center_x: f32, top: f32, digit_size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let digits: Vec<u32> = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let spacing = digit_size.x * 0.4;
    let total = digits.len() as f32 * digit_size.x + (digits.len() as f32 - 1.0) * spacing;
    let thickness = (digit_size.y / 7.0).max(1.0);

    let mut vertices = Vec::new();
    let mut x = center_x - total / 2.0;
    for digit in digits {
        vertices.extend(seven_segment_digit(
            digit,
            Vec2::new(x, top),
            digit_size,
            thickness,
            color,
        ));
        x += digit_size.x + spacing;
    }
    vertices
}
