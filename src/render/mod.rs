//! Drawing primitives over RGB frames
//!
//! All primitives clip per pixel: anything outside the frame is skipped,
//! nothing is clamped or moved back into view.

pub mod font;

use image::{Rgb, RgbImage};

use crate::models::PointI;
use font::{ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Fill the inclusive rectangle (left, top)..=(right, bottom)
pub fn fill_rect(img: &mut RgbImage, left: i32, top: i32, right: i32, bottom: i32, color: Rgb<u8>) {
    fill_span(img, left.into(), top.into(), right.into(), bottom.into(), color);
}

fn fill_span(img: &mut RgbImage, left: i64, top: i64, right: i64, bottom: i64, color: Rgb<u8>) {
    let Some((x0, y0, x1, y1)) = clip_span(img, left, top, right, bottom) else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x, y, color);
        }
    }
}

/// Blend a solid rectangle into the frame with a uniform opacity
///
/// Each covered pixel becomes `alpha * color + (1 - alpha) * pixel`.
pub fn blend_rect(
    img: &mut RgbImage,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    color: Rgb<u8>,
    alpha: f32,
) {
    let alpha = alpha.clamp(0.0, 1.0);
    let Some((x0, y0, x1, y1)) = clip_span(img, left.into(), top.into(), right.into(), bottom.into())
    else {
        return;
    };
    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = img.get_pixel_mut(x, y);
            for c in 0..3 {
                let mixed = alpha * color.0[c] as f32 + (1.0 - alpha) * px.0[c] as f32;
                px.0[c] = mixed.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

fn clip_span(
    img: &RgbImage,
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let (l, r) = (left.min(right), left.max(right));
    let (t, b) = (top.min(bottom), top.max(bottom));
    if w == 0 || h == 0 || r < 0 || b < 0 || l >= w || t >= h {
        return None;
    }
    Some((
        l.max(0) as u32,
        t.max(0) as u32,
        r.min(w - 1) as u32,
        b.min(h - 1) as u32,
    ))
}

type Span = ((i64, i64), (i64, i64));

/// Clip a segment to the inclusive box `min..=max` (Liang-Barsky)
///
/// Segments already inside come back unchanged so on-frame lines are
/// stepped exactly; clipped endpoints are rounded onto the box.
fn clip_segment(from: (i64, i64), to: (i64, i64), min: (i64, i64), max: (i64, i64)) -> Option<Span> {
    let inside = |(x, y): (i64, i64)| x >= min.0 && x <= max.0 && y >= min.1 && y <= max.1;
    if inside(from) && inside(to) {
        return Some((from, to));
    }

    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (dx, dy) = ((to.0 - from.0) as f64, (to.1 - from.1) as f64);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [
        (-dx, x0 - min.0 as f64),
        (dx, max.0 as f64 - x0),
        (-dy, y0 - min.1 as f64),
        (dy, max.1 as f64 - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    if t0 > t1 {
        return None;
    }

    let at = |t: f64| {
        (
            ((x0 + t * dx).round() as i64).clamp(min.0, max.0),
            ((y0 + t * dy).round() as i64).clamp(min.1, max.1),
        )
    };
    Some((at(t0), at(t1)))
}

/// Draw a line with a square brush of the given thickness
///
/// Only the part of the line whose brush can touch the frame is stepped.
pub fn draw_line(img: &mut RgbImage, from: PointI, to: PointI, color: Rgb<u8>, thickness: u32) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let thickness = i64::from(thickness.max(1));
    let lo = -(thickness - 1) / 2;
    let hi = lo + thickness - 1;

    let min = (-hi, -hi);
    let max = (
        i64::from(img.width()) - 1 - lo,
        i64::from(img.height()) - 1 - lo,
    );
    let Some(((mut x, mut y), end)) = clip_segment(
        (from.x.into(), from.y.into()),
        (to.x.into(), to.y.into()),
        min,
        max,
    ) else {
        return;
    };

    let dx = (end.0 - x).abs();
    let dy = -(end.1 - y).abs();
    let sx = if x < end.0 { 1 } else { -1 };
    let sy = if y < end.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        fill_span(img, x + lo, y + lo, x + hi, y + hi, color);
        if (x, y) == end {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a closed outline through the points in order
pub fn draw_polygon(img: &mut RgbImage, points: &[PointI], color: Rgb<u8>, thickness: u32) {
    match points {
        [] => {}
        [only] => draw_line(img, *only, *only, color, thickness),
        _ => {
            for (i, from) in points.iter().enumerate() {
                let to = points[(i + 1) % points.len()];
                draw_line(img, *from, to, color, thickness);
            }
        }
    }
}

/// Rendered size of a single line of text in pixels: (width, height)
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let scale = scale.max(1);
    let chars = text.chars().count() as u32;
    let width = if chars == 0 {
        0
    } else {
        (chars * ADVANCE - (ADVANCE - GLYPH_WIDTH)) * scale
    };
    (width, GLYPH_HEIGHT * scale)
}

/// Draw one line of text with its left edge at `x` and its baseline at `baseline`
pub fn draw_text(
    img: &mut RgbImage,
    x: i32,
    baseline: i32,
    text: &str,
    color: Rgb<u8>,
    scale: u32,
) {
    let scale = i64::from(scale.max(1));
    let top = i64::from(baseline) - i64::from(GLYPH_HEIGHT) * scale;
    let width = i64::from(img.width());
    let mut pen = i64::from(x);
    for ch in text.chars() {
        if pen >= width {
            break;
        }
        let rows = font::glyph(ch);
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..i64::from(GLYPH_WIDTH) {
                if (bits >> (i64::from(GLYPH_WIDTH) - 1 - col)) & 1 == 1 {
                    let px = pen + col * scale;
                    let py = top + row as i64 * scale;
                    fill_span(img, px, py, px + scale - 1, py + scale - 1, color);
                }
            }
        }
        pen += i64::from(ADVANCE) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn count(img: &RgbImage, color: Rgb<u8>) -> usize {
        img.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut img = RgbImage::new(10, 10);
        fill_rect(&mut img, 2, 2, 4, 3, RED);
        assert_eq!(count(&img, RED), 3 * 2);
        assert_eq!(*img.get_pixel(4, 3), RED);
    }

    #[test]
    fn test_fill_rect_clips_instead_of_clamping() {
        let mut img = RgbImage::new(10, 10);
        fill_rect(&mut img, -5, -20, 3, -1, RED);
        assert_eq!(count(&img, RED), 0);

        fill_rect(&mut img, -5, -5, 1, 1, RED);
        assert_eq!(count(&img, RED), 4);
    }

    #[test]
    fn test_blend_rect_uniform() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([200, 100, 0]));
        blend_rect(&mut img, 0, 0, 3, 1, Rgb([20, 20, 20]), 0.55);
        // 0.55 * 20 + 0.45 * 200 = 101, 0.55 * 20 + 0.45 * 100 = 56, 0.55 * 20 = 11
        assert_eq!(*img.get_pixel(0, 0), Rgb([101, 56, 11]));
        assert_eq!(*img.get_pixel(3, 1), Rgb([101, 56, 11]));
        assert_eq!(*img.get_pixel(0, 2), Rgb([200, 100, 0]));
    }

    #[test]
    fn test_polygon_is_closed() {
        let mut img = RgbImage::new(20, 20);
        let square = [
            PointI::new(2, 2),
            PointI::new(12, 2),
            PointI::new(12, 12),
            PointI::new(2, 12),
        ];
        draw_polygon(&mut img, &square, RED, 1);
        // closing edge from (2, 12) back to (2, 2)
        for y in 2..=12 {
            assert_eq!(*img.get_pixel(2, y), RED);
        }
        assert_eq!(count(&img, RED), 40);
    }

    #[test]
    fn test_thick_line_width() {
        let mut img = RgbImage::new(20, 20);
        draw_line(&mut img, PointI::new(5, 10), PointI::new(14, 10), RED, 3);
        for y in 9..=11 {
            assert_eq!(*img.get_pixel(10, y), RED);
        }
        assert_ne!(*img.get_pixel(10, 8), RED);
        assert_ne!(*img.get_pixel(10, 12), RED);
    }

    #[test]
    fn test_far_off_frame_vertices() {
        let mut img = RgbImage::new(64, 64);
        let spike = [
            PointI::new(-2_000_000_000, 10),
            PointI::new(2_000_000_000, 10),
            PointI::new(10, 40),
        ];
        draw_polygon(&mut img, &spike, RED, 3);
        // the horizontal edge crosses the whole frame
        for x in 0..64 {
            assert_eq!(*img.get_pixel(x, 10), RED);
        }

        let mut img = RgbImage::new(64, 64);
        let extremes = [
            PointI::new(i32::MIN, i32::MIN),
            PointI::new(i32::MAX, i32::MAX),
            PointI::new(i32::MAX, i32::MIN),
        ];
        draw_polygon(&mut img, &extremes, RED, 3);
        // the diagonal passes through the middle of the frame
        assert_eq!(*img.get_pixel(32, 32), RED);
    }

    #[test]
    fn test_line_entirely_off_frame() {
        let mut img = RgbImage::new(16, 16);
        draw_line(&mut img, PointI::new(-50, -5), PointI::new(90, -5), RED, 3);
        draw_line(&mut img, PointI::new(100, 0), PointI::new(100, 90), RED, 3);
        assert_eq!(count(&img, RED), 0);
    }

    #[test]
    fn test_text_far_off_frame() {
        let mut img = RgbImage::new(16, 16);
        draw_text(&mut img, i32::MAX - 3, i32::MIN + 2, "WW", RED, 4);
        draw_text(&mut img, i32::MIN, 10, "overflow", RED, 4);
        assert_eq!(count(&img, RED), 0);
    }

    #[test]
    fn test_text_size() {
        assert_eq!(text_size("", 2), (0, 14));
        assert_eq!(text_size("A", 1), (5, 7));
        assert_eq!(text_size("AB", 2), (22, 14));
    }

    #[test]
    fn test_text_sits_on_baseline() {
        let mut img = RgbImage::new(40, 20);
        draw_text(&mut img, 1, 15, "I", RED, 1);
        let rows: Vec<u32> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == RED)
            .map(|(_, y, _)| y)
            .collect();
        assert_eq!(rows.iter().min(), Some(&8));
        assert_eq!(rows.iter().max(), Some(&14));
    }
}
