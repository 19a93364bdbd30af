// Copyright 2026 The HorizTree Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::Path as FsPath;

use log::{debug, info};
use tiny_skia::{BlendMode, ColorU8, Paint, Pixmap, Rect, Transform};

use crate::scan;
use crate::Error;

/// The tree trunk.
///
/// Drawn as two rectangles sharing the same vertical extent: the left color
/// covers the whole trunk, the right color covers its right half.
/// Both rectangle edges are inclusive.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Trunk {
    /// The first row of the trunk.
    pub top: i32,
    /// The last row of the trunk.
    pub bottom: i32,
    /// A distance from the center line to the trunk's side.
    pub half_width: i32,
    /// The lit side color.
    pub left_color: ColorU8,
    /// The shaded side color.
    pub right_color: ColorU8,
}

/// A foliage tier.
///
/// Drawn as two right triangles meeting at the center line,
/// with the apex at `top` and the base at `bottom`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Tier {
    /// Apex position.
    pub top: i32,
    /// Base position.
    pub bottom: i32,
    /// A distance from the center line to the base corner.
    pub half_width: i32,
    /// The lit side color.
    pub left_color: ColorU8,
    /// The shaded side color.
    pub right_color: ColorU8,
}

/// An icon description.
///
/// `Default` produces the HorizTree application icon.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct IconConfig {
    /// Canvas side in pixels. The canvas is always square.
    pub size: u32,
    /// The trunk, drawn first.
    pub trunk: Trunk,
    /// Tiers in draw order: bottom, middle, top.
    pub tiers: [Tier; 3],
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            size: 1024,
            trunk: Trunk {
                top: 700,
                bottom: 940,
                half_width: 60,
                left_color: ColorU8::from_rgba(139, 90, 43, 255),
                right_color: ColorU8::from_rgba(101, 67, 33, 255),
            },
            tiers: [
                Tier {
                    top: 340,
                    bottom: 780,
                    half_width: 420,
                    left_color: ColorU8::from_rgba(45, 155, 90, 255),
                    right_color: ColorU8::from_rgba(30, 115, 65, 255),
                },
                Tier {
                    top: 190,
                    bottom: 580,
                    half_width: 320,
                    left_color: ColorU8::from_rgba(60, 175, 110, 255),
                    right_color: ColorU8::from_rgba(40, 135, 80, 255),
                },
                Tier {
                    top: 80,
                    bottom: 380,
                    half_width: 220,
                    left_color: ColorU8::from_rgba(75, 190, 125, 255),
                    right_color: ColorU8::from_rgba(50, 150, 95, 255),
                },
            ],
        }
    }
}

impl IconConfig {
    /// Returns the center line shared by all shapes.
    pub fn center_x(&self) -> i32 {
        (self.size / 2) as i32
    }
}

/// Renders an icon onto a new transparent pixmap.
///
/// Shapes are painted in order, later ones covering earlier ones.
/// Parts outside the canvas are clipped.
pub fn render(config: &IconConfig) -> Result<Pixmap, Error> {
    let mut pixmap = Pixmap::new(config.size, config.size).ok_or(Error::InvalidSize {
        width: config.size,
        height: config.size,
    })?;

    let cx = config.center_x();
    draw_trunk(&mut pixmap, cx, &config.trunk);
    for (i, tier) in config.tiers.iter().enumerate() {
        debug!("Drawing tier {} at {}..{}.", i + 1, tier.top, tier.bottom);
        draw_tier(&mut pixmap, cx, tier);
    }

    Ok(pixmap)
}

/// Saves a pixmap as an 8-bit RGBA PNG.
///
/// An existing file is overwritten. Missing directories are not created.
pub fn save<P: AsRef<FsPath>>(pixmap: &Pixmap, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let data = pixmap.encode_png()?;
    std::fs::write(path, &data)?;
    info!("Saved {}x{} icon to {}.", pixmap.width(), pixmap.height(), path.display());
    Ok(())
}

/// Renders an icon and saves it as PNG.
pub fn render_to_file<P: AsRef<FsPath>>(config: &IconConfig, path: P) -> Result<(), Error> {
    let pixmap = render(config)?;
    save(&pixmap, path)
}

fn draw_trunk(pixmap: &mut Pixmap, cx: i32, trunk: &Trunk) {
    debug!("Drawing trunk at {}..={}.", trunk.top, trunk.bottom);

    let (top, bottom) = (trunk.top, trunk.bottom);
    fill_rect(pixmap, cx - trunk.half_width, top, cx + trunk.half_width, bottom, trunk.left_color);
    fill_rect(pixmap, cx, top, cx + trunk.half_width, bottom, trunk.right_color);
}

fn draw_tier(pixmap: &mut Pixmap, cx: i32, tier: &Tier) {
    let apex = (cx, tier.top);
    let base = (cx, tier.bottom);

    let left = (cx - tier.half_width, tier.bottom);
    fill_polygon(pixmap, &[apex, base, left], tier.left_color);

    let right = (cx + tier.half_width, tier.bottom);
    fill_polygon(pixmap, &[apex, base, right], tier.right_color);
}

// All edges are inclusive.
fn fill_rect(pixmap: &mut Pixmap, left: i32, top: i32, right: i32, bottom: i32, color: ColorU8) {
    let rect = if left <= right && top <= bottom {
        Rect::from_ltrb(left as f32, top as f32, right as f32 + 1.0, bottom as f32 + 1.0)
    } else {
        None
    };

    let rect = match rect {
        Some(rect) => rect,
        None => {
            debug!("Rectangle {},{},{},{} has nothing to draw.", left, top, right, bottom);
            return;
        }
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red(), color.green(), color.blue(), color.alpha());
    paint.blend_mode = BlendMode::Source;
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}

fn fill_polygon(pixmap: &mut Pixmap, vertices: &[(i32, i32)], color: ColorU8) {
    if scan::fill_polygon(pixmap, vertices, color).is_none() {
        debug!("Polygon {:?} has nothing to draw.", vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let c = pixmap.pixel(x, y).unwrap().demultiply();
        (c.red(), c.green(), c.blue(), c.alpha())
    }

    #[test]
    fn center_x() {
        assert_eq!(IconConfig::default().center_x(), 512);

        let mut config = IconConfig::default();
        config.size = 101;
        assert_eq!(config.center_x(), 50);
    }

    #[test]
    fn zero_size() {
        let mut config = IconConfig::default();
        config.size = 0;
        match render(&config) {
            Err(Error::InvalidSize { width: 0, height: 0 }) => {}
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn trunk_is_inclusive() {
        let mut config = IconConfig::default();
        // Move tiers out of the canvas.
        for tier in &mut config.tiers {
            tier.top = -100;
            tier.bottom = -50;
        }

        let pixmap = render(&config).unwrap();
        assert_eq!(rgba(&pixmap, 452, 700), (139, 90, 43, 255));
        assert_eq!(rgba(&pixmap, 511, 940), (139, 90, 43, 255));
        assert_eq!(rgba(&pixmap, 512, 700), (101, 67, 33, 255));
        assert_eq!(rgba(&pixmap, 572, 940), (101, 67, 33, 255));
        assert_eq!(rgba(&pixmap, 451, 800).3, 0);
        assert_eq!(rgba(&pixmap, 573, 800).3, 0);
        assert_eq!(rgba(&pixmap, 512, 699).3, 0);
        assert_eq!(rgba(&pixmap, 512, 941).3, 0);
    }

    #[test]
    fn inverted_trunk() {
        let mut config = IconConfig::default();
        config.trunk.top = 900;
        config.trunk.bottom = 800;
        for tier in &mut config.tiers {
            tier.top = -100;
            tier.bottom = -50;
        }

        let pixmap = render(&config).unwrap();
        assert!(pixmap.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn tier_shading() {
        let config = IconConfig {
            size: 64,
            trunk: Trunk {
                top: -20,
                bottom: -10,
                ..IconConfig::default().trunk
            },
            tiers: [Tier {
                top: 8,
                bottom: 40,
                half_width: 16,
                left_color: ColorU8::from_rgba(255, 0, 0, 255),
                right_color: ColorU8::from_rgba(0, 0, 255, 255),
            }; 3],
        };

        let pixmap = render(&config).unwrap();
        // Center column belongs to the right triangle, since it's drawn last.
        assert_eq!(rgba(&pixmap, 32, 30), (0, 0, 255, 255));
        assert_eq!(rgba(&pixmap, 31, 30), (255, 0, 0, 255));
        // Apex and base row are painted.
        assert_eq!(rgba(&pixmap, 32, 8), (0, 0, 255, 255));
        assert_eq!(rgba(&pixmap, 16, 40), (255, 0, 0, 255));
        assert_eq!(rgba(&pixmap, 31, 40), (255, 0, 0, 255));
        assert_eq!(rgba(&pixmap, 32, 40), (0, 0, 255, 255));
        assert_eq!(rgba(&pixmap, 48, 40), (0, 0, 255, 255));
        // Nothing outside.
        assert_eq!(rgba(&pixmap, 32, 7).3, 0);
        assert_eq!(rgba(&pixmap, 32, 41).3, 0);
        assert_eq!(rgba(&pixmap, 15, 40).3, 0);
        assert_eq!(rgba(&pixmap, 49, 40).3, 0);
    }

    #[test]
    fn clipped_shapes() {
        let mut config = IconConfig::default();
        config.size = 256;
        // Everything is larger than the canvas and must not panic.
        let pixmap = render(&config).unwrap();
        assert_eq!(pixmap.width(), 256);
        assert_eq!(pixmap.height(), 256);
    }
}
