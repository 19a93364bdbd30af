// Copyright 2026 The HorizTree Authors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use tiny_skia::{ColorU8, Pixmap, PremultipliedColorU8};

/// A polygon edge between two whole-pixel vertices.
#[derive(Clone, Copy, Debug)]
struct Edge {
    // The first vertex as it was given, not the top one.
    x0: i32,
    y0: i32,
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
    dx: f32,
}

impl Edge {
    fn new(p0: (i32, i32), p1: (i32, i32)) -> Self {
        let (x0, y0) = p0;
        let (x1, y1) = p1;

        let dx = if y0 == y1 {
            0.0
        } else {
            (i64::from(x1) - i64::from(x0)) as f32 / (i64::from(y1) - i64::from(y0)) as f32
        };

        Edge {
            x0,
            y0,
            x_min: x0.min(x1),
            x_max: x0.max(x1),
            y_min: y0.min(y1),
            y_max: y0.max(y1),
            dx,
        }
    }

    fn is_horizontal(&self) -> bool {
        self.y_min == self.y_max
    }

    fn contains_y(&self, y: i32) -> bool {
        self.y_min <= y && y <= self.y_max
    }

    fn x_at(&self, y: i32) -> f32 {
        (i64::from(y) - i64::from(self.y0)) as f32 * self.dx + self.x0 as f32
    }
}

/// Fills a closed polygon, overwriting the covered pixels.
///
/// Each scanline `y` is crossed with the edges exactly at `y`, and the span
/// between a pair of crossings is painted including both ends.
/// Horizontal edges are painted as is. So a polygon always covers its own
/// outline: the apex pixel and the base row of a triangle are both painted.
///
/// Parts outside the pixmap are clipped.
///
/// Returns `None` when less than two vertices are provided.
pub fn fill_polygon(pixmap: &mut Pixmap, vertices: &[(i32, i32)], color: ColorU8) -> Option<()> {
    if vertices.len() < 2 {
        return None;
    }

    let color = color.premultiply();

    let mut edges: Vec<Edge> = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p0, p1)| Edge::new(*p0, *p1))
        .collect();

    let top = edges.iter().map(|e| e.y_min).min()?;
    let bottom = edges.iter().map(|e| e.y_max).max()?;

    for edge in edges.iter().filter(|e| e.is_horizontal()) {
        hline(pixmap, edge.x_min, edge.y_min, edge.x_max, color);
    }
    edges.retain(|e| !e.is_horizontal());

    let first_y = top.max(0);
    let last_y = bottom.min(pixmap.height() as i32);

    let mut crossings = Vec::with_capacity(edges.len() * 2);
    for y in first_y..=last_y {
        crossings.clear();
        for edge in edges.iter().filter(|e| e.contains_y(y)) {
            let x = edge.x_at(y);
            crossings.push(x);

            // The next edge starts at the same vertex and will be counted too.
            // Keep crossings paired.
            if y == edge.y_max && y < last_y {
                crossings.push(x);
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        let mut next_x = 0;
        for pair in crossings.chunks_exact(2) {
            let end = span_end(pair[1]);
            if end < next_x {
                continue;
            }

            let start = span_start(pair[0]).max(next_x);
            hline(pixmap, start, y, end, color);
            next_x = end.saturating_add(1);
        }
    }

    Some(())
}

// Rounds halves away from zero.
fn span_start(x: f32) -> i32 {
    if x >= 0.0 {
        (x + 0.5).floor() as i32
    } else {
        -((x.abs() + 0.5).floor() as i32)
    }
}

// Rounds halves toward zero.
fn span_end(x: f32) -> i32 {
    if x >= 0.0 {
        (x - 0.5).ceil() as i32
    } else {
        -((x.abs() - 0.5).ceil() as i32)
    }
}

// Both ends are inclusive.
fn hline(pixmap: &mut Pixmap, x0: i32, y: i32, x1: i32, color: PremultipliedColorU8) {
    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    if y < 0 || y >= height {
        return;
    }

    let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    if x1 < 0 || x0 >= width {
        return;
    }

    let row = y as usize * width as usize;
    let start = row + x0.max(0) as usize;
    let end = row + x1.min(width - 1) as usize;
    for p in &mut pixmap.pixels_mut()[start..=end] {
        *p = color;
    }
}
