/*!
`horiztree-icon` draws the HorizTree application icon: a layered tree
made of a trunk and three shaded tiers, rendered onto a transparent
[`tiny_skia::Pixmap`] and saved as PNG.

Tiers are filled so that every triangle covers its own outline,
including the apex pixel and the base row.
*/

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

mod error;
mod icon;
mod scan;

pub use error::Error;
pub use icon::{IconConfig, Tier, Trunk, render, render_to_file, save};
pub use scan::fill_polygon;

pub use tiny_skia::{ColorU8, Pixmap};
