//! Fixed color palette for the canview application icon
//!
//! Matches the colors used in the app's SVG artwork (`#1e293b` background,
//! emerald/blue/indigo nodes).

use image::Rgba;

/// Canvas background, `#1e293b`
pub const BACKGROUND: Rgba<u8> = Rgba([30, 41, 59, 255]);

/// Outer node pair, `#34d399`
pub const NODE_OUTER: Rgba<u8> = Rgba([52, 211, 153, 255]);

/// Inner node pair, `#60a5fa`
pub const NODE_INNER: Rgba<u8> = Rgba([96, 165, 250, 255]);

/// Center node, `#818cf8`
pub const NODE_CENTER: Rgba<u8> = Rgba([129, 140, 248, 255]);
