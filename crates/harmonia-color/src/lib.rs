// SPDX-License-Identifier: MIT
//
// harmonia-color — the color conversion layer for harmonia.
//
// HSV is the authoritative representation: every scheme and variation
// operates on it, and RGB/hex are derived views for output. The pipeline
// only ever runs in one direction for generation:
//
//   Hsv → Rgb → (web-safe snap) → hex string
//
// The reverse path (hex → Rgb → Hsv) exists solely to resolve a base color
// supplied as a hex string.
//
// Out-of-range numeric input is normalized (hue wraps, saturation/value
// clamp), never rejected. Only structurally malformed hex strings fail.

// Single-char math variables (h, s, v, r, g, b, c, x, m) are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod color;
pub mod hex;

pub use color::{Hsv, Rgb, hue_diff, interpolate_hue, normalize_hue};
pub use hex::HexError;
