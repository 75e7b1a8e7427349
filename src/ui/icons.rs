//! Icon capability seam
//!
//! Icon rendering is injected: hosts with a real icon library implement
//! [`IconProvider`]; everyone else gets [`TextGlyphIcons`], which maps the
//! known icon names to text glyphs and never fails.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A resolved icon: plain data the host renderer can draw or replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconGlyph {
	pub name: String,
	/// Textual stand-in when no icon asset is available.
	pub glyph: String,
	pub size: u16,
	pub color: String,
}

/// Pluggable icon resolution.
pub trait IconProvider: Send + Sync {
	fn render_icon(&self, name: &str, size: u16, color: &str) -> IconGlyph;
}

/// Default provider: text glyphs, unknown names degrade to a neutral
/// placeholder instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextGlyphIcons;

impl IconProvider for TextGlyphIcons {
	fn render_icon(&self, name: &str, size: u16, color: &str) -> IconGlyph {
		let glyph = match name {
			"mail" => "✉",
			"lock" => "🔒",
			"user" => "👤",
			"phone" => "📞",
			"eye" => "👁",
			"eye-off" => "⊘",
			"search" => "🔍",
			"close" => "✕",
			"check" => "✓",
			"fingerprint" => "⊙",
			"face-id" => "☺",
			"google" => "G",
			"apple" => "\u{f8ff}",
			"facebook" => "f",
			"twitter" => "𝕏",
			"github" => "⎇",
			_ => "•",
		};
		IconGlyph {
			name: name.to_string(),
			glyph: glyph.to_string(),
			size,
			color: color.to_string(),
		}
	}
}

/// The provider used when the caller supplies none.
pub fn default_icon_provider() -> Arc<dyn IconProvider> {
	Arc::new(TextGlyphIcons)
}
