//! Theme token sets with light/dark built-ins and deep-merge overrides
//!
//! A [`Theme`] is constructed once (per app or per override) and read-only
//! afterwards. Hosts resolve one through the layered lookup in
//! [`crate::context`]: direct prop, then ambient environment, then the
//! built-in light theme.

use serde::{Deserialize, Serialize};

/// Color tokens. Values are CSS-style hex strings the host renderer
/// interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
	/// Primary brand color: buttons, links, active states.
	pub primary: String,
	pub secondary: String,
	pub background: String,
	/// Card/surface background.
	pub surface: String,
	pub text: String,
	pub text_secondary: String,
	pub placeholder: String,
	pub error: String,
	pub success: String,
	pub warning: String,
	pub border: String,
	pub border_focused: String,
	pub disabled: String,
}

/// Typography tokens. Sizes are in density-independent points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub font_family_heading: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub font_family_body: Option<String>,
	pub font_size_title: u32,
	pub font_size_subtitle: u32,
	pub font_size_body: u32,
	pub font_size_small: u32,
	pub font_size_button: u32,
}

/// Spacing scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSpacing {
	pub xs: u32,
	pub sm: u32,
	pub md: u32,
	pub lg: u32,
	pub xl: u32,
	pub xxl: u32,
}

/// Corner radius scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeBorderRadius {
	pub sm: u32,
	pub md: u32,
	pub lg: u32,
	/// Pill radius.
	pub full: u32,
}

/// A complete theme token set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
	pub colors: ThemeColors,
	pub typography: ThemeTypography,
	pub spacing: ThemeSpacing,
	pub border_radius: ThemeBorderRadius,
	pub is_dark: bool,
}

impl Theme {
	/// The built-in light theme.
	///
	/// # Examples
	///
	/// ```
	/// use auth_forms::Theme;
	///
	/// let theme = Theme::light();
	/// assert!(!theme.is_dark);
	/// assert_eq!(theme.colors.primary, "#6366f1");
	/// ```
	pub fn light() -> Self {
		Self {
			colors: ThemeColors {
				primary: "#6366f1".to_string(),
				secondary: "#8b5cf6".to_string(),
				background: "#ffffff".to_string(),
				surface: "#f8fafc".to_string(),
				text: "#1f2937".to_string(),
				text_secondary: "#6b7280".to_string(),
				placeholder: "#9ca3af".to_string(),
				error: "#ef4444".to_string(),
				success: "#22c55e".to_string(),
				warning: "#f59e0b".to_string(),
				border: "#e5e7eb".to_string(),
				border_focused: "#6366f1".to_string(),
				disabled: "#d1d5db".to_string(),
			},
			typography: default_typography(),
			spacing: default_spacing(),
			border_radius: default_border_radius(),
			is_dark: false,
		}
	}

	/// The built-in dark theme.
	pub fn dark() -> Self {
		Self {
			colors: ThemeColors {
				primary: "#818cf8".to_string(),
				secondary: "#a78bfa".to_string(),
				background: "#111827".to_string(),
				surface: "#1f2937".to_string(),
				text: "#f9fafb".to_string(),
				text_secondary: "#9ca3af".to_string(),
				placeholder: "#6b7280".to_string(),
				error: "#f87171".to_string(),
				success: "#4ade80".to_string(),
				warning: "#fbbf24".to_string(),
				border: "#374151".to_string(),
				border_focused: "#818cf8".to_string(),
				disabled: "#4b5563".to_string(),
			},
			typography: default_typography(),
			spacing: default_spacing(),
			border_radius: default_border_radius(),
			is_dark: true,
		}
	}

	/// Build a custom theme by deep-merging overrides into a built-in
	/// base. The base is picked by `overrides.is_dark`.
	///
	/// # Examples
	///
	/// ```
	/// use auth_forms::theme::{Theme, ThemeOverrides, ThemeColorOverrides};
	///
	/// let theme = Theme::custom(ThemeOverrides {
	/// 	colors: Some(ThemeColorOverrides {
	/// 		primary: Some("#0ea5e9".to_string()),
	/// 		..ThemeColorOverrides::default()
	/// 	}),
	/// 	..ThemeOverrides::default()
	/// });
	///
	/// assert_eq!(theme.colors.primary, "#0ea5e9");
	/// // Untouched tokens keep the light-theme defaults.
	/// assert_eq!(theme.colors.error, "#ef4444");
	/// ```
	pub fn custom(overrides: ThemeOverrides) -> Self {
		let base = if overrides.is_dark.unwrap_or(false) {
			Self::dark()
		} else {
			Self::light()
		};
		overrides.apply_to(base)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

fn default_typography() -> ThemeTypography {
	ThemeTypography {
		font_family_heading: None,
		font_family_body: None,
		font_size_title: 28,
		font_size_subtitle: 16,
		font_size_body: 14,
		font_size_small: 12,
		font_size_button: 16,
	}
}

fn default_spacing() -> ThemeSpacing {
	ThemeSpacing {
		xs: 4,
		sm: 8,
		md: 16,
		lg: 24,
		xl: 32,
		xxl: 48,
	}
}

fn default_border_radius() -> ThemeBorderRadius {
	ThemeBorderRadius {
		sm: 6,
		md: 12,
		lg: 16,
		full: 9999,
	}
}

/// Sparse color overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeColorOverrides {
	pub primary: Option<String>,
	pub secondary: Option<String>,
	pub background: Option<String>,
	pub surface: Option<String>,
	pub text: Option<String>,
	pub text_secondary: Option<String>,
	pub placeholder: Option<String>,
	pub error: Option<String>,
	pub success: Option<String>,
	pub warning: Option<String>,
	pub border: Option<String>,
	pub border_focused: Option<String>,
	pub disabled: Option<String>,
}

/// Sparse typography overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeTypographyOverrides {
	pub font_family_heading: Option<String>,
	pub font_family_body: Option<String>,
	pub font_size_title: Option<u32>,
	pub font_size_subtitle: Option<u32>,
	pub font_size_body: Option<u32>,
	pub font_size_small: Option<u32>,
	pub font_size_button: Option<u32>,
}

/// Sparse spacing overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpacingOverrides {
	pub xs: Option<u32>,
	pub sm: Option<u32>,
	pub md: Option<u32>,
	pub lg: Option<u32>,
	pub xl: Option<u32>,
	pub xxl: Option<u32>,
}

/// Sparse radius overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeBorderRadiusOverrides {
	pub sm: Option<u32>,
	pub md: Option<u32>,
	pub lg: Option<u32>,
	pub full: Option<u32>,
}

/// Deep-partial theme: every token optional, merged over a built-in base
/// by [`Theme::custom`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOverrides {
	pub colors: Option<ThemeColorOverrides>,
	pub typography: Option<ThemeTypographyOverrides>,
	pub spacing: Option<ThemeSpacingOverrides>,
	pub border_radius: Option<ThemeBorderRadiusOverrides>,
	pub is_dark: Option<bool>,
}

impl ThemeOverrides {
	fn apply_to(self, mut base: Theme) -> Theme {
		if let Some(colors) = self.colors {
			let c = &mut base.colors;
			merge(&mut c.primary, colors.primary);
			merge(&mut c.secondary, colors.secondary);
			merge(&mut c.background, colors.background);
			merge(&mut c.surface, colors.surface);
			merge(&mut c.text, colors.text);
			merge(&mut c.text_secondary, colors.text_secondary);
			merge(&mut c.placeholder, colors.placeholder);
			merge(&mut c.error, colors.error);
			merge(&mut c.success, colors.success);
			merge(&mut c.warning, colors.warning);
			merge(&mut c.border, colors.border);
			merge(&mut c.border_focused, colors.border_focused);
			merge(&mut c.disabled, colors.disabled);
		}
		if let Some(typography) = self.typography {
			let t = &mut base.typography;
			if typography.font_family_heading.is_some() {
				t.font_family_heading = typography.font_family_heading;
			}
			if typography.font_family_body.is_some() {
				t.font_family_body = typography.font_family_body;
			}
			merge(&mut t.font_size_title, typography.font_size_title);
			merge(&mut t.font_size_subtitle, typography.font_size_subtitle);
			merge(&mut t.font_size_body, typography.font_size_body);
			merge(&mut t.font_size_small, typography.font_size_small);
			merge(&mut t.font_size_button, typography.font_size_button);
		}
		if let Some(spacing) = self.spacing {
			let s = &mut base.spacing;
			merge(&mut s.xs, spacing.xs);
			merge(&mut s.sm, spacing.sm);
			merge(&mut s.md, spacing.md);
			merge(&mut s.lg, spacing.lg);
			merge(&mut s.xl, spacing.xl);
			merge(&mut s.xxl, spacing.xxl);
		}
		if let Some(radius) = self.border_radius {
			let r = &mut base.border_radius;
			merge(&mut r.sm, radius.sm);
			merge(&mut r.md, radius.md);
			merge(&mut r.lg, radius.lg);
			merge(&mut r.full, radius.full);
		}
		if let Some(is_dark) = self.is_dark {
			base.is_dark = is_dark;
		}
		base
	}
}

fn merge<T>(slot: &mut T, value: Option<T>) {
	if let Some(value) = value {
		*slot = value;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_light_and_dark_differ_in_tokens_not_shape() {
		let light = Theme::light();
		let dark = Theme::dark();

		assert!(!light.is_dark);
		assert!(dark.is_dark);
		assert_ne!(light.colors.background, dark.colors.background);
		assert_eq!(light.spacing, dark.spacing);
		assert_eq!(light.border_radius, dark.border_radius);
	}

	#[test]
	fn test_custom_merges_over_light_base() {
		let theme = Theme::custom(ThemeOverrides {
			colors: Some(ThemeColorOverrides {
				primary: Some("#123456".to_string()),
				..ThemeColorOverrides::default()
			}),
			spacing: Some(ThemeSpacingOverrides {
				md: Some(20),
				..ThemeSpacingOverrides::default()
			}),
			..ThemeOverrides::default()
		});

		assert_eq!(theme.colors.primary, "#123456");
		assert_eq!(theme.colors.background, Theme::light().colors.background);
		assert_eq!(theme.spacing.md, 20);
		assert_eq!(theme.spacing.lg, 24);
	}

	#[test]
	fn test_custom_dark_base_selected_by_flag() {
		let theme = Theme::custom(ThemeOverrides {
			is_dark: Some(true),
			..ThemeOverrides::default()
		});

		assert!(theme.is_dark);
		assert_eq!(theme.colors.background, Theme::dark().colors.background);
	}

	#[test]
	fn test_theme_serializes_camel_case() {
		let value = serde_json::to_value(Theme::light()).unwrap();
		assert!(value["colors"]["textSecondary"].is_string());
		assert!(value["borderRadius"]["full"].is_number());
	}
}
