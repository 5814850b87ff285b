//! Visual theming shared by the category cards and the galaxy canvas.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in [0, 1].
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS value: `#rrggbb` when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Edge visual style. Alpha and width grow linearly with edge strength.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Stroke color; its own alpha is replaced per edge.
	pub color: Color,
	/// Alpha of a zero-strength edge.
	pub base_alpha: f64,
	/// Extra alpha per unit of strength.
	pub alpha_per_strength: f64,
	/// Line width per unit of strength.
	pub width_per_strength: f64,
}

impl EdgeStyle {
	/// Stroke opacity for an edge of `strength`, clamped to [0, 1].
	pub fn alpha(&self, strength: f64) -> f64 {
		(self.base_alpha + self.alpha_per_strength * strength).clamp(0.0, 1.0)
	}

	/// Line width for an edge of `strength`.
	pub fn width(&self, strength: f64) -> f64 {
		self.width_per_strength * strength
	}
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Radius of the opaque core circle.
	pub radius: f64,
	/// Halo radius as a multiple of `radius`.
	pub halo_scale: f64,
	/// Opacity of the halo drawn in the category color.
	pub halo_alpha: f64,
	/// Opacity of the core once its pill has been opened.
	pub read_alpha: f64,
}

impl NodeStyle {
	/// Core opacity: full for unread pills, dimmed for read ones.
	pub fn core_alpha(&self, read: bool) -> f64 {
		if read { self.read_alpha } else { 1.0 }
	}
}

/// Complete visual theme for the galaxy view.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Preset name, for logs.
	pub name: &'static str,
	/// Canvas fill behind everything.
	pub background: Color,
	/// Shared-tag edge style.
	pub edge: EdgeStyle,
	/// Pill node style.
	pub node: NodeStyle,
}

impl Theme {
	/// Deep space backdrop used in dark mode.
	pub fn night() -> Self {
		Self {
			name: "night",
			background: Color::rgb(14, 17, 26),
			edge: EdgeStyle {
				color: Color::rgb(255, 255, 255),
				base_alpha: 0.05,
				alpha_per_strength: 0.3,
				width_per_strength: 2.0,
			},
			node: NodeStyle {
				radius: 5.0,
				halo_scale: 2.0,
				halo_alpha: 0.3,
				read_alpha: 0.45,
			},
		}
	}

	/// Paper backdrop used in light mode.
	pub fn day() -> Self {
		Self {
			name: "day",
			background: Color::rgb(245, 243, 238),
			edge: EdgeStyle {
				color: Color::rgb(40, 44, 52),
				base_alpha: 0.05,
				alpha_per_strength: 0.3,
				width_per_strength: 2.0,
			},
			node: NodeStyle {
				radius: 5.0,
				halo_scale: 2.0,
				halo_alpha: 0.25,
				read_alpha: 0.4,
			},
		}
	}

	/// Night theme in dark mode, day theme otherwise.
	pub fn for_mode(dark_mode: bool) -> Self {
		if dark_mode { Self::night() } else { Self::day() }
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::night()
	}
}
