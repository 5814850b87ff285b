//! UI components: pages, layout chrome, and the galaxy canvas.

pub mod archive;
pub mod detail;
pub mod explore;
pub mod galaxy;
pub mod home;
pub mod layout;
pub mod settings;

/// Human-readable listening time, e.g. `3 min 20 s`.
pub fn format_duration(seconds: u32) -> String {
	match (seconds / 60, seconds % 60) {
		(0, s) => format!("{s} s"),
		(m, 0) => format!("{m} min"),
		(m, s) => format!("{m} min {s} s"),
	}
}

#[cfg(test)]
mod tests {
	use super::format_duration;

	#[test]
	fn durations() {
		assert_eq!(format_duration(0), "0 s");
		assert_eq!(format_duration(45), "45 s");
		assert_eq!(format_duration(120), "2 min");
		assert_eq!(format_duration(200), "3 min 20 s");
	}
}
