use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

static DATE_FORMAT: &[FormatItem<'static>] =
	format_description!("[month repr:short] [day padding:none], [year]");

/// Compact display form of a view count: `1.2M`, `890.0K`, `42`.
pub fn format_view_count(count: u64) -> String {
	if count >= MILLION {
		format!("{:.1}M", count as f64 / MILLION as f64)
	} else if count >= THOUSAND {
		format!("{:.1}K", count as f64 / THOUSAND as f64)
	} else {
		count.to_string()
	}
}

pub fn format_views(count: u64) -> String {
	format!("{} views", format_view_count(count))
}

/// Formats a timestamp as `Jan 5, 2024`, in the timestamp's own offset.
pub fn format_date(value: OffsetDateTime) -> String {
	value
		.format(DATE_FORMAT)
		.unwrap_or_else(|_| value.date().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use time::macros::datetime;

	fn is_compact(value: &str) -> bool {
		let digits = value.trim_end_matches(['K', 'M']);
		if digits.len() + 1 < value.len() {
			return false;
		}

		match digits.split_once('.') {
			None => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()),
			Some((int, frac)) => {
				!int.is_empty()
					&& int.chars().all(|c| c.is_ascii_digit())
					&& frac.len() == 1
					&& frac.chars().all(|c| c.is_ascii_digit())
			}
		}
	}

	#[test]
	fn small_counts_are_plain_integers() {
		assert_eq!(format_view_count(0), "0");
		assert_eq!(format_view_count(42), "42");
		assert_eq!(format_view_count(999), "999");
	}

	#[test]
	fn thousands_use_k_suffix() {
		assert_eq!(format_view_count(1_000), "1.0K");
		assert_eq!(format_view_count(890_000), "890.0K");
		assert_eq!(format_view_count(999_999), "1000.0K");
	}

	#[test]
	fn millions_use_m_suffix() {
		assert_eq!(format_view_count(1_000_000), "1.0M");
		assert_eq!(format_view_count(1_200_000), "1.2M");
		assert_eq!(format_view_count(35_000_000), "35.0M");
	}

	#[test]
	fn output_shape_holds_across_magnitudes() {
		let mut count = 1u64;
		while count < 10_000_000_000 {
			for value in [count - 1, count, count + 1, count * 3 + 7] {
				let formatted = format_view_count(value);
				assert!(is_compact(&formatted), "{value} -> {formatted}");
			}
			count *= 10;
		}
	}

	#[test]
	fn views_label() {
		assert_eq!(format_views(1_200_000), "1.2M views");
		assert_eq!(format_views(1), "1 views");
	}

	#[test]
	fn dates_render_short_month() {
		assert_eq!(format_date(datetime!(2024-01-05 12:30 UTC)), "Jan 5, 2024");
		assert_eq!(format_date(datetime!(2023-11-21 00:00 +02:00)), "Nov 21, 2023");
	}
}
