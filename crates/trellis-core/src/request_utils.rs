//! Request path helpers.
//!
//! Pure string functions: relative-to-absolute path resolution, `..`
//! collapsing and query-string decoding into [`PageParameters`].

use crate::parameters::PageParameters;
use crate::url::decode_query_component;

const PARENT: &str = "..";

/// Resolves `relative` against the absolute `base` URL.
///
/// Everything after the last `/` of `base` is dropped, then each leading
/// `../` of `relative` removes one more trailing directory. Removal stops at
/// the root: the authority of a `scheme://host` base, the leading `/` of an
/// absolute path, or the empty path.
///
/// # Examples
///
/// ```
/// use trellis_core::to_absolute_path;
///
/// assert_eq!(to_absolute_path("http://x/a/b/c", "../../d"), "http://x/d");
/// assert_eq!(to_absolute_path("http://x/a/b/", "d"), "http://x/a/b/d");
/// ```
pub fn to_absolute_path(base: &str, relative: &str) -> String {
	let mut rest = relative;
	let mut levels = 0usize;
	while let Some(stripped) = rest.strip_prefix("../") {
		rest = stripped;
		levels += 1;
	}

	let Some(last_slash) = base.rfind('/') else {
		return rest.to_string();
	};

	let segments: Vec<&str> = base[..last_slash].split('/').collect();
	let keep = segments
		.len()
		.saturating_sub(levels)
		.max(root_depth(&segments));
	if keep == 0 {
		return rest.to_string();
	}

	let mut resolved = segments[..keep].join("/");
	resolved.push('/');
	resolved.push_str(rest);
	resolved
}

/// Number of leading directory segments that `..` may never remove.
fn root_depth(segments: &[&str]) -> usize {
	match segments {
		// "scheme:" "" "host"
		[scheme, "", _, ..] if scheme.ends_with(':') => 3,
		// leading "/"
		["", ..] => 1,
		_ => 0,
	}
}

/// Collapses every `segment/..` pair of a slash-delimited path.
///
/// Pairs are collapsed left to right, repeatedly, so `a/b/../../c` becomes
/// `c`. Empty segments and `..` segments are never consumed by a following
/// `..`, and a trailing slash survives.
///
/// # Examples
///
/// ```
/// use trellis_core::remove_double_dots;
///
/// assert_eq!(remove_double_dots("a/b/../c"), "a/c");
/// assert_eq!(remove_double_dots("a/b/../c/"), "a/c/");
/// ```
pub fn remove_double_dots(path: &str) -> String {
	let collapsed = path.split('/').fold(Vec::new(), |mut kept: Vec<&str>, segment| {
		let collapsible = matches!(kept.last(), Some(previous) if !previous.is_empty() && *previous != PARENT);
		if segment == PARENT && collapsible {
			kept.pop();
		} else {
			kept.push(segment);
		}
		kept
	});

	let mut result = collapsed.join("/");
	if path.ends_with('/') && !result.ends_with('/') {
		result.push('/');
	}
	result
}

/// Decodes a `k=v&k=v` query string into named page parameters.
///
/// Pairs split on the first `=` only, so values may contain `=`. A pair
/// without `=` gets an empty value. Repeated names accumulate values in
/// order. A leading `?` is ignored.
///
/// # Examples
///
/// ```
/// use trellis_core::decode_parameters;
///
/// let params = decode_parameters("a=1&b=x%20y&a=2&token=ab==");
/// assert_eq!(params.values("a"), ["1", "2"]);
/// assert_eq!(params.get("b"), Some("x y"));
/// assert_eq!(params.get("token"), Some("ab=="));
/// ```
pub fn decode_parameters(query: &str) -> PageParameters {
	let query = query.strip_prefix('?').unwrap_or(query);
	let mut parameters = PageParameters::new();
	for pair in query.split('&').filter(|pair| !pair.is_empty()) {
		let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
		parameters.add(decode_query_component(name), decode_query_component(value));
	}
	parameters
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("http://x/a/b/c", "../../d", "http://x/d")]
	#[case("http://x/a/b/c", "d", "http://x/a/b/d")]
	#[case("http://x/a/b/", "", "http://x/a/b/")]
	#[case("http://x/a/b/", "../d/", "http://x/a/d/")]
	#[case("http://x/a", "../../../d", "http://x/d")]
	#[case("/app/page", "../../other", "/other")]
	#[case("app/page/x", "../../other", "other")]
	#[case("page", "../other", "other")]
	fn test_to_absolute_path(#[case] base: &str, #[case] relative: &str, #[case] expected: &str) {
		assert_eq!(to_absolute_path(base, relative), expected);
	}

	#[rstest]
	#[case("a/b/../c", "a/c")]
	#[case("a/b/../c/", "a/c/")]
	#[case("a/b/../../c", "c")]
	#[case("/a/../b", "/b")]
	#[case("a/../../b", "../b")]
	#[case("../..", "../..")]
	#[case("a//../b", "a//../b")]
	#[case("a/b/..", "a")]
	#[case("a/b/../", "a/")]
	#[case("no/dots/here/", "no/dots/here/")]
	fn test_remove_double_dots(#[case] path: &str, #[case] expected: &str) {
		assert_eq!(remove_double_dots(path), expected);
	}

	#[rstest]
	fn test_decode_parameters_keeps_extra_equals() {
		// Arrange
		let query = "?x=a=b=c&empty&=v";

		// Act
		let params = decode_parameters(query);

		// Assert
		assert_eq!(params.get("x"), Some("a=b=c"));
		assert_eq!(params.get("empty"), Some(""));
		assert_eq!(params.get(""), Some("v"));
	}
}
