// src/capability.rs
use once_cell::sync::Lazy;

// Resolved once per process; formatter construction branches on the cached value.
static RICH_RENDERING: Lazy<bool> = Lazy::new(|| cfg!(feature = "rich"));

/// Whether styled console rendering can be used.
///
/// Absence is a normal outcome that selects the plain console layout; the
/// probe has no failure mode.
pub fn rich_rendering_available() -> bool {
    *RICH_RENDERING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_matches_build_features() {
        assert_eq!(rich_rendering_available(), cfg!(feature = "rich"));
        // Second call reads the cached value.
        assert_eq!(rich_rendering_available(), rich_rendering_available());
    }
}
