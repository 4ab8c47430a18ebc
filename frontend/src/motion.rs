//! Timing and easing shared by every animated element on the page.

/// Ease-out curve used by all reveal transitions.
pub const EASE_OUT_EXPO: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

/// Fraction of an element that must be on screen before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
/// Pixels a hidden element sits below its rest position.
pub const DEFAULT_DISTANCE: f64 = 36.0;
/// Seconds.
pub const DEFAULT_DURATION: f64 = 0.7;

/// Delay before the hero copy fades in after mount.
pub const HERO_LOAD_DELAY_MS: u32 = 100;
/// Delay between closing the mobile menu and starting the smooth scroll,
/// so the overlay fade-out does not fight the scroll.
pub const MENU_SCROLL_DELAY_MS: u32 = 250;

/// Delay in seconds for the `index`-th element of a cascading group.
///
/// Rounded to whole milliseconds so the emitted CSS stays readable.
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    ((base + index as f64 * step) * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.25, 0.1, 0, 0.25)]
    #[case(0.25, 0.1, 3, 0.55)]
    #[case(0.1, 0.12, 3, 0.46)]
    #[case(0.08, 0.04, 5, 0.28)]
    fn stagger_is_linear_in_index(
        #[case] base: f64,
        #[case] step: f64,
        #[case] index: usize,
        #[case] expected: f64,
    ) {
        assert_eq!(stagger(base, step, index), expected);
    }

    #[test]
    fn stagger_never_decreases() {
        let delays: Vec<f64> = (0..10).map(|i| stagger(0.25, 0.08, i)).collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }
}
