//! One-way visibility state for revealable elements.
//!
//! A [`RevealTracker`] starts [`RevealState::Hidden`] and flips to
//! [`RevealState::Revealed`] the first time an observed intersection ratio
//! reaches its threshold. There is no way back.

use crate::motion::{DEFAULT_DISTANCE, DEFAULT_DURATION, DEFAULT_REVEAL_THRESHOLD, EASE_OUT_EXPO};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    state: RevealState,
}

impl RevealTracker {
    /// Thresholds outside `0.0..=1.0` are clamped; NaN falls back to the default.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            state: RevealState::Hidden,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feeds one observed intersection ratio.
    ///
    /// Returns `true` only for the observation that causes the transition.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.state == RevealState::Revealed || !(ratio >= self.threshold) {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }

    /// Reveals without an observation. Used when the host cannot observe visibility.
    pub fn reveal_now(&mut self) -> bool {
        let changed = self.state == RevealState::Hidden;
        self.state = RevealState::Revealed;
        changed
    }
}

/// Largest ratio among the intersecting entries of one observer batch.
///
/// `None` when nothing in the batch intersects, so a threshold of zero
/// cannot be met by an element that is off screen.
pub fn batch_ratio(entries: impl IntoIterator<Item = (bool, f64)>) -> Option<f64> {
    entries
        .into_iter()
        .filter(|(intersecting, _)| *intersecting)
        .map(|(_, ratio)| ratio)
        .reduce(f64::max)
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

/// Entrance parameters of a revealable element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    /// Pixels below the rest position while hidden.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            duration: DEFAULT_DURATION,
            delay: 0.0,
        }
    }
}

impl RevealStyle {
    /// Inline CSS for the element in `state`. The browser interpolates between the two targets.
    pub fn css(&self, state: RevealState) -> String {
        let (opacity, transform) = match state {
            RevealState::Revealed => ("1".to_string(), "translateY(0)".to_string()),
            RevealState::Hidden => ("0".to_string(), format!("translateY({}px)", self.distance)),
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s;",
            d = self.duration,
            ease = EASE_OUT_EXPO,
            delay = self.delay,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn starts_hidden() {
        assert_eq!(RevealTracker::new(0.15).state(), RevealState::Hidden);
    }

    #[rstest]
    #[case(&[0.0, 0.05, 0.149], RevealState::Hidden)]
    #[case(&[0.15], RevealState::Revealed)]
    #[case(&[0.1, 0.2, 0.0], RevealState::Revealed)]
    #[case(&[1.0], RevealState::Revealed)]
    fn revealed_iff_threshold_was_reached(#[case] ratios: &[f64], #[case] expected: RevealState) {
        let mut tracker = RevealTracker::new(0.15);
        for ratio in ratios {
            tracker.observe(*ratio);
        }
        assert_eq!(tracker.state(), expected);
    }

    #[test]
    fn never_flips_back() {
        let mut tracker = RevealTracker::new(0.15);
        assert!(tracker.observe(0.5));
        for ratio in [0.0, 0.01, 0.14, 0.0] {
            assert!(!tracker.observe(ratio));
            assert_eq!(tracker.state(), RevealState::Revealed);
        }
    }

    #[test]
    fn transition_is_reported_once() {
        let mut tracker = RevealTracker::new(0.1);
        let transitions = [0.2, 0.3, 1.0, 0.5]
            .into_iter()
            .filter(|ratio| tracker.observe(*ratio))
            .count();
        assert_eq!(transitions, 1);
    }

    #[test]
    fn nan_ratio_is_ignored() {
        let mut tracker = RevealTracker::new(0.15);
        assert!(!tracker.observe(f64::NAN));
        assert_eq!(tracker.state(), RevealState::Hidden);
    }

    #[rstest]
    #[case(-1.0, 0.0)]
    #[case(2.5, 1.0)]
    #[case(f64::NAN, DEFAULT_REVEAL_THRESHOLD)]
    #[case(0.08, 0.08)]
    fn threshold_is_sanitized(#[case] given: f64, #[case] expected: f64) {
        assert_eq!(RevealTracker::new(given).threshold(), expected);
    }

    #[test]
    fn empty_batch_has_no_ratio() {
        assert_eq!(batch_ratio(Vec::<(bool, f64)>::new()), None);
    }

    #[test]
    fn non_intersecting_batch_has_no_ratio() {
        assert_eq!(batch_ratio([(false, 0.0), (false, 0.3)]), None);
    }

    #[test]
    fn batch_ratio_takes_largest_intersecting_entry() {
        assert_eq!(batch_ratio([(true, 0.1), (false, 0.9), (true, 0.4)]), Some(0.4));
        assert_eq!(batch_ratio([(true, 0.0)]), Some(0.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn zero_threshold_stays_hidden_while_off_screen(#[case] threshold: f64) {
        let mut tracker = RevealTracker::new(threshold);
        let batches: [&[(bool, f64)]; 3] = [&[], &[(false, 0.0)], &[(false, 0.0), (false, 0.0)]];
        for batch in batches {
            if let Some(ratio) = batch_ratio(batch.iter().copied()) {
                tracker.observe(ratio);
            }
        }
        assert_eq!(tracker.state(), RevealState::Hidden);

        let edge = batch_ratio([(true, 0.0)]).unwrap();
        assert!(tracker.observe(edge));
    }

    #[test]
    fn reveal_now_is_one_shot() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.reveal_now());
        assert!(!tracker.reveal_now());
        assert!(!tracker.observe(1.0));
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = RevealStyle { distance: 44.0, duration: 0.8, delay: 0.25 };
        let css = style.css(RevealState::Hidden);
        assert!(css.starts_with("opacity: 0; transform: translateY(44px);"));
        assert!(css.contains("opacity 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0.25s"));
        assert!(css.contains("transform 0.8s cubic-bezier(0.16, 1, 0.3, 1) 0.25s"));
    }

    #[test]
    fn revealed_style_is_at_rest() {
        let css = RevealStyle::default().css(RevealState::Revealed);
        assert!(css.starts_with("opacity: 1; transform: translateY(0);"));
        assert!(css.contains("0.7s"));
    }
}
