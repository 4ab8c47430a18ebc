//! Values derived from the scroll position. Everything here is a pure function of
//! the scroll offset, the viewport height and the section rectangles.

use crate::config::{ACTIVE_LINE_FRACTION, INDICATOR_VISIBLE_FRACTION, NAV_SCROLLED_AFTER_PX};
use crate::sections::Section;

/// Viewport-relative vertical extent of a section, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    fn straddles(&self, line: f64) -> bool {
        self.top <= line && line < self.bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: u32,
    pub viewport_height: f64,
    pub active_section: Option<&'static str>,
    pub indicator_visible: bool,
    pub nav_scrolled: bool,
}

impl ScrollSnapshot {
    /// `rect_of` returns `None` for sections that are not in the document; those never match.
    pub fn compute(
        scroll_y: f64,
        viewport_height: f64,
        sections: &[Section],
        rect_of: impl Fn(&str) -> Option<SectionRect>,
    ) -> Self {
        let scroll_y = clamp_scroll(scroll_y);
        Self {
            scroll_y,
            viewport_height,
            active_section: active_section(sections, viewport_height * ACTIVE_LINE_FRACTION, rect_of),
            indicator_visible: indicator_visible(scroll_y, viewport_height),
            nav_scrolled: nav_scrolled(scroll_y),
        }
    }
}

fn clamp_scroll(scroll_y: f64) -> u32 {
    if scroll_y.is_nan() || scroll_y <= 0.0 {
        0
    } else {
        scroll_y.round().min(u32::MAX as f64) as u32
    }
}

/// The section under the reference line at `line_y`.
///
/// Falls back to the last section (in registry order) whose top is already above
/// the line, for gaps between sections and the area past the last one.
pub fn active_section(
    sections: &[Section],
    line_y: f64,
    rect_of: impl Fn(&str) -> Option<SectionRect>,
) -> Option<&'static str> {
    let rects: Vec<(&'static str, SectionRect)> = sections
        .iter()
        .filter_map(|section| rect_of(section.id).map(|rect| (section.id, rect)))
        .collect();

    rects
        .iter()
        .find(|(_, rect)| rect.straddles(line_y))
        .or_else(|| rects.iter().rev().find(|(_, rect)| rect.top <= line_y))
        .map(|(id, _)| *id)
}

pub fn indicator_visible(scroll_y: u32, viewport_height: f64) -> bool {
    f64::from(scroll_y) > viewport_height * INDICATOR_VISIBLE_FRACTION
}

pub fn nav_scrolled(scroll_y: u32) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// Hero elements that drift with the scroll at their own rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParallaxLayer {
    Tagline,
    Name,
    Description,
    Actions,
    ScrollCue,
}

impl ParallaxLayer {
    pub fn multiplier(self) -> f64 {
        match self {
            ParallaxLayer::Tagline => 0.15,
            ParallaxLayer::Name => 0.04,
            ParallaxLayer::Description => 0.22,
            ParallaxLayer::Actions => 0.3,
            ParallaxLayer::ScrollCue => 0.35,
        }
    }

    /// Vertical translation in pixels.
    pub fn offset(self, scroll_y: u32) -> f64 {
        parallax_offset(scroll_y, self.multiplier())
    }
}

pub fn parallax_offset(scroll_y: u32, multiplier: f64) -> f64 {
    f64::from(scroll_y) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SECTIONS;
    use rstest::rstest;

    const VIEWPORT: f64 = 1000.0;

    fn section(id: &'static str) -> Section {
        Section { id, nav_label: id, indicator_label: id }
    }

    /// Three consecutive 800px sections starting `first_top` px below the viewport top.
    fn stacked(first_top: f64) -> impl Fn(&str) -> Option<SectionRect> {
        move |id: &str| {
            let index = ["a", "b", "c"].iter().position(|s| *s == id)? as f64;
            let top = first_top + index * 800.0;
            Some(SectionRect { top, bottom: top + 800.0 })
        }
    }

    #[test]
    fn unscrolled_page_has_no_active_section() {
        // Hero fills the first viewport, so every section starts below the line.
        let snapshot = ScrollSnapshot::compute(0.0, VIEWPORT, SECTIONS, |_| {
            Some(SectionRect { top: 1200.0, bottom: 2000.0 })
        });
        assert_eq!(snapshot.active_section, None);
        assert!(!snapshot.indicator_visible);
        assert!(!snapshot.nav_scrolled);
    }

    #[test]
    fn line_inside_middle_section_selects_it() {
        let sections = [section("a"), section("b"), section("c")];
        // a: -900..-100, b: -100..700, c: 700..1500; line at 400.
        assert_eq!(active_section(&sections, 400.0, stacked(-900.0)), Some("b"));
    }

    #[test]
    fn top_edge_is_inclusive_bottom_edge_exclusive() {
        let sections = [section("a"), section("b"), section("c")];
        // b starts exactly on the line, a ends exactly on it.
        assert_eq!(active_section(&sections, 400.0, stacked(-400.0)), Some("b"));
    }

    #[test]
    fn past_the_last_section_falls_back_to_it() {
        let sections = [section("a"), section("b"), section("c")];
        assert_eq!(active_section(&sections, 400.0, stacked(-5000.0)), Some("c"));
    }

    #[test]
    fn gap_between_sections_uses_the_one_above() {
        let sections = [section("a"), section("b")];
        let rect_of = |id: &str| match id {
            "a" => Some(SectionRect { top: -500.0, bottom: 300.0 }),
            "b" => Some(SectionRect { top: 600.0, bottom: 1400.0 }),
            _ => None,
        };
        assert_eq!(active_section(&sections, 400.0, rect_of), Some("a"));
    }

    #[test]
    fn missing_sections_never_match() {
        assert_eq!(active_section(SECTIONS, 400.0, |_| None), None);

        let sections = [section("a"), section("ghost")];
        let rect_of = |id: &str| (id == "a").then_some(SectionRect { top: -10.0, bottom: 100.0 });
        assert_eq!(active_section(&sections, 400.0, rect_of), Some("a"));
    }

    #[test]
    fn duplicate_ids_resolve_to_a_registered_id() {
        let sections = [section("a"), section("a")];
        let found = active_section(&sections, 400.0, |_| Some(SectionRect { top: 0.0, bottom: 500.0 }));
        assert_eq!(found, Some("a"));
    }

    #[rstest]
    #[case(0, false)]
    #[case(499, false)]
    #[case(500, false)]
    #[case(501, true)]
    #[case(4000, true)]
    fn indicator_appears_strictly_after_half_viewport(#[case] scroll_y: u32, #[case] visible: bool) {
        assert_eq!(indicator_visible(scroll_y, VIEWPORT), visible);
    }

    #[rstest]
    #[case(0, false)]
    #[case(50, false)]
    #[case(51, true)]
    fn nav_turns_solid_after_fifty_pixels(#[case] scroll_y: u32, #[case] scrolled: bool) {
        assert_eq!(nav_scrolled(scroll_y), scrolled);
    }

    #[test]
    fn parallax_matches_multiplier() {
        assert_eq!(parallax_offset(200, 0.15), 30.0);
        assert_eq!(ParallaxLayer::Tagline.offset(200), 30.0);
        assert_eq!(ParallaxLayer::Name.offset(0), 0.0);
    }

    #[test]
    fn parallax_is_linear() {
        for layer in [
            ParallaxLayer::Tagline,
            ParallaxLayer::Name,
            ParallaxLayer::Description,
            ParallaxLayer::Actions,
            ParallaxLayer::ScrollCue,
        ] {
            let single = layer.offset(100);
            assert!((layer.offset(300) - 3.0 * single).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_overscroll_clamps_to_zero() {
        let snapshot = ScrollSnapshot::compute(-35.0, VIEWPORT, &[], |_| None);
        assert_eq!(snapshot.scroll_y, 0);
    }

    #[test]
    fn same_inputs_same_snapshot() {
        let sections = [section("a"), section("b"), section("c")];
        let first = ScrollSnapshot::compute(1700.4, VIEWPORT, &sections, stacked(-900.0));
        let second = ScrollSnapshot::compute(1700.4, VIEWPORT, &sections, stacked(-900.0));
        assert_eq!(first, second);
        assert_eq!(first.scroll_y, 1700);
        assert_eq!(first.active_section, Some("b"));
        assert!(first.indicator_visible);
    }
}
