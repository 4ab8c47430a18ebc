//! Inline style strings shared across the page.

use crate::config::{BLACK, BORDER, CREAM, CREAM_DIM, CREAM_MID, DARK_CARD};
use crate::style_state::Interaction;

pub const SANS: &str = "'DM Sans', sans-serif";
pub const SERIF: &str = "'Playfair Display', serif";

pub fn section(padding_y: u32, max_width: u32) -> String {
    format!("padding: {padding_y}px clamp(24px,6vw,80px); max-width: {max_width}px; margin: 0 auto;")
}

pub fn eyebrow() -> String {
    format!("color: {CREAM_DIM}; font-size: 12px; letter-spacing: 0.25em; text-transform: uppercase; margin-bottom: 20px; font-family: {SANS};")
}

pub fn section_title(margin_bottom: u32) -> String {
    format!("font-family: {SERIF}; font-size: clamp(36px, 5vw, 58px); font-weight: 700; color: {CREAM}; line-height: 1.1; margin-bottom: {margin_bottom}px;")
}

pub fn body_text(size: u32) -> String {
    format!("color: {CREAM_MID}; font-size: {size}px; line-height: 1.7; font-family: {SANS}; font-weight: 400;")
}

pub fn card() -> String {
    format!("background: {DARK_CARD}; border: 1px solid {BORDER}; border-radius: 10px;")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonSize {
    Hero,
    Card,
    Form,
}

impl ButtonSize {
    fn padding(self) -> &'static str {
        match self {
            ButtonSize::Hero => "20px 44px",
            ButtonSize::Card => "18px 40px",
            ButtonSize::Form => "16px 32px",
        }
    }
}

/// Solid cream call-to-action.
pub fn primary_button(size: ButtonSize, state: Interaction) -> String {
    let (background, lift, shadow) = if state.is_engaged() {
        ("#FFF", "translateY(-2px)", "0 8px 30px rgba(237,232,208,0.12)")
    } else {
        (CREAM, "translateY(0)", "none")
    };
    let layout = match size {
        ButtonSize::Hero => "display: flex; align-items: center; gap: 10px; letter-spacing: 0.1em;",
        ButtonSize::Card => "display: inline-flex; align-items: center; gap: 10px; letter-spacing: 0.1em;",
        ButtonSize::Form => "align-self: flex-start; margin-top: 4px; letter-spacing: 0.08em;",
    };
    format!(
        "background: {background}; color: {BLACK}; border: none; padding: {}; font-size: 13px; font-weight: 600; text-transform: uppercase; cursor: pointer; font-family: {SANS}; transition: all 0.3s ease; border-radius: 6px; transform: {lift}; box-shadow: {shadow}; {layout}",
        size.padding(),
    )
}

/// Transparent outlined button.
pub fn ghost_button(state: Interaction) -> String {
    let (border, lift) = if state.is_engaged() {
        (CREAM, "translateY(-2px)")
    } else {
        ("rgba(237,232,208,0.2)", "translateY(0)")
    };
    format!(
        "background: transparent; color: {CREAM}; border: 1px solid {border}; padding: 20px 44px; font-size: 13px; font-weight: 500; letter-spacing: 0.1em; text-transform: uppercase; cursor: pointer; font-family: {SANS}; transition: all 0.3s ease; border-radius: 6px; transform: {lift};"
    )
}

pub fn service_card(state: Interaction) -> String {
    let (border, lift) = if state.is_engaged() {
        ("rgba(237,232,208,0.2)", "translateY(-3px)")
    } else {
        (BORDER, "translateY(0)")
    };
    format!(
        "padding: 44px 36px; background: {DARK_CARD}; border: 1px solid {border}; transition: all 0.4s ease; cursor: default; min-height: 240px; border-radius: 10px; transform: {lift};"
    )
}

/// Small uppercase link in the desktop nav and footer.
pub fn quiet_link(state: Interaction, size: u32, letter_spacing: &str) -> String {
    let color = if state.is_engaged() { CREAM } else { CREAM_DIM };
    format!(
        "background: none; border: none; cursor: pointer; font-family: {SANS}; font-size: {size}px; font-weight: 400; color: {color}; padding: 0; letter-spacing: {letter_spacing}; text-decoration: none; transition: color 0.3s ease;"
    )
}

pub fn menu_link(state: Interaction, open: bool, delay: f64) -> String {
    let (color, font_style) = if state.is_engaged() {
        (CREAM, "italic")
    } else {
        (CREAM_MID, "normal")
    };
    let (opacity, offset) = if open { (1, 0) } else { (0, 16) };
    format!(
        "background: none; border: none; cursor: pointer; font-family: {SERIF}; font-size: clamp(28px, 5vw, 48px); font-weight: 400; color: {color}; font-style: {font_style}; padding: 14px 0; transition: all 0.3s ease; opacity: {opacity}; transform: translateY({offset}px); transition-delay: {delay}s;"
    )
}

pub fn form_field(state: Interaction) -> String {
    let border = if state == Interaction::Focus {
        "rgba(237,232,208,0.25)"
    } else {
        BORDER
    };
    format!(
        "width: 100%; background: {DARK_CARD}; border: 1px solid {border}; color: {CREAM}; padding: 14px 16px; font-size: 15px; font-family: {SANS}; outline: none; transition: border-color 0.3s; border-radius: 8px; box-sizing: border-box;"
    )
}

/// Page-wide rules that inline styles cannot express: keyframes and breakpoints.
pub const GLOBAL_CSS: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
    }
    html {
        scroll-behavior: smooth;
    }
    body {
        margin: 0;
        background: #0A0A0A;
        color: #EDE8D0;
        -webkit-font-smoothing: antialiased;
    }
    button:focus-visible, [role="button"]:focus-visible, a:focus-visible {
        outline: 1px solid rgba(237,232,208,0.4);
        outline-offset: 4px;
    }
    @keyframes marquee {
        from { transform: translateX(0); }
        to { transform: translateX(-50%); }
    }
    @media (min-width: 900px) {
        .nav-desktop-links {
            display: flex !important;
        }
        .nav-hamburger {
            display: none !important;
        }
        .section-indicator {
            display: flex !important;
        }
    }
    @media (max-width: 768px) {
        .grid-responsive {
            grid-template-columns: 1fr !important;
        }
        .hero-cta-group {
            flex-direction: column;
            align-items: stretch;
        }
        .footer-inner {
            flex-direction: column;
            text-align: center;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_state_same_style() {
        for state in [Interaction::Default, Interaction::Hover, Interaction::Focus, Interaction::Active] {
            assert_eq!(primary_button(ButtonSize::Hero, state), primary_button(ButtonSize::Hero, state));
            assert_eq!(service_card(state), service_card(state));
        }
    }

    #[test]
    fn hover_lifts_primary_button() {
        let idle = primary_button(ButtonSize::Card, Interaction::Default);
        let hovered = primary_button(ButtonSize::Card, Interaction::Hover);
        assert!(idle.contains("translateY(0)"));
        assert!(hovered.contains("translateY(-2px)"));
        assert!(hovered.contains("background: #FFF"));
    }

    #[test]
    fn form_field_highlights_on_focus_only() {
        assert!(form_field(Interaction::Focus).contains("rgba(237,232,208,0.25)"));
        assert!(!form_field(Interaction::Hover).contains("rgba(237,232,208,0.25)"));
    }

    #[test]
    fn closed_menu_links_are_hidden_and_offset() {
        let css = menu_link(Interaction::Default, false, 0.12);
        assert!(css.contains("opacity: 0"));
        assert!(css.contains("translateY(16px)"));
        assert!(css.contains("transition-delay: 0.12s"));
    }
}
