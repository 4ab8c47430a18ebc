use log::Level;

pub const SITE_URL: &str = "https://xandercayetano.com";
pub const AUTHOR: &str = "Xander Cayetano";
pub const SITE_TITLE: &str = "Xander Cayetano | Entrepreneur, Growth Strategist, Builder";
pub const SITE_DESCRIPTION: &str = "Marketing systems that drive real revenue. Built from scratch, proven across 10+ industries. Founder of Revvoo.";
pub const SHORT_DESCRIPTION: &str = "Marketing systems that drive real revenue. Founder of Revvoo.";
pub const JOB_TITLE: &str = "Growth Strategist";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/xander_cayetano/";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/xander-cayetano-8a39381b3";

pub const LOGO_CREAM: &str = "/logo-cream.png.webp";
pub const PORTRAIT: &str = "/Images/Xander-cayetano-marketer-growth-strategist.jpg";

// Palette
pub const CREAM: &str = "#EDE8D0";
pub const BLACK: &str = "#0A0A0A";
pub const DARK_CARD: &str = "#131313";
pub const CREAM_DIM: &str = "#8A8578";
pub const CREAM_MID: &str = "#B5B0A0";
pub const BORDER: &str = "rgba(237,232,208,0.1)";

/// Nav bar switches to its solid background once the page is scrolled past this.
pub const NAV_SCROLLED_AFTER_PX: u32 = 50;
/// Section indicator shows up once the scroll offset exceeds this share of the viewport.
pub const INDICATOR_VISIBLE_FRACTION: f64 = 0.5;
/// Reference line for picking the active section, as a share of viewport height.
pub const ACTIVE_LINE_FRACTION: f64 = 0.4;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
