use chrono::Datelike;
use yew::prelude::*;

use crate::config::{AUTHOR, BORDER, CREAM_DIM, INSTAGRAM_URL, LINKEDIN_URL, LOGO_CREAM};
use crate::style_state::use_interaction;
use crate::styles::{self, SANS};

pub fn copyright(year: i32) -> String {
    format!("© {} {}", year, AUTHOR)
}

#[derive(Properties, PartialEq)]
struct SocialLinkProps {
    name: &'static str,
    url: &'static str,
}

#[function_component(SocialLink)]
fn social_link(props: &SocialLinkProps) -> Html {
    let interaction = use_interaction();

    html! {
        <a
            href={props.url}
            target="_blank"
            rel="noopener noreferrer"
            style={styles::quiet_link(interaction.state, 12, "0.08em")}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
        >
            <span style="text-transform: uppercase;">{props.name}</span>
        </a>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer style={format!("padding: 48px clamp(24px,6vw,80px); border-top: 1px solid {BORDER};")}>
            <div class="footer-inner" style="max-width: 1100px; margin: 0 auto; display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 16px;">
                <img src={LOGO_CREAM} alt="XC" width="32" height="24" style="object-fit: contain;" />
                <div style="display: flex; gap: 24px;">
                    <SocialLink name="Instagram" url={INSTAGRAM_URL} />
                    <SocialLink name="LinkedIn" url={LINKEDIN_URL} />
                </div>
                <span style={format!("color: {CREAM_DIM}; font-size: 12px; font-family: {SANS};")}>
                    {copyright(year)}
                </span>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_author() {
        assert_eq!(copyright(2026), "© 2026 Xander Cayetano");
    }
}
