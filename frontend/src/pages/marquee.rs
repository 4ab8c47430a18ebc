use yew::prelude::*;

use crate::config::{BORDER, CREAM_DIM};
use crate::content::BRANDS;
use crate::styles::SANS;

/// Endless strip of client names. The list is rendered twice so the loop has no seam.
#[function_component(Marquee)]
pub fn marquee() -> Html {
    let brand_style = format!(
        "color: {CREAM_DIM}; font-size: 14px; letter-spacing: 0.2em; text-transform: uppercase; font-family: {SANS}; font-weight: 400; flex-shrink: 0;"
    );

    html! {
        <div
            aria-label="Clients"
            style={format!("border-top: 1px solid {BORDER}; border-bottom: 1px solid {BORDER}; padding: 28px 0; overflow: hidden; position: relative;")}
        >
            <div style="display: flex; gap: 80px; white-space: nowrap; animation: marquee 25s linear infinite; width: max-content;">
                { for BRANDS.iter().chain(BRANDS.iter()).enumerate().map(|(i, brand)| html! {
                    <span key={i} style={brand_style.clone()} aria-hidden={(i >= BRANDS.len()).to_string()}>
                        {*brand}
                    </span>
                }) }
            </div>
        </div>
    }
}
