use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::components::buttons::{GhostButton, PrimaryButton};
use crate::config::{AUTHOR, CREAM, CREAM_DIM, CREAM_MID};
use crate::content::{HERO_DESCRIPTION, TAGLINE};
use crate::dom::scroll_to_section;
use crate::motion::HERO_LOAD_DELAY_MS;
use crate::scroll::snapshot::ParallaxLayer;
use crate::scroll::store::use_scroll_snapshot;
use crate::styles::{SANS, SERIF};

/// Pointer position as a fraction of the hero box. Degenerate boxes give the center.
pub fn glow_position(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.5, 0.5);
    }
    ((client_x - left) / width, (client_y - top) / height)
}

pub fn glow_background(x: f64, y: f64) -> String {
    format!(
        "position: absolute; inset: 0; pointer-events: none; z-index: 0; background: radial-gradient(600px circle at {}% {}%, rgba(237,232,208,0.035) 0%, transparent 60%); transition: background 0.3s ease;",
        x * 100.0,
        y * 100.0,
    )
}

/// Fade-in plus parallax drift for one hero layer.
fn layer_style(layer: ParallaxLayer, scroll_y: u32, loaded: bool, fade_delay: f64) -> String {
    format!(
        "position: relative; z-index: 1; opacity: {}; transform: translateY({}px); transition: opacity 0.9s ease {}s;",
        if loaded { 1 } else { 0 },
        layer.offset(scroll_y),
        fade_delay,
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let snapshot = use_scroll_snapshot();
    let loaded = use_state_eq(|| false);
    let glow = use_state_eq(|| (0.5, 0.5));
    let hero_ref = use_node_ref();

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_LOAD_DELAY_MS, move || loaded.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let onmousemove = {
        let glow = glow.clone();
        let hero_ref = hero_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(hero) = hero_ref.cast::<Element>() {
                let rect = hero.get_bounding_client_rect();
                glow.set(glow_position(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let scroll_y = snapshot.scroll_y;
    let loaded = *loaded;
    let (glow_x, glow_y) = *glow;

    html! {
        <section
            ref={hero_ref}
            onmousemove={onmousemove}
            style="min-height: 100vh; display: flex; flex-direction: column; justify-content: center; align-items: center; text-align: center; padding: 140px clamp(24px,6vw,80px) 100px; position: relative; overflow: hidden;"
        >
            <div style={glow_background(glow_x, glow_y)} />

            <p style={format!(
                "{} color: {CREAM_DIM}; font-size: clamp(10px, 1.8vw, 13px); letter-spacing: clamp(0.12em, 1.5vw, 0.25em); text-transform: uppercase; font-family: {SANS}; font-weight: 400; margin-bottom: 40px; white-space: nowrap;",
                layer_style(ParallaxLayer::Tagline, scroll_y, loaded, 0.2),
            )}>
                {TAGLINE}
            </p>

            <h1 style={format!(
                "{} font-family: {SERIF}; font-size: clamp(56px, 10vw, 130px); font-weight: 700; color: {CREAM}; line-height: 1.0; letter-spacing: -0.02em; margin: 0;",
                layer_style(ParallaxLayer::Name, scroll_y, loaded, 0.35),
            )}>
                { for AUTHOR.split(' ').enumerate().map(|(i, word)| html! {
                    <>
                        { if i > 0 { html! { <br /> } } else { html! {} } }
                        {word}
                    </>
                }) }
            </h1>

            <p style={format!(
                "{} color: {CREAM_MID}; font-size: clamp(16px, 1.5vw, 19px); max-width: 600px; line-height: 1.7; margin-top: 36px; font-family: {SANS}; font-weight: 400;",
                layer_style(ParallaxLayer::Description, scroll_y, loaded, 0.5),
            )}>
                {HERO_DESCRIPTION}
            </p>

            <div class="hero-cta-group" style={format!(
                "{} display: flex; gap: 16px; margin-top: 52px; flex-wrap: wrap; justify-content: center;",
                layer_style(ParallaxLayer::Actions, scroll_y, loaded, 0.65),
            )}>
                <PrimaryButton
                    label="Book a Consultation"
                    onclick={Callback::from(|_: MouseEvent| scroll_to_section("consult"))}
                />
                <GhostButton
                    label="My Journey"
                    arrow={false}
                    onclick={Callback::from(|_: MouseEvent| scroll_to_section("journey"))}
                />
            </div>

            <div style={format!(
                "position: absolute; bottom: 32px; left: 50%; transform: translateX(-50%) translateY({}px); opacity: {}; transition: opacity 1s ease 1.3s;",
                ParallaxLayer::ScrollCue.offset(scroll_y),
                if loaded { 0.3 } else { 0.0 },
            )}>
                <div style={format!("width: 1px; height: 44px; background: linear-gradient(to bottom, {CREAM_DIM}, transparent);")} />
            </div>
        </section>
    }
}
