use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_heading::SectionHeading;
use crate::config::{AUTHOR, BLACK, BORDER, CREAM, CREAM_DIM, CREAM_MID, PORTRAIT};
use crate::content::MILESTONES;
use crate::motion::stagger;
use crate::styles::{self, SANS, SERIF};

const PORTRAIT_MASK: &str = "radial-gradient(ellipse 70% 65% at 50% 40%, black 50%, transparent 100%)";

#[function_component(Journey)]
pub fn journey() -> Html {
    let last = MILESTONES.len().saturating_sub(1);

    html! {
        <section id="journey" style={styles::section(100, 900)}>
            <SectionHeading eyebrow="My Journey">
                {"Built from scratch."}<br />
                <span style="font-style: italic; font-weight: 400;">{"Proven in the real world."}</span>
            </SectionHeading>

            <FadeIn delay={0.25} distance={40.0} duration={0.8}>
                <div style="position: relative; max-width: 480px; margin: 0 auto 72px;">
                    <img
                        src={PORTRAIT}
                        alt={AUTHOR}
                        width="480"
                        height="600"
                        loading="lazy"
                        style={format!("width: 100%; height: auto; display: block; object-fit: cover; mask: {PORTRAIT_MASK}; -webkit-mask: {PORTRAIT_MASK};")}
                    />
                </div>
            </FadeIn>

            <div style="position: relative; padding-left: 40px;">
                <div style={format!("position: absolute; left: 6px; top: 8px; bottom: 8px; width: 1px; background: linear-gradient(to bottom, {BORDER}, rgba(237,232,208,0.04));")} />

                { for MILESTONES.iter().enumerate().map(|(i, milestone)| html! {
                    <FadeIn
                        key={i}
                        delay={stagger(0.1, 0.12, i)}
                        distance={44.0}
                        duration={0.8}
                        style={format!("margin-bottom: {}px; position: relative;", if i < last { 72 } else { 0 })}
                    >
                        <div style={format!("position: absolute; left: -34px; top: 6px; width: 10px; height: 10px; border-radius: 50%; background: {CREAM_DIM}; border: 2px solid {BLACK};")} />
                        <p style={format!("color: {CREAM_DIM}; font-size: 11px; letter-spacing: 0.2em; text-transform: uppercase; font-family: {SANS}; margin-bottom: 10px; font-weight: 500;")}>
                            {milestone.phase}
                        </p>
                        <h3 style={format!("font-family: {SERIF}; font-size: clamp(22px, 3vw, 32px); font-weight: 700; color: {CREAM}; line-height: 1.2; margin-bottom: 14px;")}>
                            {milestone.title}
                        </h3>
                        <p style={format!("color: {CREAM_MID}; font-size: 16px; line-height: 1.75; font-family: {SANS}; font-weight: 400; max-width: 680px;")}>
                            {milestone.description}
                        </p>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}
