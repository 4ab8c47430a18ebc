use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_heading::SectionHeading;
use crate::config::{CREAM, CREAM_MID};
use crate::content::STATS;
use crate::motion::stagger;
use crate::styles::{self, SANS, SERIF};

#[function_component(Results)]
pub fn results() -> Html {
    html! {
        <section id="results" style={styles::section(80, 1100)}>
            <SectionHeading eyebrow="By The Numbers">
                {"Results that speak."}
            </SectionHeading>

            <div class="grid-responsive" style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px;">
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <FadeIn key={i} delay={stagger(0.25, 0.12, i)} distance={44.0} duration={0.8}>
                        <div style={format!("padding: 44px 28px; border-top: 2px solid {CREAM};")}>
                            <p style={format!("font-family: {SERIF}; font-size: clamp(40px, 5vw, 56px); font-weight: 700; color: {CREAM}; margin: 0;")}>
                                {stat.number}
                            </p>
                            <p style={format!("color: {CREAM}; font-size: 12px; letter-spacing: 0.12em; text-transform: uppercase; font-family: {SANS}; font-weight: 600; margin-top: 12px; margin-bottom: 8px;")}>
                                {stat.label}
                            </p>
                            <p style={format!("color: {CREAM_MID}; font-size: 14px; line-height: 1.6; font-family: {SANS}; margin: 0;")}>
                                {stat.detail}
                            </p>
                        </div>
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}
