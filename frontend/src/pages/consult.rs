use yew::prelude::*;

use crate::components::buttons::PrimaryButton;
use crate::components::fade_in::FadeIn;
use crate::config::{CREAM, CREAM_DIM, CREAM_MID};
use crate::content::{CONSULT_FORMAT, CONSULT_PITCH, CONSULT_POINTS, CONSULT_PRICE};
use crate::styles::{self, ButtonSize, SANS, SERIF};

#[function_component(Consult)]
pub fn consult() -> Html {
    html! {
        <section id="consult" style={styles::section(100, 1000)}>
            <FadeIn distance={50.0} duration={0.85}>
                <h2 style={styles::section_title(20)}>{"Pick my brain."}</h2>
            </FadeIn>
            <FadeIn delay={0.15} distance={30.0} duration={0.8}>
                <p style={format!("{} max-width: 700px; margin-bottom: 48px;", styles::body_text(17))}>
                    {CONSULT_PITCH}
                </p>
            </FadeIn>

            <FadeIn delay={0.3} distance={44.0} duration={0.85}>
                <div style={format!("{} padding: clamp(28px, 4vw, 48px) clamp(20px, 4vw, 44px);", styles::card())}>
                    <div class="grid-responsive" style="display: flex; justify-content: space-between; align-items: flex-start; flex-wrap: wrap; gap: 24px; margin-bottom: 36px;">
                        <div>
                            <h3 style={format!("font-family: {SERIF}; font-size: clamp(24px, 3vw, 32px); font-weight: 700; color: {CREAM}; margin: 0; line-height: 1.2;")}>
                                {"1-on-1 Strategy Call"}
                            </h3>
                            <p style={format!("color: {CREAM_MID}; font-size: 15px; font-family: {SANS}; margin-top: 8px;")}>
                                {CONSULT_FORMAT}
                            </p>
                        </div>
                        <div style="text-align: right;">
                            <p style={format!("font-family: {SERIF}; font-size: clamp(40px, 5vw, 56px); font-weight: 700; color: {CREAM}; margin: 0; line-height: 1;")}>
                                {CONSULT_PRICE}
                            </p>
                            <p style={format!("color: {CREAM_MID}; font-size: 13px; font-family: {SANS}; margin-top: 4px;")}>
                                {"per session"}
                            </p>
                        </div>
                    </div>

                    <div class="grid-responsive" style="display: grid; grid-template-columns: 1fr 1fr; gap: 20px 40px; margin-bottom: 40px;">
                        { for CONSULT_POINTS.iter().map(|point| html! {
                            <div key={*point} style="display: flex; align-items: flex-start; gap: 10px;">
                                <span style={format!("color: {CREAM_DIM}; font-size: 12px; line-height: 22px;")}>{"✦"}</span>
                                <span style={format!("color: {CREAM_MID}; font-size: 15px; line-height: 22px; font-family: {SANS};")}>{*point}</span>
                            </div>
                        }) }
                    </div>

                    // Booking widget is embedded here once a scheduling provider is chosen.
                    <div style="padding: 32px; border: 1px dashed rgba(237,232,208,0.12); text-align: center; background: rgba(237,232,208,0.02); border-radius: 8px;">
                        <p style={format!("color: {CREAM_DIM}; font-size: 14px; font-family: {SANS}; margin: 0 0 20px 0;")}>
                            {"Booking calendar will be embedded here"}
                        </p>
                        <PrimaryButton label="Book Your Session" size={ButtonSize::Card} />
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}
