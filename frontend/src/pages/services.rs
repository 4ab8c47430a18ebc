use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::section_heading::SectionHeading;
use crate::config::CREAM;
use crate::content::{Service, SERVICES};
use crate::motion::stagger;
use crate::style_state::use_interaction;
use crate::styles::{self, SERIF};

#[derive(Properties)]
struct ServiceCardProps {
    service: &'static Service,
}

impl PartialEq for ServiceCardProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.service, other.service)
    }
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let interaction = use_interaction();
    let service = props.service;

    html! {
        <div
            style={styles::service_card(interaction.state)}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
        >
            <span style={format!("font-family: {SERIF}; font-size: 52px; font-weight: 400; font-style: italic; color: rgba(237,232,208,0.08); line-height: 1; display: block; margin-bottom: 20px;")}>
                {service.number}
            </span>
            <h3 style={format!("font-family: {SERIF}; font-size: clamp(20px, 2.2vw, 26px); font-weight: 700; color: {CREAM}; margin-bottom: 14px; line-height: 1.2;")}>
                {service.title}
            </h3>
            <p style={format!("{} margin: 0;", styles::body_text(15))}>
                {service.description}
            </p>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" style={styles::section(100, 1100)}>
            <SectionHeading eyebrow="What I Do">
                {"Systems that"}<br />{"drive revenue."}
            </SectionHeading>

            <div class="grid-responsive" style="display: grid; grid-template-columns: 1fr 1fr; gap: 24px;">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <FadeIn key={i} delay={stagger(0.25, 0.1, i)} distance={44.0} duration={0.8}>
                        <ServiceCard service={service} />
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}
