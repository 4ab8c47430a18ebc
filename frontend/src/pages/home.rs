use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::section_indicator::SectionIndicator;
use crate::config::BLACK;
use crate::styles::GLOBAL_CSS;

use super::consult::Consult;
use super::contact::Contact;
use super::faq::Faq;
use super::footer::Footer;
use super::hero::Hero;
use super::journey::Journey;
use super::marquee::Marquee;
use super::results::Results;
use super::services::Services;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div style={format!("background: {BLACK}; min-height: 100vh; position: relative; z-index: 1;")}>
            <style>{GLOBAL_CSS}</style>
            <Nav />
            <SectionIndicator />
            <main>
                <Hero />
                <Marquee />
                <Journey />
                <Services />
                <Results />
                <Faq />
                <Consult />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
