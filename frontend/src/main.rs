use yew::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod motion;
mod sections;
mod seo;
mod style_state;
mod styles;

mod reveal {
    pub mod observer;
    pub mod state;
}
mod scroll {
    pub mod broadcaster;
    pub mod frame_gate;
    pub mod snapshot;
    pub mod store;
}
mod components {
    pub mod buttons;
    pub mod fade_in;
    pub mod nav;
    pub mod section_heading;
    pub mod section_indicator;
}
mod pages {
    pub mod consult;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod home;
    pub mod journey;
    pub mod marquee;
    pub mod results;
    pub mod services;
}

use pages::home::Home;
use scroll::broadcaster::ScrollBroadcaster;
use scroll::store::ScrollStore;


#[function_component]
fn App() -> Html {
    let store = use_state(ScrollStore::default);

    // One scroll subscription for the whole page, released when the app unmounts.
    {
        let store = (*store).clone();
        use_effect_with_deps(
            move |_| {
                let broadcaster = ScrollBroadcaster::install(store);
                move || drop(broadcaster)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollStore> context={(*store).clone()}>
            <Home />
        </ContextProvider<ScrollStore>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Logging is best effort; the page renders either way.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting application");
    seo::install_head_metadata();
    yew::Renderer::<App>::new().render();
}
