use yew::prelude::*;
use web_sys::Element;

use crate::motion::{DEFAULT_DISTANCE, DEFAULT_DURATION, DEFAULT_REVEAL_THRESHOLD};
use crate::reveal::observer::register;
use crate::reveal::state::{RevealState, RevealStyle};

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    /// Pixels.
    #[prop_or(DEFAULT_DISTANCE)]
    pub distance: f64,
    /// Seconds.
    #[prop_or(DEFAULT_DURATION)]
    pub duration: f64,
    /// Extra inline CSS appended after the reveal style.
    #[prop_or_default]
    pub style: AttrValue,
}

/// Slides its children up into place the first time they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = match node.cast::<Element>() {
                    Some(element) => {
                        let revealed = revealed.clone();
                        Some(register(&element, DEFAULT_REVEAL_THRESHOLD, move || revealed.set(true)))
                    }
                    None => {
                        revealed.set(true);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    let state = if *revealed { RevealState::Revealed } else { RevealState::Hidden };
    let reveal = RevealStyle {
        distance: props.distance,
        duration: props.duration,
        delay: props.delay,
    };
    let style = format!("{} {}", reveal.css(state), props.style);

    html! {
        <div ref={node} style={style}>
            { for props.children.iter() }
        </div>
    }
}
