use yew::prelude::*;

use crate::style_state::use_interaction;
use crate::styles::{self, ButtonSize};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or(ButtonSize::Hero)]
    pub size: ButtonSize,
    /// Trailing arrow after the label.
    #[prop_or(true)]
    pub arrow: bool,
}

#[function_component(PrimaryButton)]
pub fn primary_button(props: &ButtonProps) -> Html {
    let interaction = use_interaction();

    html! {
        <button
            style={styles::primary_button(props.size, interaction.state)}
            onclick={props.onclick.clone()}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onmousedown={interaction.onmousedown}
            onmouseup={interaction.onmouseup}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
        >
            {props.label.to_string()}
            {
                if props.arrow {
                    html! { <span style="font-size: 16px;">{"→"}</span> }
                } else {
                    html! {}
                }
            }
        </button>
    }
}

#[function_component(GhostButton)]
pub fn ghost_button(props: &ButtonProps) -> Html {
    let interaction = use_interaction();

    html! {
        <button
            style={styles::ghost_button(interaction.state)}
            onclick={props.onclick.clone()}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
        >
            {props.label.to_string()}
        </button>
    }
}
