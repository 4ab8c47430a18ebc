use yew::prelude::*;
use web_sys::KeyboardEvent;

use crate::components::fade_in::FadeIn;
use crate::components::section_heading::SectionHeading;
use crate::config::{BORDER, CREAM, CREAM_DIM};
use crate::content::{Question, FAQS};
use crate::motion::stagger;
use crate::style_state::use_interaction;
use crate::styles::{self, SANS, SERIF};

/// Accordion toggle: opening an item closes the others, clicking the open one closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn row_background(open: bool, hovered: bool) -> &'static str {
    match (open, hovered) {
        (true, _) => "rgba(237,232,208,0.03)",
        (false, true) => "rgba(237,232,208,0.02)",
        (false, false) => "transparent",
    }
}

#[derive(Properties)]
struct FaqItemProps {
    item: &'static Question,
    is_open: bool,
    is_last: bool,
    on_toggle: Callback<()>,
}

impl PartialEq for FaqItemProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.item, other.item)
            && self.is_open == other.is_open
            && self.is_last == other.is_last
            && self.on_toggle == other.on_toggle
    }
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let interaction = use_interaction();
    let is_open = props.is_open;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if matches!(e.key().as_str(), "Enter" | " ") {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    let bottom_border = if props.is_last { format!("1px solid {BORDER}") } else { "none".to_string() };
    let hovered = interaction.state.is_engaged();

    html! {
        <div
            role="button"
            tabindex="0"
            aria-expanded={is_open.to_string()}
            onclick={onclick}
            onkeydown={onkeydown}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
            style={format!(
                "border-top: 1px solid {BORDER}; border-bottom: {bottom_border}; cursor: pointer; transition: background 0.3s ease; background: {}; padding: 0 8px; border-radius: 4px;",
                row_background(is_open, hovered),
            )}
        >
            <div style="display: flex; justify-content: space-between; align-items: center; padding: 28px 0;">
                <h3 style={format!("font-family: {SERIF}; font-size: clamp(18px, 2.2vw, 24px); font-weight: 400; color: {CREAM}; margin: 0;")}>
                    {props.item.question}
                </h3>
                <span style={format!(
                    "color: {CREAM_DIM}; font-size: 24px; font-weight: 300; transition: transform 0.3s ease; transform: {}; flex-shrink: 0; margin-left: 20px; font-family: {SANS};",
                    if is_open { "rotate(45deg)" } else { "none" },
                )}>
                    {"+"}
                </span>
            </div>
            <div style={format!(
                "max-height: {}px; overflow: hidden; transition: max-height 0.4s ease, opacity 0.3s ease; opacity: {};",
                if is_open { 500 } else { 0 },
                if is_open { 1 } else { 0 },
            )}>
                <p style={format!("{} padding-bottom: 28px; max-width: 800px; margin: 0;", styles::body_text(15))}>
                    {props.item.answer}
                </p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state_eq(|| None::<usize>);
    let last = FAQS.len().saturating_sub(1);

    html! {
        <section id="faq" style={styles::section(100, 1000)}>
            <SectionHeading eyebrow="FAQ">
                {"Common questions."}
            </SectionHeading>

            <div>
                { for FAQS.iter().enumerate().map(|(i, item)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |_: ()| open.set(toggle(*open, i)))
                    };
                    html! {
                        <FadeIn key={i} delay={stagger(0.25, 0.08, i)} distance={30.0} duration={0.75}>
                            <FaqItem item={item} is_open={*open == Some(i)} is_last={i == last} on_toggle={on_toggle} />
                        </FadeIn>
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_another() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 0), Some(0));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle(Some(1), 1), None);
    }

    #[test]
    fn at_most_one_item_is_open() {
        let mut open = None;
        for clicked in [0, 3, 3, 1, 2, 2, 0] {
            open = toggle(open, clicked);
            let open_count = (0..FAQS.len()).filter(|i| open == Some(*i)).count();
            assert!(open_count <= 1);
        }
        assert_eq!(open, Some(0));
    }

    #[test]
    fn open_row_ignores_hover() {
        assert_eq!(row_background(true, true), row_background(true, false));
        assert_eq!(row_background(false, false), "transparent");
    }
}
