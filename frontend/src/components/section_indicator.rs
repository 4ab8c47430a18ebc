use yew::prelude::*;

use crate::config::{CREAM, CREAM_DIM};
use crate::dom::scroll_to_section;
use crate::scroll::store::use_scroll_snapshot;
use crate::sections::{Section, SECTIONS};
use crate::style_state::use_interaction;
use crate::styles::SANS;

fn container_style(visible: bool) -> String {
    let (opacity, pointer_events) = if visible { (1, "all") } else { (0, "none") };
    format!(
        "position: fixed; right: 28px; top: 50%; transform: translateY(-50%); z-index: 100; display: none; flex-direction: column; gap: 18px; align-items: flex-end; opacity: {opacity}; transition: opacity 0.4s ease; pointer-events: {pointer_events};"
    )
}

fn label_style(shown: bool) -> String {
    let (opacity, offset) = if shown { (1, 0) } else { (0, 6) };
    format!(
        "color: {CREAM_DIM}; font-size: 10px; letter-spacing: 0.1em; text-transform: uppercase; font-family: {SANS}; opacity: {opacity}; transform: translateX({offset}px); transition: all 0.3s ease; pointer-events: none;"
    )
}

/// Dot for inactive entries, bar for the active one.
fn mark_style(active: bool) -> String {
    if active {
        format!("display: block; width: 20px; height: 2px; border-radius: 1px; background: {CREAM}; opacity: 1; transition: all 0.35s ease;")
    } else {
        format!("display: block; width: 6px; height: 6px; border-radius: 50%; background: {CREAM_DIM}; opacity: 0.4; transition: all 0.35s ease;")
    }
}

#[derive(Properties, PartialEq)]
struct EntryProps {
    section: Section,
    active: bool,
}

#[function_component(Entry)]
fn entry(props: &EntryProps) -> Html {
    let interaction = use_interaction();
    let id = props.section.id;
    let label = props.section.indicator_label;
    let shown = props.active || interaction.state.is_engaged();

    html! {
        <button
            onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
            aria-label={format!("Go to {}", label)}
            aria-current={if props.active { "true" } else { "false" }}
            style="background: none; border: none; cursor: pointer; display: flex; align-items: center; gap: 10px; padding: 0;"
        >
            <span style={label_style(shown)}>{label}</span>
            <span style={mark_style(props.active)} />
        </button>
    }
}

/// Fixed column of dots on the right edge, one per section, highlighting the active one.
#[function_component(SectionIndicator)]
pub fn section_indicator() -> Html {
    let snapshot = use_scroll_snapshot();

    html! {
        <div class="section-indicator" style={container_style(snapshot.indicator_visible)}>
            { for SECTIONS.iter().map(|section| html! {
                <Entry
                    key={section.id}
                    section={*section}
                    active={snapshot.active_section == Some(section.id)}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_indicator_is_not_clickable() {
        assert!(container_style(false).contains("pointer-events: none"));
        assert!(container_style(true).contains("opacity: 1"));
    }

    #[test]
    fn active_entry_is_a_bar() {
        assert!(mark_style(true).contains("width: 20px; height: 2px"));
        assert!(mark_style(false).contains("border-radius: 50%"));
    }

    #[test]
    fn labels_slide_in_when_shown() {
        assert!(label_style(true).contains("translateX(0px)"));
        assert!(label_style(false).contains("opacity: 0"));
    }
}
