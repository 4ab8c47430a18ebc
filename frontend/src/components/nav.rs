use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{BORDER, CREAM, LOGO_CREAM};
use crate::dom::{scroll_to_section, scroll_to_top, ScrollLock};
use crate::motion::{stagger, MENU_SCROLL_DELAY_MS};
use crate::scroll::store::use_scroll_snapshot;
use crate::sections::{Section, SECTIONS};
use crate::style_state::use_interaction;
use crate::styles;

/// Background, blur and border of the fixed bar.
pub fn bar_style(scrolled: bool) -> String {
    let (background, blur, border) = if scrolled {
        ("rgba(10,10,10,0.92)", "blur(20px)", BORDER)
    } else {
        ("transparent", "none", "transparent")
    };
    format!(
        "position: fixed; top: 0; left: 0; right: 0; z-index: 200; padding: 0 clamp(24px,5vw,64px); height: 68px; display: flex; align-items: center; justify-content: space-between; background: {background}; backdrop-filter: {blur}; -webkit-backdrop-filter: {blur}; border-bottom: 1px solid {border}; transition: all 0.35s ease;"
    )
}

fn overlay_style(open: bool) -> String {
    let (opacity, pointer_events) = if open { (1, "all") } else { (0, "none") };
    format!(
        "position: fixed; inset: 0; z-index: 250; background: rgba(10,10,10,0.98); backdrop-filter: blur(40px); display: flex; flex-direction: column; justify-content: center; align-items: center; opacity: {opacity}; pointer-events: {pointer_events}; transition: opacity 0.35s ease;"
    )
}

/// The three hamburger strokes; the outer two cross into an X while the menu is open.
fn burger_line_style(index: usize, open: bool) -> String {
    let extra = match (index, open) {
        (0, true) => "transform: rotate(45deg) translateY(0.5px);",
        (1, true) => "opacity: 0;",
        (2, true) => "transform: rotate(-45deg) translateY(-0.5px); margin-top: -1.5px;",
        _ => "",
    };
    format!("display: block; width: 26px; height: 1.5px; background: {CREAM}; transition: all 0.3s; {extra}")
}

#[derive(Properties, PartialEq)]
struct DesktopLinkProps {
    section: Section,
}

#[function_component(DesktopLink)]
fn desktop_link(props: &DesktopLinkProps) -> Html {
    let interaction = use_interaction();
    let id = props.section.id;
    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id));

    html! {
        <button
            style={styles::quiet_link(interaction.state, 13, "0.04em")}
            onclick={onclick}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
        >
            {props.section.nav_label}
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct MenuLinkProps {
    section: Section,
    index: usize,
    open: bool,
    on_choose: Callback<&'static str>,
}

#[function_component(MenuLink)]
fn menu_link(props: &MenuLinkProps) -> Html {
    let interaction = use_interaction();
    let onclick = {
        let on_choose = props.on_choose.clone();
        let id = props.section.id;
        Callback::from(move |_: MouseEvent| on_choose.emit(id))
    };

    html! {
        <button
            style={styles::menu_link(interaction.state, props.open, stagger(0.08, 0.04, props.index))}
            onclick={onclick}
            tabindex={if props.open { "0" } else { "-1" }}
            onmouseenter={interaction.onmouseenter}
            onmouseleave={interaction.onmouseleave}
            onfocus={interaction.onfocus}
            onblur={interaction.onblur}
        >
            {props.section.nav_label}
        </button>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let snapshot = use_scroll_snapshot();
    let menu_open = use_state_eq(|| false);
    // Dropping the pending timeout cancels it, so an unmounted nav never scrolls.
    let pending_scroll: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Background scrolling stays locked for as long as the overlay is open.
    use_effect_with_deps(
        move |open: &bool| {
            let lock = if *open { ScrollLock::acquire() } else { None };
            move || drop(lock)
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let choose = {
        let menu_open = menu_open.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |id: &'static str| {
            menu_open.set(false);
            *pending_scroll.borrow_mut() = Some(Timeout::new(MENU_SCROLL_DELAY_MS, move || {
                scroll_to_section(id);
            }));
        })
    };

    let open = *menu_open;

    html! {
        <>
            <nav style={bar_style(snapshot.nav_scrolled)}>
                <button
                    onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
                    aria-label="Scroll to top"
                    style="cursor: pointer; background: none; border: none; padding: 0;"
                >
                    <img src={LOGO_CREAM} alt="XC" width="44" height="33" style="object-fit: contain; display: block;" />
                </button>

                <div class="nav-desktop-links" style="display: none; align-items: center; gap: 32px;">
                    { for SECTIONS.iter().map(|section| html! {
                        <DesktopLink key={section.id} section={*section} />
                    }) }
                </div>

                <button
                    class="nav-hamburger"
                    onclick={toggle_menu}
                    aria-label="Menu"
                    aria-expanded={open.to_string()}
                    style={format!("background: none; border: none; cursor: pointer; display: flex; flex-direction: column; gap: {}px; padding: 8px; z-index: 300;", if open { 0 } else { 5 })}
                >
                    { for (0..3).map(|i| html! { <span style={burger_line_style(i, open)} /> }) }
                </button>
            </nav>

            <div style={overlay_style(open)} aria-hidden={(!open).to_string()}>
                { for SECTIONS.iter().enumerate().map(|(index, section)| html! {
                    <MenuLink key={section.id} section={*section} index={index} open={open} on_choose={choose.clone()} />
                }) }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_transparent_until_scrolled() {
        assert!(bar_style(false).contains("background: transparent"));
        assert!(bar_style(false).contains("backdrop-filter: none"));
        let scrolled = bar_style(true);
        assert!(scrolled.contains("rgba(10,10,10,0.92)"));
        assert!(scrolled.contains("blur(20px)"));
    }

    #[test]
    fn overlay_ignores_pointer_while_closed() {
        assert!(overlay_style(false).contains("pointer-events: none"));
        assert!(overlay_style(true).contains("pointer-events: all"));
    }

    #[test]
    fn burger_morphs_only_when_open() {
        for i in 0..3 {
            assert!(!burger_line_style(i, false).contains("rotate"));
        }
        assert!(burger_line_style(0, true).contains("rotate(45deg)"));
        assert!(burger_line_style(1, true).contains("opacity: 0"));
        assert!(burger_line_style(2, true).contains("rotate(-45deg)"));
    }
}
