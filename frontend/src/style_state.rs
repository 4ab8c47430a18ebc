//! Hover/focus styling as a pure function of a small interaction state.
//!
//! Components keep an [`Interaction`] in state through [`use_interaction`] and
//! derive their inline style from it, instead of poking at DOM styles from
//! event handlers.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Default,
    Hover,
    Focus,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionEvent {
    Enter,
    Leave,
    Focus,
    Blur,
    Press,
    Release,
}

impl Interaction {
    pub fn next(self, event: InteractionEvent) -> Self {
        match (self, event) {
            (_, InteractionEvent::Press) => Interaction::Active,
            (Interaction::Active, InteractionEvent::Release) => Interaction::Hover,
            (_, InteractionEvent::Release) => self,
            // Keyboard focus outranks hover.
            (Interaction::Focus, InteractionEvent::Enter | InteractionEvent::Leave) => self,
            (_, InteractionEvent::Enter) => Interaction::Hover,
            (_, InteractionEvent::Leave) => Interaction::Default,
            (_, InteractionEvent::Focus) => Interaction::Focus,
            (_, InteractionEvent::Blur) => Interaction::Default,
        }
    }

    /// Hover, focus and press all count as "engaged" for styling purposes.
    pub fn is_engaged(self) -> bool {
        self != Interaction::Default
    }
}

impl Reducible for Interaction {
    type Action = InteractionEvent;

    fn reduce(self: Rc<Self>, event: InteractionEvent) -> Rc<Self> {
        let next = self.next(event);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct InteractionHandle {
    pub state: Interaction,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub onmousedown: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
    pub onfocus: Callback<FocusEvent>,
    pub onblur: Callback<FocusEvent>,
}

#[hook]
pub fn use_interaction() -> InteractionHandle {
    // Events dispatched in the same tick (mousedown, then the focus it causes)
    // each apply to the latest state.
    let state = use_reducer_eq(Interaction::default);

    let on = |event: InteractionEvent| {
        let dispatcher = state.dispatcher();
        move || dispatcher.dispatch(event)
    };
    let mouse = |event: InteractionEvent| {
        let apply = on(event);
        Callback::from(move |_: MouseEvent| apply())
    };
    let focus = |event: InteractionEvent| {
        let apply = on(event);
        Callback::from(move |_: FocusEvent| apply())
    };

    InteractionHandle {
        state: *state,
        onmouseenter: mouse(InteractionEvent::Enter),
        onmouseleave: mouse(InteractionEvent::Leave),
        onmousedown: mouse(InteractionEvent::Press),
        onmouseup: mouse(InteractionEvent::Release),
        onfocus: focus(InteractionEvent::Focus),
        onblur: focus(InteractionEvent::Blur),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Interaction::Default, InteractionEvent::Enter, Interaction::Hover)]
    #[case(Interaction::Hover, InteractionEvent::Leave, Interaction::Default)]
    #[case(Interaction::Hover, InteractionEvent::Press, Interaction::Active)]
    #[case(Interaction::Active, InteractionEvent::Release, Interaction::Hover)]
    #[case(Interaction::Default, InteractionEvent::Release, Interaction::Default)]
    #[case(Interaction::Default, InteractionEvent::Focus, Interaction::Focus)]
    #[case(Interaction::Focus, InteractionEvent::Enter, Interaction::Focus)]
    #[case(Interaction::Focus, InteractionEvent::Leave, Interaction::Focus)]
    #[case(Interaction::Focus, InteractionEvent::Blur, Interaction::Default)]
    fn transitions(#[case] from: Interaction, #[case] event: InteractionEvent, #[case] to: Interaction) {
        assert_eq!(from.next(event), to);
    }

    #[test]
    fn queued_events_fold_over_latest_state() {
        let state = Rc::new(Interaction::Hover);
        let state = state.reduce(InteractionEvent::Press);
        let state = state.reduce(InteractionEvent::Focus);
        assert_eq!(*state, Interaction::Focus);

        let state = state.reduce(InteractionEvent::Enter);
        assert_eq!(*state, Interaction::Focus);
        let state = state.reduce(InteractionEvent::Blur);
        assert_eq!(*state, Interaction::Default);
    }

    #[test]
    fn unchanged_state_keeps_the_same_allocation() {
        let state = Rc::new(Interaction::Default);
        let reduced = state.clone().reduce(InteractionEvent::Release);
        assert!(Rc::ptr_eq(&state, &reduced));
    }

    #[test]
    fn only_default_is_disengaged() {
        assert!(!Interaction::Default.is_engaged());
        assert!(Interaction::Hover.is_engaged());
        assert!(Interaction::Focus.is_engaged());
        assert!(Interaction::Active.is_engaged());
    }
}
