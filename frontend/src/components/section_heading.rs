use yew::prelude::*;

use super::fade_in::FadeIn;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub eyebrow: AttrValue,
    /// Heading content; may contain line breaks and emphasis.
    pub children: Children,
}

/// Small uppercase label followed by the section title, revealed one after the other.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <>
            <FadeIn distance={20.0} duration={0.6}>
                <p style={styles::eyebrow()}>{props.eyebrow.to_string()}</p>
            </FadeIn>
            <FadeIn delay={0.12} distance={50.0} duration={0.85}>
                <h2 style={styles::section_title(56)}>
                    { for props.children.iter() }
                </h2>
            </FadeIn>
        </>
    }
}
