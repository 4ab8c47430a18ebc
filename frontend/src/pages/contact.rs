use yew::prelude::*;

use crate::components::buttons::PrimaryButton;
use crate::components::fade_in::FadeIn;
use crate::config::CREAM;
use crate::content::CONTACT_PITCH;
use crate::style_state::use_interaction;
use crate::styles::{self, ButtonSize, SANS, SERIF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Message => "Message",
        }
    }

    pub fn input_id(self) -> String {
        format!("contact-{}", self.label().to_lowercase())
    }

    fn placeholder(self) -> &'static str {
        match self {
            FieldKind::Name => "Your name",
            FieldKind::Email => "your@email.com",
            FieldKind::Message => "What's on your mind?",
        }
    }
}

#[derive(Properties, PartialEq)]
struct ContactFieldProps {
    kind: FieldKind,
}

#[function_component(ContactField)]
fn contact_field(props: &ContactFieldProps) -> Html {
    let interaction = use_interaction();
    let kind = props.kind;
    let id = kind.input_id();

    let field = match kind {
        FieldKind::Message => html! {
            <textarea
                id={id.clone()}
                rows="4"
                placeholder={kind.placeholder()}
                style={format!("{} resize: vertical;", styles::form_field(interaction.state))}
                onfocus={interaction.onfocus}
                onblur={interaction.onblur}
            />
        },
        FieldKind::Name | FieldKind::Email => html! {
            <input
                id={id.clone()}
                type={if kind == FieldKind::Email { "email" } else { "text" }}
                placeholder={kind.placeholder()}
                style={styles::form_field(interaction.state)}
                onfocus={interaction.onfocus}
                onblur={interaction.onblur}
            />
        },
    };

    html! {
        <div>
            <label
                for={id}
                style={format!("color: {CREAM}; font-size: 11px; letter-spacing: 0.12em; text-transform: uppercase; font-family: {SANS}; font-weight: 600; display: block; margin-bottom: 8px;")}
            >
                {kind.label()}
            </label>
            {field}
        </div>
    }
}

/// Contact form. The fields are not wired to any submission endpoint.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" style={styles::section(80, 1000)}>
            <div class="grid-responsive" style="display: grid; grid-template-columns: 1fr 1fr; gap: clamp(32px, 5vw, 56px); align-items: start;">
                <FadeIn distance={44.0} duration={0.85}>
                    <div>
                        <p style={styles::eyebrow()}>{"Contact"}</p>
                        <h2 style={format!("font-family: {SERIF}; font-size: clamp(32px, 4vw, 48px); font-weight: 700; color: {CREAM}; line-height: 1.15;")}>
                            {"Let's build something "}
                            <span style="font-style: italic; font-weight: 400;">{"together."}</span>
                        </h2>
                        <p style={format!("{} margin-top: 18px; max-width: 380px;", styles::body_text(15))}>
                            {CONTACT_PITCH}
                        </p>
                    </div>
                </FadeIn>

                <FadeIn delay={0.2} distance={44.0} duration={0.85}>
                    <div style="display: flex; flex-direction: column; gap: 18px;">
                        <ContactField kind={FieldKind::Name} />
                        <ContactField kind={FieldKind::Email} />
                        <ContactField kind={FieldKind::Message} />
                        <PrimaryButton label="Send Message" size={ButtonSize::Form} arrow={false} />
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ids_follow_labels() {
        assert_eq!(FieldKind::Name.input_id(), "contact-name");
        assert_eq!(FieldKind::Email.input_id(), "contact-email");
        assert_eq!(FieldKind::Message.input_id(), "contact-message");
    }
}
