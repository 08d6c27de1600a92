use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::carousel::TestimonialCarousel;
use crate::components::pricing::PricingSection;
use crate::components::toast::{self, Toast, ToastContext};
use crate::contact::form::MISSING_FIELDS_MESSAGE;
use crate::contact::{use_contact_form, ContactFormAction, QuickMessage};
use crate::content::{CONTACT_INFO, INDUSTRIES, JOURNEY_STEPS, SECTIONS, SERVICES, SOCIAL_LINKS};

#[derive(Properties, PartialEq)]
pub struct SnapSectionProps {
    /// Position in the section registry; supplies the element id and label.
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// One full-viewport child of the snap container.
#[function_component(SnapSection)]
pub fn snap_section(props: &SnapSectionProps) -> Html {
    let Some(section) = SECTIONS.get(props.index) else {
        log::warn!("No registered section at index {}", props.index);
        return html! {};
    };
    html! {
        <section
            id={section.id}
            aria-label={section.label}
            class={classes!("snap-section", props.class.clone())}
        >
            <div class="snap-section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[hook]
fn use_open_form() -> Callback<MouseEvent> {
    let form = use_contact_form();
    Callback::from(move |_: MouseEvent| match &form {
        Some(form) => form.dispatch(ContactFormAction::Open),
        None => log::warn!("No contact form mounted"),
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let open_form = use_open_form();
    html! {
        <SnapSection index={0} class="hero">
            <h1 class="hero-title">
                {"Transform Your Business with "}
                <span class="accent">{"Intelligent AI"}</span>
            </h1>
            <p class="hero-subtitle">
                {"We partner with forward-thinking companies to identify, build and embed AI that moves the needle."}
            </p>
            <button class="cta-button" onclick={open_form}>{"Start Your AI Journey"}</button>
            <div class="scroll-hint">{"Scroll to explore"}</div>
        </SnapSection>
    }
}

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <SnapSection index={1}>
            <h2 class="section-title">{"Our Mission"}</h2>
            <p class="section-lead">
                {"AI is the biggest shift in how work gets done since the internet. Our mission is to make sure every business can take part in it, not just the ones with research labs."}
            </p>
        </SnapSection>
    }
}

#[function_component(JourneyIntro)]
pub fn journey_intro() -> Html {
    html! {
        <SnapSection index={2}>
            <h2 class="section-title">{"Your AI Transformation Journey"}</h2>
            <p class="section-lead">{"Three steps from first idea to measurable impact."}</p>
        </SnapSection>
    }
}

#[function_component(Journey)]
pub fn journey() -> Html {
    html! {
        <SnapSection index={3}>
            <div class="step-grid">
                { for JOURNEY_STEPS.iter().map(|step| html! {
                    <div class="step-card" key={step.number}>
                        <span class="step-number">{step.number}</span>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>
        </SnapSection>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <SnapSection index={4}>
            <h2 class="section-title">{"Our Services"}</h2>
            <div class="card-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="info-card" key={service.title}>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <ul class="feature-list">
                            { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </SnapSection>
    }
}

#[function_component(Industries)]
pub fn industries() -> Html {
    html! {
        <SnapSection index={5}>
            <h2 class="section-title">{"Industries We Serve"}</h2>
            <div class="card-grid">
                { for INDUSTRIES.iter().map(|industry| html! {
                    <div class="info-card" key={industry.title}>
                        <h3>{industry.title}</h3>
                        <p>{industry.description}</p>
                        <span class="industry-stat">{industry.stat}</span>
                    </div>
                }) }
            </div>
        </SnapSection>
    }
}

#[function_component(SuccessStories)]
pub fn success_stories() -> Html {
    html! {
        <SnapSection index={6}>
            <h2 class="section-title">{"Success Stories"}</h2>
            <TestimonialCarousel />
        </SnapSection>
    }
}

#[function_component(Partnership)]
pub fn partnership() -> Html {
    let open_form = use_open_form();
    html! {
        <SnapSection index={7}>
            <h2 class="section-title">{"Ready to lead with AI?"}</h2>
            <p class="section-lead">
                {"Tell us where you are today and we'll map out where AI can take you."}
            </p>
            <button class="cta-button" onclick={open_form}>{"Let's Partner Up"}</button>
        </SnapSection>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <SnapSection index={8}>
            <PricingSection />
        </SnapSection>
    }
}

/// Toast for a quick-message submission and whether it was accepted.
fn quick_message_toast(message: &QuickMessage) -> (Toast, bool) {
    match message.validate() {
        Ok(()) => (
            Toast::success(
                "Message sent successfully!",
                "We'll get back to you within 24 hours.",
            ),
            true,
        ),
        Err(err) => {
            log::debug!("Quick message rejected: {}", err);
            (Toast::error(MISSING_FIELDS_MESSAGE), false)
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let message = use_state(QuickMessage::default);
    let toasts = use_context::<ToastContext>();

    let on_name = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(QuickMessage { name: input.value(), ..(*message).clone() });
        })
    };
    let on_email = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(QuickMessage { email: input.value(), ..(*message).clone() });
        })
    };
    let on_company = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(QuickMessage { company: input.value(), ..(*message).clone() });
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(QuickMessage { message: input.value(), ..(*message).clone() });
        })
    };

    let onsubmit = {
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (toast, accepted) = quick_message_toast(&message);
            if accepted {
                info!(
                    "Quick message submitted: {}",
                    serde_json::to_string(&*message).unwrap_or_default()
                );
                message.set(QuickMessage::default());
            }
            toast::show(&toasts, toast);
        })
    };

    html! {
        <SnapSection index={9} class="contact">
            <h2 class="section-title">{"Get In Touch"}</h2>
            <div class="contact-layout">
                <form class="quick-form" onsubmit={onsubmit} novalidate=true>
                    <h3>{"Send us a message"}</h3>
                    <input type="text" placeholder="Your name" value={message.name.clone()} oninput={on_name} />
                    <input type="email" placeholder="Your email" value={message.email.clone()} oninput={on_email} />
                    <input type="text" placeholder="Company (optional)" value={message.company.clone()} oninput={on_company} />
                    <textarea rows="4" placeholder="How can we help?" value={message.message.clone()} oninput={on_message} />
                    <button type="submit" class="cta-button">{"Send Message"}</button>
                </form>
                <div class="contact-cards">
                    { for CONTACT_INFO.iter().map(|info| html! {
                        <a class="contact-card" key={info.title} href={info.link} target="_blank" rel="noopener noreferrer">
                            <span class="contact-card-title">{info.title}</span>
                            <span class="contact-card-content">{info.content}</span>
                        </a>
                    }) }
                </div>
            </div>
            <footer class="site-footer">
                <span>{"© 2025 Zenik AI. All rights reserved."}</span>
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                        <a key={*name} href={*href} target="_blank" rel="noopener noreferrer">{*name}</a>
                    }) }
                </div>
            </footer>
        </SnapSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::toast::ToastVariant;

    fn filled() -> QuickMessage {
        QuickMessage {
            name: "Grace".into(),
            email: "grace@navy.mil".into(),
            company: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn complete_message_is_accepted() {
        let (toast, accepted) = quick_message_toast(&filled());
        assert!(accepted);
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(toast.title, "Message sent successfully!");
    }

    #[test]
    fn every_rejection_uses_the_generic_title() {
        let missing_name = QuickMessage { name: " ".into(), ..filled() };
        let bad_email = QuickMessage { email: "grace".into(), ..filled() };
        let missing_message = QuickMessage { message: String::new(), ..filled() };

        for message in [missing_name, bad_email, missing_message] {
            let (toast, accepted) = quick_message_toast(&message);
            assert!(!accepted);
            assert_eq!(toast.variant, ToastVariant::Destructive);
            assert_eq!(toast.title, MISSING_FIELDS_MESSAGE);
            assert_eq!(toast.description, None);
        }
    }

    #[test]
    fn section_indices_cover_the_registry() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.first(), Some(&"hero"));
        assert_eq!(ids.last(), Some(&"contact"));
        assert_eq!(ids.len(), 10);
    }
}
