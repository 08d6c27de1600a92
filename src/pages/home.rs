use yew::prelude::*;

use crate::components::background::AnimatedBackground;
use crate::components::contact_form::ContactForm;
use crate::components::floating_contact::FloatingContactButton;
use crate::components::intro::IntroAnimation;
use crate::components::nav_logo::NavLogo;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::components::section_navigation::SectionNavigation;
use crate::config::SnapConfig;
use crate::contact::use_contact_form;
use crate::content::section_labels;
use crate::pages::sections::{
    Contact, Hero, Industries, Journey, JourneyIntro, Mission, Partnership, Pricing, Services,
    SuccessStories,
};
use crate::snap::use_scroll_snap;

#[function_component(Home)]
pub fn home() -> Html {
    let intro_done = use_state(|| false);
    let form = use_contact_form();
    let form_open = form.as_ref().map(|f| f.is_open).unwrap_or(false);

    // Snap input stays off until the intro is gone and while the lead form is up
    let snap = use_scroll_snap(section_labels(), SnapConfig::default(), *intro_done && !form_open);

    let on_intro_complete = {
        let intro_done = intro_done.clone();
        Callback::from(move |_: ()| {
            log::debug!("Intro finished, enabling section navigation");
            intro_done.set(true);
        })
    };

    html! {
        <div class="home">
            <AnimatedBackground />
            <IntroAnimation on_complete={on_intro_complete} />
            if *intro_done {
                <NavLogo on_click={snap.go_to.clone()} />
                <ScrollIndicator
                    sections={snap.labels.clone()}
                    current={snap.current}
                    on_section_click={snap.go_to.clone()}
                />
                <SectionNavigation
                    sections={snap.labels.clone()}
                    current={snap.current}
                    on_section_click={snap.go_to.clone()}
                />
                <FloatingContactButton />
            }
            <div
                ref={snap.container.clone()}
                class={classes!("snap-container", snap.is_transitioning.then(|| "transitioning"))}
            >
                <Hero />
                <Mission />
                <JourneyIntro />
                <Journey />
                <Services />
                <Industries />
                <SuccessStories />
                <Partnership />
                <Pricing />
                <Contact />
            </div>
            <ContactForm />
            <style>
                {r#"
                .home {
                    color: #fff;
                    font-family: system-ui, -apple-system, sans-serif;
                }
                .snap-container {
                    height: 100vh;
                    overflow: hidden;
                    position: relative;
                }
                .snap-section {
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0 6rem;
                    box-sizing: border-box;
                }
                .snap-section-inner {
                    width: 100%;
                    max-width: 1200px;
                    text-align: center;
                }
                .hero-title {
                    font-size: 4rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .accent {
                    color: #4ade80;
                }
                .hero-subtitle,
                .section-lead {
                    color: #bbb;
                    font-size: 1.25rem;
                    max-width: 720px;
                    margin: 0 auto 2rem;
                }
                .scroll-hint {
                    margin-top: 3rem;
                    color: #666;
                    font-size: 0.9rem;
                    animation: bob 2s ease-in-out infinite;
                }
                .section-title {
                    font-size: 3rem;
                    margin-bottom: 2rem;
                }
                .cta-button {
                    padding: 1rem 2.5rem;
                    border-radius: 12px;
                    border: none;
                    background: #4ade80;
                    color: #000;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .cta-button:hover {
                    transform: translateY(-2px);
                }
                .step-grid,
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    text-align: left;
                }
                .step-card,
                .info-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(74, 222, 128, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                }
                .step-number {
                    color: #4ade80;
                    font-size: 2.5rem;
                    font-weight: 700;
                }
                .info-card p,
                .step-card p {
                    color: #aaa;
                }
                .feature-list {
                    list-style: none;
                    padding: 0;
                    color: #ccc;
                    font-size: 0.9rem;
                }
                .industry-stat {
                    color: #4ade80;
                    font-weight: 600;
                }
                .carousel {
                    max-width: 900px;
                    margin: 0 auto;
                }
                .case-card {
                    background: rgba(30, 30, 30, 0.7);
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: left;
                    animation: fadeIn 0.5s ease-out;
                }
                .case-industry {
                    color: #4ade80;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                }
                .case-results {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                    margin: 1.5rem 0;
                }
                .case-result {
                    display: flex;
                    flex-direction: column;
                }
                .case-value {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #4ade80;
                }
                .case-metric,
                .case-note {
                    color: #aaa;
                    font-size: 0.85rem;
                }
                .case-quote {
                    border-left: 3px solid #4ade80;
                    padding-left: 1rem;
                    color: #ddd;
                }
                .carousel-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .carousel-arrow {
                    background: none;
                    border: 1px solid #4ade80;
                    color: #4ade80;
                    border-radius: 50%;
                    width: 40px;
                    height: 40px;
                    cursor: pointer;
                }
                .carousel-dots {
                    display: flex;
                    gap: 8px;
                }
                .carousel-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }
                .carousel-dot.active {
                    background: #4ade80;
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    text-align: left;
                }
                .quick-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .quick-form input,
                .quick-form textarea {
                    padding: 0.75rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    font: inherit;
                }
                .contact-cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 1rem;
                    border-radius: 12px;
                    background: rgba(30, 30, 30, 0.7);
                    color: #fff;
                    text-decoration: none;
                }
                .contact-card-title {
                    color: #4ade80;
                    font-weight: 600;
                }
                .contact-card-content {
                    color: #aaa;
                    font-size: 0.9rem;
                }
                .site-footer {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 3rem;
                    color: #666;
                    font-size: 0.85rem;
                }
                .social-links {
                    display: flex;
                    gap: 1rem;
                }
                .social-links a {
                    color: #888;
                    text-decoration: none;
                }
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes bob {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(8px); }
                }
                @media (max-width: 968px) {
                    .snap-section { padding: 0 1.5rem; }
                    .hero-title { font-size: 2.5rem; }
                    .step-grid,
                    .card-grid,
                    .contact-layout,
                    .case-results { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
