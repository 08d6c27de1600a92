use yew::prelude::*;

use crate::contact::{use_contact_form, ContactFormAction};
use crate::content::{Plan, PLANS};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    index: usize,
    on_choose: Callback<&'static str>,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan: &Plan = &PLANS[props.index];
    let onclick = {
        let on_choose = props.on_choose.clone();
        let name = plan.name;
        Callback::from(move |_: MouseEvent| on_choose.emit(name))
    };

    html! {
        <div class={classes!("pricing-card", plan.popular.then(|| "popular"))}>
            if plan.popular {
                <div class="popular-tag">{"Most Popular"}</div>
            }
            <div class="card-header">
                <h3>{plan.name}</h3>
                <p>{plan.description}</p>
                <div class="price">
                    <span class="amount">{plan.price_label()}</span>
                    if plan.monthly_price.is_some() {
                        <span class="period">{"/mo"}</span>
                    }
                </div>
            </div>
            <ul class="includes">
                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            <button
                class={classes!("plan-button", plan.primary.then(|| "primary"))}
                onclick={onclick}
            >
                {plan.button_text}
            </button>
        </div>
    }
}

/// Plan cards. Every plan button opens the lead form.
#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let form = use_contact_form();

    let on_choose = Callback::from(move |plan: &'static str| {
        log::info!("Pricing plan selected: {}", plan);
        match &form {
            Some(form) => form.dispatch(ContactFormAction::Open),
            None => log::warn!("No contact form mounted for plan {}", plan),
        }
    });

    html! {
        <div class="pricing-container">
            <div class="pricing-header">
                <h2>{"Pricing"}</h2>
                <p>{"Choose the perfect plan for your AI transformation journey"}</p>
            </div>
            <div class="pricing-grid">
                { for (0..PLANS.len()).map(|index| html! {
                    <PlanCard key={index} index={index} on_choose={on_choose.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .pricing-container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    color: #fff;
                }
                .pricing-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .pricing-header h2 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .pricing-header p {
                    color: #999;
                    font-size: 1.1rem;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(74, 222, 128, 0.1);
                    border-radius: 24px;
                    padding: 2rem;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .pricing-card:hover {
                    transform: translateY(-5px);
                    border-color: rgba(74, 222, 128, 0.3);
                }
                .pricing-card.popular {
                    border-color: rgba(74, 222, 128, 0.5);
                    transform: scale(1.05);
                }
                .popular-tag {
                    position: absolute;
                    top: -12px;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #4ade80;
                    color: #000;
                    padding: 0.25rem 1rem;
                    border-radius: 20px;
                    font-size: 0.8rem;
                    font-weight: 600;
                }
                .card-header h3 {
                    font-size: 1.5rem;
                    margin-bottom: 0.5rem;
                }
                .card-header p {
                    color: #999;
                }
                .price {
                    margin: 1.5rem 0;
                }
                .price .amount {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #4ade80;
                }
                .price .period {
                    color: #999;
                    margin-left: 0.25rem;
                }
                .includes {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex: 1;
                }
                .includes li {
                    padding: 0.5rem 0;
                    color: #ccc;
                }
                .includes li::before {
                    content: "✓";
                    color: #4ade80;
                    margin-right: 0.5rem;
                }
                .plan-button {
                    width: 100%;
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid #4ade80;
                    background: transparent;
                    color: #4ade80;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .plan-button.primary,
                .plan-button:hover {
                    background: #4ade80;
                    color: #000;
                }
                @media (max-width: 968px) {
                    .pricing-grid { grid-template-columns: 1fr; }
                    .pricing-card.popular { transform: none; }
                }
                "#}
            </style>
        </div>
    }
}
