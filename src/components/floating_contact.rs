use yew::prelude::*;

use crate::contact::{use_contact_form, ContactFormAction};

#[function_component(FloatingContactButton)]
pub fn floating_contact_button() -> Html {
    let form = use_contact_form();

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(form) = &form {
            form.dispatch(ContactFormAction::Open);
        }
    });

    html! {
        <>
            <button class="floating-contact" onclick={onclick}>
                {"Get In Touch"}
            </button>
            <style>
                {r#"
                .floating-contact {
                    position: fixed;
                    bottom: 32px;
                    right: 32px;
                    z-index: 60;
                    padding: 14px 28px;
                    border-radius: 9999px;
                    border: none;
                    background: linear-gradient(135deg, #4ade80, #22c55e);
                    color: #000;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 10px 30px rgba(74, 222, 128, 0.3);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .floating-contact:hover {
                    transform: translateY(-2px) scale(1.05);
                    box-shadow: 0 14px 40px rgba(74, 222, 128, 0.45);
                }
                "#}
            </style>
        </>
    }
}
