use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{self, Toast, ToastContext};
use crate::contact::form::{
    check_email, ANNUAL_REVENUES, COMPANY_SIZES, MISSING_FIELDS_MESSAGE, PROJECT_BUDGETS,
};
use crate::contact::{use_contact_form, ContactFormAction, ContactFormContext, Field};

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop_or("text")]
    input_type: &'static str,
    form: ContactFormContext,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let field = props.field;

    let oninput = {
        let form = props.form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactFormAction::Update(field, input.value()));
        })
    };
    let onblur = {
        let form = props.form.clone();
        Callback::from(move |e: FocusEvent| {
            if field == Field::Email {
                let input: HtmlInputElement = e.target_unchecked_into();
                let error = check_email(&input.value()).err().map(|err| err.to_string());
                form.dispatch(ContactFormAction::SetEmailError(error));
            }
            form.dispatch(ContactFormAction::Touch(field, true));
        })
    };

    let error = props.form.visible_error(field);
    let id = format!("lead-{:?}", field).to_lowercase();

    html! {
        <div class="lead-field">
            <label for={id.clone()}>{props.label}</label>
            <input
                id={id}
                type={props.input_type}
                placeholder={props.placeholder}
                value={props.form.data.get(field).to_string()}
                class={classes!(error.is_some().then(|| "invalid"))}
                oninput={oninput}
                onblur={onblur}
            />
            { error.map(|e| html! { <p class="lead-error">{e}</p> }).unwrap_or_default() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [(&'static str, &'static str)],
    form: ContactFormContext,
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    let field = props.field;

    let onchange = {
        let form = props.form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactFormAction::Update(field, select.value()));
            form.dispatch(ContactFormAction::Touch(field, true));
        })
    };
    let onblur = {
        let form = props.form.clone();
        Callback::from(move |_: FocusEvent| form.dispatch(ContactFormAction::Touch(field, true)))
    };

    let selected = props.form.data.get(field).to_string();
    let error = props.form.visible_error(field);

    html! {
        <div class="lead-field">
            <label>{props.label}</label>
            <select class={classes!(error.is_some().then(|| "invalid"))} onchange={onchange} onblur={onblur}>
                <option value="" disabled=true selected={selected.is_empty()}>{props.placeholder}</option>
                { for props.options.iter().map(|(value, text)| html! {
                    <option value={*value} selected={selected == *value}>{*text}</option>
                }) }
            </select>
            { error.map(|e| html! { <p class="lead-error">{e}</p> }).unwrap_or_default() }
        </div>
    }
}

/// The "Tell us where you're at" modal. Visible while the shared form
/// state says it is open.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_contact_form();
    let toasts = use_context::<ToastContext>();

    let Some(form) = form else {
        log::warn!("ContactForm rendered outside ContactFormProvider");
        return html! {};
    };
    if !form.is_open {
        return html! {};
    }

    let close = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(ContactFormAction::Close))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.data.validate() {
                Ok(()) => {
                    info!("Form submitted: {}", form.data.to_json());
                    toast::show(
                        &toasts,
                        Toast::success(
                            "Message sent successfully!",
                            "We'll get back to you within 24 hours.",
                        ),
                    );
                    form.dispatch(ContactFormAction::Clear);
                    form.dispatch(ContactFormAction::Close);
                }
                Err(errors) => {
                    log::debug!("Lead form rejected: {:?}", errors);
                    form.dispatch(ContactFormAction::TouchAll);
                    toast::show(&toasts, Toast::error(MISSING_FIELDS_MESSAGE));
                }
            }
        })
    };

    let on_services = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactFormAction::Update(Field::Services, input.value()));
        })
    };

    html! {
        <div class="lead-backdrop" onclick={close.clone()}>
            <div class="lead-dialog" role="dialog" aria-modal="true" onclick={stop}>
                <button class="lead-close" onclick={close} aria-label="Close">{"×"}</button>
                <h2>{"Tell us where you're at"}</h2>
                <form onsubmit={onsubmit} novalidate=true>
                    <div class="lead-row">
                        <TextField field={Field::Name} label="What is your name?" placeholder="Name" form={form.clone()} />
                        <TextField field={Field::Email} label="What is your email?" placeholder="Email" input_type="email" form={form.clone()} />
                    </div>
                    <TextField field={Field::Role} label="What is your role in the company?" placeholder="Enter role" form={form.clone()} />
                    <div class="lead-row">
                        <TextField field={Field::CompanyName} label="Company Name" placeholder="Enter company name" form={form.clone()} />
                        <TextField field={Field::CompanyWebsite} label="Company Website" placeholder="Enter company website" form={form.clone()} />
                    </div>
                    <div class="lead-row">
                        <SelectField field={Field::CompanySize} label="Company Size" placeholder="Select company size" options={COMPANY_SIZES} form={form.clone()} />
                        <SelectField field={Field::AnnualRevenue} label="Company's Annual Revenue" placeholder="Select revenue range" options={ANNUAL_REVENUES} form={form.clone()} />
                    </div>
                    <SelectField field={Field::ProjectBudget} label="Project budget" placeholder="Select budget range" options={PROJECT_BUDGETS} form={form.clone()} />
                    <div class="lead-field">
                        <label for="lead-services">{"What services are you interested in?"}</label>
                        <textarea
                            id="lead-services"
                            rows="3"
                            placeholder="Strategy, training, custom development..."
                            value={form.data.services.clone()}
                            oninput={on_services}
                        />
                    </div>
                    <div class="lead-actions">
                        <button type="submit" class="lead-submit">{"Submit"}</button>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .lead-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 150;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 16px;
                }
                .lead-dialog {
                    position: relative;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #0a0a0a;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 32px;
                    color: #fff;
                }
                .lead-dialog h2 {
                    font-size: 24px;
                    font-weight: 400;
                    margin-bottom: 24px;
                }
                .lead-close {
                    position: absolute;
                    top: 16px;
                    right: 16px;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 20px;
                    cursor: pointer;
                }
                .lead-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 24px;
                }
                .lead-field {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    margin-bottom: 24px;
                }
                .lead-field label {
                    font-size: 14px;
                    font-weight: 500;
                }
                .lead-field input,
                .lead-field select,
                .lead-field textarea {
                    padding: 10px 12px;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: #0a0a0a;
                    color: #fff;
                    font: inherit;
                }
                .lead-field .invalid {
                    border-color: #f87171;
                }
                .lead-error {
                    color: #f87171;
                    font-size: 13px;
                }
                .lead-actions {
                    display: flex;
                    justify-content: flex-end;
                }
                .lead-submit {
                    padding: 10px 32px;
                    border-radius: 8px;
                    border: none;
                    background: #4ade80;
                    color: #000;
                    font-weight: 600;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .lead-row { grid-template-columns: 1fr; gap: 0; }
                }
                "#}
            </style>
        </div>
    }
}
