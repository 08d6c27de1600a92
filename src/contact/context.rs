use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use super::form::{ContactFormData, Field};

/// Page-wide state of the lead form: whether the modal is open, what has
/// been typed so far and which required fields the visitor has left.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub is_open: bool,
    pub data: ContactFormData,
    pub touched: HashSet<Field>,
    pub email_error: Option<String>,
}

pub enum ContactFormAction {
    Open,
    Close,
    Update(Field, String),
    Touch(Field, bool),
    SetEmailError(Option<String>),
    /// Marks every required field touched so all errors show at once.
    TouchAll,
    Clear,
}

impl ContactFormState {
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display under `field`, only once the field was touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        if field == Field::Email {
            if let Some(error) = &self.email_error {
                return Some(error.clone());
            }
        }
        self.data.check(field).err().map(|error| error.to_string())
    }
}

impl Reducible for ContactFormState {
    type Action = ContactFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactFormAction::Open => next.is_open = true,
            ContactFormAction::Close => next.is_open = false,
            ContactFormAction::Update(field, value) => next.data.set(field, value),
            ContactFormAction::Touch(field, touched) => {
                // Only required fields carry a touched flag.
                if field.is_required() {
                    if touched {
                        next.touched.insert(field);
                    } else {
                        next.touched.remove(&field);
                    }
                }
            }
            ContactFormAction::SetEmailError(error) => next.email_error = error,
            ContactFormAction::TouchAll => next.touched.extend(Field::REQUIRED),
            ContactFormAction::Clear => {
                next.data = ContactFormData::default();
                next.touched.clear();
                next.email_error = None;
            }
        }
        Rc::new(next)
    }
}

pub type ContactFormContext = UseReducerHandle<ContactFormState>;

#[derive(Properties, PartialEq)]
pub struct ContactFormProviderProps {
    pub children: Children,
}

/// Owns the lead form state and hands it to every descendant.
#[function_component(ContactFormProvider)]
pub fn contact_form_provider(props: &ContactFormProviderProps) -> Html {
    let state = use_reducer(ContactFormState::default);

    html! {
        <ContextProvider<ContactFormContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<ContactFormContext>>
    }
}

/// The lead form state. `None` outside a [`ContactFormProvider`].
#[hook]
pub fn use_contact_form() -> Option<ContactFormContext> {
    use_context::<ContactFormContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: ContactFormState, actions: Vec<ContactFormAction>) -> ContactFormState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn open_and_close_toggle_visibility_only() {
        let state = apply(
            ContactFormState::default(),
            vec![
                ContactFormAction::Update(Field::Name, "Ada".into()),
                ContactFormAction::Open,
            ],
        );
        assert!(state.is_open);
        let state = apply(state, vec![ContactFormAction::Close]);
        assert!(!state.is_open);
        assert_eq!(state.data.name, "Ada");
    }

    #[test]
    fn errors_stay_hidden_until_touched() {
        let state = ContactFormState::default();
        assert_eq!(state.visible_error(Field::Name), None);

        let state = apply(state, vec![ContactFormAction::Touch(Field::Name, true)]);
        assert_eq!(state.visible_error(Field::Name), Some("Name is required".into()));
    }

    #[test]
    fn optional_fields_are_never_marked_touched() {
        let state = apply(
            ContactFormState::default(),
            vec![ContactFormAction::Touch(Field::Role, true)],
        );
        assert!(!state.is_touched(Field::Role));
    }

    #[test]
    fn explicit_email_error_wins_over_derived_one() {
        let state = apply(
            ContactFormState::default(),
            vec![
                ContactFormAction::Update(Field::Email, "ada@engine.org".into()),
                ContactFormAction::Touch(Field::Email, true),
                ContactFormAction::SetEmailError(Some("Already subscribed".into())),
            ],
        );
        assert_eq!(state.visible_error(Field::Email), Some("Already subscribed".into()));
    }

    #[test]
    fn clear_resets_fields_and_flags_but_not_visibility() {
        let state = apply(
            ContactFormState::default(),
            vec![
                ContactFormAction::Open,
                ContactFormAction::Update(Field::Message, "Hi".into()),
                ContactFormAction::TouchAll,
                ContactFormAction::SetEmailError(Some("bad".into())),
                ContactFormAction::Clear,
            ],
        );
        assert!(state.is_open);
        assert_eq!(state.data, ContactFormData::default());
        assert!(state.touched.is_empty());
        assert_eq!(state.email_error, None);
    }

    #[test]
    fn touch_all_marks_required_fields() {
        let state = apply(ContactFormState::default(), vec![ContactFormAction::TouchAll]);
        for field in Field::REQUIRED {
            assert!(state.is_touched(field));
        }
    }
}
