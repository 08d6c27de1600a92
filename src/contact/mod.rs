pub mod context;
pub mod form;

pub use context::{use_contact_form, ContactFormAction, ContactFormContext, ContactFormProvider};
pub use form::{Field, QuickMessage};
