use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod snap;
mod contact;
mod components {
    pub mod background;
    pub mod carousel;
    pub mod contact_form;
    pub mod floating_contact;
    pub mod intro;
    pub mod nav_logo;
    pub mod pricing;
    pub mod scroll_indicator;
    pub mod section_navigation;
    pub mod toast;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod sections;
}

use components::toast::Toaster;
use contact::ContactFormProvider;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/zenik-ai")]
    ZenikAi,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::ZenikAi => {
            info!("Redirecting legacy path to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ContactFormProvider>
            <Toaster>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </Toaster>
        </ContactFormProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
