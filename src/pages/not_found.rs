use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_effect_with_deps(
        |_| {
            let path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            log::error!("404 Error: User attempted to access non-existent route: {}", path);
            || ()
        },
        (),
    );

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Oops! Page not found"}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Return to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    color: #fff;
                }
                .not-found h1 {
                    font-size: 4rem;
                    margin-bottom: 1rem;
                }
                .not-found p {
                    color: #999;
                    font-size: 1.25rem;
                    margin-bottom: 1rem;
                }
                .not-found-link {
                    color: #4ade80;
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}
