use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavLogoProps {
    /// Jump target when the logo is clicked, normally the first section.
    pub on_click: Callback<usize>,
}

#[function_component(NavLogo)]
pub fn nav_logo(props: &NavLogoProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(0))
    };

    html! {
        <>
            <button class="nav-logo" onclick={onclick} aria-label="Back to top">
                <span class="nav-logo-mark">{"Z"}</span>
                <span class="nav-logo-text">{"Zenik AI"}</span>
            </button>
            <style>
                {r#"
                .nav-logo {
                    position: fixed;
                    top: 24px;
                    left: 24px;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    animation: logoIn 0.6s ease-out both;
                }
                .nav-logo-mark {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 36px;
                    height: 36px;
                    border-radius: 10px;
                    background: #4ade80;
                    color: #000;
                    font-weight: 700;
                }
                .nav-logo-text {
                    font-size: 18px;
                    font-weight: 600;
                    letter-spacing: 0.02em;
                }
                @keyframes logoIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </>
    }
}
