use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionNavigationProps {
    pub sections: Vec<String>,
    pub current: usize,
    pub on_section_click: Callback<usize>,
}

/// "Section i / n" panel on the left edge with up/down arrows.
#[function_component(SectionNavigation)]
pub fn section_navigation(props: &SectionNavigationProps) -> Html {
    let total = props.sections.len();
    let can_go_up = props.current > 0;
    let can_go_down = props.current + 1 < total;

    let on_up = {
        let on_click = props.on_section_click.clone();
        let current = props.current;
        Callback::from(move |_: MouseEvent| {
            if can_go_up {
                on_click.emit(current - 1);
            }
        })
    };
    let on_down = {
        let on_click = props.on_section_click.clone();
        let current = props.current;
        Callback::from(move |_: MouseEvent| {
            if can_go_down {
                on_click.emit(current + 1);
            }
        })
    };

    let label = props.sections.get(props.current).cloned().unwrap_or_default();

    html! {
        <div class="section-nav">
            <div class="section-nav-position">
                <span class="section-nav-caption">{"Section"}</span>
                <span class="section-nav-count">{format!("{} / {}", props.current + 1, total)}</span>
            </div>
            <div class="section-nav-arrows">
                <button
                    class={classes!("section-nav-arrow", (!can_go_up).then(|| "disabled"))}
                    disabled={!can_go_up}
                    onclick={on_up}
                    aria-label="Previous section"
                >{"▲"}</button>
                <button
                    class={classes!("section-nav-arrow", (!can_go_down).then(|| "disabled"))}
                    disabled={!can_go_down}
                    onclick={on_down}
                    aria-label="Next section"
                >{"▼"}</button>
            </div>
            <div class="section-nav-label" key={props.current}>{label}</div>
            <style>
                {r#"
                .section-nav {
                    position: fixed;
                    left: 24px;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 16px;
                    color: rgba(255, 255, 255, 0.6);
                }
                .section-nav-caption {
                    display: block;
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin-bottom: 4px;
                }
                .section-nav-count {
                    display: block;
                    color: #4ade80;
                    font-weight: 600;
                }
                .section-nav-arrows {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }
                .section-nav-arrow {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    border: 2px solid #4ade80;
                    background: transparent;
                    color: #4ade80;
                    font-size: 10px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .section-nav-arrow:hover:not(.disabled) {
                    background: #4ade80;
                    color: #000;
                    transform: scale(1.1);
                }
                .section-nav-arrow.disabled {
                    border-color: rgba(255, 255, 255, 0.15);
                    color: rgba(255, 255, 255, 0.15);
                    cursor: not-allowed;
                }
                .section-nav-label {
                    max-width: 96px;
                    font-size: 12px;
                    text-align: center;
                    animation: labelIn 0.3s ease-out;
                }
                @keyframes labelIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .section-nav { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
