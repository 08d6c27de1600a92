use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollIndicatorProps {
    pub sections: Vec<String>,
    pub current: usize,
    pub on_section_click: Callback<usize>,
}

/// Dot per section, fixed to the right edge. Clicking a dot jumps to it.
#[function_component(ScrollIndicator)]
pub fn scroll_indicator(props: &ScrollIndicatorProps) -> Html {
    html! {
        <div class="scroll-indicator">
            { for props.sections.iter().enumerate().map(|(index, label)| {
                let on_click = props.on_section_click.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_click.emit(index));
                html! {
                    <button
                        key={label.clone()}
                        class={classes!("indicator-dot", (index == props.current).then(|| "active"))}
                        style={format!("animation-delay: {}ms;", index * 100)}
                        title={label.clone()}
                        onclick={onclick}
                    >
                        <span class="sr-only">{label}</span>
                    </button>
                }
            }) }
            <style>
                {r#"
                .scroll-indicator {
                    position: fixed;
                    right: 24px;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                }
                .indicator-dot {
                    width: 12px;
                    height: 12px;
                    padding: 0;
                    border-radius: 50%;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    background: transparent;
                    cursor: pointer;
                    transition: all 0.3s ease;
                    animation: dotIn 0.4s ease-out both;
                }
                .indicator-dot:hover {
                    transform: scale(1.25);
                    border-color: rgba(74, 222, 128, 0.5);
                }
                .indicator-dot.active {
                    background: #4ade80;
                    border-color: #4ade80;
                    box-shadow: 0 0 12px rgba(74, 222, 128, 0.6);
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                @keyframes dotIn {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                "#}
            </style>
        </div>
    }
}
