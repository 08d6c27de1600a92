use yew::prelude::*;

/// Fixed gradient layer behind the sections.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    html! {
        <div class="animated-background" aria-hidden="true">
            <div class="orb orb-one"></div>
            <div class="orb orb-two"></div>
            <div class="orb orb-three"></div>
            <style>
                {r#"
                .animated-background {
                    position: fixed;
                    inset: 0;
                    z-index: -1;
                    overflow: hidden;
                    background: linear-gradient(180deg, #000 0%, #050a06 50%, #000 100%);
                }
                .orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    opacity: 0.25;
                    animation: drift 20s ease-in-out infinite;
                }
                .orb-one {
                    width: 480px;
                    height: 480px;
                    top: -120px;
                    left: -120px;
                    background: #4ade80;
                }
                .orb-two {
                    width: 360px;
                    height: 360px;
                    bottom: -80px;
                    right: -80px;
                    background: #22c55e;
                    animation-delay: -7s;
                }
                .orb-three {
                    width: 280px;
                    height: 280px;
                    top: 40%;
                    left: 55%;
                    background: #16a34a;
                    animation-delay: -14s;
                }
                @keyframes drift {
                    0%, 100% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(60px, -40px) scale(1.1); }
                    66% { transform: translate(-40px, 50px) scale(0.95); }
                }
                "#}
            </style>
        </div>
    }
}
