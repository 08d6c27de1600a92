use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Stages of the opening logo animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStage {
    /// Logo panels unfold and the wordmark is revealed in the centre.
    Reveal,
    /// Logo shrinks and travels to the nav position.
    MoveToCorner,
    /// Overlay fades out.
    FadeOut,
    Done,
}

impl IntroStage {
    /// How long the stage lasts before the next one starts.
    pub fn dwell_ms(&self) -> u32 {
        match self {
            IntroStage::Reveal => 1000 + 1200 + 300, // delay, text reveal, hold
            IntroStage::MoveToCorner => 1600 + 800,  // travel, hold
            IntroStage::FadeOut => 800,
            IntroStage::Done => 0,
        }
    }

    pub fn next(&self) -> IntroStage {
        match self {
            IntroStage::Reveal => IntroStage::MoveToCorner,
            IntroStage::MoveToCorner => IntroStage::FadeOut,
            IntroStage::FadeOut | IntroStage::Done => IntroStage::Done,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            IntroStage::Reveal => "intro-reveal",
            IntroStage::MoveToCorner => "intro-corner",
            IntroStage::FadeOut => "intro-fade",
            IntroStage::Done => "intro-done",
        }
    }
}

/// Total time from mount until the overlay is gone.
pub fn total_duration_ms() -> u32 {
    let mut stage = IntroStage::Reveal;
    let mut total = 0;
    while stage != IntroStage::Done {
        total += stage.dwell_ms();
        stage = stage.next();
    }
    total
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct IntroAnimationProps {
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

#[function_component(IntroAnimation)]
pub fn intro_animation(props: &IntroAnimationProps) -> Html {
    let stage = use_state(|| IntroStage::Reveal);

    // Page stays locked while the intro plays
    use_effect_with_deps(
        |_| {
            log::debug!("Intro playing for {} ms", total_duration_ms());
            set_body_overflow("hidden");
            || set_body_overflow("auto")
        },
        (),
    );

    {
        let stage_setter = stage.setter();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |current: &IntroStage| {
                let current = *current;
                let timeout = if current == IntroStage::Done {
                    set_body_overflow("auto");
                    on_complete.emit(());
                    None
                } else {
                    Some(Timeout::new(current.dwell_ms(), move || {
                        stage_setter.set(current.next());
                    }))
                };
                move || drop(timeout)
            },
            *stage,
        );
    }

    if *stage == IntroStage::Done {
        return html! {};
    }

    html! {
        <div class={classes!("intro-overlay", stage.class())}>
            <div class="intro-mark">
                <div class="intro-logo">
                    <img class="intro-panel panel-1" src="/assets/logo.svg" alt="Zenik AI Logo" />
                    <img class="intro-panel panel-2" src="/assets/logo.svg" alt="" />
                    <img class="intro-panel panel-3" src="/assets/logo.svg" alt="" />
                </div>
                <div class="intro-wordmark">
                    <h1>{"zenik"}</h1>
                </div>
            </div>
            <style>
                {r#"
                .intro-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: #0a0a0a;
                    opacity: 1;
                    transition: opacity 0.8s ease-in-out;
                }
                .intro-overlay.intro-fade {
                    opacity: 0;
                }
                .intro-mark {
                    position: fixed;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%) scale(1);
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    transition: all 1.6s cubic-bezier(0.76, 0, 0.24, 1);
                }
                .intro-corner .intro-mark,
                .intro-fade .intro-mark {
                    top: -8px;
                    left: -8px;
                    transform: translate(0, 0) scale(0.5);
                }
                .intro-logo {
                    position: relative;
                    width: 112px;
                    height: 112px;
                    perspective: 800px;
                    transform: scale(1.35);
                }
                .intro-panel {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .panel-1 {
                    clip-path: polygon(0 0, 33.33% 0, 33.33% 100%, 0% 100%);
                }
                .panel-2 {
                    clip-path: polygon(33.33% 0, 66.66% 0, 66.66% 100%, 33.33% 100%);
                    transform-origin: 33.33% 50%;
                    animation: panelUnfold 0.6s ease-in-out 0.35s both;
                }
                .panel-3 {
                    clip-path: polygon(66.66% 0, 100% 0, 100% 100%, 66.66% 100%);
                    transform-origin: 66.66% 50%;
                    animation: panelUnfold 0.6s ease-in-out 0.7s both;
                }
                .intro-wordmark {
                    overflow: hidden;
                    white-space: nowrap;
                    animation: textReveal 1.2s cubic-bezier(0.65, 0, 0.35, 1) 1s both;
                }
                .intro-wordmark h1 {
                    font-size: 48px;
                    font-weight: 400;
                    background: linear-gradient(to right, #fff, #4ade80);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                @keyframes panelUnfold {
                    from { transform: rotateY(180deg); opacity: 0; }
                    to { transform: rotateY(0); opacity: 1; }
                }
                @keyframes textReveal {
                    from { max-width: 0; opacity: 0; }
                    to { max-width: 400px; opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_run_in_order_and_end_at_done() {
        let mut stage = IntroStage::Reveal;
        let mut seen = vec![stage];
        while stage != IntroStage::Done {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                IntroStage::Reveal,
                IntroStage::MoveToCorner,
                IntroStage::FadeOut,
                IntroStage::Done
            ]
        );
    }

    #[test]
    fn done_is_terminal() {
        assert_eq!(IntroStage::Done.next(), IntroStage::Done);
        assert_eq!(IntroStage::Done.dwell_ms(), 0);
    }

    #[test]
    fn whole_intro_is_the_sum_of_its_stages() {
        assert_eq!(total_duration_ms(), 2500 + 2400 + 800);
    }
}
