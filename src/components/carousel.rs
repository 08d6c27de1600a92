use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::CASE_STUDIES;

/// Position in a wrap-around slide deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len: len.max(1) }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn previous(self) -> Self {
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    pub fn select(self, index: usize) -> Self {
        Self { index: index.min(self.len - 1), ..self }
    }
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel() -> Html {
    let carousel = use_state(|| Carousel::new(CASE_STUDIES.len()));
    let hovered = use_state(|| false);

    {
        let deps = (*hovered, carousel.index());
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |(paused, _)| {
                let interval = if *paused {
                    None
                } else {
                    Some(Interval::new(CAROUSEL_INTERVAL_MS, move || {
                        carousel.set(carousel.next());
                    }))
                };
                move || drop(interval)
            },
            deps,
        );
    }

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.previous()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set(carousel.next()))
    };
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let study = &CASE_STUDIES[carousel.index()];

    html! {
        <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="case-card" key={carousel.index()}>
                <div class="case-content">
                    <span class="case-industry">{study.industry}</span>
                    <h3>{study.company}</h3>
                    <p class="case-challenge">{study.challenge}</p>
                    <div class="case-results">
                        { for study.results.iter().map(|result| html! {
                            <div class="case-result">
                                <span class="case-value">{result.value}</span>
                                <span class="case-metric">{result.metric}</span>
                                <span class="case-note">{result.note}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <blockquote class="case-quote">
                    <p>{format!("\u{201c}{}\u{201d}", study.testimonial)}</p>
                    <cite>{study.author}</cite>
                </blockquote>
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={on_previous} aria-label="Previous story">{"←"}</button>
                <div class="carousel-dots">
                    { for (0..CASE_STUDIES.len()).map(|i| {
                        let active = i == carousel.index();
                        let carousel = carousel.clone();
                        let onclick = Callback::from(move |_: MouseEvent| carousel.set(carousel.select(i)));
                        html! {
                            <button
                                class={classes!("carousel-dot", active.then(|| "active"))}
                                onclick={onclick}
                                aria-label={format!("Story {}", i + 1)}
                            />
                        }
                    }) }
                </div>
                <button class="carousel-arrow" onclick={on_next} aria-label="Next story">{"→"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let c = Carousel::new(3);
        assert_eq!(c.previous().index(), 2);
        assert_eq!(c.next().next().next().index(), 0);
    }

    #[test]
    fn select_clamps_to_last_slide() {
        assert_eq!(Carousel::new(3).select(10).index(), 2);
    }

    #[test]
    fn empty_deck_behaves_like_one_slide() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.previous().index(), 0);
    }
}
