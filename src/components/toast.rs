use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::TOAST_LIFETIME_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: Some(description.to_string()),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<(u32, Toast)>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.toasts.push((next.next_id, toast));
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|(toast_id, _)| *toast_id != id),
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastList>;

/// Shows `toast` if a [`Toaster`] is mounted above the caller.
pub fn show(context: &Option<ToastContext>, toast: Toast) {
    match context {
        Some(toasts) => toasts.dispatch(ToastAction::Push(toast)),
        None => log::warn!("Toast dropped, no toaster mounted: {}", toast.title),
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    id: u32,
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast-destructive",
    };

    html! {
        <div class={class} role="status">
            <div class="toast-body">
                <div class="toast-title">{&props.toast.title}</div>
                {
                    if let Some(description) = &props.toast.description {
                        html! { <div class="toast-description">{description}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button class="toast-close" onclick={close} aria-label="Close">{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub children: Children,
}

/// Provides the toast queue to its children and renders it on top.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastContext> context={toasts.clone()}>
            { for props.children.iter() }
            <div class="toaster">
                {
                    toasts.toasts.iter().map(|(id, toast)| html! {
                        <ToastItem key={*id} id={*id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    bottom: 24px;
                    right: 24px;
                    z-index: 200;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    max-width: 380px;
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    gap: 16px;
                    padding: 16px 20px;
                    border-radius: 12px;
                    background: rgba(20, 20, 20, 0.95);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    color: #fff;
                    animation: toastIn 0.3s ease-out;
                }
                .toast-destructive {
                    background: rgba(127, 29, 29, 0.95);
                    border-color: rgba(248, 113, 113, 0.4);
                }
                .toast-title {
                    font-weight: 600;
                }
                .toast-description {
                    margin-top: 4px;
                    font-size: 14px;
                    color: rgba(255, 255, 255, 0.75);
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 18px;
                    cursor: pointer;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(Toast::error("one")))
            .reduce(ToastAction::Push(Toast::error("two")));
        let ids: Vec<u32> = list.toasts.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(Toast::error("one")))
            .reduce(ToastAction::Push(Toast::success("two", "details")))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].1.title, "two");
        assert_eq!(list.toasts[0].1.description.as_deref(), Some("details"));
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(Toast::error("one")))
            .reduce(ToastAction::Dismiss(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
