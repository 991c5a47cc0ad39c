use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{delay_style, RevealFrom};

/// Turns true the first time `target` enters the viewport and stays true.
pub fn use_in_view_once(target: NodeRef<html::Div>) -> Signal<bool> {
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);
    Effect::new(move |_| {
        if visible.get() && !seen.get_untracked() {
            set_seen.set(true);
        }
    });
    seen.into()
}

/// Turns true once the page has hydrated. Effects never run during SSR.
pub fn use_mounted() -> Signal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted.into()
}

#[component]
pub fn Reveal(
    #[prop(into)] revealed: Signal<bool>,
    #[prop(optional)] from: RevealFrom,
    #[prop(optional)] delay: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || format!("{} {}", from.class(revealed.get()), class)
            style=delay_style(delay)
        >
            {children()}
        </div>
    }
}
