use leptos::prelude::*;

use super::scroll_to_section;
use crate::content::{Section, OWNER};

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |section: Section| {
        set_menu_open.set(false);
        scroll_to_section(section.id());
    };

    let links = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <a
                        href=format!("#{}", section.id())
                        class=class
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to(section);
                        }
                    >
                        {section.nav_label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-background/80 backdrop-blur-md border-b border-border">
            <nav class="section-container flex items-center justify-between h-16">
                <a
                    href="#home"
                    class="font-display font-bold text-lg text-gradient"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(Section::Home);
                    }
                >
                    {OWNER}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {links("text-sm font-medium text-muted-foreground hover:text-primary transition-colors")}
                </div>
                <button
                    type="button"
                    class="md:hidden p-2 text-muted-foreground hover:text-primary"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col gap-4 px-6 pb-6 bg-background/95">
                    {links("text-base font-medium text-muted-foreground hover:text-primary")}
                </div>
            </Show>
        </header>
    }
}
