use std::time::Duration;

use leptos::prelude::*;

use super::icon::SvgIcon;
use super::reveal::{use_mounted, Reveal};
use super::scroll_to_section;
use crate::content::{Section, AVATAR_SRC, OWNER, OWNER_TITLE, SOCIAL_LINKS};
use crate::motion::{stagger, RevealFrom};

const STEP: Duration = Duration::from_millis(100);

#[component]
pub fn HeroSection() -> impl IntoView {
    let mounted = use_mounted();
    let delay = |index| stagger(Duration::ZERO, STEP, index);

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-radial from-primary/5 via-transparent to-transparent" />
            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl animate-float" />
            <div
                class="absolute bottom-1/4 right-1/4 w-64 h-64 bg-primary/5 rounded-full blur-2xl animate-float"
                style="animation-delay: 2s"
            />
            <div class="absolute inset-0 noise-overlay pointer-events-none" />

            <div class="section-container relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <Reveal revealed=mounted from=RevealFrom::Scale class="mb-8 flex justify-center">
                        <div class="relative">
                            <div class="absolute -inset-1 bg-gradient-to-r from-primary via-primary/50 to-primary rounded-full blur-md opacity-60 animate-pulse-glow" />
                            <img
                                src=AVATAR_SRC
                                alt=OWNER
                                class="relative w-32 h-32 md:w-40 md:h-40 rounded-full object-cover border-2 border-primary/50"
                            />
                        </div>
                    </Reveal>

                    <Reveal revealed=mounted delay=delay(1) class="mb-6">
                        <span class="inline-block px-4 py-2 text-sm font-medium text-primary border border-primary/30 rounded-full bg-primary/5">
                            "Available for new opportunities"
                        </span>
                    </Reveal>

                    <Reveal revealed=mounted delay=delay(2)>
                        <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-display font-bold mb-4">
                            <span class="text-foreground">"Hi, I'm "</span>
                            <span class="text-gradient">{OWNER}</span>
                        </h1>
                    </Reveal>

                    <Reveal revealed=mounted delay=delay(3)>
                        <h2 class="text-2xl sm:text-3xl md:text-4xl font-display font-semibold text-muted-foreground mb-6">
                            {OWNER_TITLE}
                        </h2>
                    </Reveal>

                    <Reveal revealed=mounted delay=delay(4)>
                        <p class="text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto mb-10">
                            "Building scalable, high-performance applications with modern technologies. Passionate about AI/ML integration, clean architecture, and developer experience."
                        </p>
                    </Reveal>

                    <Reveal
                        revealed=mounted
                        delay=delay(5)
                        class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12"
                    >
                        <button
                            type="button"
                            class="btn-hero"
                            on:click=move |_| scroll_to_section(Section::Projects.id())
                        >
                            "View Projects"
                        </button>
                        <button
                            type="button"
                            class="btn-hero-outline"
                            on:click=move |_| scroll_to_section(Section::Contact.id())
                        >
                            "Contact Me"
                        </button>
                    </Reveal>

                    <Reveal
                        revealed=mounted
                        delay=delay(6)
                        class="flex items-center justify-center gap-4"
                    >
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target=link.opens_new_tab().then_some("_blank")
                                        rel=link.opens_new_tab().then_some("noopener noreferrer")
                                        class="p-3 rounded-full bg-muted hover:bg-primary/20 hover:text-primary hover:-translate-y-0.5 transition-all duration-300 text-2xl"
                                        aria-label=link.name
                                    >
                                        <SvgIcon icon=link.icon() class="w-6 h-6" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>

                <Reveal
                    revealed=mounted
                    from=RevealFrom::Scale
                    delay=delay(9)
                    class="absolute bottom-10 left-1/2 -translate-x-1/2"
                >
                    <button
                        type="button"
                        class="flex flex-col items-center gap-2 text-muted-foreground hover:text-primary transition-colors animate-bounce"
                        on:click=move |_| scroll_to_section(Section::About.id())
                    >
                        <span class="text-sm font-medium">"Scroll"</span>
                        <span aria-hidden="true">"↓"</span>
                    </button>
                </Reveal>
            </div>
        </section>
    }
}
