use std::time::Duration;

use leptos::{html, prelude::*};

use super::reveal::{use_in_view_once, Reveal};
use crate::content::{Experience, Section, EDUCATION, EXPERIENCES};
use crate::motion::stagger;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container);

    let timeline = EXPERIENCES
        .iter()
        .enumerate()
        .map(|(i, exp)| {
            view! {
                <TimelineEntry
                    exp=*exp
                    index=i
                    revealed=in_view
                    delay=stagger(Duration::ZERO, Duration::from_millis(150), i)
                />
            }
        })
        .collect_view();

    view! {
        <section id=Section::Experience.id() class="py-24 md:py-32 relative">
            <div class="section-container" node_ref=container>
                <Reveal revealed=in_view class="text-center mb-16">
                    <span class="text-primary font-medium mb-4 block">"Experience"</span>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-display font-bold mb-6">
                        "Where I've Worked"
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "7+ years building scalable systems, AI-powered applications, and leading engineering teams."
                    </p>
                </Reveal>

                <div class="relative max-w-4xl mx-auto">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-px bg-border md:-translate-x-1/2" />
                    {timeline}
                </div>

                <Reveal
                    revealed=in_view
                    delay=Duration::from_millis(800)
                    class="mt-16 max-w-2xl mx-auto text-center"
                >
                    <span class="text-primary font-medium mb-4 block">"Education"</span>
                    <div class="glass-card p-6 border-glow">
                        <h3 class="font-display font-bold text-xl mb-1">{EDUCATION.school}</h3>
                        <p class="text-primary font-medium">{EDUCATION.degree}</p>
                        <p class="text-muted-foreground text-sm mt-1">{EDUCATION.detail}</p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

/// One card on the timeline. Even entries sit left of the line on wide screens.
#[component]
fn TimelineEntry(
    exp: Experience,
    index: usize,
    revealed: Signal<bool>,
    delay: Duration,
) -> impl IntoView {
    let left = index % 2 == 0;
    let side = if left {
        "md:pr-8 md:text-right md:mr-auto md:w-1/2"
    } else {
        "md:pl-8 md:ml-auto md:w-1/2"
    };
    let dot = if left { "md:-right-1.5" } else { "md:-left-1.5" };
    let align = if left { "md:text-right" } else { "" };

    view! {
        <Reveal revealed delay class=format!("relative mb-10 md:mb-14 pl-12 md:pl-0 {side}")>
            <div class=format!(
                "absolute top-0 w-3 h-3 rounded-full bg-primary shadow-glow-sm left-3 md:left-auto {dot}",
            ) />

            <div class="glass-card p-5 md:p-6 hover:border-primary/30 transition-all duration-300 group">
                <div class=format!(
                    "flex items-start gap-3 mb-3 {}",
                    if left { "md:flex-row-reverse" } else { "" },
                )>
                    <div class="p-2.5 rounded-xl bg-primary/10 text-primary group-hover:bg-primary group-hover:text-primary-foreground transition-colors shrink-0">
                        "💼"
                    </div>
                    <div class=align>
                        <h3 class="font-display font-bold text-lg text-foreground">{exp.role}</h3>
                        <p class="text-primary font-medium text-sm">{exp.company}</p>
                        <div class=format!(
                            "flex flex-wrap items-center gap-x-3 gap-y-1 text-muted-foreground text-xs mt-1 {}",
                            if left { "md:justify-end" } else { "" },
                        )>
                            <span class="flex items-center gap-1">"📅 " {exp.duration}</span>
                            <span class="flex items-center gap-1">"📍 " {exp.location}</span>
                        </div>
                    </div>
                </div>

                <ul class=format!("space-y-1.5 {align}")>
                    {exp
                        .highlights
                        .iter()
                        .map(|highlight| {
                            view! {
                                <li class="text-muted-foreground text-sm leading-relaxed">
                                    {*highlight}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Reveal>
    }
}
