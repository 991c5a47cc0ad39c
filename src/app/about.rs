use std::time::Duration;

use leptos::{html, prelude::*};

use super::reveal::{use_in_view_once, Reveal};
use crate::content::{Section, SKILL_CATEGORIES, STATS};
use crate::motion::stagger;

#[component]
pub fn AboutSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container);

    let stats = STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                {(i > 0).then(|| view! { <div class="w-px bg-border hidden sm:block" /> })}
                <div class="text-center">
                    <span class="text-3xl font-display font-bold text-gradient">{stat.value}</span>
                    <p class="text-sm text-muted-foreground">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    let skills = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <Reveal
                    revealed=in_view
                    delay=stagger(Duration::ZERO, Duration::from_millis(100), i)
                    class="glass-card p-6 group hover:border-primary/30 transition-all duration-300"
                >
                    <div class="flex items-center gap-3 mb-4">
                        <div class="p-2 rounded-lg bg-primary/10 text-primary group-hover:bg-primary group-hover:text-primary-foreground transition-colors duration-300">
                            {category.icon}
                        </div>
                        <h3 class="font-display font-semibold text-lg">{category.title}</h3>
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {category
                            .skills
                            .iter()
                            .map(|skill| view! { <span class="skill-badge">{*skill}</span> })
                            .collect_view()}
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::About.id() class="py-24 md:py-32 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-muted/30 to-transparent" />

            <div class="section-container relative z-10" node_ref=container>
                <Reveal revealed=in_view class="text-center mb-16">
                    <span class="text-primary font-medium mb-4 block">"About Me"</span>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-display font-bold mb-6">
                        "Crafting Scalable Solutions"
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "I'm a Software Engineer with a passion for building robust, scalable systems and AI-powered applications that solve real-world problems."
                    </p>
                </Reveal>

                <Reveal
                    revealed=in_view
                    delay=Duration::from_millis(200)
                    class="glass-card p-8 md:p-10 mb-16 max-w-3xl mx-auto border-glow"
                >
                    <p class="text-foreground/90 leading-relaxed text-lg">
                        "With 7+ years of experience, I specialize in full-stack development with a focus on backend systems, AI/ML integration, and cloud infrastructure. I've secured pilots with organizations like the UN World Food Programme and built systems processing 500K+ documents. I thrive on solving complex problems and delivering high-impact solutions."
                    </p>
                    <div class="mt-6 pt-6 border-t border-border">
                        <div class="flex flex-wrap gap-4 justify-center">{stats}</div>
                    </div>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{skills}</div>
            </div>
        </section>
    }
}
