use std::time::Duration;

use leptos::{html, prelude::*};

use super::icon::SvgIcon;
use super::reveal::{use_in_view_once, Reveal};
use crate::content::{Icon, Project, Section, GITHUB_URL, PROJECTS};
use crate::motion::stagger;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let in_view = use_in_view_once(container);

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <Reveal
                    revealed=in_view
                    delay=stagger(Duration::ZERO, Duration::from_millis(100), i)
                    class="glass-card relative group overflow-hidden hover:border-primary/30 transition-all duration-500"
                >
                    <ProjectCard project=*project />
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Projects.id() class="py-24 md:py-32 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-muted/30 to-transparent" />

            <div class="section-container relative z-10" node_ref=container>
                <Reveal revealed=in_view class="text-center mb-16">
                    <span class="text-primary font-medium mb-4 block">"Projects"</span>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-display font-bold mb-6">
                        "Featured Work"
                    </h2>
                    <p class="text-muted-foreground text-lg max-w-2xl mx-auto">
                        "A selection of projects showcasing AI/ML integration, scalable architecture, and high-performance systems."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>

                <Reveal
                    revealed=in_view
                    delay=Duration::from_millis(600)
                    class="text-center mt-12"
                >
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-hero-outline inline-flex items-center gap-2"
                    >
                        "View All on GitHub"
                        <span aria-hidden="true">"↗"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="p-6 h-full flex flex-col">
            <div class="flex items-start justify-between mb-4">
                <div class="p-3 rounded-xl bg-primary/10 text-primary text-2xl group-hover:bg-primary group-hover:text-primary-foreground transition-colors duration-300">
                    {project.icon}
                </div>
                <div class="flex gap-2">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="p-2 rounded-lg text-muted-foreground hover:text-primary hover:bg-primary/10 transition-all"
                        aria-label="Source on GitHub"
                    >
                        <SvgIcon icon=Icon::GitHub />
                    </a>
                    {project
                        .live_url()
                        .map(|live| {
                            view! {
                                <a
                                    href=live
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2 rounded-lg text-muted-foreground hover:text-primary hover:bg-primary/10 transition-all"
                                    aria-label="Live site"
                                >
                                    <SvgIcon icon=Icon::ExternalLink />
                                </a>
                            }
                        })}
                </div>
            </div>

            <h3 class="font-display font-bold text-xl text-foreground mb-2 group-hover:text-primary transition-colors">
                {project.title}
                {project.featured.then(|| view! { <span class="ml-2 text-xs text-primary align-middle">"★"</span> })}
            </h3>
            <p class="text-muted-foreground text-sm leading-relaxed flex-grow mb-4">
                {project.description}
            </p>

            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .tech
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-2 py-1 text-xs font-medium text-muted-foreground bg-muted rounded">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="absolute inset-0 bg-gradient-to-t from-primary/5 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 pointer-events-none" />
    }
}
