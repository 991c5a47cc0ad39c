mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod icon;
mod navbar;
mod projects;
mod reveal;
mod toaster;

pub use contact::{contact_transport, send_contact_message};
pub use toaster::Toaster;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{FAVICON_HREF, OWNER};
use about::AboutSection;
use contact::ContactSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsSection;
use toaster::ToastViewport;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href=FAVICON_HREF />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    Toaster::provide();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta
            name="description"
            content="Software engineer building scalable backend systems and AI-powered applications."
        />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <ToastViewport />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <AboutSection />
        <ExperienceSection />
        <ProjectsSection />
        <ContactSection />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <section class="min-h-screen flex flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-4xl font-display font-bold">"404"</h1>
            <p class="text-muted-foreground">"Oops! Page not found"</p>
            <a href="/" class="text-primary hover:underline">
                "Return to Home"
            </a>
        </section>
    }
}

/// Smooth-scrolls to the element with `section_id`. Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    if let Some(el) = document().get_element_by_id(section_id) {
        el.scroll_into_view();
    } else {
        log::debug!("no section with id '{section_id}'");
    }
}
