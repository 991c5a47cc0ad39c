use leptos::prelude::*;

use super::icon::SvgIcon;
use crate::content::{BUILD_YEAR, OWNER, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-border">
            <div class="section-container">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-sm text-muted-foreground flex items-center gap-1">
                        "© " {BUILD_YEAR} " " {OWNER} ". Built with "
                        <span class="text-primary" aria-label="love">"♥"</span>
                        " and Leptos."
                    </p>
                    <div class="flex items-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target=link.opens_new_tab().then_some("_blank")
                                        rel=link.opens_new_tab().then_some("noopener noreferrer")
                                        class="text-muted-foreground hover:text-primary transition-colors text-xl"
                                        aria-label=link.name
                                    >
                                        <SvgIcon icon=link.icon() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
