//! Application frame: brand header, primary navigation and content area.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// A primary navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { name: "Upload", href: "/", icon: "⇪" },
    NavItem { name: "Dashboard", href: "/dashboard", icon: "▦" },
    NavItem { name: "Insights", href: "/insights", icon: "▤" },
    NavItem { name: "Chat", href: "/chat", icon: "✉" },
];

/// Whether `href` is the current route. Only exact matches count, so `/`
/// is not active on nested pages.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    normalized == href
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="layout">
            <header class="layout__header">
                <div class="layout__brand">
                    <span class="layout__logo" aria-hidden="true">"◉"</span>
                    <div>
                        <h1 class="layout__title">"MeetingHub AI"</h1>
                        <p class="layout__tagline">"AI-Powered Meeting Knowledge"</p>
                    </div>
                </div>
                <nav class="layout__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            let href = item.href;
                            let active = move || is_active(&pathname.get(), href);
                            view! {
                                <a
                                    href=href
                                    class="btn layout__nav-item"
                                    class:btn--primary=active
                                    class:btn--ghost=move || !active()
                                    aria-current=move || active().then_some("page")
                                >
                                    <span aria-hidden="true">{item.icon}</span>
                                    <span>{item.name}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </header>
            <main class="layout__main">{children()}</main>
        </div>
    }
}
