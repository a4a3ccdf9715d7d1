//! Assistant chat page.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::net::assistant::mock_backend_responder;

#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="page page--chat">
            <header class="page__header">
                <h1 class="page__title">"AI Chat Assistant"</h1>
                <p class="page__subtitle">"Ask questions about your meetings and get intelligent insights"</p>
            </header>
            <section class="page__narrow">
                <ChatPanel responder=mock_backend_responder()/>
            </section>
        </div>
    }
}
