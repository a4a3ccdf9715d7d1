//! Assistant chat panel: message history, suggestions and prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turn-taking lives in [`ChatState`]: one exchange at a time, a typing
//! indicator while the reply is outstanding. Replies come from the injected
//! [`Responder`] or the canned table in `net::assistant`.

use leptos::prelude::*;

use crate::net::assistant::Responder;
use crate::state::chat::{ChatState, SUGGESTED_QUERIES, Sender};
use crate::util::lifecycle::LiveFlag;
use crate::util::time::now_ms;

#[cfg(feature = "hydrate")]
use crate::net::assistant::respond;

/// Chat panel. Without a `responder` it answers from the canned table.
#[component]
pub fn ChatPanel(#[prop(optional)] responder: Option<Responder>) -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(now_ms()));
    let responder = StoredValue::new(responder);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let alive = LiveFlag::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });

    // Effects only run in the browser: stamp the greeting with the local
    // clock, then reveal timestamps.
    let mounted = RwSignal::new(false);
    Effect::new(move || {
        chat.update(|c| c.stamp_welcome(now_ms()));
        mounted.set(true);
    });

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = Callback::new(move |()| {
        let Some(prompt) = chat.try_update(|c| c.begin_send(now_ms())).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let responder = responder.get_value();
            leptos::task::spawn_local(async move {
                let outcome = respond(responder.as_ref(), prompt, crate::util::timer::sleep).await;
                if !alive.is_live() {
                    return;
                }
                chat.update(|c| c.finish_send(outcome, now_ms()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&alive, responder, prompt);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send.run(());
        }
    };

    let loading = move || chat.get().loading;
    let can_send = move || chat.get().can_send();

    view! {
        <section class="card chat-panel">
            <header class="card__header">
                <h2 class="card__title">
                    <span aria-hidden="true">"🤖"</span>
                    <span>"AI Meeting Assistant"</span>
                </h2>
                <p class="card__description">"Ask questions about your meetings, action items, and insights"</p>
            </header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                <For
                    each=move || chat.get().messages
                    key=|msg| msg.id.clone()
                    children=move |msg| {
                        let is_user = msg.sender == Sender::User;
                        let id = msg.id.clone();
                        view! {
                            <div class="chat-panel__message" class:chat-panel__message--user=is_user>
                                <span class="chat-panel__avatar" aria-hidden="true">
                                    {if is_user { "🧑" } else { "🤖" }}
                                </span>
                                <div class="chat-panel__bubble-group">
                                    <div class="chat-panel__bubble">
                                        {if msg.is_typing {
                                            view! { <span class="chat-panel__typing">"Thinking..."</span> }.into_any()
                                        } else {
                                            view! { <div class="chat-panel__text">{msg.content}</div> }.into_any()
                                        }}
                                    </div>
                                    <span class="chat-panel__time">
                                        {move || chat.with(|c| c.time_label(&id, mounted.get()))}
                                    </span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || chat.get().shows_suggestions()>
                <div class="chat-panel__suggestions">
                    <p class="chat-panel__suggestions-label">"Try asking:"</p>
                    <div class="chat-panel__suggestion-list">
                        {SUGGESTED_QUERIES
                            .into_iter()
                            .map(|query| {
                                view! {
                                    <button
                                        class="btn btn--small chat-panel__suggestion"
                                        on:click=move |_| chat.update(|c| c.use_suggestion(query))
                                    >
                                        {query}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about your meetings..."
                    disabled=loading
                    prop:value=move || chat.get().input
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=move |_| do_send.run(())
                    disabled=move || !can_send()
                    title="Send"
                >
                    {move || if loading() { "…" } else { "➤" }}
                </button>
            </div>
        </section>
    }
}
