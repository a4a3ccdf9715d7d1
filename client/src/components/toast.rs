//! Transient notification shown in the bottom corner.

use leptos::prelude::*;

use crate::state::ui::{TOAST_DURATION, Toast, UiState};

/// Post a toast and schedule its dismissal.
pub fn notify(ui: RwSignal<UiState>, title: &str, description: &str) {
    let toast = Toast { title: title.to_owned(), description: description.to_owned() };
    let mut seq = 0;
    ui.update(|u| seq = u.show_toast(toast));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::util::timer::sleep(TOAST_DURATION).await;
        ui.try_update(|u| u.dismiss_toast(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (seq, TOAST_DURATION);
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    move || {
        let state = ui.get();
        state.toast.map(|toast| {
            let seq = state.toast_seq;
            view! {
                <div class="toast" role="status">
                    <div class="toast__body">
                        <strong class="toast__title">{toast.title}</strong>
                        <p class="toast__description">{toast.description}</p>
                    </div>
                    <button
                        class="btn btn--ghost toast__close"
                        title="Dismiss"
                        on:click=move |_| ui.update(|u| u.dismiss_toast(seq))
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
