//! Meeting file intake card with drag-and-drop and simulated processing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns an [`UploadState`] and drives it with [`run_upload`] once a file is
//! accepted. The simulation is tied to this component's [`LiveFlag`], so
//! unmounting mid-upload stops it before it touches disposed signals.

use leptos::prelude::*;

use crate::state::upload::{UploadState, UploadStatus};
use crate::util::lifecycle::LiveFlag;

#[cfg(feature = "hydrate")]
use crate::util::{simulation::run_upload, time::now_ms, timer};

/// Upload card. `on_upload_complete` receives the processed file's id.
#[component]
pub fn FileUploader(#[prop(optional)] on_upload_complete: Option<Callback<String>>) -> impl IntoView {
    let upload = RwSignal::new(UploadState::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let alive = LiveFlag::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });

    let start = Callback::new(move |(name, media_type): (String, String)| {
        match upload.try_update(|u| u.select_file(&name, &media_type)) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                leptos::logging::warn!("upload rejected: {e}");
                return;
            }
            None => return,
        }

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let completed = run_upload(&alive, timer::sleep, now_ms, |step| {
                    upload.update(|u| {
                        u.apply(step);
                    });
                })
                .await;
                if !completed {
                    return;
                }
                if let (Some(file_id), Some(callback)) = (upload.get_untracked().file_id, on_upload_complete) {
                    callback.run(file_id);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&alive, on_upload_complete);
    });

    let on_input_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                start.run((file.name(), file.type_()));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, start);
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        upload.update(|u| u.drag_active = true);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        upload.update(|u| u.drag_active = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        upload.update(|u| u.drag_active = false);

        #[cfg(feature = "hydrate")]
        {
            let first = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0));
            if let Some(file) = first {
                start.run((file.name(), file.type_()));
            }
        }
    };

    let open_picker = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let reset = move |_| {
        upload.update(UploadState::reset);
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    };

    let status = move || upload.get().status;

    view! {
        <section class="card uploader">
            <header class="card__header">
                <h2 class="card__title uploader__headline" class:uploader__headline--error=move || status() == UploadStatus::Error>
                    <span class="uploader__icon" aria-hidden="true">{move || status().icon()}</span>
                    <span>{move || status().headline()}</span>
                </h2>
                <p class="card__description">
                    "Upload audio or video files from your meetings to generate transcripts, summaries, and insights"
                </p>
            </header>

            <div class="card__content">
                {move || match status() {
                    UploadStatus::Idle => view! {
                        <div
                            class="uploader__dropzone"
                            class:uploader__dropzone--active=move || upload.get().drag_active
                            on:dragenter=on_drag_over
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                            on:click=open_picker
                        >
                            <p class="uploader__prompt">"Drop your meeting file here, or click to browse"</p>
                            <p class="uploader__hint">"Supports MP3, MP4, WAV, and other audio/video formats"</p>
                            <button class="btn" type="button">"Choose File"</button>
                        </div>
                    }
                        .into_any(),
                    UploadStatus::Uploading | UploadStatus::Processing => view! {
                        <div class="uploader__busy">
                            <div class="uploader__file">
                                <span class="uploader__file-icon" aria-hidden="true">"🗎"</span>
                                <div>
                                    <p class="uploader__file-name">{move || upload.get().file_name}</p>
                                    <p class="uploader__file-detail">{move || upload.get().detail()}</p>
                                </div>
                            </div>
                            <Show
                                when=move || status() == UploadStatus::Uploading
                                fallback=|| view! {
                                    <p class="uploader__note">
                                        "Our AI is transcribing and analyzing your meeting. This may take a few minutes."
                                    </p>
                                }
                            >
                                <progress class="uploader__progress" max="100" value=move || upload.get().progress.to_string()></progress>
                            </Show>
                        </div>
                    }
                        .into_any(),
                    UploadStatus::Complete => view! {
                        <div class="uploader__result uploader__result--success">
                            <h3>"Processing Complete!"</h3>
                            <p>
                                "Your meeting has been successfully analyzed. You can now view the results in your dashboard."
                            </p>
                            <div class="uploader__actions">
                                <button class="btn" on:click=reset>"Upload Another"</button>
                                <a class="btn btn--primary" href="/dashboard">"View Dashboard"</a>
                            </div>
                        </div>
                    }
                        .into_any(),
                    UploadStatus::Error => view! {
                        <div class="uploader__result uploader__result--error">
                            <h3>"Upload Failed"</h3>
                            <p>"Please ensure your file is an audio or video format and try again."</p>
                            <button class="btn btn--primary" on:click=reset>"Try Again"</button>
                        </div>
                    }
                        .into_any(),
                }}

                <input
                    node_ref=input_ref
                    type="file"
                    class="uploader__input"
                    style="display: none"
                    accept="audio/*,video/*"
                    on:change=on_input_change
                />
            </div>
        </section>
    }
}
