//! Landing page with the meeting file uploader.

use leptos::prelude::*;

use crate::components::file_uploader::FileUploader;
use crate::components::toast::notify;
use crate::state::ui::UiState;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "📝",
        title: "Smart Transcription",
        body: "Accurate AI-powered transcription with speaker identification and timestamps.",
    },
    Feature {
        icon: "🎯",
        title: "Action Items",
        body: "Automatically extract and track action items with deadlines and assignees.",
    },
    Feature {
        icon: "📊",
        title: "Smart Insights",
        body: "Analyze sentiment, trends, and meeting effectiveness over time.",
    },
];

#[component]
pub fn UploadPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_upload_complete = Callback::new(move |file_id: String| {
        leptos::logging::log!("upload finished: {file_id}");
        notify(ui, "Upload Complete!", "Your meeting file has been processed successfully.");
    });

    view! {
        <div class="page page--upload">
            <section class="hero">
                <h1 class="hero__title">"AI-Powered Meeting Knowledge Hub"</h1>
                <p class="hero__tagline">
                    "Transform your meeting recordings into actionable insights with AI-powered transcription, summaries, and intelligent analysis."
                </p>
            </section>

            <section class="page__narrow">
                <FileUploader on_upload_complete=on_upload_complete/>
            </section>

            <section class="features">
                {FEATURES
                    .iter()
                    .map(|f| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon" aria-hidden="true">{f.icon}</div>
                                <h3 class="feature-card__title">{f.title}</h3>
                                <p class="feature-card__body">{f.body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
