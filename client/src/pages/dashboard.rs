//! Meeting dashboard with summary, action items and transcript tabs.
//!
//! The page keeps its own copy of the action items; `ActionList` reports
//! checkbox changes back through its callback.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::action_list::ActionList;
use crate::components::meeting_summary::MeetingSummary;
use crate::net::mock::{TRANSCRIPT_CONFIDENCE, mock_actions, mock_meeting, mock_transcript, or_empty};
use crate::state::actions::ActionsState;
use crate::state::ui::DashboardTab;
use crate::util::download::{save_text, transcript_filename};

/// Footer line under the transcript.
pub fn confidence_note(confidence: u8) -> String {
    format!("Transcript generated with {confidence}% confidence")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let selected = RwSignal::new(DashboardTab::default());
    let meeting = or_empty(mock_meeting());
    let initial_actions = or_empty(mock_actions());
    let actions = RwSignal::new(ActionsState::new(initial_actions.clone()));
    let transcript = StoredValue::new(mock_transcript());
    let filename = StoredValue::new(transcript_filename(&meeting.title));

    let on_action_update = Callback::new(move |(id, completed): (String, bool)| {
        actions.update(|a| {
            if !a.set_completed(&id, completed) {
                leptos::logging::warn!("unknown action item: {id}");
            }
        });
    });

    let download = move |_: leptos::ev::MouseEvent| {
        filename.with_value(|name| transcript.with_value(|text| save_text(name, text)));
    };

    let active = move |tab: DashboardTab| selected.get() == tab;
    let panel_display = move |tab: DashboardTab| if active(tab) { "" } else { "none" };

    view! {
        <div class="page page--dashboard">
            <header class="page__header page__header--split">
                <div>
                    <h1 class="page__title">"Meeting Dashboard"</h1>
                    <p class="page__subtitle">"View and manage your meeting analysis results"</p>
                </div>
                <button class="btn btn--outline" on:click=download>
                    "⬇ Download Transcript"
                </button>
            </header>

            <div class="tabs">
                <div class="tabs__list" role="tablist">
                    {DashboardTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tabs__trigger"
                                    class:tabs__trigger--active=move || active(tab)
                                    role="tab"
                                    on:click=move |_| selected.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="tabs__panel" style:display=move || panel_display(DashboardTab::Summary)>
                    <MeetingSummary meeting=meeting/>
                </div>

                <div class="tabs__panel" style:display=move || panel_display(DashboardTab::Actions)>
                    <ActionList actions=initial_actions on_action_update=on_action_update/>
                    <p class="muted">
                        {move || {
                            let a = actions.get();
                            format!("{} of {} completed", a.completed_count(), a.len())
                        }}
                    </p>
                </div>

                <div class="tabs__panel" style:display=move || panel_display(DashboardTab::Transcript)>
                    <div class="card">
                        <h2 class="card__title">"📄 Meeting Transcript"</h2>
                        <p class="card__description">
                            "Complete transcription with speaker identification and timestamps"
                        </p>
                        <pre class="transcript">{transcript.get_value()}</pre>
                        <div class="transcript__footer">
                            <span>{confidence_note(TRANSCRIPT_CONFIDENCE)}</span>
                            <button class="btn btn--ghost btn--small" on:click=download>
                                "⬇ Download"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
