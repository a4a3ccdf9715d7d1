//! Read-only meeting analysis card.

use leptos::prelude::*;

use crate::net::types::MeetingRecord;

#[component]
pub fn MeetingSummary(meeting: MeetingRecord) -> impl IntoView {
    let sentiment = meeting.sentiment;

    view! {
        <section class="card meeting-summary">
            <header class="card__header meeting-summary__header">
                <div>
                    <h2 class="card__title meeting-summary__title">{meeting.title}</h2>
                    <p class="card__description">"Meeting analysis and summary"</p>
                </div>
                <span class=format!("{} meeting-summary__sentiment", sentiment.badge_class())>
                    {format!("{} {}", sentiment.emoji(), sentiment.label())}
                </span>
            </header>

            <div class="card__content">
                <div class="meeting-summary__details">
                    <div class="meeting-summary__detail">
                        <span class="meeting-summary__detail-label">"Date:"</span>
                        <span class="meeting-summary__detail-value">{meeting.date}</span>
                    </div>
                    <div class="meeting-summary__detail">
                        <span class="meeting-summary__detail-label">"Duration:"</span>
                        <span class="meeting-summary__detail-value">{meeting.duration}</span>
                    </div>
                    <div class="meeting-summary__detail">
                        <span class="meeting-summary__detail-label">"Confidence:"</span>
                        <span class="meeting-summary__detail-value">{format!("{}%", meeting.confidence)}</span>
                    </div>
                </div>

                <hr class="separator"/>

                <h3 class="meeting-summary__section">"Participants"</h3>
                <div class="meeting-summary__participants">
                    {meeting
                        .participants
                        .into_iter()
                        .map(|name| view! { <span class="badge badge--secondary">{name}</span> })
                        .collect::<Vec<_>>()}
                </div>

                <hr class="separator"/>

                <h3 class="meeting-summary__section">"Meeting Summary"</h3>
                <p class="meeting-summary__text">{meeting.summary}</p>

                <hr class="separator"/>

                <h3 class="meeting-summary__section">"Key Decisions"</h3>
                <ul class="meeting-summary__decisions">
                    {meeting
                        .key_decisions
                        .into_iter()
                        .map(|decision| view! { <li class="meeting-summary__decision">{decision}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </section>
    }
}
