//! Analytics page.

use leptos::prelude::*;

use crate::components::insights_chart::InsightsChart;
use crate::net::mock::{mock_insights, or_empty};

#[component]
pub fn InsightsPage() -> impl IntoView {
    let data = or_empty(mock_insights());

    view! {
        <div class="page page--insights">
            <header class="page__header">
                <h1 class="page__title">"Meeting Insights"</h1>
                <p class="page__subtitle">"Analyze trends, performance, and patterns in your meeting data"</p>
            </header>
            <InsightsChart data=data/>
        </div>
    }
}
