//! Action-item checklist with completion counters.

use leptos::prelude::*;

use crate::net::types::ActionItem;
use crate::state::actions::{ActionsState, overdue_notice};

/// Checklist of meeting follow-ups.
///
/// Keeps its own copy of `actions`; every toggle is also reported through
/// `on_action_update` as `(action_id, completed)`.
#[component]
pub fn ActionList(
    actions: Vec<ActionItem>,
    #[prop(optional)] on_action_update: Option<Callback<(String, bool)>>,
) -> impl IntoView {
    let state = RwSignal::new(ActionsState::new(actions));

    let toggle = move |id: String, completed: bool| {
        state.update(|s| {
            s.set_completed(&id, completed);
        });
        if let Some(callback) = on_action_update {
            callback.run((id, completed));
        }
    };

    let completed_count = move || state.get().completed_count();
    let overdue_count = move || state.get().overdue_count();

    view! {
        <section class="card action-list">
            <header class="card__header action-list__header">
                <div>
                    <h2 class="card__title">"Action Items"</h2>
                    <p class="card__description">"Track and manage follow-up actions from your meeting"</p>
                </div>
                <div class="action-list__badges">
                    <span class="badge badge--secondary">
                        {move || format!("{}/{} Completed", completed_count(), state.get().len())}
                    </span>
                    <Show when=move || { overdue_count() > 0 }>
                        <span class="badge badge--danger">{move || format!("⚠ {} Overdue", overdue_count())}</span>
                    </Show>
                </div>
            </header>

            <div class="card__content action-list__items">
                {move || {
                    let items = state.get().items;
                    if items.is_empty() {
                        return view! {
                            <div class="action-list__empty">"No action items found in this meeting."</div>
                        }
                            .into_any();
                    }
                    items
                        .into_iter()
                        .map(|action| {
                            let completed = action.is_completed();
                            let shows_overdue = action.shows_overdue();
                            let id = action.id.clone();
                            view! {
                                <div
                                    class="action-list__item"
                                    class:action-list__item--completed=completed
                                    class:action-list__item--overdue=!completed && action.is_overdue
                                >
                                    <input
                                        type="checkbox"
                                        class="action-list__checkbox"
                                        prop:checked=completed
                                        on:change=move |ev| toggle(id.clone(), event_target_checked(&ev))
                                    />
                                    <div class="action-list__body">
                                        <div class="action-list__row">
                                            <div>
                                                <h4 class="action-list__title">{action.title.clone()}</h4>
                                                <p class="action-list__description">{action.description.clone()}</p>
                                            </div>
                                            <div class="action-list__item-badges">
                                                <span class=action.priority_badge_class()>{action.priority_badge()}</span>
                                                <span class=action.status_badge_class()>{action.status.label()}</span>
                                            </div>
                                        </div>
                                        <div class="action-list__meta">
                                            <span>"👤 " {action.assignee.clone()}</span>
                                            <span>"📅 " {action.deadline.clone()}</span>
                                            {shows_overdue
                                                .then(|| view! { <span class="action-list__past-due">"⏰ Past Due"</span> })}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                <Show when=move || { overdue_count() > 0 }>
                    <div class="action-list__attention">
                        <strong>"Attention Required"</strong>
                        <p>{move || overdue_notice(overdue_count())}</p>
                    </div>
                </Show>
            </div>
        </section>
    }
}
