//! Insight stat cards and tabbed SVG charts.
//!
//! Geometry comes from `util::chart_math`; this module only turns it into
//! SVG elements.

use leptos::prelude::*;

use crate::net::types::{DeadlineWeek, InsightsData, MeetingTypeSlice, SentimentPoint, sentiment_label};
use crate::state::ui::InsightsTab;
use crate::util::chart_math::{PlotBox, grouped_bars, line_points, nice_ceiling, pie_slices, polyline_attr, slice_path};

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 320.0;
const PLOT: PlotBox = PlotBox::new(40.0, 20.0, 540.0, 260.0);
const PIE_RADIUS: f64 = 120.0;

fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

fn fmt(v: f64) -> String {
    format!("{v:.1}")
}

#[component]
pub fn InsightsChart(data: InsightsData) -> impl IntoView {
    let selected = RwSignal::new(InsightsTab::default());
    let stats = data.monthly_stats.clone();
    let trend = stats.trend_direction;

    let sentiment = sentiment_chart(&data.sentiment_trend);
    let deadlines = deadline_chart(&data.deadline_performance);
    let types = meeting_type_chart(&data.meeting_types);

    let active = move |tab: InsightsTab| selected.get() == tab;

    view! {
        <div class="insights">
            <div class="insights__stats">
                <StatCard label="Total Meetings" value=stats.total_meetings.to_string() icon="📅"/>
                <StatCard label="Completion Rate" value=format!("{}%", stats.completion_rate) icon="🎯"/>
                <StatCard label="Avg Sentiment" value=sentiment_label(stats.avg_sentiment).to_owned() icon=trend.icon()/>
                <StatCard label="Trend" value=trend.label().to_owned() icon=trend.icon()/>
            </div>

            <div class="tabs">
                <div class="tabs__list" role="tablist">
                    {InsightsTab::ALL
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

                <div class="card insights__panel" style:display=move || if active(InsightsTab::Sentiment) { "" } else { "none" }>
                    <h2 class="card__title">"Meeting Sentiment Over Time"</h2>
                    <p class="card__description">"Track the overall sentiment and mood of your meetings"</p>
                    {sentiment}
                </div>
                <div class="card insights__panel" style:display=move || if active(InsightsTab::Deadlines) { "" } else { "none" }>
                    <h2 class="card__title">"Deadline Performance"</h2>
                    <p class="card__description">"Compare completed vs missed deadlines over time"</p>
                    {deadlines}
                </div>
                <div class="card insights__panel" style:display=move || if active(InsightsTab::Types) { "" } else { "none" }>
                    <h2 class="card__title">"Meeting Distribution"</h2>
                    <p class="card__description">"Breakdown of your meetings by type"</p>
                    {types}
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String, icon: &'static str) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div>
                <p class="stat-card__label">{label}</p>
                <p class="stat-card__value">{value}</p>
            </div>
            <span class="stat-card__icon" aria-hidden="true">{icon}</span>
        </div>
    }
}

fn sentiment_chart(points: &[SentimentPoint]) -> impl IntoView + use<> {
    let values: Vec<f64> = points.iter().map(|p| p.sentiment).collect();
    let coords = line_points(PLOT, &values, 0.0, 1.0);
    let polyline = polyline_attr(&coords);

    let grid = [0.0, 0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|tick| {
            let y = fmt(PLOT.y_for(tick, 0.0, 1.0));
            view! {
                <line class="chart__grid" x1=fmt(PLOT.left) x2=fmt(PLOT.right()) y1=y.clone() y2=y.clone()></line>
                <text class="chart__axis-label" x=fmt(PLOT.left - 6.0) y=y text-anchor="end">{format!("{tick}")}</text>
            }
        })
        .collect::<Vec<_>>();

    let dots = points
        .iter()
        .zip(&coords)
        .map(|(point, at)| {
            view! {
                <circle class="chart__dot" cx=fmt(at.x) cy=fmt(at.y) r="6"></circle>
                <text class="chart__axis-label" x=fmt(at.x) y=fmt(PLOT.bottom() + 16.0) text-anchor="middle">
                    {point.date.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--line" viewBox=view_box() role="img">
            {grid}
            <polyline class="chart__line" points=polyline fill="none"></polyline>
            {dots}
        </svg>
    }
}

fn deadline_chart(weeks: &[DeadlineWeek]) -> impl IntoView + use<> {
    let groups: Vec<Vec<f64>> = weeks
        .iter()
        .map(|w| vec![f64::from(w.completed), f64::from(w.missed)])
        .collect();
    let data_max = groups.iter().flatten().copied().fold(0.0, f64::max);
    let max = nice_ceiling(data_max, 4.0);
    let bars = grouped_bars(PLOT, &groups, max, 0.7);

    let ticks = (0..=4)
        .map(|i| {
            let value = max * f64::from(i) / 4.0;
            let y = fmt(PLOT.y_for(value, 0.0, max));
            view! {
                <line class="chart__grid" x1=fmt(PLOT.left) x2=fmt(PLOT.right()) y1=y.clone() y2=y.clone()></line>
                <text class="chart__axis-label" x=fmt(PLOT.left - 6.0) y=y text-anchor="end">{format!("{value:.0}")}</text>
            }
        })
        .collect::<Vec<_>>();

    let rects = weeks
        .iter()
        .zip(bars)
        .map(|(week, group)| {
            let label_x = group.first().map_or(PLOT.left, |first| {
                let last = group.last().unwrap_or(first);
                (first.x + last.x + last.width) / 2.0
            });
            let shapes = group
                .into_iter()
                .zip(["chart__bar chart__bar--completed", "chart__bar chart__bar--missed"])
                .map(|(r, class)| {
                    view! {
                        <rect class=class x=fmt(r.x) y=fmt(r.y) width=fmt(r.width) height=fmt(r.height) rx="4"></rect>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                {shapes}
                <text class="chart__axis-label" x=fmt(label_x) y=fmt(PLOT.bottom() + 16.0) text-anchor="middle">
                    {week.week.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--bar" viewBox=view_box() role="img">
            {ticks}
            {rects}
        </svg>
        <div class="chart__legend">
            <span class="chart__legend-item chart__legend-item--completed">"Completed"</span>
            <span class="chart__legend-item chart__legend-item--missed">"Missed"</span>
        </div>
    }
}

fn meeting_type_chart(slices: &[MeetingTypeSlice]) -> impl IntoView + use<> {
    let cx = VIEW_WIDTH / 2.0;
    let cy = VIEW_HEIGHT / 2.0;
    let counts: Vec<u32> = slices.iter().map(|s| s.count).collect();

    let wedges = slices
        .iter()
        .zip(pie_slices(&counts))
        .map(|(slice, geometry)| {
            let anchor = geometry.label_anchor(cx, cy, PIE_RADIUS + 24.0);
            let anchor_side = if anchor.x < cx { "end" } else { "start" };
            view! {
                <path class="chart__slice" d=slice_path(cx, cy, PIE_RADIUS, geometry) fill=slice.color.clone()></path>
                <text class="chart__slice-label" x=fmt(anchor.x) y=fmt(anchor.y) text-anchor=anchor_side>
                    {format!("{}: {}", slice.kind, slice.count)}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg class="chart chart--pie" viewBox=view_box() role="img">
            {wedges}
        </svg>
    }
}
