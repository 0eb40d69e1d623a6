use yew::prelude::*;

use crate::config;
use crate::content::{QUEUE_ROWS, REVIEW_STEPS};
use crate::format::{remaining, rounded, stagger};
use crate::hooks::{use_count_up, use_reveal};

const WEEKLY_REPLY_GOAL: i64 = 50;

/// Dashboard mockup whose numbers count up the first time it scrolls into
/// view.
#[function_component(EmailDashboard)]
pub fn email_dashboard() -> Html {
    let root = use_node_ref();
    let active = use_reveal(root.clone(), config::REVEAL_THRESHOLD);

    let replies = use_count_up(12.0, active, 1700);
    let open_rate = use_count_up(62.0, active, 1800);
    let review_score = use_count_up(84.0, active, 2100);

    html! {
        <div
            ref={root}
            class={classes!("surface-card", "dashboard-shell", active.then(|| "dashboard-active"))}
            id="verification"
        >
            <div class="dashboard-toolbar">
                <p class="dashboard-live">
                    <span aria-hidden="true" class="pulse-dot"></span>
                    {"Live dashboard"}
                </p>
                <div class="dashboard-tabs" aria-hidden="true">
                    <span class="active">{"Overview"}</span>
                    <span>{"Verification"}</span>
                    <span>{"Review"}</span>
                </div>
            </div>

            <div class="dashboard-metrics">
                <article class="dashboard-metric">
                    <div class="dashboard-metric-head">
                        <div>
                            <p class="dashboard-metric-title">{"Replies received"}</p>
                            <p class="dashboard-metric-sub">{format!("Target: {}/week", WEEKLY_REPLY_GOAL)}</p>
                        </div>
                        <div class="dashboard-metric-value-wrap">
                            <strong class="dashboard-metric-value">{rounded(replies).to_string()}</strong>
                            <small>{format!("You need {} more", remaining(WEEKLY_REPLY_GOAL, replies))}</small>
                        </div>
                    </div>
                    <div class="dashboard-progress">
                        <span class="dashboard-progress-fill dashboard-progress-orange" style="width: 24%;"></span>
                    </div>
                </article>

                <article class="dashboard-metric">
                    <div class="dashboard-metric-head">
                        <div>
                            <p class="dashboard-metric-title">{"Open rate"}</p>
                            <p class="dashboard-metric-sub">{"Avg: 45%"}</p>
                        </div>
                        <div class="dashboard-metric-value-wrap">
                            <strong class="dashboard-metric-value">{format!("{}%", rounded(open_rate))}</strong>
                            <small class="dashboard-good">{"Top 5% users"}</small>
                        </div>
                    </div>
                    <div class="dashboard-progress">
                        <span class="dashboard-progress-fill dashboard-progress-green" style="width: 62%;"></span>
                    </div>
                </article>
            </div>

            <div class="dashboard-panels">
                <section class="dashboard-panel dashboard-panel-queue">
                    <div class="dashboard-panel-head">
                        <h3>{"Verification queue"}</h3>
                        <p>{format!("{} checks", QUEUE_ROWS.len())}</p>
                    </div>

                    <div class="dashboard-table-wrap" role="region" aria-label="Verification queue">
                        <table class="dashboard-table">
                            <thead>
                                <tr>
                                    <th>{"Project"}</th>
                                    <th>{"Owner"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"ETA"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for QUEUE_ROWS.iter().enumerate().map(|(index, row)| html! {
                                    <tr key={row.project} style={stagger(140, 110, index)}>
                                        <td>{row.project}</td>
                                        <td>{row.owner}</td>
                                        <td>
                                            <span class={row.status.css_class()}>{row.status.label()}</span>
                                        </td>
                                        <td>{row.eta}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </section>

                <section class="dashboard-panel dashboard-panel-review">
                    <div class="dashboard-panel-head">
                        <h3>{"Project review"}</h3>
                        <p>{format!("{}% complete", rounded(review_score))}</p>
                    </div>

                    <ul class="dashboard-review-list">
                        { for REVIEW_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <li class="dashboard-review-item" key={step.title} style={stagger(200, 120, index)}>
                                <div class="dashboard-review-top">
                                    <strong>{step.title}</strong>
                                    <span>{step.state}</span>
                                </div>
                                <div class="dashboard-progress dashboard-progress-sm">
                                    <span
                                        class="dashboard-progress-fill dashboard-progress-blue"
                                        style={format!("width: {}%;", step.value)}
                                    ></span>
                                </div>
                            </li>
                        }) }
                    </ul>
                </section>
            </div>
        </div>
    }
}
