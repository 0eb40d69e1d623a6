use yew::prelude::*;

use crate::config;
use crate::content::PREVIEW_NAV;
use crate::format::{grouped, one_decimal, stagger};
use crate::hooks::{use_count_up, use_reveal};

const CHART_BARS: usize = 11;
const HIGHLIGHTED_BAR: usize = 6;

#[function_component(WorkflowPreview)]
pub fn workflow_preview() -> Html {
    let root = use_node_ref();
    let visible = use_reveal(root.clone(), config::REVEAL_THRESHOLD);

    let emails_sent = use_count_up(124_032.0, visible, 2800);
    let open_rate = use_count_up(64.2, visible, 2400);
    let qualified = use_count_up(1_402.0, visible, 3000);

    let metric_class = visible.then(|| "metric-live");

    html! {
        <div
            ref={root}
            class={classes!("surface-card", "workflow-shell", visible.then(|| "workflow-preview-active"))}
        >
            <style>
                {r#"
                .workflow-shell { padding: 0.85rem; }
                .workflow-frame {
                    display: grid;
                    grid-template-columns: 72px 1fr;
                    gap: 0.85rem;
                    border-radius: 18px;
                    background: var(--surface-muted);
                    padding: 0.85rem;
                    text-align: left;
                }
                .workflow-nav {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.6rem 0;
                    border-radius: 14px;
                    background: var(--surface);
                }
                .workflow-badge {
                    display: grid;
                    place-items: center;
                    width: 34px;
                    height: 34px;
                    border-radius: 10px;
                    background: var(--brand);
                    color: #fff;
                    font-weight: 700;
                }
                .workflow-nav-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.7rem; }
                .workflow-nav-item { display: flex; align-items: center; gap: 6px; }
                .workflow-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: var(--line);
                }
                .workflow-line { width: 26px; height: 6px; border-radius: 3px; background: var(--line); }
                .workflow-preview-active .workflow-dot { animation: dotPulse 1.6s ease-in-out infinite; }
                .workflow-storage { margin-top: auto; font-size: 0.65rem; color: var(--ink-500); }
                .workflow-storage-track { width: 48px; height: 5px; border-radius: 3px; background: var(--line); overflow: hidden; }
                .workflow-storage-track span { display: block; width: 64%; height: 100%; background: var(--brand); }
                .workflow-topbar { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.85rem; }
                .workflow-search {
                    flex: 1;
                    max-width: 260px;
                    padding: 0.45rem 0.8rem;
                    border-radius: 10px;
                    background: var(--surface);
                    color: var(--ink-500);
                    font-size: 0.8rem;
                }
                .workflow-indicators { display: flex; gap: 6px; }
                .workflow-indicator { width: 10px; height: 10px; border-radius: 50%; background: var(--line); }
                .workflow-indicator.active { background: var(--success); }
                .workflow-metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.6rem; }
                .workflow-metrics article { padding: 0.75rem; border-radius: 12px; background: var(--surface); }
                .workflow-metrics p { margin: 0; font-size: 0.72rem; color: var(--ink-500); }
                .workflow-metrics h3 { margin: 0.3rem 0; font-size: 1.35rem; font-variant-numeric: tabular-nums; }
                .workflow-metrics article.metric-live { animation: metricLift 0.6s ease-out both; }
                .metric-line { display: block; height: 3px; border-radius: 2px; width: 40%; }
                .metric-line-brand { background: var(--brand); }
                .metric-line-blue { background: var(--accent-blue); }
                .metric-line-green { background: var(--success); }
                .workflow-chart { position: relative; margin-top: 0.85rem; padding: 0.9rem; border-radius: 14px; background: var(--surface); }
                .workflow-chart-head { display: flex; justify-content: space-between; }
                .workflow-chart-head p { margin: 0; font-weight: 700; font-size: 0.85rem; }
                .workflow-chart-head small { color: var(--ink-500); font-size: 0.7rem; }
                .workflow-chart-tabs { display: flex; gap: 0.4rem; font-size: 0.7rem; }
                .workflow-chart-tabs span { padding: 0.2rem 0.55rem; border-radius: 999px; }
                .workflow-chart-tabs span.active { background: var(--ink-900); color: #fff; }
                .workflow-bars { display: flex; align-items: flex-end; gap: 6px; height: 110px; margin-top: 0.8rem; }
                .workflow-bar { flex: 1; height: 30%; border-radius: 6px 6px 2px 2px; background: var(--line); transform-origin: bottom; }
                .workflow-bar:nth-child(odd) { height: 55%; }
                .workflow-bar:nth-child(3n) { height: 72%; }
                .workflow-bar.active { height: 92%; background: var(--brand); }
                .workflow-preview-active .workflow-bar { animation: barGrow 0.7s ease-out both; }
                .workflow-cursor { position: absolute; right: 34%; top: 48%; width: 22px; opacity: 0; }
                .workflow-cursor svg { fill: var(--ink-900); stroke: #fff; stroke-width: 1.2; }
                .workflow-preview-active .workflow-cursor { animation: cursorMove 3.2s ease-in-out 0.8s both; }
                .workflow-floating-card {
                    position: absolute;
                    right: 1rem;
                    top: -0.8rem;
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                    padding: 0.55rem 0.8rem;
                    border-radius: 12px;
                    background: var(--surface);
                    box-shadow: 0 10px 26px rgba(15, 23, 42, 0.12);
                    font-size: 0.72rem;
                    opacity: 0;
                }
                .workflow-floating-card p { margin: 0; color: var(--ink-500); }
                .workflow-floating-dot { width: 10px; height: 10px; border-radius: 50%; background: var(--success); }
                .workflow-preview-active .workflow-floating-card { animation: metricLift 0.6s ease-out 2.4s both; }
                @keyframes dotPulse { 50% { background: var(--brand); } }
                @keyframes barGrow { from { transform: scaleY(0.1); } to { transform: scaleY(1); } }
                @keyframes metricLift { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: translateY(0); } }
                @keyframes cursorMove {
                    0% { opacity: 0; transform: translate(40px, 30px); }
                    30% { opacity: 1; }
                    70% { opacity: 1; transform: translate(0, 0); }
                    100% { opacity: 0; transform: translate(0, 0); }
                }
                @media (max-width: 640px) {
                    .workflow-frame { grid-template-columns: 1fr; }
                    .workflow-nav { display: none; }
                    .workflow-metrics h3 { font-size: 1rem; }
                }
                "#}
            </style>
            <div class="workflow-frame">
                <aside class="workflow-nav">
                    <div class="workflow-badge">{"E"}</div>
                    <ul class="workflow-nav-list">
                        { for PREVIEW_NAV.iter().enumerate().map(|(index, item)| html! {
                            <li class="workflow-nav-item" key={*item}>
                                <span class="workflow-dot" style={stagger(0, 90, index)}></span>
                                <span class="workflow-line"></span>
                            </li>
                        }) }
                    </ul>
                    <div class="workflow-storage">
                        <p>{"Storage"}</p>
                        <div class="workflow-storage-track">
                            <span></span>
                        </div>
                    </div>
                </aside>

                <div class="workflow-main">
                    <div class="workflow-topbar">
                        <div class="workflow-search">{"Search leads..."}</div>
                        <div class="workflow-indicators">
                            <span class="workflow-indicator active"></span>
                            <span class="workflow-indicator"></span>
                        </div>
                    </div>

                    <div class="workflow-metrics">
                        <article class={metric_class}>
                            <p>{"Emails sent"}</p>
                            <h3>{grouped(emails_sent)}</h3>
                            <span class="metric-line metric-line-brand"></span>
                        </article>
                        <article class={metric_class}>
                            <p>{"Open rate"}</p>
                            <h3 class="text-accent-blue">{format!("{}%", one_decimal(open_rate))}</h3>
                            <span class="metric-line metric-line-blue"></span>
                        </article>
                        <article class={metric_class}>
                            <p>{"Qualified"}</p>
                            <h3 class="text-success">{grouped(qualified)}</h3>
                            <span class="metric-line metric-line-green"></span>
                        </article>
                    </div>

                    <div class="workflow-chart">
                        <div class="workflow-chart-head">
                            <div>
                                <p>{"Campaign Growth"}</p>
                                <small>{"Real-time outreach performance"}</small>
                            </div>
                            <div class="workflow-chart-tabs">
                                <span class="active">{"Week"}</span>
                                <span>{"Month"}</span>
                            </div>
                        </div>
                        <div class="workflow-bars">
                            { for (0..CHART_BARS).map(|index| html! {
                                <span
                                    class={classes!("workflow-bar", (index == HIGHLIGHTED_BAR).then(|| "active"))}
                                    key={index}
                                    style={stagger(0, 90, index)}
                                ></span>
                            }) }
                        </div>

                        <div class="workflow-cursor" aria-hidden="true">
                            <svg viewBox="0 0 24 24" role="img">
                                <path d="M3 2.2V22l5.8-5.5 3.6 7.8 2.6-1.2-3.6-7.7H20L3 2.2Z" stroke-linejoin="round" />
                            </svg>
                            <span class="workflow-cursor-click"></span>
                        </div>

                        <div class="workflow-floating-card">
                            <span class="workflow-floating-dot"></span>
                            <div>
                                <strong>{"Lead qualified"}</strong>
                                <p>{"Verified and ready for outreach"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
