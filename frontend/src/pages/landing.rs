use yew::prelude::*;

use crate::components::brand_logo::BrandLogo;
use crate::components::email_dashboard::EmailDashboard;
use crate::components::lead_form::LeadForm;
use crate::components::workflow_preview::WorkflowPreview;
use crate::config;
use crate::content::{
    ARCHITECTURE_PILLARS, CAPABILITIES, FAQ_ENTRIES, KPIS, NAV_ITEMS, TESTIMONIALS, TRUSTED_TEAMS,
    TRUST_SIGNALS, WORKFLOW_STEPS,
};
use crate::format::stagger;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="site-shell">
            <style>{LANDING_CSS}</style>
            <a class="skip-link" href="#main-content">{"Skip to main content"}</a>
            <Header />
            <main id="main-content">
                <HeroSection />
                <TrustSection />
                <DashboardSection />
                <CapabilitySection />
                <WorkflowSection />
                <ArchitectureSection />
                <TestimonialSection />
                <FaqSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container-shell site-header-inner">
                <div class="brand">
                    <div class="brand-badge">{"ES"}</div>
                    <div>
                        <p class="brand-name">{"EmailStack"}</p>
                        <p class="brand-tagline">{"AI outreach platform"}</p>
                    </div>
                </div>

                <nav aria-label="Primary" class="primary-nav">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a class="primary-nav-link" href={item.href} key={item.href}>{item.label}</a>
                    }) }
                </nav>

                <div class="header-actions">
                    <a class="button-secondary" href={config::admin_login_url()}>{"Log in"}</a>
                    <a class="button-primary" href="#contact">{"Book demo"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <section class="section-block hero" id="overview">
            <div aria-hidden="true" class="grid-stripes"></div>
            <div class="container-shell hero-inner">
                <div class="hero-copy reveal-up">
                    <p class="eyebrow">{"Email intelligence"}</p>
                    <h1>
                        {"Email marketing,"}
                        <br />
                        {"re-imagined."}
                    </h1>
                    <p class="section-lead">
                        {"Build, launch, and optimize email campaigns with clear performance signals and predictable pipeline impact."}
                    </p>

                    <div class="hero-ctas">
                        <a class="button-primary" href="#features">{"Explore features"}</a>
                        <a class="button-secondary" href="#architecture">{"See outcomes"}</a>
                    </div>

                    <div class="hero-preview reveal-up delay-2">
                        <WorkflowPreview />
                    </div>
                </div>

                <div class="card-grid cols-3">
                    { for KPIS.iter().enumerate().map(|(index, kpi)| html! {
                        <article class="surface-card reveal-up" key={kpi.label} style={stagger(180, 120, index)}>
                            <p class="kpi-value">{kpi.value}</p>
                            <p class="kpi-label">{kpi.label}</p>
                            <p class="card-copy">{kpi.context}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TrustSection)]
fn trust_section() -> Html {
    // Logos are listed twice so the marquee can loop without a gap.
    let logos = TRUSTED_TEAMS.iter().chain(TRUSTED_TEAMS.iter()).enumerate();

    html! {
        <section class="section-block trust" aria-label="Trust indicators">
            <div class="container-shell">
                <div class="surface-card trust-card reveal-up">
                    <p class="trust-heading">{"Trusted by world-class teams"}</p>
                    <div class="logo-marquee" aria-label="Trusted teams">
                        <div class="logo-track">
                            { for logos.map(|(index, team)| html! {
                                <span class="logo-chip" key={format!("{}-{}", team.name(), index)}>
                                    <BrandLogo team={*team} />
                                    <span class="logo-name">{team.name()}</span>
                                </span>
                            }) }
                        </div>
                    </div>
                    <ul class="trust-signals">
                        { for TRUST_SIGNALS.iter().map(|signal| html! {
                            <li key={*signal}>{*signal}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(DashboardSection)]
fn dashboard_section() -> Html {
    html! {
        <section class="section-block dashboard-showcase" id="dashboard">
            <div class="container-shell dashboard-showcase-frame">
                <div class="dashboard-showcase-copy reveal-up">
                    <p class="eyebrow">{"Email dashboard"}</p>
                    <h2 class="section-title">{"Verify campaigns and project health in one command view."}</h2>
                    <p class="section-lead">
                        {"Dense, fast, and review-ready. Track metrics, scan checks, and close blockers without leaving the dashboard."}
                    </p>

                    <ul class="dashboard-benefits">
                        <li class="dashboard-benefit">{"Animated KPI progress + weekly target"}</li>
                        <li class="dashboard-benefit">{"Live verification queue with status states"}</li>
                        <li class="dashboard-benefit">{"Project review tracker with completion flow"}</li>
                    </ul>

                    <div class="cta-row">
                        <a class="button-primary" href="#verification">{"Review verification"}</a>
                        <a class="button-secondary" href="#contact">{"Request walkthrough"}</a>
                    </div>
                </div>

                <div class="reveal-up delay-1 dashboard-showcase-demo">
                    <EmailDashboard />
                </div>
            </div>
        </section>
    }
}

#[function_component(CapabilitySection)]
fn capability_section() -> Html {
    html! {
        <section class="section-block" id="features">
            <div class="container-shell">
                <p class="eyebrow">{"Feature architecture"}</p>
                <h2 class="section-title">{"Core modules for each outbound stage."}</h2>
                <p class="section-lead">{"Setup, segment, execute, analyze, and govern from one system."}</p>

                <div class="card-grid cols-3">
                    { for CAPABILITIES.iter().enumerate().map(|(index, item)| html! {
                        <article class="surface-card capability-card reveal-up" key={item.title} style={stagger(0, 110, index)}>
                            <h3 class="capability-title">{item.title}</h3>
                            <p class="card-copy">{item.description}</p>
                            <ul class="capability-points">
                                { for item.points.iter().enumerate().map(|(point_index, point)| html! {
                                    <li
                                        class="feature-point capability-point"
                                        key={*point}
                                        style={stagger((index * 120) as u32, 90, point_index)}
                                    >
                                        {*point}
                                    </li>
                                }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WorkflowSection)]
fn workflow_section() -> Html {
    html! {
        <section class="section-block" id="workflow">
            <div class="container-shell">
                <p class="eyebrow">{"Workflow path"}</p>
                <h2 class="section-title">{"A live campaign view your team can read in seconds."}</h2>
                <p class="section-lead">
                    {"Less operational noise, clearer signals, and smooth handoffs from setup to qualified pipeline."}
                </p>

                <div class="card-grid cols-3">
                    { for WORKFLOW_STEPS.iter().enumerate().map(|(index, step)| html! {
                        <article class="surface-card reveal-up" key={step.title} style={stagger(0, 130, index)}>
                            <p class="step-label">{format!("Step {}", index + 1)}</p>
                            <h3>{step.title}</h3>
                            <p class="card-copy">{step.description}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ArchitectureSection)]
fn architecture_section() -> Html {
    html! {
        <section class="section-block" id="architecture">
            <div class="container-shell">
                <p class="eyebrow">{"Business outcomes"}</p>
                <h2 class="section-title">{"Built to increase pipeline, speed decisions, and protect revenue quality."}</h2>
                <p class="section-lead">
                    {"EmailStack gives growth and revenue teams a single system for launch velocity, targeting quality, and predictable campaign performance."}
                </p>

                <div class="card-grid cols-3">
                    { for ARCHITECTURE_PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                        <article class="surface-card reveal-up" key={pillar.title} style={stagger(0, 130, index)}>
                            <p class="pillar-layer">{pillar.layer}</p>
                            <h3>{pillar.title}</h3>
                            <ul class="pillar-details">
                                { for pillar.details.iter().map(|detail| html! {
                                    <li class="feature-point" key={*detail}>{*detail}</li>
                                }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(TestimonialSection)]
fn testimonial_section() -> Html {
    html! {
        <section class="section-block" aria-label="Customer outcomes">
            <div class="container-shell">
                <p class="eyebrow">{"Customer proof"}</p>
                <h2 class="section-title">{"Teams report faster launches and cleaner operations."}</h2>

                <div class="card-grid cols-3">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, item)| html! {
                        <article class="surface-card reveal-up" key={item.person} style={stagger(0, 120, index)}>
                            <p class="card-copy">{format!("\u{201c}{}\u{201d}", item.quote)}</p>
                            <p class="testimonial-person">{item.person}</p>
                            <p class="testimonial-role">{item.role}</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section class="section-block" id="faq">
            <div class="container-shell">
                <p class="eyebrow">{"Buyer questions"}</p>
                <h2 class="section-title">{"Answers for buyers and revenue teams."}</h2>

                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                        <details class="faq-item reveal-up" key={entry.question} style={stagger(0, 80, index)}>
                            <summary>{entry.question}</summary>
                            <p>{entry.answer}</p>
                        </details>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section class="section-block" id="contact">
            <div class="container-shell contact-grid">
                <div class="surface-card contact-card reveal-up">
                    <p class="eyebrow">{"Contact"}</p>
                    <h2 class="section-title">{"Plan your rollout with a senior implementation walkthrough."}</h2>
                    <p class="section-lead">
                        {"Share your current stack and campaign volume. We will map migration checkpoints, data model fit, and integration sequence for your team."}
                    </p>

                    <div class="contact-lines">
                        <p><span class="contact-key">{"Sales:"}</span>{" "}{config::SALES_EMAIL}</p>
                        <p><span class="contact-key">{"Support:"}</span>{" "}{config::SUPPORT_EMAIL}</p>
                        <p><span class="contact-key">{"Response window:"}</span>{" within one business day"}</p>
                    </div>
                </div>

                <div class="contact-form-wrap reveal-up delay-2">
                    <span aria-hidden="true" class="contact-ask-note">{"Ask anything"}</span>
                    <span aria-hidden="true" class="contact-ask-arrow"></span>
                    <LeadForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container-shell site-footer-inner">
                <p>
                    <span class="brand-name">{"EmailStack"}</span>
                    {" | Built for campaign operators and RevOps teams."}
                </p>
                <div class="footer-links">
                    <a href="#features">{"Features"}</a>
                    <a href="#architecture">{"Outcomes"}</a>
                    <a href="#contact">{"Contact"}</a>
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --canvas: #f6f5f1;
    --surface: #ffffff;
    --surface-muted: #f0eee8;
    --line: #e3e0d8;
    --ink-900: #14161c;
    --ink-700: #3d4250;
    --ink-500: #6b7080;
    --brand: #ff5a1f;
    --brand-strong: #d9430d;
    --accent-blue: #2563eb;
    --success: #16a34a;
    --warning: #d97706;
    --danger: #dc2626;
}
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: var(--canvas);
    color: var(--ink-900);
    font-family: "Manrope", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}
h1, h2, h3 { font-family: "Space Grotesk", "Manrope", sans-serif; letter-spacing: -0.02em; }
a { color: inherit; }
.skip-link {
    position: absolute;
    left: 1rem;
    top: -3rem;
    padding: 0.5rem 1rem;
    border-radius: 8px;
    background: var(--ink-900);
    color: #fff;
    z-index: 100;
}
.skip-link:focus { top: 1rem; }
.container-shell { width: min(1180px, 100% - 2.5rem); margin: 0 auto; }
.section-block { position: relative; padding: 5rem 0; }
.surface-card {
    background: var(--surface);
    border: 1px solid var(--line);
    border-radius: 20px;
    padding: 1.5rem;
    box-shadow: 0 1px 2px rgba(20, 22, 28, 0.04);
}
.eyebrow {
    display: inline-block;
    margin: 0;
    padding: 0.3rem 0.8rem;
    border-radius: 999px;
    background: rgba(255, 90, 31, 0.1);
    color: var(--brand-strong);
    font-size: 0.75rem;
    font-weight: 700;
    letter-spacing: 0.12em;
    text-transform: uppercase;
}
.section-title { margin: 1rem 0 0; font-size: clamp(1.8rem, 3vw, 2.6rem); max-width: 760px; }
.section-lead { margin: 1rem 0 0; max-width: 680px; color: var(--ink-700); line-height: 1.6; }
.card-copy { margin: 0.75rem 0 0; color: var(--ink-700); font-size: 0.9rem; line-height: 1.6; }
.card-grid { display: grid; gap: 1rem; margin-top: 2.5rem; }
.card-grid.cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.cta-row, .hero-ctas { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 2rem; }
.hero-ctas { justify-content: center; }
.button-primary, .button-secondary {
    display: inline-flex;
    align-items: center;
    padding: 0.65rem 1.2rem;
    border-radius: 12px;
    font-weight: 700;
    font-size: 0.9rem;
    text-decoration: none;
    cursor: pointer;
    border: 1px solid transparent;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.button-primary { background: var(--brand); color: #fff; }
.button-primary:hover { transform: translateY(-1px); box-shadow: 0 8px 18px rgba(255, 90, 31, 0.3); }
.button-secondary { background: var(--surface); border-color: var(--line); color: var(--ink-900); }

.site-header {
    position: sticky;
    top: 0;
    z-index: 40;
    border-bottom: 1px solid var(--line);
    background: rgba(246, 245, 241, 0.95);
    backdrop-filter: blur(8px);
}
.site-header-inner { display: flex; align-items: center; justify-content: space-between; height: 4rem; }
.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-badge {
    display: grid;
    place-items: center;
    width: 36px;
    height: 36px;
    border-radius: 12px;
    background: var(--brand);
    color: #fff;
    font-size: 0.85rem;
    font-weight: 700;
}
.brand-name { margin: 0; font-weight: 700; font-size: 0.9rem; }
.brand-tagline { margin: 0; font-size: 0.75rem; color: var(--ink-500); }
.primary-nav { display: flex; gap: 1.5rem; }
.primary-nav-link { font-size: 0.9rem; font-weight: 600; color: var(--ink-700); text-decoration: none; }
.primary-nav-link:hover { color: var(--ink-900); }
.header-actions { display: flex; gap: 0.75rem; }

.hero { padding-top: 6rem; text-align: center; overflow: hidden; }
.grid-stripes {
    position: absolute;
    inset: 0;
    pointer-events: none;
    opacity: 0.4;
    background-image:
        linear-gradient(var(--line) 1px, transparent 1px),
        linear-gradient(90deg, var(--line) 1px, transparent 1px);
    background-size: 48px 48px;
    mask-image: radial-gradient(circle at 50% 20%, #000 20%, transparent 70%);
}
.hero-inner { position: relative; }
.hero-copy { max-width: 960px; margin: 0 auto; }
.hero h1 { margin: 1.5rem 0 0; font-size: clamp(2.4rem, 6vw, 4.6rem); line-height: 1.05; }
.hero .section-lead { margin-left: auto; margin-right: auto; }
.hero-preview { margin-top: 2.5rem; }
.kpi-value { margin: 0; font-family: "Space Grotesk", sans-serif; font-size: 2.2rem; font-weight: 700; }
.kpi-label { margin: 0.25rem 0 0; font-weight: 700; }
.hero .card-grid { text-align: left; margin-top: 3rem; }

.trust { padding-top: 2rem; }
.trust-heading {
    margin: 0;
    text-align: center;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.18em;
    text-transform: uppercase;
    color: var(--ink-500);
}
.logo-marquee { margin-top: 1.25rem; overflow: hidden; mask-image: linear-gradient(90deg, transparent, #000 10%, #000 90%, transparent); }
.logo-track { display: flex; gap: 2.5rem; width: max-content; animation: marquee 28s linear infinite; }
.logo-chip { display: inline-flex; align-items: center; gap: 0.5rem; font-weight: 700; color: var(--ink-700); }
.logo-mark svg { width: 28px; height: 28px; display: block; }
.trust-signals { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem; margin: 1.5rem 0 0; padding: 0; list-style: none; }
.trust-signals li { padding: 0.3rem 0.75rem; border-radius: 999px; background: var(--surface-muted); font-size: 0.75rem; color: var(--ink-700); }

.dashboard-showcase-frame { display: grid; grid-template-columns: minmax(340px, 0.95fr) minmax(0, 1.05fr); gap: 2.5rem; align-items: start; }
.dashboard-showcase-copy, .dashboard-showcase-demo { min-width: 0; }
.dashboard-benefits { display: grid; gap: 0.75rem; margin: 1.75rem 0 0; padding: 0; list-style: none; }
.dashboard-benefit, .feature-point { position: relative; padding-left: 1.5rem; font-size: 0.9rem; color: var(--ink-700); }
.dashboard-benefit::before, .feature-point::before {
    content: "";
    position: absolute;
    left: 0;
    top: 0.45em;
    width: 0.6rem;
    height: 0.6rem;
    border-radius: 50%;
    background: var(--brand);
}

.capability-card h3, .card-grid h3 { margin: 0.75rem 0 0; font-size: 1.15rem; }
.capability-title { margin-top: 0 !important; font-size: 1.25rem !important; }
.capability-points, .pillar-details { display: grid; gap: 0.5rem; margin: 1.25rem 0 0; padding: 0; list-style: none; }
.capability-point { animation: revealUp 0.6s ease-out both; }
.step-label, .pillar-layer { margin: 0; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.12em; text-transform: uppercase; }
.step-label { color: var(--brand-strong); }
.pillar-layer { color: var(--ink-500); }
.testimonial-person { margin: 1.25rem 0 0; font-weight: 600; font-size: 0.9rem; }
.testimonial-role { margin: 0; font-size: 0.75rem; color: var(--ink-500); }

.faq-list { display: grid; gap: 0.75rem; margin-top: 2rem; }
.faq-item { border: 1px solid var(--line); border-radius: 16px; background: var(--surface); padding: 1rem 1.25rem; }
.faq-item summary { cursor: pointer; font-weight: 700; }
.faq-item p { margin: 0.75rem 0 0; color: var(--ink-700); line-height: 1.6; }

.contact-grid { display: grid; grid-template-columns: 1fr 1.1fr; gap: 1.5rem; }
.contact-card { padding: 2rem; }
.contact-lines { display: grid; gap: 0.75rem; margin-top: 2rem; font-size: 0.9rem; color: var(--ink-700); }
.contact-lines p { margin: 0; }
.contact-key { font-weight: 600; color: var(--ink-900); }
.contact-form-wrap { position: relative; }
.contact-ask-note {
    position: absolute;
    top: -2.2rem;
    right: 2rem;
    font-family: "Caveat", cursive;
    font-size: 1.5rem;
    color: var(--brand-strong);
    transform: rotate(-4deg);
}
.contact-ask-arrow {
    position: absolute;
    top: -0.9rem;
    right: 1.2rem;
    width: 28px;
    height: 28px;
    border-right: 2px solid var(--brand-strong);
    border-bottom: 2px solid var(--brand-strong);
    border-radius: 0 0 14px 0;
}
.lead-form { padding: 2rem; }
.lead-form h3 { margin: 0; font-size: 1.25rem; }
.lead-form-intro { margin: 0.5rem 0 0; font-size: 0.9rem; color: var(--ink-700); }
.lead-form-fields { display: grid; gap: 1rem; margin-top: 1.5rem; }
.lead-form-fields label { display: grid; gap: 0.5rem; font-size: 0.875rem; font-weight: 600; }
.lead-form-fields input, .lead-form-fields textarea {
    padding: 0.65rem 0.75rem;
    border-radius: 12px;
    border: 1px solid var(--line);
    background: var(--surface);
    font: inherit;
    font-weight: 400;
    color: var(--ink-900);
}
.lead-form-fields textarea { min-height: 8rem; resize: vertical; }
.lead-form-actions { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 0.75rem; margin-top: 1.5rem; }
.lead-form-actions button { font-family: inherit; }
.lead-form-feedback { margin: 0; font-size: 0.75rem; color: var(--ink-700); }

.site-footer { border-top: 1px solid var(--line); background: var(--surface); padding: 2.5rem 0; }
.site-footer-inner { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1rem; font-size: 0.9rem; color: var(--ink-700); }
.site-footer-inner p { margin: 0; }
.footer-links { display: flex; gap: 1rem; }
.footer-links a { text-decoration: none; }
.footer-links a:hover { color: var(--ink-900); }

.reveal-up { animation: revealUp 0.7s ease-out both; }
.delay-1 { animation-delay: 120ms; }
.delay-2 { animation-delay: 240ms; }
.text-accent-blue { color: var(--accent-blue); }
.text-success { color: var(--success); }

/* dashboard mockup */
.dashboard-shell { padding: 1.25rem; }
.dashboard-toolbar { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.dashboard-live { display: flex; align-items: center; gap: 0.5rem; margin: 0; font-size: 0.8rem; font-weight: 700; }
.pulse-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--success); animation: pulse 1.8s ease-in-out infinite; }
.dashboard-tabs { display: flex; gap: 0.25rem; padding: 0.25rem; border-radius: 10px; background: var(--surface-muted); font-size: 0.75rem; }
.dashboard-tabs span { padding: 0.25rem 0.6rem; border-radius: 8px; color: var(--ink-500); }
.dashboard-tabs span.active { background: var(--surface); color: var(--ink-900); font-weight: 700; }
.dashboard-metrics { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 0.75rem; margin-top: 1rem; }
.dashboard-metric { padding: 0.9rem; border: 1px solid var(--line); border-radius: 14px; }
.dashboard-metric-head { display: flex; justify-content: space-between; gap: 0.75rem; }
.dashboard-metric-title { margin: 0; font-size: 0.8rem; font-weight: 700; }
.dashboard-metric-sub { margin: 0.2rem 0 0; font-size: 0.7rem; color: var(--ink-500); }
.dashboard-metric-value-wrap { text-align: right; }
.dashboard-metric-value { display: block; font-size: 1.6rem; font-variant-numeric: tabular-nums; }
.dashboard-metric-value-wrap small { font-size: 0.7rem; color: var(--ink-500); }
.dashboard-good { color: var(--success) !important; }
.dashboard-progress { height: 6px; margin-top: 0.75rem; border-radius: 3px; background: var(--surface-muted); overflow: hidden; }
.dashboard-progress-sm { height: 4px; margin-top: 0.4rem; }
.dashboard-progress-fill { display: block; height: 100%; border-radius: inherit; transform-origin: left; transform: scaleX(0); transition: transform 1.4s cubic-bezier(0.22, 1, 0.36, 1); }
.dashboard-active .dashboard-progress-fill { transform: scaleX(1); }
.dashboard-progress-orange { background: var(--brand); }
.dashboard-progress-green { background: var(--success); }
.dashboard-progress-blue { background: var(--accent-blue); }
.dashboard-panels { display: grid; grid-template-columns: 1.3fr 1fr; gap: 0.75rem; margin-top: 0.75rem; }
.dashboard-panel { min-width: 0; padding: 0.9rem; border: 1px solid var(--line); border-radius: 14px; }
.dashboard-panel-head { display: flex; justify-content: space-between; align-items: baseline; }
.dashboard-panel-head h3 { margin: 0; font-size: 0.9rem; }
.dashboard-panel-head p { margin: 0; font-size: 0.7rem; color: var(--ink-500); }
.dashboard-table-wrap { overflow-x: auto; margin-top: 0.6rem; }
.dashboard-table { width: 100%; border-collapse: collapse; font-size: 0.75rem; }
.dashboard-table th { text-align: left; color: var(--ink-500); font-weight: 600; padding: 0.35rem 0.4rem; }
.dashboard-table td { padding: 0.45rem 0.4rem; border-top: 1px solid var(--line); white-space: nowrap; }
.dashboard-table tbody tr { opacity: 0; }
.dashboard-active .dashboard-table tbody tr { animation: revealUp 0.5s ease-out both; }
.dashboard-status { padding: 0.15rem 0.5rem; border-radius: 999px; font-weight: 700; font-size: 0.68rem; }
.dashboard-status-verified { background: rgba(22, 163, 74, 0.12); color: var(--success); }
.dashboard-status-reviewing { background: rgba(217, 119, 6, 0.12); color: var(--warning); }
.dashboard-status-blocked { background: rgba(220, 38, 38, 0.12); color: var(--danger); }
.dashboard-review-list { display: grid; gap: 0.7rem; margin: 0.6rem 0 0; padding: 0; list-style: none; }
.dashboard-review-item { opacity: 0; }
.dashboard-active .dashboard-review-item { animation: revealUp 0.5s ease-out both; }
.dashboard-review-top { display: flex; justify-content: space-between; font-size: 0.75rem; }
.dashboard-review-top span { color: var(--ink-500); }

@keyframes revealUp { from { opacity: 0; transform: translateY(16px); } to { opacity: 1; transform: translateY(0); } }
@keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
@keyframes pulse { 50% { opacity: 0.35; } }

@media (max-width: 1024px) {
    .primary-nav { display: none; }
    .dashboard-showcase-frame, .contact-grid { grid-template-columns: 1fr; }
    .card-grid.cols-3 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
@media (max-width: 640px) {
    .section-block { padding: 3.5rem 0; }
    .card-grid.cols-3, .dashboard-metrics, .dashboard-panels { grid-template-columns: 1fr; }
    .header-actions .button-secondary { display: none; }
}
@media (prefers-reduced-motion: reduce) {
    .reveal-up, .logo-track, .capability-point { animation: none; }
}
"#;
