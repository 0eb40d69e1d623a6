//! Copy for the landing page. Every table is rendered in order.

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Kpi {
    pub value: &'static str,
    pub label: &'static str,
    pub context: &'static str,
}

pub struct Capability {
    pub title: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 3],
}

pub struct WorkflowStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ArchitecturePillar {
    pub title: &'static str,
    pub layer: &'static str,
    pub details: [&'static str; 3],
}

pub struct Testimonial {
    pub person: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueStatus {
    Verified,
    Reviewing,
    Blocked,
}

impl QueueStatus {
    pub fn label(self) -> &'static str {
        match self {
            QueueStatus::Verified => "Verified",
            QueueStatus::Reviewing => "Reviewing",
            QueueStatus::Blocked => "Blocked",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            QueueStatus::Verified => "dashboard-status dashboard-status-verified",
            QueueStatus::Reviewing => "dashboard-status dashboard-status-reviewing",
            QueueStatus::Blocked => "dashboard-status dashboard-status-blocked",
        }
    }
}

pub struct QueueRow {
    pub project: &'static str,
    pub owner: &'static str,
    pub status: QueueStatus,
    pub eta: &'static str,
}

pub struct ReviewStep {
    pub title: &'static str,
    /// Completion in percent.
    pub value: u8,
    pub state: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Team {
    Notion,
    Linear,
    Intercom,
    Figma,
    Spotify,
    Stripe,
    Dropbox,
}

impl Team {
    pub fn name(self) -> &'static str {
        match self {
            Team::Notion => "Notion",
            Team::Linear => "Linear",
            Team::Intercom => "Intercom",
            Team::Figma => "Figma",
            Team::Spotify => "Spotify",
            Team::Stripe => "Stripe",
            Team::Dropbox => "Dropbox",
        }
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Dashboard", href: "#dashboard" },
    NavItem { label: "Verification", href: "#verification" },
    NavItem { label: "Workflow", href: "#workflow" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const KPIS: &[Kpi] = &[
    Kpi {
        value: "5x",
        label: "Faster campaign setup",
        context: "Prompt-driven email templates and reusable sequences.",
    },
    Kpi {
        value: "99.99%",
        label: "Automation uptime",
        context: "Background scheduling with queue-safe processing patterns.",
    },
    Kpi {
        value: "40%",
        label: "Lower tooling overhead",
        context: "One platform replacing fragmented outreach workflows.",
    },
];

pub const TRUST_SIGNALS: &[&str] = &[
    "SOC-ready controls",
    "Role-aware admin access",
    "Webhook-driven tracking",
    "Adaptive send limits",
    "Daily reporting pipeline",
    "Campaign-level analytics",
];

pub const TRUSTED_TEAMS: &[Team] = &[
    Team::Notion,
    Team::Linear,
    Team::Intercom,
    Team::Figma,
    Team::Spotify,
    Team::Stripe,
    Team::Dropbox,
];

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "AI campaign studio",
        description: "Create industry-tuned outreach and prompt variants in one editor.",
        points: ["Versioned templates", "Prompt packs", "Bounce fallback"],
    },
    Capability {
        title: "Deliverability controls",
        description: "Set domain policy, send limits, and credential safeguards.",
        points: ["Domain/account limits", "Credential checks", "Bounce-safe sends"],
    },
    Capability {
        title: "Contact intelligence",
        description: "Keep targeting clean across companies, industries, and roles.",
        points: ["Company/contact graph", "Industry + role filters", "Dedupe pipeline"],
    },
    Capability {
        title: "Automated execution",
        description: "Run sends and inbox sync with resilient background workers.",
        points: ["Scheduled workers", "Inbox sync cycle", "Retry protection"],
    },
    Capability {
        title: "Operational analytics",
        description: "Track output, history, and health in one analytics view.",
        points: ["Performance cards", "History insights", "System health"],
    },
    Capability {
        title: "Admin governance",
        description: "Protect workflows with secure roles and auditable actions.",
        points: ["Session auth", "Protected routes", "Admin lifecycle"],
    },
];

pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    WorkflowStep {
        title: "Connect sending infrastructure",
        description: "Connect providers and domains in one guided setup.",
    },
    WorkflowStep {
        title: "Define targeting logic",
        description: "Focus audience quality with clean role and industry filters.",
    },
    WorkflowStep {
        title: "Build and validate templates",
        description: "Prepare messaging and approve final copy before launch.",
    },
    WorkflowStep {
        title: "Schedule campaign runs",
        description: "Activate campaign windows with controlled send pacing.",
    },
    WorkflowStep {
        title: "Monitor delivery and replies",
        description: "Track replies, bounces, and performance shifts in real time.",
    },
    WorkflowStep {
        title: "Report and optimize",
        description: "Improve outcomes weekly using conversion and quality signals.",
    },
];

pub const ARCHITECTURE_PILLARS: &[ArchitecturePillar] = &[
    ArchitecturePillar {
        title: "Faster revenue execution",
        layer: "Campaign velocity",
        details: [
            "Launch outbound programs in hours instead of long setup cycles.",
            "Standardized workflows keep your team shipping campaigns consistently.",
            "Less manual coordination means more selling time for GTM teams.",
        ],
    },
    ArchitecturePillar {
        title: "Clear pipeline visibility",
        layer: "Decision intelligence",
        details: [
            "Track opens, replies, and performance trends in one decision surface.",
            "See which segments and messages produce qualified conversations.",
            "Use analytics to reallocate effort toward high-conversion campaigns.",
        ],
    },
    ArchitecturePillar {
        title: "Safer scaling",
        layer: "Operational reliability",
        details: [
            "Guardrails protect sender reputation as campaign volume grows.",
            "Consistent process reduces errors across teams and handoffs.",
            "Reliable operations improve forecast confidence and execution quality.",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        person: "Nora Alvarez",
        role: "Growth Lead, Atlas Pipeline",
        quote: "We moved from fragmented tools to one campaign engine and cut launch time from days to hours.",
    },
    Testimonial {
        person: "Ryan Patel",
        role: "Head of RevOps, Vector Labs",
        quote: "The workflow mirrors how operators actually work: clean segments, controlled sending, and transparent outcomes.",
    },
    Testimonial {
        person: "Maya Fischer",
        role: "Director of Sales Ops, Northline",
        quote: "Deliverability controls and role-based admin actions made scaling safer for our team.",
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How quickly can we see value after onboarding?",
        answer: "Most teams launch their first production campaign in days, then optimize weekly using dashboard insights and reply-quality feedback.",
    },
    FaqEntry {
        question: "Who on our team should use EmailStack daily?",
        answer: "Revenue operations, growth marketers, and campaign operators use it together: one team configures strategy while others monitor outcomes and iterate messaging.",
    },
    FaqEntry {
        question: "Can we keep our current outreach process and still migrate?",
        answer: "Yes. Teams usually start with one campaign lane, validate performance, then roll remaining workflows into the platform in planned phases.",
    },
    FaqEntry {
        question: "How does this help leadership make better decisions?",
        answer: "Leadership gets a single view of campaign output, response quality, and execution consistency, which makes planning and budget allocation more reliable.",
    },
];

pub const QUEUE_ROWS: &[QueueRow] = &[
    QueueRow { project: "Q2 Reactivation", owner: "Maya", status: QueueStatus::Verified, eta: "Done" },
    QueueRow { project: "Prospect List QA", owner: "Noah", status: QueueStatus::Reviewing, eta: "2h" },
    QueueRow { project: "Domain Alignment", owner: "Lena", status: QueueStatus::Verified, eta: "Done" },
    QueueRow { project: "Bounce Route Audit", owner: "Ishan", status: QueueStatus::Blocked, eta: "Needs fix" },
    QueueRow { project: "Reply Intent Tags", owner: "Rina", status: QueueStatus::Reviewing, eta: "5h" },
];

pub const REVIEW_STEPS: &[ReviewStep] = &[
    ReviewStep { title: "Template verification", value: 93, state: "Healthy" },
    ReviewStep { title: "Deliverability checks", value: 81, state: "Monitoring" },
    ReviewStep { title: "Compliance review", value: 100, state: "Approved" },
    ReviewStep { title: "Inbox quality", value: 76, state: "In progress" },
];

pub const PREVIEW_NAV: &[&str] = &["Segments", "Domains", "Flow", "Follow-up", "Lead score", "Notes"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<'a>(keys: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for key in keys {
            assert!(seen.insert(key), "duplicate key {}", key);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(NAV_ITEMS.len(), 5);
        assert_eq!(KPIS.len(), 3);
        assert_eq!(TRUST_SIGNALS.len(), 6);
        assert_eq!(TRUSTED_TEAMS.len(), 7);
        assert_eq!(CAPABILITIES.len(), 6);
        assert_eq!(WORKFLOW_STEPS.len(), 6);
        assert_eq!(ARCHITECTURE_PILLARS.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(FAQ_ENTRIES.len(), 4);
        assert_eq!(QUEUE_ROWS.len(), 5);
        assert_eq!(REVIEW_STEPS.len(), 4);
    }

    // Titles double as list keys when rendering.
    #[test]
    fn test_render_keys_are_unique() {
        assert_unique(NAV_ITEMS.iter().map(|item| item.href));
        assert_unique(KPIS.iter().map(|kpi| kpi.label));
        assert_unique(CAPABILITIES.iter().map(|c| c.title));
        assert_unique(CAPABILITIES.iter().flat_map(|c| c.points.iter().copied()));
        assert_unique(WORKFLOW_STEPS.iter().map(|s| s.title));
        assert_unique(ARCHITECTURE_PILLARS.iter().map(|p| p.title));
        assert_unique(TESTIMONIALS.iter().map(|t| t.person));
        assert_unique(FAQ_ENTRIES.iter().map(|f| f.question));
        assert_unique(QUEUE_ROWS.iter().map(|r| r.project));
        assert_unique(REVIEW_STEPS.iter().map(|s| s.title));
        assert_unique(TRUSTED_TEAMS.iter().map(|t| t.name()));
    }

    #[test]
    fn test_nav_targets_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#')));
    }

    #[test]
    fn test_review_values_are_percentages() {
        assert!(REVIEW_STEPS.iter().all(|step| step.value <= 100));
    }

    #[test]
    fn test_status_classes_follow_label() {
        for row in QUEUE_ROWS {
            let expected = format!("dashboard-status-{}", row.status.label().to_lowercase());
            assert!(row.status.css_class().ends_with(&expected));
        }
    }
}
