//! Static copy shown on the site.

/// Portfolio entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Project {
    /// Stable id.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Release year.
    pub year: &'static str,
    /// Discipline.
    pub category: &'static str,
    /// Cover image.
    pub image_url: &'static str,
}

/// Headline number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Metric {
    /// Caption.
    pub label: &'static str,
    /// Formatted value, optionally with a `+` prefix or `%` suffix.
    pub value: &'static str,
}

/// Client quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Review {
    /// Stable id.
    pub id: &'static str,
    /// Quote.
    pub text: &'static str,
    /// Person quoted.
    pub author: &'static str,
    /// Their role.
    pub role: &'static str,
}

/// Team member card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TeamMember {
    /// Stable id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Position.
    pub role: &'static str,
    /// Portrait.
    pub image_url: &'static str,
}

/// Card of the horizontal services strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Service {
    /// Two-digit id.
    pub id: &'static str,
    /// Title.
    pub title: &'static str,
    /// Description.
    pub description: &'static str,
}

/// Step of the engagement roadmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RoadmapPhase {
    /// Two-digit phase number.
    pub phase: &'static str,
    /// Title.
    pub title: &'static str,
    /// Description.
    pub desc: &'static str,
}

/// Selected work.
pub const PROJECTS: [Project; 4] = [
    Project {
        id: "1",
        title: "VALORANT MASTERS",
        year: "2024",
        category: "BRAND IDENTITY",
        image_url: "https://picsum.photos/seed/valorant/1920/1080",
    },
    Project {
        id: "2",
        title: "RED BULL RACING",
        year: "2023",
        category: "DIGITAL EXPERIENCE",
        image_url: "https://picsum.photos/seed/redbull/1920/1080",
    },
    Project {
        id: "3",
        title: "NIKE AIR MAX",
        year: "2024",
        category: "E-COMMERCE",
        image_url: "https://picsum.photos/seed/nike/1920/1080",
    },
    Project {
        id: "4",
        title: "ADIDAS ORIGINALS",
        year: "2022",
        category: "CAMPAIGN",
        image_url: "https://picsum.photos/seed/adidas/1920/1080",
    },
];

/// Headline numbers of the "what we do" section.
pub const METRICS: [Metric; 3] = [
    Metric {
        label: "PERFORMANCE",
        value: "98%",
    },
    Metric {
        label: "REVENUE GROWTH",
        value: "+140%",
    },
    Metric {
        label: "RETENTION RATE",
        value: "92%",
    },
];

/// Testimonials marquee.
pub const REVIEWS: [Review; 4] = [
    Review {
        id: "1",
        text: "SUSO DOESN'T JUST BUILD WEBSITES; THEY BUILD ARCHITECTURES FOR SCALE. OUR CONVERSION INCREASED BY 40% WITHIN THE FIRST QUARTER.",
        author: "ALEX RIVERA",
        role: "CTO, MODERN TECH",
    },
    Review {
        id: "2",
        text: "THE LEVEL OF TECHNICAL MASTERY COMBINED WITH AESTHETIC PRECISION IS UNMATCHED IN THE CURRENT AGENCY LANDSCAPE.",
        author: "SARAH CHEN",
        role: "HEAD OF DESIGN, AETHER CORP",
    },
    Review {
        id: "3",
        text: "PARTNERING WITH SUSO WAS THE BEST STRATEGIC DECISION WE MADE THIS YEAR. THEY ARE TRUE PARTNERS IN DISRUPTION.",
        author: "MARCUS VANCE",
        role: "FOUNDER, NEXUS AI",
    },
    Review {
        id: "4",
        text: "THEIR SEO ARCHITECTURE IS BEYOND ANYTHING WE'VE SEEN. WE DOMINATED OUR VERTICAL WITHIN SIX MONTHS.",
        author: "JULIA LORNE",
        role: "VP MARKETING, STELLAR",
    },
];

/// Agency team.
pub const TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        id: "1",
        name: "JULIAN S.",
        role: "FOUNDER / CEO",
        image_url: "https://picsum.photos/seed/team1/800/1000",
    },
    TeamMember {
        id: "2",
        name: "ELENA V.",
        role: "HEAD OF DESIGN",
        image_url: "https://picsum.photos/seed/team2/800/1000",
    },
    TeamMember {
        id: "3",
        name: "MARCUS K.",
        role: "CTO / ENGINEERING",
        image_url: "https://picsum.photos/seed/team3/800/1000",
    },
    TeamMember {
        id: "4",
        name: "SOPHIA L.",
        role: "STRATEGY DIRECTOR",
        image_url: "https://picsum.photos/seed/team4/800/1000",
    },
];

/// Services strip cards.
pub const SERVICES: [Service; 4] = [
    Service {
        id: "01",
        title: "WEB ENGINEERING",
        description: "HIGH-PERFORMANCE SITES AND APPLICATIONS BUILT ON MODERN, SCALABLE STACKS.",
    },
    Service {
        id: "02",
        title: "BRAND SYSTEMS",
        description: "IDENTITIES, MOTION LANGUAGES AND DESIGN SYSTEMS THAT HOLD UP AT EVERY TOUCHPOINT.",
    },
    Service {
        id: "03",
        title: "SEO ARCHITECTURE",
        description: "TECHNICAL SEARCH FOUNDATIONS THAT COMPOUND TRAFFIC QUARTER OVER QUARTER.",
    },
    Service {
        id: "04",
        title: "GROWTH ANALYTICS",
        description: "INSTRUMENTATION AND EXPERIMENTATION THAT TURN VISITS INTO REVENUE.",
    },
];

/// Engagement roadmap.
pub const ROADMAP_PHASES: [RoadmapPhase; 4] = [
    RoadmapPhase {
        phase: "01",
        title: "AUDIT",
        desc: "WE MAP YOUR FUNNEL, STACK AND COMPETITORS TO FIND THE HIGHEST-LEVERAGE GAPS.",
    },
    RoadmapPhase {
        phase: "02",
        title: "BLUEPRINT",
        desc: "A PRIORITISED PLAN WITH CLEAR TARGETS FOR PERFORMANCE, CONVERSION AND REACH.",
    },
    RoadmapPhase {
        phase: "03",
        title: "BUILD",
        desc: "DESIGN AND ENGINEERING SHIP IN TIGHT ITERATIONS AGAINST THE AGREED METRICS.",
    },
    RoadmapPhase {
        phase: "04",
        title: "SCALE",
        desc: "CONTINUOUS OPTIMISATION ONCE THE FOUNDATION IS LIVE AND MEASURED.",
    },
];

/// New business address.
pub const NEW_BUSINESS_EMAIL: &str = "hello@devzenith.agency";
/// Careers address.
pub const CAREERS_EMAIL: &str = "careers@devzenith.agency";

/// Every content list, for serialization.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SiteContent {
    /// Portfolio.
    pub projects: &'static [Project],
    /// Headline numbers.
    pub metrics: &'static [Metric],
    /// Client quotes.
    pub reviews: &'static [Review],
    /// Team.
    pub team: &'static [TeamMember],
    /// Services strip.
    pub services: &'static [Service],
    /// Engagement roadmap.
    pub roadmap: &'static [RoadmapPhase],
}

/// All site content.
pub fn site_content() -> SiteContent {
    SiteContent {
        projects: &PROJECTS,
        metrics: &METRICS,
        reviews: &REVIEWS,
        team: &TEAM_MEMBERS,
        services: &SERVICES,
        roadmap: &ROADMAP_PHASES,
    }
}

/// Split a metric value into prefix, number and suffix (`"+140%"` → `("+", 140, "%")`).
pub fn parse_metric(value: &str) -> (&str, u32, &str) {
    let prefix = if value.starts_with('+') { "+" } else { "" };
    let suffix = if value.ends_with('%') { "%" } else { "" };
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    (prefix, digits.parse().unwrap_or(0), suffix)
}
