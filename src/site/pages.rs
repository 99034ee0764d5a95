use crate::{
    animation::ease::Ease,
    foundation::{
        core::{Rect, Size},
        error::ScrollweaveResult,
    },
    navigation::page::PageId,
    session::scope::AnimationScope,
    site::content::{
        METRICS, PROJECTS, REVIEWS, ROADMAP_PHASES, SERVICES, TEAM_MEMBERS, parse_metric,
    },
    timeline::model::{Position, Repeat, Step, Timeline},
    trigger::{anchor::TriggerSpec, layout::Layout},
};

/// Viewports narrower than this use the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

const SERVICE_CARD_WIDTH: f64 = 650.0;
const SERVICE_CARD_GAP: f64 = 32.0;

/// Targets of the two testimonial rows; the host reports hover on these.
pub const MARQUEE_ROWS: [&str; 2] = ["testimonials-row-0", "testimonials-row-1"];
/// Seconds per loop of each testimonial row.
pub const MARQUEE_LOOP_SECS: [f64; 2] = [40.0, 45.0];
/// Playback speed of a hovered row.
pub const MARQUEE_HOVER_SCALE: f64 = 0.1;

const TESTIMONIAL_CARD_WIDTH: f64 = 500.0;
const MARQUEE_COPIES: f64 = 3.0;

fn ids(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}-{i}")).collect()
}

fn refs(ids: &[String]) -> Vec<&str> {
    ids.iter().map(String::as_str).collect()
}

/// Declare every animation of `page` into `scope`.
#[tracing::instrument(skip(scope, layout), fields(scope = scope.name()))]
pub fn setup_page(page: PageId, scope: &mut AnimationScope, layout: &Layout) -> ScrollweaveResult<()> {
    match page {
        PageId::Home => setup_home(scope, layout),
        PageId::Work => setup_work(scope),
        PageId::Agency => setup_agency(scope),
        PageId::Contact => setup_contact(scope),
    }
}

/// Fresh scope for `page` with its animations declared.
pub fn mount_page(page: PageId, layout: &Layout) -> ScrollweaveResult<AnimationScope> {
    let mut scope = AnimationScope::new(page.as_str());
    setup_page(page, &mut scope, layout)?;
    Ok(scope)
}

fn setup_home(scope: &mut AnimationScope, layout: &Layout) -> ScrollweaveResult<()> {
    let lines = ids("hero-line", 3);
    scope.add(
        Timeline::new().then(
            Step::from_to(&refs(&lines), [("yPercent", 100.0)], [("yPercent", 0.0)])
                .duration(1.5)
                .stagger(0.2)
                .ease(Ease::OutQuint)
                .at(Position::At(0.5)),
        ),
    )?;

    scope.add(
        Timeline::new()
            .then(
                Step::from_to(
                    &["what-we-do"],
                    [("opacity", 0.0), ("y", 50.0)],
                    [("opacity", 1.0), ("y", 0.0)],
                )
                .duration(1.0)
                .ease(Ease::OutQuart),
            )
            .with_trigger(TriggerSpec::toggle("what-we-do", "top 80%")?),
    )?;

    let words = ids("what-we-do-word", 3);
    scope.add(
        Timeline::new()
            .then(
                Step::from(&refs(&words), [("yPercent", 100.0)])
                    .duration(1.5)
                    .stagger(0.1)
                    .ease(Ease::OutExpo),
            )
            .with_trigger(TriggerSpec::toggle("what-we-do-text", "top 85%")?),
    )?;

    for (i, m) in METRICS.iter().enumerate() {
        let (_, value, _) = parse_metric(m.value);
        let id = format!("metric-{i}");
        scope.add(
            Timeline::new()
                .with_base(&id, "count", 0.0)
                .then(
                    Step::to(&[id.as_str()], [("count", f64::from(value))])
                        .duration(3.0)
                        .ease(Ease::OutExpo),
                )
                .with_trigger(TriggerSpec::toggle(id.as_str(), "top 95%")?),
        )?;
    }

    scope.add(
        Timeline::new()
            .then(
                Step::from_to(
                    &["selected-work-title-0", "selected-work-title-1"],
                    [("yPercent", 100.0)],
                    [("yPercent", 0.0)],
                )
                .duration(1.2)
                .stagger(0.15)
                .ease(Ease::OutQuint),
            )
            .then(
                Step::from_to(
                    &["selected-work-subtitle"],
                    [("opacity", 0.0), ("x", -20.0)],
                    [("opacity", 1.0), ("x", 0.0)],
                )
                .duration(0.8)
                .ease(Ease::OutCubic)
                .at(Position::AfterEnd(-0.6)),
            )
            .with_trigger(TriggerSpec::toggle("selected-work-header", "top 85%")?),
    )?;

    for i in 0..PROJECTS.len() {
        setup_project_card(scope, i)?;
    }

    setup_services(scope, layout)?;
    setup_roadmap(scope)?;

    setup_testimonials(scope, layout)
}

fn setup_testimonials(scope: &mut AnimationScope, layout: &Layout) -> ScrollweaveResult<()> {
    scope.add(
        Timeline::new()
            .then(
                Step::from(&["testimonials-heading"], [("y", 100.0), ("opacity", 0.0)])
                    .duration(1.5)
                    .ease(Ease::OutQuint),
            )
            .with_trigger(TriggerSpec::toggle("testimonials", "top 80%")?),
    )?;

    // The rows hold the reviews three times over; shifting by half a row loops seamlessly.
    let [left, right] = MARQUEE_ROWS;
    let half = marquee_row_width(layout, left) / 2.0;
    scope.add(
        Timeline::new()
            .then(
                Step::to(&[left], [("x", -half)])
                    .duration(MARQUEE_LOOP_SECS[0])
                    .ease(Ease::Linear),
            )
            .repeat(Repeat::Forever),
    )?;
    let half = marquee_row_width(layout, right) / 2.0;
    scope.add(
        Timeline::new()
            .with_base(right, "x", -half)
            .then(
                Step::to(&[right], [("x", 0.0)])
                    .duration(MARQUEE_LOOP_SECS[1])
                    .ease(Ease::Linear),
            )
            .repeat(Repeat::Forever),
    )?;
    Ok(())
}

/// Width of a testimonial row: the measured region when present, else the card strip.
pub fn marquee_row_width(layout: &Layout, row: &str) -> f64 {
    layout
        .region(&row.into())
        .map(|r| r.width())
        .unwrap_or_else(|| marquee_strip_width(layout.viewport.width))
}

fn marquee_strip_width(vw: f64) -> f64 {
    let (card, margin) = if vw < MOBILE_BREAKPOINT {
        (vw * 0.85, 32.0)
    } else {
        (TESTIMONIAL_CARD_WIDTH, 48.0)
    };
    MARQUEE_COPIES * REVIEWS.len() as f64 * (card + margin)
}

/// Slow a testimonial row down while hovered and speed it back up afterwards.
///
/// Returns false when `row` is not a marquee row of the mounted scope.
pub fn hover_marquee(scope: &mut AnimationScope, row: &str, hovered: bool) -> bool {
    if !MARQUEE_ROWS.contains(&row) {
        return false;
    }
    let (scale, ease) = if hovered {
        (MARQUEE_HOVER_SCALE, Ease::OutCubic)
    } else {
        (1.0, Ease::InOutCubic)
    };
    scope.ease_time_scale(row, scale, 1.0, ease) > 0
}

fn setup_project_card(scope: &mut AnimationScope, i: usize) -> ScrollweaveResult<()> {
    let card = format!("project-{i}");
    let image = format!("{card}-image");
    let content = format!("{card}-content");

    scope.add(
        Timeline::new()
            .then(
                Step::from_to(
                    &[card.as_str()],
                    [
                        ("opacity", 0.0),
                        ("x", -200.0),
                        ("y", 250.0),
                        ("rotation", -8.0),
                        ("scale", 0.85),
                    ],
                    [
                        ("opacity", 1.0),
                        ("x", 0.0),
                        ("y", 0.0),
                        ("rotation", 0.0),
                        ("scale", 1.0),
                    ],
                )
                .duration(2.0)
                .ease(Ease::OutQuint),
            )
            .with_trigger(TriggerSpec::scrub(card.as_str(), "top 105%", "top 40%", 1.5)?),
    )?;

    scope.add(
        Timeline::new()
            .then(
                Step::from_to(&[image.as_str()], [("yPercent", -20.0)], [("yPercent", 20.0)])
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .with_trigger(TriggerSpec::scrub(card.as_str(), "top bottom", "bottom top", 0.0)?),
    )?;

    scope.add(
        Timeline::new()
            .then(
                Step::from_to(
                    &[content.as_str()],
                    [("opacity", 0.0), ("y", 40.0)],
                    [("opacity", 1.0), ("y", 0.0)],
                )
                .duration(1.2)
                .ease(Ease::OutQuart),
            )
            .with_trigger(TriggerSpec::toggle(card.as_str(), "top 60%")?),
    )?;
    Ok(())
}

/// Horizontal distance the services track travels while pinned.
pub fn services_scroll_amount(layout: &Layout) -> (f64, f64) {
    let vw = layout.viewport.width;
    let track = layout
        .region(&"services-track".into())
        .map(|r| r.width())
        .unwrap_or_else(|| services_track_width(vw));
    (track, (track - vw).max(0.0))
}

fn services_track_width(vw: f64) -> f64 {
    let card = if vw < MOBILE_BREAKPOINT {
        vw * 0.85
    } else {
        SERVICE_CARD_WIDTH
    };
    let n = SERVICES.len() as f64;
    n * card + (n - 1.0) * SERVICE_CARD_GAP + vw * 0.5
}

fn setup_services(scope: &mut AnimationScope, layout: &Layout) -> ScrollweaveResult<()> {
    let (scroll_width, amount) = services_scroll_amount(layout);
    let end = format!("+={scroll_width}");

    scope.add(
        Timeline::new()
            .then(
                Step::to(&["services-track"], [("x", -amount)])
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .with_trigger(TriggerSpec::scrub("services", "top top", &end, 1.0)?.pinned()),
    )?;

    scope.add(
        Timeline::new()
            .with_base("services-progress", "scaleX", 0.0)
            .then(
                Step::to(&["services-progress"], [("scaleX", 1.0)])
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .with_trigger(TriggerSpec::scrub("services", "top top", &end, 1.0)?),
    )?;

    scope.add(
        Timeline::new()
            .then(
                Step::from(
                    &["services-header-0", "services-header-1"],
                    [("yPercent", 100.0)],
                )
                .duration(1.2)
                .stagger(0.1)
                .ease(Ease::OutExpo),
            )
            .with_trigger(TriggerSpec::toggle("services-section", "top 80%")?),
    )?;
    Ok(())
}

fn setup_roadmap(scope: &mut AnimationScope) -> ScrollweaveResult<()> {
    for (target, prop) in [("roadmap-line", "heightPercent"), ("roadmap-runner", "topPercent")] {
        scope.add(
            Timeline::new()
                .then(
                    Step::to(&[target], [(prop, 100.0)])
                        .duration(1.0)
                        .ease(Ease::Linear),
                )
                .with_trigger(TriggerSpec::scrub(
                    "roadmap-phases",
                    "top 40%",
                    "bottom 55%",
                    1.0,
                )?),
        )?;
    }

    for i in 0..ROADMAP_PHASES.len() {
        let card = format!("roadmap-card-{i}");
        let dot = format!("{card}-dot");
        let connector = format!("{card}-connector");
        let body = format!("{card}-body");
        let side = if i % 2 == 0 { -40.0 } else { 40.0 };
        scope.add(
            Timeline::new()
                .then(
                    Step::from(&[dot.as_str()], [("scale", 0.0)])
                        .duration(0.5)
                        .ease(Ease::OutBack { overshoot: 2.0 }),
                )
                .then(
                    Step::from(&[connector.as_str()], [("scaleX", 0.0)])
                        .duration(0.6)
                        .ease(Ease::OutCubic)
                        .at(Position::AfterEnd(-0.2)),
                )
                .then(
                    Step::from(&[body.as_str()], [("x", side), ("opacity", 0.0)])
                        .duration(0.1)
                        .ease(Ease::OutExpo)
                        .at(Position::AfterEnd(-0.4)),
                )
                .then(
                    Step::to(&[body.as_str()], [("opacity", 1.0), ("highlight", 1.0)])
                        .duration(0.1)
                        .at(Position::AfterEnd(-0.2)),
                )
                .with_base(&body, "highlight", 0.0)
                .with_trigger(TriggerSpec::toggle(card.as_str(), "top 80%")?),
        )?;
    }
    Ok(())
}

fn setup_work(scope: &mut AnimationScope) -> ScrollweaveResult<()> {
    scope.add(
        Timeline::new().then(
            Step::from(
                &["work-header-0", "work-header-1"],
                [("y", 100.0), ("opacity", 0.0)],
            )
            .duration(1.5)
            .stagger(0.2)
            .ease(Ease::OutQuint),
        ),
    )?;

    for i in 0..PROJECTS.len() {
        let card = format!("work-card-{i}");
        scope.add(
            Timeline::new()
                .then(Step::from(&[card.as_str()], [("y", 100.0), ("opacity", 0.0)]).duration(1.0))
                .with_trigger(TriggerSpec::toggle(card.as_str(), "top 90%")?),
        )?;
    }
    Ok(())
}

fn setup_agency(scope: &mut AnimationScope) -> ScrollweaveResult<()> {
    let reveals = ids("agency-reveal", 4);
    scope.add(
        Timeline::new().then(
            Step::from(&refs(&reveals), [("y", 80.0), ("opacity", 0.0)])
                .duration(1.2)
                .stagger(0.1)
                .ease(Ease::OutQuint),
        ),
    )?;

    let members = ids("team-member", TEAM_MEMBERS.len());
    scope.add(
        Timeline::new()
            .then(
                Step::from(&refs(&members), [("y", 100.0), ("opacity", 0.0)])
                    .duration(1.5)
                    .stagger(0.2)
                    .ease(Ease::OutQuint),
            )
            .with_trigger(TriggerSpec::toggle("team", "top 80%")?),
    )?;

    scope.add(
        Timeline::new()
            .then(
                Step::from(&["culture-headline"], [("yPercent", 100.0)])
                    .duration(1.2)
                    .ease(Ease::OutQuint),
            )
            .with_trigger(TriggerSpec::toggle("culture-headline", "top 90%")?),
    )?;
    scope.add(
        Timeline::new()
            .then(
                Step::from_to(&["culture-image"], [("yPercent", -10.0)], [("yPercent", 10.0)])
                    .duration(1.0)
                    .ease(Ease::Linear),
            )
            .with_trigger(TriggerSpec::scrub("culture", "top bottom", "bottom top", 0.0)?),
    )?;
    scope.add(
        Timeline::new()
            .then(
                Step::from(&["culture-card"], [("x", 40.0), ("opacity", 0.0)])
                    .duration(1.5)
                    .ease(Ease::OutQuart),
            )
            .with_trigger(TriggerSpec::toggle("culture-card", "top 90%")?),
    )?;
    Ok(())
}

fn setup_contact(scope: &mut AnimationScope) -> ScrollweaveResult<()> {
    let reveals = ids("contact-reveal", 4);
    scope.add(
        Timeline::new().then(
            Step::from(&refs(&reveals), [("y", 100.0), ("opacity", 0.0)])
                .duration(1.5)
                .stagger(0.2)
                .ease(Ease::OutQuint),
        ),
    )?;
    Ok(())
}

struct Stack {
    y: f64,
    width: f64,
    layout: Layout,
}

impl Stack {
    fn new(viewport: Size) -> Self {
        Self {
            y: 0.0,
            width: viewport.width,
            layout: Layout::new(viewport, 0.0),
        }
    }

    fn section(&mut self, id: &str, height: f64) -> Rect {
        let rect = Rect::new(0.0, self.y, self.width, self.y + height);
        self.layout.regions.insert(id.into(), rect);
        self.y += height;
        rect
    }

    fn inside(&mut self, id: &str, parent: Rect, top: f64, height: f64) {
        let y0 = parent.y0 + top;
        self.layout
            .regions
            .insert(id.into(), Rect::new(parent.x0, y0, parent.x1, y0 + height));
    }

    fn finish(mut self) -> Layout {
        self.layout.content_height = self.y;
        self.layout
    }
}

/// Representative geometry of `page` for a viewport, used when the host supplies none.
pub fn default_layout(page: PageId, viewport: Size) -> Layout {
    let vh = viewport.height;
    let mut s = Stack::new(viewport);
    match page {
        PageId::Home => {
            s.section("hero", vh);
            let what = s.section("what-we-do", 1.4 * vh);
            s.inside("what-we-do-text", what, 0.2 * vh, 0.5 * vh);
            for i in 0..METRICS.len() {
                s.inside(&format!("metric-{i}"), what, 0.9 * vh, 0.3 * vh);
            }
            s.section("selected-work-header", 0.6 * vh);
            for i in 0..PROJECTS.len() {
                s.section(&format!("project-{i}"), 0.9 * vh);
                s.y += 0.2 * vh;
            }
            s.section("services-section", 0.4 * vh);
            let services = s.section("services", vh);
            let track = services_track_width(viewport.width);
            s.layout.regions.insert(
                "services-track".into(),
                Rect::new(0.0, services.y0, track, services.y1),
            );
            s.section("roadmap", 0.4 * vh);
            let phases_top = s.y;
            for i in 0..ROADMAP_PHASES.len() {
                s.section(&format!("roadmap-card-{i}"), 0.5 * vh);
            }
            s.layout.regions.insert(
                "roadmap-phases".into(),
                Rect::new(0.0, phases_top, viewport.width, s.y),
            );
            let testimonials = s.section("testimonials", vh);
            let strip = marquee_strip_width(viewport.width);
            for (i, row) in MARQUEE_ROWS.iter().enumerate() {
                let y0 = testimonials.y0 + (0.45 + 0.27 * i as f64) * vh;
                s.layout
                    .regions
                    .insert((*row).into(), Rect::new(0.0, y0, strip, y0 + 0.25 * vh));
            }
            s.section("footer", 0.8 * vh);
        }
        PageId::Work => {
            s.section("work-header", 0.8 * vh);
            for i in 0..PROJECTS.len() {
                s.section(&format!("work-card-{i}"), 0.7 * vh);
            }
            s.section("footer", 0.8 * vh);
        }
        PageId::Agency => {
            s.section("agency-intro", vh);
            s.section("agency-philosophy", 0.8 * vh);
            s.section("team", 1.2 * vh);
            s.section("culture-headline", 0.3 * vh);
            let culture = s.section("culture", vh);
            s.inside("culture-card", culture, 0.5 * vh, 0.3 * vh);
            s.section("footer", 0.8 * vh);
        }
        PageId::Contact => {
            s.section("contact-headline", 0.8 * vh);
            s.section("contact-form", 1.2 * vh);
            s.section("footer", 0.8 * vh);
        }
    }
    s.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/site/pages.rs"]
mod tests;
