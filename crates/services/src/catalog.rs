use club_core::model::{Event, EventId, Project, ProjectFilter, Question};

use crate::seed;

//
// ─── CLUB INFO ─────────────────────────────────────────────────────────────────
//

/// A headline number shown in the hero stats grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubStat {
    pub number: &'static str,
    pub label: &'static str,
}

/// One row of the office-hours card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
}

/// An outbound social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// The club's identity and contact card. Static content, owned by the
/// catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubInfo {
    pub name: &'static str,
    pub university: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub footer_blurb: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address_lines: [&'static str; 2],
    pub stats: Vec<ClubStat>,
    pub office_hours: Vec<OfficeHours>,
    pub socials: Vec<SocialLink>,
    pub discord_url: &'static str,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable, seeded club content: events, quiz questions, showcase projects,
/// and the contact card.
///
/// There is no runtime create/update/delete lifecycle; views and services
/// share one catalog behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ClubCatalog {
    events: Vec<Event>,
    questions: Vec<Question>,
    projects: Vec<Project>,
    info: ClubInfo,
}

impl ClubCatalog {
    /// Catalog with the standard seeded content.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            events: seed::seed_events(),
            questions: seed::seed_questions(),
            projects: seed::seed_projects(),
            info: seed::club_info(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event by id.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects passing the given showcase filter, in seed order.
    #[must_use]
    pub fn projects_matching(&self, filter: ProjectFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| filter.matches(project))
            .collect()
    }

    #[must_use]
    pub fn info(&self) -> &ClubInfo {
        &self.info
    }
}

impl Default for ClubCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
