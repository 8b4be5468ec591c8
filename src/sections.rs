//! Fixed registry of the portal's navigation sections.

/// One addressable panel in the sidebar. The first six have bespoke
/// renderers; the rest show the "under development" placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Schedule,
    Forum,
    Curriculum,
    Improvement,
    Activities,
    Indicators,
    Modules,
    StudyPlan,
    Project,
    Tests,
    Circulars,
    Videos,
}

/// Static metadata describing a section's identity and appearance.
#[derive(Debug, Clone, Copy)]
pub struct SectionInfo {
    pub section: Section,
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// Accent color as a hex token, resolved via `theme::color_from_hex`.
    pub accent: &'static str,
}

/// The registry. Order is the sidebar order and never changes.
pub const SECTIONS: [SectionInfo; 12] = [
    SectionInfo {
        section: Section::Schedule,
        id: "schedule",
        title: "Horario",
        icon: "📅",
        accent: "#8b5cf6",
    },
    SectionInfo {
        section: Section::Forum,
        id: "forum",
        title: "Foro",
        icon: "💬",
        accent: "#10b981",
    },
    SectionInfo {
        section: Section::Curriculum,
        id: "curriculum",
        title: "Currículo",
        icon: "📖",
        accent: "#3b82f6",
    },
    SectionInfo {
        section: Section::Improvement,
        id: "improvement",
        title: "Planes de Mejoramiento",
        icon: "🎯",
        accent: "#22c55e",
    },
    SectionInfo {
        section: Section::Activities,
        id: "activities",
        title: "Actividades",
        icon: "📋",
        accent: "#a855f7",
    },
    SectionInfo {
        section: Section::Indicators,
        id: "indicators",
        title: "Indicadores",
        icon: "📈",
        accent: "#eab308",
    },
    SectionInfo {
        section: Section::Modules,
        id: "modules",
        title: "Módulos",
        icon: "📚",
        accent: "#ec4899",
    },
    SectionInfo {
        section: Section::StudyPlan,
        id: "study-plan",
        title: "Plan de Estudios",
        icon: "🎓",
        accent: "#6366f1",
    },
    SectionInfo {
        section: Section::Project,
        id: "project",
        title: "Proyecto Propio",
        icon: "📄",
        accent: "#ef4444",
    },
    SectionInfo {
        section: Section::Tests,
        id: "tests",
        title: "Pruebas de Período",
        icon: "📝",
        accent: "#f97316",
    },
    SectionInfo {
        section: Section::Circulars,
        id: "circulars",
        title: "Circulares",
        icon: "✉",
        accent: "#14b8a6",
    },
    SectionInfo {
        section: Section::Videos,
        id: "videos",
        title: "Videos",
        icon: "🎞",
        accent: "#06b6d4",
    },
];

impl Section {
    pub fn from_id(id: &str) -> Option<Section> {
        SECTIONS
            .iter()
            .find(|info| info.id == id)
            .map(|info| info.section)
    }

    pub fn info(self) -> &'static SectionInfo {
        SECTIONS
            .iter()
            .find(|info| info.section == self)
            .expect("every section variant is registered")
    }

    /// Whether this section has a bespoke panel. Everything else renders
    /// the placeholder.
    pub fn has_panel(self) -> bool {
        matches!(
            self,
            Section::Schedule
                | Section::Forum
                | Section::Curriculum
                | Section::Improvement
                | Section::Activities
                | Section::Indicators
        )
    }

    /// Whether the panel exposes the grid/list toggle.
    pub fn uses_view_mode(self) -> bool {
        matches!(
            self,
            Section::Curriculum | Section::Improvement | Section::Activities | Section::Indicators
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_has_twelve_unique_ids_in_order() {
        assert_eq!(SECTIONS.len(), 12);
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), 12);
        assert_eq!(ids[0], "schedule");
        assert_eq!(ids[1], "forum");
        assert_eq!(ids[11], "videos");
    }

    #[test]
    fn from_id_resolves_every_registered_id() {
        for info in &SECTIONS {
            assert_eq!(Section::from_id(info.id), Some(info.section));
        }
        assert_eq!(Section::from_id("grades"), None);
        assert_eq!(Section::from_id(""), None);
    }

    #[test]
    fn exactly_six_sections_have_bespoke_panels() {
        let with_panel: Vec<&str> = SECTIONS
            .iter()
            .filter(|s| s.section.has_panel())
            .map(|s| s.id)
            .collect();
        assert_eq!(
            with_panel,
            [
                "schedule",
                "forum",
                "curriculum",
                "improvement",
                "activities",
                "indicators"
            ]
        );
        for info in &SECTIONS {
            if !info.section.has_panel() {
                assert!(!info.section.uses_view_mode());
            }
        }
    }

    #[test]
    fn view_mode_toggle_is_limited_to_document_sections() {
        assert!(!Section::Schedule.uses_view_mode());
        assert!(!Section::Forum.uses_view_mode());
        assert!(Section::Curriculum.uses_view_mode());
        assert!(Section::Improvement.uses_view_mode());
        assert!(Section::Activities.uses_view_mode());
        assert!(Section::Indicators.uses_view_mode());
    }

    #[test]
    fn every_variant_is_registered() {
        for info in &SECTIONS {
            assert_eq!(info.section.info().id, info.id);
        }
    }
}
