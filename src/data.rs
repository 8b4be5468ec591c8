//! Static sample data shown in the portal panels. Nothing here is ever
//! fetched or mutated; the tables are baked in and reconstructed identically
//! on every run.

#[derive(Debug, Clone, Copy)]
pub struct ForumPost {
    pub id: u32,
    pub author: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub date: &'static str,
    pub replies: u32,
    pub course: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Class,
    Practice,
    Exam,
}

impl EventKind {
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Class => "clase",
            EventKind::Practice => "práctica",
            EventKind::Exam => "examen",
        }
    }

    /// Badge palette as (background, text) hex tokens. Pure function of the
    /// kind: class is green, practice blue, exam yellow.
    pub fn badge(self) -> (&'static str, &'static str) {
        match self {
            EventKind::Class => ("#dcfce7", "#16a34a"),
            EventKind::Practice => ("#dbeafe", "#2563eb"),
            EventKind::Exam => ("#fef9c3", "#ca8a04"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleEvent {
    pub id: u32,
    pub title: &'static str,
    pub time: &'static str,
    pub course: &'static str,
    pub kind: EventKind,
    pub room: &'static str,
}

/// A document-like item shown as a card in grid or list layout.
#[derive(Debug, Clone, Copy)]
pub struct DocumentEntry {
    pub title: &'static str,
    pub file_kind: &'static str,
    pub date_note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ActivityEntry {
    pub title: &'static str,
    pub due: &'static str,
    pub progress: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct IndicatorEntry {
    pub title: &'static str,
    pub progress: f32,
}

pub const FORUM_POSTS: [ForumPost; 3] = [
    ForumPost {
        id: 1,
        author: "Victor Cañola",
        title: "Bienvenidos al curso de Programación de Software",
        content: "Información importante sobre el inicio del curso...",
        date: "2024-03-15",
        replies: 12,
        course: "10-1",
    },
    ForumPost {
        id: 2,
        author: "Estudiante 10-1",
        title: "Dudas sobre el proyecto final",
        content: "Tengo algunas preguntas sobre los requerimientos...",
        date: "2024-03-14",
        replies: 5,
        course: "10-1",
    },
    ForumPost {
        id: 3,
        author: "Victor Cañola",
        title: "Recursos de Preprensa Digital",
        content: "Enlaces útiles para el módulo de diseño...",
        date: "2024-03-13",
        replies: 8,
        course: "10-2",
    },
];

pub const SCHEDULE_EVENTS: [ScheduleEvent; 4] = [
    ScheduleEvent {
        id: 1,
        title: "Programación de Software",
        time: "7:00 AM - 9:00 AM",
        course: "10-1",
        kind: EventKind::Class,
        room: "Lab 201",
    },
    ScheduleEvent {
        id: 2,
        title: "Preprensa Digital",
        time: "9:30 AM - 11:30 AM",
        course: "10-2",
        kind: EventKind::Practice,
        room: "Lab 202",
    },
    ScheduleEvent {
        id: 3,
        title: "Desarrollo Web Avanzado",
        time: "1:00 PM - 3:00 PM",
        course: "11-1",
        kind: EventKind::Class,
        room: "Lab 201",
    },
    ScheduleEvent {
        id: 4,
        title: "Diseño Editorial",
        time: "3:30 PM - 5:30 PM",
        course: "11-2",
        kind: EventKind::Practice,
        room: "Lab 202",
    },
];

pub const CURRICULUM_DOCS: [DocumentEntry; 6] = [
    DocumentEntry {
        title: "Guía Didáctica 2024",
        file_kind: "PDF",
        date_note: "Actualizado: 15 Mar 2024",
    },
    DocumentEntry {
        title: "Planificación Anual",
        file_kind: "DOCX",
        date_note: "Actualizado: 10 Mar 2024",
    },
    DocumentEntry {
        title: "Objetivos del Curso",
        file_kind: "PDF",
        date_note: "Actualizado: 5 Mar 2024",
    },
    DocumentEntry {
        title: "Material de Apoyo",
        file_kind: "PDF",
        date_note: "Actualizado: 1 Mar 2024",
    },
    DocumentEntry {
        title: "Cronograma",
        file_kind: "XLSX",
        date_note: "Actualizado: 28 Feb 2024",
    },
    DocumentEntry {
        title: "Recursos Adicionales",
        file_kind: "ZIP",
        date_note: "Actualizado: 25 Feb 2024",
    },
];

pub const IMPROVEMENT_DOCS: [DocumentEntry; 3] = [
    DocumentEntry {
        title: "Plan de Mejora - Matemáticas",
        file_kind: "PDF",
        date_note: "Fecha límite: 30 Mar 2024",
    },
    DocumentEntry {
        title: "Plan de Mejora - Lenguaje",
        file_kind: "PDF",
        date_note: "Fecha límite: 2 Abr 2024",
    },
    DocumentEntry {
        title: "Recursos de Apoyo",
        file_kind: "ZIP",
        date_note: "Actualizado: 15 Mar 2024",
    },
];

pub const ACTIVITIES: [ActivityEntry; 4] = [
    ActivityEntry {
        title: "Tarea 1",
        due: "Fecha de entrega: 15 de Abril",
        progress: 0.75,
    },
    ActivityEntry {
        title: "Proyecto Grupal",
        due: "Fecha de entrega: 15 de Abril",
        progress: 0.75,
    },
    ActivityEntry {
        title: "Investigación",
        due: "Fecha de entrega: 15 de Abril",
        progress: 0.75,
    },
    ActivityEntry {
        title: "Presentación",
        due: "Fecha de entrega: 15 de Abril",
        progress: 0.75,
    },
];

pub const INDICATORS: [IndicatorEntry; 3] = [
    IndicatorEntry {
        title: "Asistencia",
        progress: 0.9,
    },
    IndicatorEntry {
        title: "Rendimiento",
        progress: 0.9,
    },
    IndicatorEntry {
        title: "Participación",
        progress: 0.9,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forum_posts_keep_source_order_and_cardinality() {
        assert_eq!(FORUM_POSTS.len(), 3);
        let ids: Vec<u32> = FORUM_POSTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(FORUM_POSTS[0].author, "Victor Cañola");
        assert_eq!(FORUM_POSTS[1].course, "10-1");
    }

    #[test]
    fn badge_palette_is_a_pure_function_of_kind() {
        let (class_bg, class_fg) = EventKind::Class.badge();
        let (practice_bg, practice_fg) = EventKind::Practice.badge();
        let (exam_bg, exam_fg) = EventKind::Exam.badge();

        // green / blue / yellow families, all distinct
        assert_eq!(class_fg, "#16a34a");
        assert_eq!(practice_fg, "#2563eb");
        assert_eq!(exam_fg, "#ca8a04");
        assert_ne!(class_bg, practice_bg);
        assert_ne!(practice_bg, exam_bg);

        // stable across calls
        assert_eq!(EventKind::Class.badge(), (class_bg, class_fg));
    }

    #[test]
    fn schedule_events_have_unique_ids() {
        let mut ids: Vec<u32> = SCHEDULE_EVENTS.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), SCHEDULE_EVENTS.len());
        assert_eq!(SCHEDULE_EVENTS[0].kind, EventKind::Class);
        assert_eq!(SCHEDULE_EVENTS[1].kind, EventKind::Practice);
    }

    #[test]
    fn kind_labels_are_spanish_lowercase() {
        assert_eq!(EventKind::Class.label(), "clase");
        assert_eq!(EventKind::Practice.label(), "práctica");
        assert_eq!(EventKind::Exam.label(), "examen");
    }
}
