use crate::data::{
    ActivityEntry, DocumentEntry, IndicatorEntry, ACTIVITIES, CURRICULUM_DOCS, FORUM_POSTS,
    IMPROVEMENT_DOCS, INDICATORS, SCHEDULE_EVENTS,
};
use crate::sections::{Section, SECTIONS};
use crate::settings::{save_settings, Settings};
use crate::state::{ViewMode, ViewState};
use crate::theme::{
    apply_theme, color_from_hex, ensure_theme_files, load_presets, load_theme, save_theme,
    ThemeConfig,
};
use chrono::Datelike;
use eframe::{
    egui::{
        self, menu, Align, CentralPanel, Context, Layout, ProgressBar, RichText, Rounding,
        ScrollArea, SidePanel, TopBottomPanel,
    },
    App, CreationContext,
};
use rfd::FileDialog;
use std::io;
use std::path::{Path, PathBuf};

/// Below this window width the sidebar becomes an overlay behind the menu
/// toggle.
const COMPACT_WIDTH: f32 = 900.0;
const SIDEBAR_WIDTH: f32 = 250.0;
const DAYS_IN_STRIP: u8 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayStyle {
    Selected,
    Today,
    Normal,
}

fn day_style(day: u8, selected: u8, today: u8) -> DayStyle {
    if day == selected {
        DayStyle::Selected
    } else if day == today {
        DayStyle::Today
    } else {
        DayStyle::Normal
    }
}

fn grid_columns(mode: ViewMode, section: Section) -> usize {
    match mode {
        ViewMode::List => 1,
        ViewMode::Grid => {
            if section == Section::Activities {
                2
            } else {
                3
            }
        }
    }
}

fn file_display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("archivo")
        .to_string()
}

/// Writes the active theme and the settings that remember it. Failures
/// propagate so the caller can report them instead of losing the choice
/// silently.
fn persist_theme_choice(
    base: &Path,
    theme: &ThemeConfig,
    settings: &Settings,
) -> io::Result<()> {
    save_theme(base, theme)?;
    save_settings(settings, base)?;
    Ok(())
}

/// Upload stub: the portal has no backend, so a picked file is only
/// acknowledged by name. Nothing is read, copied, or remembered.
fn handle_file_pick(picked: Option<PathBuf>) {
    if let Some(path) = picked {
        eprintln!("[upload] Selected file: {}", file_display_name(&path));
    }
}

pub struct PortalApp {
    settings: Settings,
    base_path: PathBuf,
    theme: ThemeConfig,
    presets: Vec<ThemeConfig>,
    view: ViewState,
    today: u8,
}

impl PortalApp {
    pub fn new(
        cc: &CreationContext<'_>,
        base_path: PathBuf,
        settings: Settings,
    ) -> io::Result<Self> {
        ensure_theme_files(&base_path)?;
        let presets = load_presets(&base_path);
        let theme = load_theme(&base_path, settings.ui.last_theme.as_deref());
        apply_theme(&theme, &cc.egui_ctx);

        let today = chrono::Local::now().day() as u8;
        let start = settings
            .ui
            .start_section
            .as_deref()
            .and_then(Section::from_id)
            .unwrap_or(Section::Schedule);

        Ok(Self {
            settings,
            base_path,
            theme,
            presets,
            view: ViewState::new(start, today),
            today,
        })
    }

    fn switch_theme(&mut self, name: &str, ctx: &Context) {
        self.theme = load_theme(&self.base_path, Some(name));
        apply_theme(&self.theme, ctx);
        self.settings.ui.last_theme = Some(self.theme.name.clone());
        if let Err(e) = persist_theme_choice(&self.base_path, &self.theme, &self.settings) {
            eprintln!("[settings] Could not save theme preference: {e}");
        }
    }

    fn accent(&self) -> egui::Color32 {
        color_from_hex(&self.theme.accent)
    }

    fn accent_soft(&self) -> egui::Color32 {
        color_from_hex(&self.theme.accent_soft)
    }

    fn muted(&self) -> egui::Color32 {
        color_from_hex(&self.theme.muted_text)
    }

    fn card_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(color_from_hex(&self.theme.panel))
            .stroke(egui::Stroke {
                width: 1.0,
                color: color_from_hex(&self.theme.border),
            })
            .rounding(Rounding::same(self.theme.radius))
            .inner_margin(egui::vec2(14.0, 12.0))
    }

    fn render_menu_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        menu::bar(ui, |ui| {
            ui.menu_button("Archivo", |ui| {
                if ui.button("Salir").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Tema", |ui| {
                let preset_names: Vec<String> =
                    self.presets.iter().map(|p| p.name.clone()).collect();
                for name in preset_names {
                    let selected = self.theme.name == name;
                    if ui.selectable_label(selected, name.clone()).clicked() {
                        self.switch_theme(&name, ctx);
                        ui.close_menu();
                    }
                }
            });

            ui.menu_button("Ayuda", |ui| {
                ui.label("Portal Media Técnica (egui)");
                ui.label(format!("Base path: {}", self.base_path.display()));
            });
        });
    }

    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("👤").size(26.0).color(self.accent()));
            ui.vertical(|ui| {
                ui.label(RichText::new("I.E. Héctor Abad Gómez").strong());
                ui.label(RichText::new("Media Técnica").color(self.muted()));
                ui.label(
                    RichText::new("Prof. Victor Cañola")
                        .small()
                        .color(self.muted()),
                );
            });
        });
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        let mut clicked: Option<Section> = None;
        for info in &SECTIONS {
            let selected = self.view.section == info.section;
            let label = RichText::new(format!("{}  {}", info.icon, info.title));
            let label = if selected {
                label.color(self.accent()).strong()
            } else {
                label
            };
            let response = ui.add_sized(
                [ui.available_width(), 30.0],
                egui::SelectableLabel::new(selected, label),
            );
            if response.clicked() {
                clicked = Some(info.section);
            }
        }
        if let Some(section) = clicked {
            self.view.select_section(section);
        }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let info = self.view.section.info();
        ui.heading(RichText::new(info.title).size(26.0).strong());
        ui.label(
            RichText::new("Programación de Software (10-1, 11-1) | Preprensa Digital (10-2, 11-2)")
                .color(self.muted()),
        );
        ui.add_space(12.0);
    }

    fn render_schedule(&mut self, ui: &mut egui::Ui) {
        self.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Marzo 2024").strong().size(18.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // Decorative view switches; only the day strip below
                    // reacts to input.
                    let _ = ui.add(egui::Button::new("📅").fill(self.accent_soft()));
                    let _ = ui.add(egui::Button::new("🕐").fill(self.accent_soft()));
                });
            });
            ui.add_space(8.0);

            ScrollArea::horizontal()
                .id_source("day_strip")
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let mut picked: Option<u8> = None;
                        for day in 1..=DAYS_IN_STRIP {
                            let style = day_style(day, self.view.selected_day, self.today);
                            let (fill, text_color) = match style {
                                DayStyle::Selected => (self.accent(), egui::Color32::WHITE),
                                DayStyle::Today => (self.accent_soft(), self.accent()),
                                DayStyle::Normal => (
                                    color_from_hex(&self.theme.surface),
                                    color_from_hex(&self.theme.text),
                                ),
                            };
                            let button =
                                egui::Button::new(RichText::new(day.to_string()).color(text_color))
                                    .fill(fill)
                                    .rounding(Rounding::same(17.0));
                            if ui.add_sized([34.0, 34.0], button).clicked() {
                                picked = Some(day);
                            }
                        }
                        if let Some(day) = picked {
                            self.view.select_day(day);
                        }
                    });
                });
            ui.add_space(12.0);

            for event in &SCHEDULE_EVENTS {
                self.card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(event.title).strong());
                            ui.label(RichText::new(event.time).small().color(self.muted()));
                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format!(" {} ", event.course))
                                        .small()
                                        .color(self.accent())
                                        .background_color(self.accent_soft()),
                                );
                                ui.label(
                                    RichText::new(format!(" {} ", event.room))
                                        .small()
                                        .color(self.muted())
                                        .background_color(color_from_hex(&self.theme.surface)),
                                );
                            });
                        });
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            let (bg, fg) = event.kind.badge();
                            ui.label(
                                RichText::new(format!(" {} ", event.kind.label()))
                                    .small()
                                    .color(color_from_hex(fg))
                                    .background_color(color_from_hex(bg)),
                            );
                        });
                    });
                });
                ui.add_space(6.0);
            }
        });
    }

    fn render_forum(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Course filters are decorative; they do not filter the list.
            let _ = ui.add(
                egui::Button::new(RichText::new("Todos los cursos").color(egui::Color32::WHITE))
                    .fill(self.accent()),
            );
            let _ = ui.button("10-1 Programación");
            let _ = ui.button("11-1 Programación");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let _ = ui.add(
                    egui::Button::new(RichText::new("➕ Nuevo Tema").color(egui::Color32::WHITE))
                        .fill(self.accent()),
                );
            });
        });
        ui.add_space(10.0);

        for post in &FORUM_POSTS {
            self.card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("👤").size(22.0).color(self.accent()));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(post.author).strong());
                        ui.label(RichText::new(post.date).small().color(self.muted()));
                    });
                    ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                        ui.label(
                            RichText::new(format!(" {} ", post.course))
                                .small()
                                .color(self.accent())
                                .background_color(self.accent_soft()),
                        );
                    });
                });
                ui.add_space(6.0);
                ui.label(RichText::new(post.title).strong().size(17.0));
                ui.label(RichText::new(post.content).color(self.muted()));
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("💬 {} respuestas", post.replies))
                            .small()
                            .color(self.muted()),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let _ = ui.small_button("Responder");
                    });
                });
            });
            ui.add_space(8.0);
        }
    }

    fn render_view_toggle(&mut self, ui: &mut egui::Ui) {
        debug_assert!(self.view.section.uses_view_mode());
        let grid = self.view.view_mode == ViewMode::Grid;
        if ui.selectable_label(grid, "⊞").clicked() {
            self.view.set_view_mode(ViewMode::Grid);
        }
        if ui.selectable_label(!grid, "☰").clicked() {
            self.view.set_view_mode(ViewMode::List);
        }
    }

    fn document_card(&self, ui: &mut egui::Ui, doc: &DocumentEntry) {
        match self.view.view_mode {
            ViewMode::Grid => {
                self.card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("📄").size(22.0).color(self.accent()));
                        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                            let _ = ui.small_button("⬇");
                            let _ = ui.small_button("👁");
                        });
                    });
                    ui.add_space(4.0);
                    ui.label(RichText::new(doc.title).strong());
                    ui.label(RichText::new(doc.file_kind).small().color(self.muted()));
                    ui.label(RichText::new(doc.date_note).small().color(self.muted()));
                });
            }
            ViewMode::List => {
                self.card_frame().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("📄").size(18.0).color(self.accent()));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(doc.title).strong());
                            ui.label(
                                RichText::new(format!("{} · {}", doc.file_kind, doc.date_note))
                                    .small()
                                    .color(self.muted()),
                            );
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            let _ = ui.small_button("⬇");
                            let _ = ui.small_button("👁");
                        });
                    });
                });
            }
        }
    }

    fn document_grid(&self, ui: &mut egui::Ui, docs: &[DocumentEntry], section: Section) {
        let columns = grid_columns(self.view.view_mode, section);
        if columns == 1 {
            for doc in docs {
                self.document_card(ui, doc);
                ui.add_space(6.0);
            }
            return;
        }
        for row in docs.chunks(columns) {
            ui.columns(columns, |cols| {
                for (i, doc) in row.iter().enumerate() {
                    self.document_card(&mut cols[i], doc);
                }
            });
            ui.add_space(6.0);
        }
    }

    fn render_documents_section(
        &mut self,
        ui: &mut egui::Ui,
        docs: &[DocumentEntry],
        upload_label: &str,
        section: Section,
    ) {
        ui.horizontal(|ui| {
            self.render_view_toggle(ui);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let upload = egui::Button::new(
                    RichText::new(format!("⬆ {upload_label}")).color(egui::Color32::WHITE),
                )
                .fill(self.accent());
                if ui.add(upload).clicked() {
                    handle_file_pick(FileDialog::new().pick_file());
                }
            });
        });
        ui.add_space(10.0);
        self.document_grid(ui, docs, section);
    }

    fn activity_card(&self, ui: &mut egui::Ui, activity: &ActivityEntry) {
        self.card_frame().show(ui, |ui| {
            ui.label(RichText::new(activity.title).strong().size(17.0));
            ui.label(RichText::new(activity.due).color(self.muted()));
            ui.add(ProgressBar::new(activity.progress).fill(self.accent()));
            ui.label(
                RichText::new(format!("Progreso: {:.0}%", activity.progress * 100.0))
                    .small()
                    .color(self.muted()),
            );
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                // "Continuar" has no backing flow; it stays inert.
                let _ = ui.add(
                    egui::Button::new(RichText::new("Continuar").color(egui::Color32::WHITE))
                        .fill(self.accent()),
                );
                let _ = ui.button("⬇");
            });
        });
    }

    fn render_activities(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.render_view_toggle(ui);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let upload = egui::Button::new(
                    RichText::new("⬆ Entregar Actividad").color(egui::Color32::WHITE),
                )
                .fill(self.accent());
                if ui.add(upload).clicked() {
                    handle_file_pick(FileDialog::new().pick_file());
                }
            });
        });
        ui.add_space(10.0);

        let columns = grid_columns(self.view.view_mode, Section::Activities);
        if columns == 1 {
            for activity in &ACTIVITIES {
                self.activity_card(ui, activity);
                ui.add_space(6.0);
            }
        } else {
            for row in ACTIVITIES.chunks(columns) {
                ui.columns(columns, |cols| {
                    for (i, activity) in row.iter().enumerate() {
                        self.activity_card(&mut cols[i], activity);
                    }
                });
                ui.add_space(6.0);
            }
        }
    }

    fn indicator_card(&self, ui: &mut egui::Ui, indicator: &IndicatorEntry) {
        self.card_frame().show(ui, |ui| {
            ui.label(RichText::new(indicator.title).strong().size(17.0));
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(" PROGRESO ")
                        .small()
                        .color(self.accent())
                        .background_color(self.accent_soft()),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{:.0}%", indicator.progress * 100.0))
                            .small()
                            .strong()
                            .color(self.accent()),
                    );
                });
            });
            ui.add(ProgressBar::new(indicator.progress).fill(self.accent()));
            ui.add_space(4.0);
            let download = egui::Button::new(
                RichText::new("⬇ Descargar Detalles").color(egui::Color32::WHITE),
            )
            .fill(self.accent());
            if ui.add(download).clicked() {
                eprintln!("[export] Detail download requested: {}", indicator.title);
            }
        });
    }

    fn render_indicators(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.render_view_toggle(ui);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let export = egui::Button::new(
                    RichText::new("⬇ Exportar Reporte").color(egui::Color32::WHITE),
                )
                .fill(self.accent());
                if ui.add(export).clicked() {
                    eprintln!("[export] Report export requested: indicators");
                }
            });
        });
        ui.add_space(10.0);

        let columns = grid_columns(self.view.view_mode, Section::Indicators);
        if columns == 1 {
            for indicator in &INDICATORS {
                self.indicator_card(ui, indicator);
                ui.add_space(6.0);
            }
        } else {
            for row in INDICATORS.chunks(columns) {
                ui.columns(columns, |cols| {
                    for (i, indicator) in row.iter().enumerate() {
                        self.indicator_card(&mut cols[i], indicator);
                    }
                });
                ui.add_space(6.0);
            }
        }
    }

    fn render_placeholder(&self, ui: &mut egui::Ui) {
        self.card_frame().show(ui, |ui| {
            ui.label(RichText::new("Sección en Desarrollo").strong().size(18.0));
            ui.label(
                RichText::new("Esta sección estará disponible próximamente.").color(self.muted()),
            );
        });
    }

    fn render_section(&mut self, ui: &mut egui::Ui) {
        match self.view.section {
            Section::Schedule => self.render_schedule(ui),
            Section::Forum => self.render_forum(ui),
            Section::Curriculum => self.render_documents_section(
                ui,
                &CURRICULUM_DOCS,
                "Subir Documento",
                Section::Curriculum,
            ),
            Section::Improvement => self.render_documents_section(
                ui,
                &IMPROVEMENT_DOCS,
                "Subir Plan",
                Section::Improvement,
            ),
            Section::Activities => self.render_activities(ui),
            Section::Indicators => self.render_indicators(ui),
            _ => self.render_placeholder(ui),
        }
    }
}

impl App for PortalApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let compact = ctx.screen_rect().width() < COMPACT_WIDTH;

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if compact {
                    let toggle = if self.view.menu_open { "✕" } else { "☰" };
                    if ui.button(toggle).clicked() {
                        self.view.toggle_menu();
                    }
                }
                self.render_menu_bar(ctx, ui);
            });
        });

        let show_sidebar = !compact || self.view.menu_open;
        if show_sidebar {
            SidePanel::left("sidebar")
                .exact_width(SIDEBAR_WIDTH)
                .resizable(false)
                .frame(
                    egui::Frame::none()
                        .fill(color_from_hex(&self.theme.sidebar))
                        .inner_margin(egui::vec2(16.0, 12.0)),
                )
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| self.render_sidebar(ui));
                });
        }

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(color_from_hex(&self.theme.surface))
                    .inner_margin(egui::vec2(24.0, 20.0)),
            )
            .show(ctx, |ui| {
                self.render_header(ui);
                ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        self.render_section(ui);
                    });
            });
    }
}

pub fn launch_gui(base_path: PathBuf, settings: Settings) -> eframe::Result<()> {
    let (width, height) = settings.ui.window_size.unwrap_or((1100.0, 720.0));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portal Media Técnica")
            .with_inner_size([width, height])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Portal Media Técnica",
        native_options,
        Box::new(move |cc| {
            let app = PortalApp::new(cc, base_path.clone(), settings.clone())
                .expect("Failed to start app");
            Box::new(app)
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ensure_base_folders, settings_path, UiSettings};
    use crate::theme::{default_presets, theme_file};

    fn sample_settings(base: &Path) -> Settings {
        Settings {
            version: "0.1.0".to_string(),
            base_path: base.to_string_lossy().to_string(),
            ui: UiSettings {
                last_theme: Some("chalkboard_dark".to_string()),
                ..UiSettings::default()
            },
        }
    }

    #[test]
    fn theme_choice_persists_both_files() -> io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let base = tmp.path();
        ensure_base_folders(base)?;

        let theme = default_presets()[1].clone();
        persist_theme_choice(base, &theme, &sample_settings(base))?;

        assert!(theme_file(base).exists());
        assert!(settings_path(base).exists());
        let saved = crate::settings::load_or_init_settings(base)?;
        assert_eq!(saved.ui.last_theme.as_deref(), Some("chalkboard_dark"));
        Ok(())
    }

    #[test]
    fn theme_persist_failure_surfaces_as_an_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let base = tmp.path();
        // No config/ or themes/ folders, so both writes have nowhere to go.
        let theme = default_presets()[0].clone();
        let result = persist_theme_choice(base, &theme, &sample_settings(base));
        assert!(result.is_err());
    }

    #[test]
    fn grid_and_list_render_the_same_items_in_order() {
        let expected: Vec<&str> = CURRICULUM_DOCS.iter().map(|d| d.title).collect();
        for mode in [ViewMode::Grid, ViewMode::List] {
            let columns = grid_columns(mode, Section::Curriculum);
            let rendered: Vec<&str> = CURRICULUM_DOCS
                .chunks(columns)
                .flatten()
                .map(|d| d.title)
                .collect();
            assert_eq!(rendered, expected);
        }
    }

    #[test]
    fn exactly_one_day_is_highlighted_for_in_range_selection() {
        for selected in 1..=DAYS_IN_STRIP {
            let highlighted: Vec<u8> = (1..=DAYS_IN_STRIP)
                .filter(|&d| day_style(d, selected, 15) == DayStyle::Selected)
                .collect();
            assert_eq!(highlighted, [selected]);
        }
    }

    #[test]
    fn out_of_range_selection_highlights_no_day() {
        for selected in [0u8, 32, 99, 200] {
            let any = (1..=DAYS_IN_STRIP).any(|d| day_style(d, selected, 15) == DayStyle::Selected);
            assert!(!any, "day {selected} should not match any strip button");
        }
    }

    #[test]
    fn today_gets_the_soft_style_unless_selected() {
        assert_eq!(day_style(15, 20, 15), DayStyle::Today);
        assert_eq!(day_style(15, 15, 15), DayStyle::Selected);
        assert_eq!(day_style(3, 20, 15), DayStyle::Normal);
    }

    #[test]
    fn list_mode_always_renders_one_column() {
        for section in [
            Section::Curriculum,
            Section::Improvement,
            Section::Activities,
            Section::Indicators,
        ] {
            assert_eq!(grid_columns(ViewMode::List, section), 1);
        }
        assert_eq!(grid_columns(ViewMode::Grid, Section::Curriculum), 3);
        assert_eq!(grid_columns(ViewMode::Grid, Section::Activities), 2);
    }

    #[test]
    fn picked_file_is_reported_by_name_only() {
        assert_eq!(file_display_name(Path::new("report.pdf")), "report.pdf");
        assert_eq!(
            file_display_name(Path::new("/tmp/uploads/report.pdf")),
            "report.pdf"
        );
        assert_eq!(file_display_name(Path::new("/")), "archivo");
    }
}
