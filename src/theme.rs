use eframe::egui::{self, Color32, Context, Rounding};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_THEME: &str = "portal_light";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    pub surface: String,
    pub panel: String,
    pub sidebar: String,
    pub text: String,
    pub muted_text: String,
    pub accent: String,
    pub accent_soft: String,
    pub border: String,
    pub radius: f32,
    pub shadow: f32,
    pub font_size_base: f32,
}

pub fn themes_dir(base: &Path) -> PathBuf {
    base.join("themes")
}

pub fn theme_file(base: &Path) -> PathBuf {
    themes_dir(base).join("theme.json")
}

pub fn presets_file(base: &Path) -> PathBuf {
    themes_dir(base).join("presets.json")
}

pub fn ensure_theme_files(base: &Path) -> io::Result<()> {
    let dir = themes_dir(base);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let presets_path = presets_file(base);
    if !presets_path.exists() {
        let presets = default_presets();
        let json = serde_json::to_string_pretty(&presets)?;
        fs::write(&presets_path, json)?;
    }

    let active_path = theme_file(base);
    if !active_path.exists() {
        let default_theme = default_presets()
            .into_iter()
            .find(|t| t.name == DEFAULT_THEME)
            .unwrap_or_else(|| default_presets()[0].clone());
        let json = serde_json::to_string_pretty(&default_theme)?;
        fs::write(&active_path, json)?;
    }

    Ok(())
}

pub fn load_presets(base: &Path) -> Vec<ThemeConfig> {
    let presets_path = presets_file(base);
    if let Ok(contents) = fs::read_to_string(&presets_path) {
        if let Ok(list) = serde_json::from_str::<Vec<ThemeConfig>>(&contents) {
            return list;
        }
    }
    default_presets()
}

pub fn load_theme(base: &Path, preferred: Option<&str>) -> ThemeConfig {
    let presets = load_presets(base);
    if let Some(name) = preferred {
        if let Some(found) = presets.iter().find(|p| p.name == name) {
            return found.clone();
        }
    }

    let active_path = theme_file(base);
    if let Ok(contents) = fs::read_to_string(&active_path) {
        if let Ok(theme) = serde_json::from_str::<ThemeConfig>(&contents) {
            return theme;
        }
    }

    presets
        .into_iter()
        .find(|t| t.name == DEFAULT_THEME)
        .unwrap_or_else(|| default_presets()[0].clone())
}

pub fn save_theme(base: &Path, theme: &ThemeConfig) -> io::Result<()> {
    let json = serde_json::to_string_pretty(theme)?;
    fs::write(theme_file(base), json)?;
    Ok(())
}

pub fn apply_theme(theme: &ThemeConfig, ctx: &Context) {
    let mut style = (*ctx.style()).clone();
    let mut visuals = if is_dark(theme) {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = color_from_hex(&theme.panel);
    visuals.widgets.noninteractive.bg_fill = color_from_hex(&theme.surface);
    visuals.widgets.noninteractive.fg_stroke.color = color_from_hex(&theme.text);
    visuals.widgets.inactive.bg_fill = color_from_hex(&theme.surface);
    visuals.widgets.inactive.fg_stroke.color = color_from_hex(&theme.text);
    visuals.widgets.inactive.bg_stroke.color = color_from_hex(&theme.border);

    visuals.widgets.hovered.bg_fill = color_from_hex(&theme.accent_soft);
    visuals.widgets.hovered.bg_stroke.color = color_from_hex(&theme.accent);
    visuals.widgets.hovered.fg_stroke.color = color_from_hex(&theme.text);

    visuals.widgets.active.bg_fill = color_from_hex(&theme.accent_soft);
    visuals.widgets.active.bg_stroke.color = color_from_hex(&theme.accent);
    visuals.widgets.active.fg_stroke.color = color_from_hex(&theme.text);

    visuals.selection.bg_fill = color_from_hex(&theme.accent_soft);
    visuals.selection.stroke.color = color_from_hex(&theme.accent);

    visuals.window_rounding = Rounding::same(theme.radius);
    visuals.widgets.noninteractive.rounding = Rounding::same(theme.radius);
    visuals.widgets.inactive.rounding = Rounding::same(theme.radius);
    visuals.widgets.hovered.rounding = Rounding::same(theme.radius);
    visuals.widgets.active.rounding = Rounding::same(theme.radius);

    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 6.0),
        blur: theme.shadow,
        spread: 0.0,
        color: Color32::from_black_alpha(40),
    };
    visuals.popup_shadow = visuals.window_shadow;

    style.text_styles = [
        (
            egui::TextStyle::Small,
            egui::FontId::proportional(theme.font_size_base - 2.0),
        ),
        (
            egui::TextStyle::Body,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Button,
            egui::FontId::proportional(theme.font_size_base),
        ),
        (
            egui::TextStyle::Heading,
            egui::FontId::proportional(theme.font_size_base + 6.0),
        ),
        (
            egui::TextStyle::Monospace,
            egui::FontId::monospace(theme.font_size_base - 1.0),
        ),
    ]
    .into();
    style.visuals = visuals;
    ctx.set_style(style);
}

fn is_dark(theme: &ThemeConfig) -> bool {
    let bg = color_from_hex(&theme.panel);
    // Simple luminance check; lower means darker.
    let luminance = 0.2126 * (bg.r() as f32) + 0.7152 * (bg.g() as f32) + 0.0722 * (bg.b() as f32);
    luminance < 128.0
}

pub fn color_from_hex(hex: &str) -> Color32 {
    let h = hex.trim_start_matches('#');
    if h.len() == 6 {
        if let Ok(rgb) = u32::from_str_radix(h, 16) {
            let r = ((rgb >> 16) & 0xFF) as u8;
            let g = ((rgb >> 8) & 0xFF) as u8;
            let b = (rgb & 0xFF) as u8;
            return Color32::from_rgb(r, g, b);
        }
    } else if h.len() == 8 {
        if let Ok(rgba) = u32::from_str_radix(h, 16) {
            let r = ((rgba >> 24) & 0xFF) as u8;
            let g = ((rgba >> 16) & 0xFF) as u8;
            let b = ((rgba >> 8) & 0xFF) as u8;
            let a = (rgba & 0xFF) as u8;
            return Color32::from_rgba_premultiplied(r, g, b, a);
        }
    }
    Color32::LIGHT_GRAY
}

pub fn default_presets() -> Vec<ThemeConfig> {
    vec![
        ThemeConfig {
            name: "portal_light".to_string(),
            surface: "#f3f4f6".to_string(),
            panel: "#ffffff".to_string(),
            sidebar: "#ffffff".to_string(),
            text: "#1f2937".to_string(),
            muted_text: "#6b7280".to_string(),
            accent: "#4f46e5".to_string(),
            accent_soft: "#eef2ff".to_string(),
            border: "#e5e7eb".to_string(),
            radius: 8.0,
            shadow: 10.0,
            font_size_base: 15.0,
        },
        ThemeConfig {
            name: "chalkboard_dark".to_string(),
            surface: "#1f2a33".to_string(),
            panel: "#15202b".to_string(),
            sidebar: "#121c26".to_string(),
            text: "#e5f0ff".to_string(),
            muted_text: "#9bb2c7".to_string(),
            accent: "#818cf8".to_string(),
            accent_soft: "#27304d".to_string(),
            border: "#2e3c48".to_string(),
            radius: 8.0,
            shadow: 12.0,
            font_size_base: 15.0,
        },
        ThemeConfig {
            name: "high_contrast".to_string(),
            surface: "#000000".to_string(),
            panel: "#0d0d0d".to_string(),
            sidebar: "#000000".to_string(),
            text: "#ffffff".to_string(),
            muted_text: "#c7c7c7".to_string(),
            accent: "#ffcc00".to_string(),
            accent_soft: "#4d3b00".to_string(),
            border: "#ffffff".to_string(),
            radius: 0.0,
            shadow: 4.0,
            font_size_base: 17.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parser_handles_rgb_rgba_and_garbage() {
        assert_eq!(color_from_hex("#4f46e5"), Color32::from_rgb(0x4f, 0x46, 0xe5));
        assert_eq!(
            color_from_hex("10b98180"),
            Color32::from_rgba_premultiplied(0x10, 0xb9, 0x81, 0x80)
        );
        assert_eq!(color_from_hex("not-a-color"), Color32::LIGHT_GRAY);
        assert_eq!(color_from_hex(""), Color32::LIGHT_GRAY);
    }

    #[test]
    fn missing_theme_folder_falls_back_to_the_default_preset() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let theme = load_theme(tmp.path(), None);
        assert_eq!(theme.name, DEFAULT_THEME);
        let preferred = load_theme(tmp.path(), Some("high_contrast"));
        assert_eq!(preferred.name, "high_contrast");
        let unknown = load_theme(tmp.path(), Some("no_such_theme"));
        assert_eq!(unknown.name, DEFAULT_THEME);
    }

    #[test]
    fn ensure_writes_presets_and_active_theme() -> io::Result<()> {
        let tmp = tempfile::tempdir()?;
        ensure_theme_files(tmp.path())?;
        assert!(presets_file(tmp.path()).exists());
        assert!(theme_file(tmp.path()).exists());
        let presets = load_presets(tmp.path());
        assert_eq!(presets.len(), 3);
        Ok(())
    }
}
