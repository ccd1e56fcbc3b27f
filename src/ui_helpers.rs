use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText, Ui};

use crate::i18n;
use crate::images::CoverCache;
use crate::models::{Language, Theme};

pub const ACCENT: Color32 = Color32::from_rgb(168, 85, 247);
pub const ACCENT_PINK: Color32 = Color32::from_rgb(236, 72, 153);
pub const STAR: Color32 = Color32::from_rgb(234, 179, 8);
pub const ERROR_RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(34, 197, 94);

/// Process-wide presentation settings handed to every render function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiContext {
    pub language: Language,
    pub theme: Theme,
}

impl UiContext {
    pub fn t(&self, key: &str) -> String {
        i18n::t(key, self.language)
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        match self.theme {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }
}

pub fn apply_font_scale(ctx: &egui::Context, scale: f32) {
    let mut style = egui::Style::default();
    let scale = scale.clamp(0.6, 2.0);
    style.text_styles.iter_mut().for_each(|(_, ts)| {
        ts.size *= scale;
    });
    ctx.set_style(style);
}

/// Filled pill with small text (type, status, year).
pub fn badge(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(ui.visuals().widgets.inactive.bg_fill)
        .rounding(6.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

/// Outlined pill (genres, studios).
pub fn outline_badge(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .rounding(6.0)
        .inner_margin(egui::Margin::symmetric(8.0, 3.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Score pill painted over the top-right corner of a cover.
pub fn paint_score_overlay(ui: &Ui, cover: egui::Rect, score: f64) {
    let text = format!("★ {:.1}", score);
    let font = egui::FontId::proportional(13.0);
    let text_size = ui.painter().layout_no_wrap(text.clone(), font.clone(), Color32::WHITE).size();
    let size = text_size + egui::vec2(12.0, 6.0);
    let rect = egui::Rect::from_min_size(
        egui::pos2(cover.right() - size.x - 6.0, cover.top() + 6.0),
        size,
    );
    ui.painter().rect_filled(rect, 6.0, Color32::from_black_alpha(180));
    ui.painter().text(rect.center(), egui::Align2::CENTER_CENTER, text, font, Color32::WHITE);
}

/// Draws the cover for `url` at `size`, queueing the download on first sight.
pub fn render_cover(ui: &mut Ui, covers: &mut CoverCache, url: &str, size: egui::Vec2) -> egui::Rect {
    if let Some(tex) = covers.texture(url) {
        return ui.add(egui::Image::new(tex).fit_to_exact_size(size)).rect;
    }
    covers.request(url, ui.ctx());
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(rect, 6.0, ui.visuals().faint_bg_color);
    if covers.is_pending(url) {
        ui.put(egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0)), egui::Spinner::new());
    } else if url.is_empty() || covers.has_failed(url) {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "🖼",
            egui::FontId::proportional(28.0),
            ui.visuals().weak_text_color(),
        );
    }
    rect
}

pub fn render_loading_spinner(ui: &mut Ui, text: &str) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(RichText::new(text).size(16.0).weak());
        });
    });
}

pub fn render_error_panel(ui: &mut Ui, title: &str, detail: &str) {
    egui::Frame::none()
        .fill(ERROR_RED.linear_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, ERROR_RED.linear_multiply(0.3)))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(ERROR_RED).strong());
            if !detail.is_empty() {
                ui.label(RichText::new(detail).color(ERROR_RED.linear_multiply(0.8)).small());
            }
        });
}

pub fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).size(18.0).strong());
    ui.add_space(6.0);
}

/// Logo badge plus app name; the whole thing is clickable.
pub fn render_logo(ui: &mut Ui) -> egui::Response {
    let inner = ui.horizontal(|ui| {
        egui::Frame::none()
            .fill(ACCENT)
            .rounding(8.0)
            .inner_margin(egui::Margin::symmetric(9.0, 3.0))
            .show(ui, |ui| {
                ui.label(RichText::new("A").color(Color32::WHITE).strong().size(18.0));
            });
        ui.label(RichText::new("AnimeViewer").color(ACCENT_PINK).strong().size(22.0));
    });
    inner.response.interact(egui::Sense::click()).on_hover_cursor(egui::CursorIcon::PointingHand)
}

const TOAST_VISIBLE: Duration = Duration::from_secs(5);
const TOAST_FADE: Duration = Duration::from_secs(1);
const TOAST_WIDTH: f32 = 340.0;
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn accent(self) -> Color32 {
        match self {
            ToastKind::Info => ACCENT,
            ToastKind::Success => SUCCESS_GREEN,
            ToastKind::Warning => STAR,
            ToastKind::Error => ERROR_RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✔",
            ToastKind::Warning => "⚠",
            ToastKind::Error => "✖",
        }
    }
}

#[derive(Debug)]
struct Toast {
    kind: ToastKind,
    message: String,
    shown_at: Instant,
}

/// Short notices stacked in the bottom-right corner. The oldest one is
/// dropped once more than four are queued.
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message.into(), Instant::now());
    }

    fn push_at(&mut self, kind: ToastKind, message: String, shown_at: Instant) {
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast { kind, message, shown_at });
    }

    fn prune(&mut self, now: Instant) {
        self.items
            .retain(|t| now.saturating_duration_since(t.shown_at) < TOAST_VISIBLE + TOAST_FADE);
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.prune(now);
        if self.items.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                for toast in &self.items {
                    let opacity = fade_opacity(now.saturating_duration_since(toast.shown_at));
                    let accent = toast.kind.accent().linear_multiply(opacity);
                    let text = ui.visuals().text_color().linear_multiply(opacity);
                    let fill = ui.visuals().extreme_bg_color.linear_multiply(opacity);
                    egui::Frame::none()
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.5, accent))
                        .rounding(8.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.set_width(TOAST_WIDTH);
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new(toast.kind.icon()).color(accent).strong());
                                ui.label(RichText::new(toast.message.as_str()).color(text));
                            });
                        });
                    ui.add_space(6.0);
                }
            });
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

/// Full opacity while visible, then a linear fade to zero.
fn fade_opacity(elapsed: Duration) -> f32 {
    match elapsed.checked_sub(TOAST_VISIBLE) {
        None => 1.0,
        Some(over) => (1.0 - over.as_secs_f32() / TOAST_FADE.as_secs_f32()).max(0.0),
    }
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}
