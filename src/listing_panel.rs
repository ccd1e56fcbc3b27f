use animeviewer_core::{CatalogEntry, FetchState, ListingScreen, SearchState};
use eframe::egui::{self, RichText, Ui};

use crate::i18n;
use crate::images::CoverCache;
use crate::models::Language;
use crate::ui_helpers::{
    badge, paint_score_overlay, preview, render_cover, render_error_panel, render_loading_spinner, UiContext, ACCENT,
};

const CARD_WIDTH: f32 = 200.0;
const CARD_SPACING: f32 = 16.0;
const SYNOPSIS_PREVIEW_CHARS: usize = 120;

pub enum ListingAction {
    Open(u32),
    ShowAll,
}

pub fn render_listing(
    ui: &mut Ui,
    cx: &UiContext,
    screen: &ListingScreen,
    covers: &mut CoverCache,
) -> Option<ListingAction> {
    render_hero(ui, cx);

    match screen.state() {
        FetchState::Idle | FetchState::Loading => {
            render_loading_spinner(ui, &cx.t("loading_catalog"));
            None
        }
        FetchState::Error(failure) => {
            render_error_panel(ui, &i18n::failure_title(failure, "catalog_error", cx.language), &failure.message);
            None
        }
        FetchState::Success(()) => {
            let search = screen.search();
            if let Some(summary) = summary_line(search, cx.language) {
                ui.label(RichText::new(summary).weak());
                ui.add_space(8.0);
            }
            if search.is_empty_result() {
                return render_no_results(ui, cx);
            }
            render_grid(ui, cx, search.visible(), covers)
        }
    }
}

/// "Showing X of Y", only while at least one card is on screen.
fn summary_line(search: &SearchState, lang: Language) -> Option<String> {
    (search.visible_count() > 0)
        .then(|| i18n::showing_summary(search.visible_count(), search.total(), search.query(), lang))
}

fn render_hero(ui: &mut Ui, cx: &UiContext) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(cx.t("hero_title")).size(28.0).strong().color(ACCENT));
        ui.add_space(4.0);
        ui.set_max_width(720.0);
        ui.add(egui::Label::new(RichText::new(cx.t("hero_text")).weak()).wrap(true));
    });
    ui.add_space(20.0);
}

fn render_no_results(ui: &mut Ui, cx: &UiContext) -> Option<ListingAction> {
    let mut action = None;
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("🔍").size(40.0));
        ui.label(RichText::new(cx.t("no_results_title")).size(20.0).strong());
        ui.label(RichText::new(cx.t("no_results_hint")).weak());
        ui.add_space(12.0);
        if ui.button(cx.t("show_all")).clicked() {
            action = Some(ListingAction::ShowAll);
        }
    });
    action
}

fn columns_for(width: f32) -> usize {
    (((width + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING)).floor() as usize).max(1)
}

fn render_grid<'a>(
    ui: &mut Ui,
    cx: &UiContext,
    entries: impl Iterator<Item = &'a CatalogEntry>,
    covers: &mut CoverCache,
) -> Option<ListingAction> {
    let cols = columns_for(ui.available_width());
    let mut action = None;
    egui::Grid::new("catalog_grid")
        .spacing(egui::vec2(CARD_SPACING, CARD_SPACING))
        .show(ui, |ui| {
            for (i, entry) in entries.enumerate() {
                if render_card(ui, cx, entry, covers) {
                    action = Some(ListingAction::Open(entry.id));
                }
                if (i + 1) % cols == 0 {
                    ui.end_row();
                }
            }
        });
    action
}

/// One catalog card. Returns true when clicked.
fn render_card(ui: &mut Ui, cx: &UiContext, entry: &CatalogEntry, covers: &mut CoverCache) -> bool {
    let frame = egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .rounding(10.0)
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            let inner = CARD_WIDTH - 16.0;
            ui.set_width(inner);
            ui.vertical(|ui| {
                let cover = render_cover(ui, covers, &entry.images.medium, egui::vec2(inner, inner * 4.0 / 3.0));
                if entry.score > 0.0 {
                    paint_score_overlay(ui, cover, entry.score);
                }
                ui.add_space(6.0);
                ui.add(egui::Label::new(RichText::new(&entry.title).strong()).wrap(true));
                ui.horizontal_wrapped(|ui| {
                    if !entry.media_type.is_empty() {
                        badge(ui, &entry.media_type);
                    }
                    if entry.year > 0 {
                        badge(ui, &entry.year.to_string());
                    }
                });
                let synopsis = if entry.synopsis.is_empty() {
                    cx.t("no_synopsis")
                } else {
                    preview(&entry.synopsis, SYNOPSIS_PREVIEW_CHARS)
                };
                ui.add(egui::Label::new(RichText::new(synopsis).small().weak()).wrap(true));
            });
        });
    frame
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(entry.title.as_str())
        .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_always_has_a_column() {
        assert_eq!(columns_for(0.0), 1);
        assert_eq!(columns_for(199.0), 1);
        assert_eq!(columns_for(200.0), 1);
        assert_eq!(columns_for(416.0), 2);
        assert_eq!(columns_for(1100.0), 5);
    }

    #[test]
    fn summary_only_when_cards_are_shown() {
        let entries = vec![
            CatalogEntry { id: 1, title: "Naruto".into(), ..Default::default() },
            CatalogEntry { id: 2, title: "Bleach".into(), ..Default::default() },
        ];
        let mut search = SearchState::new(entries);
        assert_eq!(summary_line(&search, Language::English).as_deref(), Some("Showing 2 of 2 anime"));

        search.set_query("zzz");
        assert_eq!(summary_line(&search, Language::English), None);

        assert_eq!(summary_line(&SearchState::new(Vec::new()), Language::English), None);
    }
}
