use animeviewer_core::{CatalogEntryDetail, FetchState, Tag};
use eframe::egui::{self, RichText, Ui};

use crate::i18n;
use crate::images::CoverCache;
use crate::ui_helpers::{
    badge, format_thousands, outline_badge, render_cover, render_error_panel, render_loading_spinner, section_heading,
    UiContext, ACCENT, STAR,
};

const COVER_WIDTH: f32 = 300.0;

pub enum DetailAction {
    Back,
    OpenExternal(String),
    CopyLink(String),
}

pub fn render_detail(
    ui: &mut Ui,
    cx: &UiContext,
    state: &FetchState<CatalogEntryDetail>,
    covers: &mut CoverCache,
) -> Option<DetailAction> {
    let mut action = None;
    ui.add_space(8.0);
    if ui.button(cx.t("back")).clicked() {
        action = Some(DetailAction::Back);
    }
    ui.add_space(8.0);

    match state {
        FetchState::Idle => render_error_panel(ui, &cx.t("anime_not_found"), ""),
        FetchState::Loading => render_loading_spinner(ui, &cx.t("loading")),
        FetchState::Error(failure) => {
            render_error_panel(ui, &i18n::failure_title(failure, "detail_error", cx.language), &failure.message)
        }
        FetchState::Success(detail) => {
            if let Some(a) = render_body(ui, cx, detail, covers) {
                action = Some(a);
            }
        }
    }
    action
}

fn render_body(ui: &mut Ui, cx: &UiContext, detail: &CatalogEntryDetail, covers: &mut CoverCache) -> Option<DetailAction> {
    let mut action = None;
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(COVER_WIDTH);
            render_cover(ui, covers, &detail.entry.images.large, egui::vec2(COVER_WIDTH, COVER_WIDTH * 1.42));
            ui.add_space(10.0);
            render_stats(ui, cx, detail);
        });
        ui.add_space(24.0);
        ui.vertical(|ui| {
            action = render_info(ui, cx, detail);
        });
    });
    action
}

fn render_stats(ui: &mut Ui, cx: &UiContext, detail: &CatalogEntryDetail) {
    if detail.entry.score > 0.0 {
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("★ {:.2}", detail.entry.score)).size(22.0).strong().color(STAR));
            if detail.scored_by > 0 {
                ui.label(RichText::new(format!("({} {})", format_thousands(detail.scored_by), cx.t("votes"))).weak());
            }
        });
    }
    egui::Grid::new("detail_stats").num_columns(2).spacing(egui::vec2(12.0, 4.0)).show(ui, |ui| {
        if detail.rank > 0 {
            ui.label(RichText::new(cx.t("ranking")).weak());
            ui.label(RichText::new(format!("#{}", detail.rank)).strong());
            ui.end_row();
        }
        if detail.popularity > 0 {
            ui.label(RichText::new(cx.t("popularity")).weak());
            ui.label(RichText::new(format!("#{}", detail.popularity)).strong());
            ui.end_row();
        }
    });
}

fn render_info(ui: &mut Ui, cx: &UiContext, detail: &CatalogEntryDetail) -> Option<DetailAction> {
    let entry = &detail.entry;
    let mut action = None;

    ui.add(egui::Label::new(RichText::new(&entry.title).size(28.0).strong()).wrap(true));
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        if !entry.media_type.is_empty() {
            badge(ui, &entry.media_type);
        }
        if !detail.status.is_empty() {
            badge(ui, &detail.status);
        }
        if entry.year > 0 {
            badge(ui, &entry.year.to_string());
        }
    });

    ui.add_space(8.0);
    egui::Grid::new("detail_facts").num_columns(2).spacing(egui::vec2(12.0, 4.0)).show(ui, |ui| {
        if let Some(episodes) = detail.episodes {
            ui.label(RichText::new(cx.t("episodes")).weak());
            ui.label(episodes.to_string());
            ui.end_row();
        }
        if let Some(year) = detail.aired.start_year() {
            ui.label(RichText::new(cx.t("aired")).weak());
            ui.label(year.to_string());
            ui.end_row();
        }
    });

    render_tags(ui, &cx.t("genres"), &detail.genres);
    render_tags(ui, &cx.t("studios"), &detail.studios);

    if !entry.synopsis.is_empty() {
        section_heading(ui, &cx.t("synopsis"));
        ui.add(egui::Label::new(entry.synopsis.as_str()).wrap(true));
    }

    if !entry.url.is_empty() {
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            let open = egui::Button::new(RichText::new(cx.t("open_mal")).color(egui::Color32::WHITE)).fill(ACCENT);
            if ui.add(open).on_hover_text(entry.url.as_str()).clicked() {
                action = Some(DetailAction::OpenExternal(entry.url.clone()));
            }
            if ui.button(cx.t("copy_link")).clicked() {
                action = Some(DetailAction::CopyLink(entry.url.clone()));
            }
        });
    }
    action
}

fn render_tags(ui: &mut Ui, heading: &str, tags: &[Tag]) {
    if tags.is_empty() {
        return;
    }
    section_heading(ui, heading);
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            outline_badge(ui, &tag.name);
        }
    });
}

/// Returns true when "Go home" was clicked.
pub fn render_not_found(ui: &mut Ui, cx: &UiContext) -> bool {
    let mut home = false;
    ui.add_space(80.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(cx.t("page_not_found_title")).size(32.0).strong().color(ACCENT));
        ui.add_space(8.0);
        ui.label(RichText::new(cx.t("page_not_found_text")).weak());
        ui.add_space(16.0);
        home = ui.button(cx.t("go_home")).clicked();
    });
    home
}
