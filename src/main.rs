use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use animeviewer_core::{JikanClient, Route, fetch_detail, load_catalog};
use eframe::egui;
use tracing::{error, info, warn};

mod app_state;
mod config;
mod detail_panel;
mod i18n;
mod icon;
mod images;
mod listing_panel;
mod logger;
mod models;
mod ui_helpers;

use app_state::{AppState, Effect, Msg};
use detail_panel::{DetailAction, render_detail, render_not_found};
use images::CoverCache;
use listing_panel::{ListingAction, render_listing};
use models::{Config, Language, Theme};
use ui_helpers::{ToastKind, Toasts, UiContext, apply_font_scale, render_logo};

/// Decoded covers turned into textures per frame.
const COVER_UPLOADS_PER_FRAME: usize = 4;

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    logger::init_logging();
    let config = config::load_or_default();
    info!(base_url = %config.api_base_url, log = %logger::log_path().display(), "starting AnimeViewer");

    let client = match JikanClient::new(&config.api_base_url) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!(error = %e, "could not build the HTTP client");
            return Ok(());
        }
    };
    // Optional start path, e.g. `animeviewer /anime/20`
    let start = std::env::args().nth(1).map(|p| Route::parse(&p)).unwrap_or_default();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1280.0, 860.0])
        .with_min_inner_size([640.0, 480.0])
        .with_icon(icon::generate_icon(256));
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "AnimeViewer",
        options,
        Box::new(move |cc| Box::new(AnimeViewer::new(cc, config, client, start))),
    )
}

struct AnimeViewer {
    config: Config,
    ui_ctx: UiContext,
    state: AppState,
    client: Arc<JikanClient>,
    covers: CoverCache,
    tx: Sender<Msg>,
    rx: Receiver<Msg>,
    toasts: Toasts,
    settings_draft: Option<Config>,
    style_applied: bool,
}

impl AnimeViewer {
    fn new(cc: &eframe::CreationContext<'_>, config: Config, client: Arc<JikanClient>, start: Route) -> Self {
        let (tx, rx) = channel();
        let ui_ctx = UiContext { language: config.language, theme: config.theme };
        let mut app = Self {
            covers: CoverCache::new(config.cover_parallel as usize, tx.clone()),
            config,
            ui_ctx,
            state: AppState::default(),
            client,
            tx,
            rx,
            toasts: Toasts::default(),
            settings_draft: None,
            style_applied: false,
        };
        app.apply_style(&cc.egui_ctx);
        if let Some(effect) = app.state.boot(start) {
            app.spawn_effect(effect, &cc.egui_ctx);
        }
        app
    }

    fn apply_style(&mut self, ctx: &egui::Context) {
        // Font scale resets the whole style, so visuals go on top of it.
        apply_font_scale(ctx, self.config.font_scale);
        self.ui_ctx.apply_visuals(ctx);
        self.style_applied = true;
    }

    fn spawn_effect(&self, effect: Effect, ctx: &egui::Context) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        let opts = self.config.loader_options();
        tokio::spawn(async move {
            let msg = match effect {
                Effect::LoadCatalog(ticket) => Msg::CatalogLoaded {
                    ticket,
                    result: load_catalog(client.as_ref(), &opts).await,
                },
                Effect::LoadDetail(ticket) => Msg::DetailLoaded {
                    ticket,
                    result: fetch_detail(client.as_ref(), ticket.key).await,
                },
            };
            let _ = tx.send(msg);
            ctx.request_repaint();
        });
    }

    fn navigate(&mut self, route: Route, ctx: &egui::Context) {
        if let Some(effect) = self.state.navigate(route) {
            self.spawn_effect(effect, ctx);
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!("AnimeViewer {}", self.state.route())));
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                Msg::CoverDecoded(cover) => self.covers.on_decoded(cover),
                Msg::CoverFailed { url } => self.covers.on_failed(&url),
                other => {
                    let fetch_key = match self.state.route() {
                        Route::Listing => "catalog_error",
                        _ => "detail_error",
                    };
                    if let Some(failure) = self.state.apply(other) {
                        let title = i18n::failure_title(&failure, fetch_key, self.ui_ctx.language);
                        self.toasts.push(ToastKind::Error, format!("{}: {}", title, failure.message));
                    }
                }
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) -> Option<Route> {
        let mut nav = None;
        let mut query_changed = false;
        let cx = self.ui_ctx;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if render_logo(ui).clicked() {
                    nav = Some(Route::Listing);
                }
                ui.add_space(16.0);
                if self.state.route() == Route::Listing {
                    let resp = ui.add(
                        egui::TextEdit::singleline(&mut self.state.search_input)
                            .hint_text(cx.t("search_placeholder"))
                            .desired_width(320.0),
                    );
                    let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if resp.changed() || submitted {
                        query_changed = true;
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(cx.t("settings")).clicked() && self.settings_draft.is_none() {
                        self.settings_draft = Some(self.config.clone());
                    }
                    if ui.button(cx.t("home")).clicked() {
                        nav = Some(Route::Listing);
                    }
                });
            });
            ui.add_space(6.0);
        });
        if query_changed {
            let query = self.state.search_input.clone();
            self.state.set_query(&query);
        }
        nav
    }

    fn handle_detail_action(&mut self, action: DetailAction) -> Option<Route> {
        match action {
            DetailAction::Back => return Some(Route::Listing),
            DetailAction::OpenExternal(url) => {
                if let Err(e) = webbrowser::open(&url) {
                    warn!(url = %url, error = %e, "could not open browser");
                    self.toasts.push(ToastKind::Warning, self.ui_ctx.t("browser_failed"));
                }
            }
            DetailAction::CopyLink(url) => {
                match arboard::Clipboard::new().and_then(|mut c| c.set_text(url)) {
                    Ok(()) => self.toasts.push(ToastKind::Success, self.ui_ctx.t("link_copied")),
                    Err(e) => {
                        warn!(error = %e, "clipboard unavailable");
                        self.toasts.push(ToastKind::Warning, self.ui_ctx.t("clipboard_unavailable"));
                    }
                }
            }
        }
        None
    }

    fn render_settings(&mut self, ctx: &egui::Context) {
        let Some(mut draft) = self.settings_draft.take() else { return };
        let cx = self.ui_ctx;
        let mut open = true;
        let mut save = false;
        let mut cancel = false;

        egui::Window::new(cx.t("settings"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing(egui::vec2(12.0, 8.0))
                    .show(ui, |ui| {
                        ui.label(cx.t("language"));
                        egui::ComboBox::from_id_source("settings_language")
                            .selected_text(draft.language.display_name())
                            .show_ui(ui, |ui| {
                                for lang in [Language::English, Language::Portuguese] {
                                    ui.selectable_value(&mut draft.language, lang, lang.display_name());
                                }
                            });
                        ui.end_row();

                        ui.label(cx.t("theme"));
                        ui.horizontal(|ui| {
                            ui.radio_value(&mut draft.theme, Theme::Dark, cx.t("theme_dark"));
                            ui.radio_value(&mut draft.theme, Theme::Light, cx.t("theme_light"));
                        });
                        ui.end_row();

                        ui.label(cx.t("font_scale"));
                        ui.add(egui::Slider::new(&mut draft.font_scale, 0.6..=2.0).step_by(0.05));
                        ui.end_row();
                    });
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(cx.t("save")).clicked() {
                        save = true;
                    }
                    if ui.button(cx.t("cancel")).clicked() {
                        cancel = true;
                    }
                });
            });

        if save {
            match config::save_config(&draft) {
                Ok(()) => {
                    info!(path = %config::config_file_path().display(), "settings saved");
                    self.config = draft;
                    self.ui_ctx = UiContext { language: self.config.language, theme: self.config.theme };
                    self.style_applied = false;
                    self.toasts.push(ToastKind::Info, self.ui_ctx.t("settings_saved"));
                }
                Err(e) => {
                    error!(error = %e, "could not save settings");
                    self.toasts.push(ToastKind::Error, format!("{}: {}", cx.t("settings_save_failed"), e));
                    self.settings_draft = Some(draft);
                }
            }
        } else if open && !cancel {
            self.settings_draft = Some(draft);
        }
    }
}

impl eframe::App for AnimeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            self.apply_style(ctx);
        }
        self.drain_messages();
        if self.covers.upload_pending(ctx, COVER_UPLOADS_PER_FRAME) > 0 {
            ctx.request_repaint();
        }

        let mut nav = self.render_header(ctx);

        let cx = self.ui_ctx;
        let route = self.state.route();
        let mut listing_action = None;
        let mut detail_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source(route.path())
                .auto_shrink([false; 2])
                .show(ui, |ui| match route {
                    Route::Listing => {
                        listing_action = render_listing(ui, &cx, &self.state.listing, &mut self.covers);
                    }
                    Route::Detail(_) => {
                        detail_action = render_detail(ui, &cx, self.state.detail.state(), &mut self.covers);
                    }
                    Route::NotFound => {
                        if render_not_found(ui, &cx) {
                            nav = Some(Route::Listing);
                        }
                    }
                });
        });

        match listing_action {
            Some(ListingAction::Open(id)) => nav = Some(Route::detail(id)),
            Some(ListingAction::ShowAll) => self.state.clear_query(),
            None => {}
        }
        if let Some(action) = detail_action {
            if let Some(route) = self.handle_detail_action(action) {
                nav = Some(route);
            }
        }
        if let Some(route) = nav {
            self.navigate(route, ctx);
        }

        self.toasts.show(ctx);
        self.render_settings(ctx);
    }
}
