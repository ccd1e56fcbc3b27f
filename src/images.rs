use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::sync::mpsc::Sender;

use eframe::egui;
use image::GenericImageView;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::app_state::Msg;

/// Covers taller than this are scaled down before upload.
const MAX_COVER_HEIGHT: u32 = 640;

#[derive(Debug, Clone)]
pub struct DecodedCover {
    pub url: String,
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// In-memory cover textures. Downloads and decoding run on the tokio runtime;
/// uploads happen on the UI thread a few per frame.
pub struct CoverCache {
    textures: HashMap<String, egui::TextureHandle>,
    pending: HashSet<String>,
    failed: HashSet<String>,
    uploads: VecDeque<DecodedCover>,
    semaphore: Arc<Semaphore>,
    http: reqwest::Client,
    tx: Sender<Msg>,
}

impl CoverCache {
    pub fn new(parallel: usize, tx: Sender<Msg>) -> Self {
        Self {
            textures: HashMap::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
            uploads: VecDeque::new(),
            semaphore: Arc::new(Semaphore::new(parallel.max(1))),
            http: reqwest::Client::new(),
            tx,
        }
    }

    pub fn texture(&self, url: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(url)
    }

    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    pub fn has_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// Starts a background download unless the cover is known, in flight or failed.
    pub fn request(&mut self, url: &str, ctx: &egui::Context) {
        if url.is_empty()
            || self.textures.contains_key(url)
            || self.pending.contains(url)
            || self.failed.contains(url)
        {
            return;
        }
        self.pending.insert(url.to_string());
        let url = url.to_string();
        let http = self.http.clone();
        let semaphore = self.semaphore.clone();
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        tokio::spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else { return };
            let msg = match fetch_cover(&http, &url).await {
                Ok(bytes) => {
                    let decode_url = url.clone();
                    match tokio::task::spawn_blocking(move || decode_cover(&decode_url, &bytes)).await {
                        Ok(Ok(cover)) => Msg::CoverDecoded(cover),
                        Ok(Err(e)) => {
                            warn!(url = %url, error = %e, "cover decode failed");
                            Msg::CoverFailed { url }
                        }
                        Err(e) => {
                            warn!(url = %url, error = %e, "cover decode task failed");
                            Msg::CoverFailed { url }
                        }
                    }
                }
                Err(e) => {
                    debug!(url = %url, error = %e, "cover download failed");
                    Msg::CoverFailed { url }
                }
            };
            let _ = tx.send(msg);
            ctx.request_repaint();
        });
    }

    pub fn on_decoded(&mut self, cover: DecodedCover) {
        self.uploads.push_back(cover);
    }

    pub fn on_failed(&mut self, url: &str) {
        self.pending.remove(url);
        self.failed.insert(url.to_string());
    }

    /// Uploads up to `budget` decoded covers as textures. Returns how many are left.
    pub fn upload_pending(&mut self, ctx: &egui::Context, budget: usize) -> usize {
        for _ in 0..budget {
            let Some(cover) = self.uploads.pop_front() else { break };
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [cover.width as usize, cover.height as usize],
                &cover.rgba,
            );
            let tex = ctx.load_texture(cover.url.clone(), image, egui::TextureOptions::LINEAR);
            self.pending.remove(&cover.url);
            self.textures.insert(cover.url, tex);
        }
        self.uploads.len()
    }
}

async fn fetch_cover(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let res = http.get(url).send().await?.error_for_status()?;
    Ok(res.bytes().await?.to_vec())
}

pub fn decode_cover(url: &str, bytes: &[u8]) -> Result<DecodedCover, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;
    if img.height() > MAX_COVER_HEIGHT {
        let new_w = ((img.width() as f32) * (MAX_COVER_HEIGHT as f32) / (img.height() as f32))
            .round()
            .max(1.0) as u32;
        img = img.resize_exact(new_w, MAX_COVER_HEIGHT, image::imageops::FilterType::Triangle);
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedCover { url: url.to_string(), rgba: rgba.into_raw(), width, height })
}
