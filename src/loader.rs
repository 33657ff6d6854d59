//! Background texture loading.
//!
//! Every image is fetched off the render thread and handed back through
//! a channel that the frame loop drains. A failed fetch still counts
//! towards completion so the loading screen can never get stuck; the
//! affected surface just keeps its fallback color.

use std::sync::mpsc::Sender;

use strum::IntoEnumIterator;
use three_d::CpuTexture;

use crate::registry::{BodyId, SKYBOX_FACE_PATHS};

/// Where a fetched texture belongs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    Body(BodyId),
    /// Index into [`SKYBOX_FACE_PATHS`].
    SkyboxFace(usize),
}

/// One finished fetch. `texture` is `None` when the fetch or decode
/// failed; the failure has already been logged by then.
pub struct TextureMessage {
    pub slot: TextureSlot,
    pub texture: Option<CpuTexture>,
}

/// Counts fetches still in flight. The loading screen stays up until
/// this reaches zero, successes and failures alike.
#[derive(Clone, Copy, Debug)]
pub struct TextureLatch {
    outstanding: usize,
}

impl TextureLatch {
    fn new(outstanding: usize) -> Self {
        Self { outstanding }
    }

    pub fn complete_one(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.outstanding == 0
    }

    #[inline]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }
}

fn manifest() -> Vec<(TextureSlot, &'static str)> {
    let mut entries: Vec<(TextureSlot, &'static str)> = BodyId::iter()
        .map(|id| (TextureSlot::Body(id), id.info().texture_path))
        .collect();
    entries.extend(
        SKYBOX_FACE_PATHS
            .iter()
            .enumerate()
            .map(|(face, path)| (TextureSlot::SkyboxFace(face), *path)),
    );
    entries
}

/// Kicks off every texture fetch and returns the latch tracking them.
/// Results arrive on `sender` in completion order.
pub fn start_loading(sender: Sender<TextureMessage>) -> TextureLatch {
    let entries = manifest();
    let latch = TextureLatch::new(entries.len());

    #[cfg(target_family = "wasm")]
    for (slot, path) in entries {
        let sender = sender.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let texture = fetch_async(path).await;
            // The receiver only goes away on shutdown.
            let _ = sender.send(TextureMessage { slot, texture });
        });
    }

    #[cfg(not(target_family = "wasm"))]
    std::thread::spawn(move || {
        for (slot, path) in entries {
            let texture = fetch_blocking(path);
            if sender.send(TextureMessage { slot, texture }).is_err() {
                return;
            }
        }
    });

    latch
}

#[cfg(target_family = "wasm")]
async fn fetch_async(path: &str) -> Option<CpuTexture> {
    match three_d_asset::io::load_async(&[path]).await {
        Ok(mut assets) => decode(&mut assets, path),
        Err(e) => {
            log::warn!("failed to fetch texture {path}: {e}");
            None
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn fetch_blocking(path: &str) -> Option<CpuTexture> {
    match three_d_asset::io::load(&[path]) {
        Ok(mut assets) => decode(&mut assets, path),
        Err(e) => {
            log::warn!("failed to fetch texture {path}: {e}");
            None
        }
    }
}

fn decode(assets: &mut three_d_asset::io::RawAssets, path: &str) -> Option<CpuTexture> {
    match assets.deserialize(path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            log::warn!("failed to decode texture {path}: {e}");
            None
        }
    }
}
