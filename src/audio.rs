use crate::game::Cue;
use fnv::FnvHashMap;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Preloaded announcement clips keyed by cue, plus the context used to unlock
/// playback after the first user gesture.
pub struct AudioBank {
    ctx: Option<web::AudioContext>,
    clips: FnvHashMap<Cue, web::HtmlAudioElement>,
    unlocked: Cell<bool>,
}

fn load_clip(cue: Cue) -> Result<web::HtmlAudioElement, ()> {
    match web::HtmlAudioElement::new_with_src(cue.clip_path()) {
        Ok(a) => {
            a.set_preload("auto");
            a.load();
            Ok(a)
        }
        Err(e) => {
            log::error!("{:?} audio element error: {:?}", cue, e);
            Err(())
        }
    }
}

fn clear_handlers(clip: &web::HtmlAudioElement) {
    clip.set_onended(None);
    clip.set_onerror(None);
}

impl AudioBank {
    pub fn load() -> Self {
        let ctx = match web::AudioContext::new() {
            Ok(c) => Some(c),
            Err(e) => {
                log::error!("AudioContext error: {:?}", e);
                None
            }
        };
        let clips = Cue::ALL
            .iter()
            .filter_map(|&cue| load_clip(cue).ok().map(|a| (cue, a)))
            .collect::<FnvHashMap<_, _>>();
        log::debug!("[audio] {} clip(s) loading", clips.len());
        Self {
            ctx,
            clips,
            unlocked: Cell::new(false),
        }
    }

    #[inline]
    pub fn contains(&self, cue: Cue) -> bool {
        self.clips.contains_key(&cue)
    }

    /// Resume the context and prime every clip inside the user gesture.
    /// A resume failure leaves the bank locked so the next start retries.
    pub async fn unlock(&self) {
        if self.unlocked.get() {
            return;
        }
        let Some(ctx) = &self.ctx else {
            log::error!("[audio] no AudioContext, playback may be blocked");
            return;
        };
        let resumed = match ctx.resume() {
            Ok(p) => JsFuture::from(p).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = resumed {
            log::error!("[audio] resume error: {:?}", e);
            return;
        }

        // Start all clips first so priming runs in parallel, then settle each.
        let started: Vec<_> = self
            .clips
            .iter()
            .map(|(cue, clip)| (*cue, clip, clip.play()))
            .collect();
        for (cue, clip, play) in started {
            let primed = match play {
                Ok(p) => JsFuture::from(p).await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = primed {
                log::error!("[audio] priming {:?} failed: {:?}", cue, e);
            }
            _ = clip.pause();
            clip.set_current_time(0.0);
        }
        self.unlocked.set(true);
        log::debug!("[audio] unlocked");
    }

    /// Rewind and play `cue` without waiting for it.
    pub fn play_and_forget(&self, cue: Cue) {
        let Some(clip) = self.clips.get(&cue) else {
            log::error!("[audio] no clip for {:?}", cue);
            return;
        };
        clip.set_current_time(0.0);
        match clip.play() {
            Ok(p) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(p).await {
                    log::error!("[audio] {:?} playback error: {:?}", cue, e);
                }
            }),
            Err(e) => log::error!("[audio] {:?} playback error: {:?}", cue, e),
        }
    }

    /// Rewind `cue`, play it and resolve once it ends. Errors are logged and
    /// count as the clip having ended.
    pub async fn play_to_end(&self, cue: Cue) {
        let Some(clip) = self.clips.get(&cue) else {
            log::error!("[audio] no clip for {:?}", cue);
            return;
        };
        clip.set_current_time(0.0);
        let finished = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject| {
            clip.set_onended(Some(&resolve));
            let on_error = Closure::once_into_js(move || {
                log::error!("[audio] {:?} playback error event", cue);
                _ = resolve.call0(&JsValue::NULL);
            });
            clip.set_onerror(Some(on_error.unchecked_ref()));
        });

        let started = match clip.play() {
            Ok(p) => JsFuture::from(p).await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = started {
            log::error!("[audio] {:?} playback error: {:?}", cue, e);
            clear_handlers(clip);
            return;
        }
        _ = JsFuture::from(finished).await;
        clear_handlers(clip);
    }
}
