#![cfg(target_arch = "wasm32")]
use crate::game::{GameParams, Spinner};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod audio;
mod constants;
mod display;
mod dom;
mod game;
mod stage;

use stage::WebStage;

fn wire_controls(spinner: &Rc<Spinner<WebStage>>) {
    let start_spinner = spinner.clone();
    dom::add_click_listener(spinner.stage().start_button(), move || {
        let s = start_spinner.clone();
        spawn_local(async move {
            s.start().await;
        });
    });

    let stop_spinner = spinner.clone();
    dom::add_click_listener(spinner.stage().end_button(), move || {
        stop_spinner.stop();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    let params = GameParams::from_query(&dom::location_search());
    log::set_max_level(params.log_level());
    log::info!("twister-spinner starting");
    log::debug!("params: {:?}", params);

    if let Err(e) = init(params) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(params: GameParams) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = WebStage::locate(&document, audio::AudioBank::load())?;
    let spinner = Rc::new(Spinner::new(stage, params));
    wire_controls(&spinner);
    log::info!("{} markers placed, press start", spinner.ring().markers().len());
    Ok(())
}
