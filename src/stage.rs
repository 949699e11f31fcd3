use crate::audio::AudioBank;
use crate::constants::*;
use crate::display;
use crate::dom;
use crate::game::{needle_transform, needle_transition, CountdownStyle, Cue, Marker, Stage};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page as seen by the round loop: board, needle, timer, controls and the
/// audio bank.
pub struct WebStage {
    document: web::Document,
    board: web::HtmlElement,
    needle: web::HtmlElement,
    timer: web::HtmlElement,
    start_button: web::HtmlButtonElement,
    end_button: web::HtmlButtonElement,
    audio: AudioBank,
}

impl WebStage {
    /// Bind to the page's fixed elements. Any missing element is an error.
    pub fn locate(document: &web::Document, audio: AudioBank) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            board: dom::html_by_selector(document, BOARD_SELECTOR)?,
            needle: dom::html_by_selector(document, NEEDLE_SELECTOR)?,
            timer: dom::element_by_id(document, TIMER_ID)?,
            start_button: dom::element_by_id(document, START_BUTTON_ID)?,
            end_button: dom::element_by_id(document, END_BUTTON_ID)?,
            audio,
        })
    }

    pub fn start_button(&self) -> &web::HtmlButtonElement {
        &self.start_button
    }

    pub fn end_button(&self) -> &web::HtmlButtonElement {
        &self.end_button
    }

    fn create_dot(&self, marker: &Marker) -> Result<web::HtmlElement, wasm_bindgen::JsValue> {
        let dot = self
            .document
            .create_element("div")?
            .dyn_into::<web::HtmlElement>()?;
        dot.set_class_name(DOT_CLASS);
        let pos = marker.top_left();
        let style = dot.style();
        style.set_property("background-color", marker.color.name())?;
        style.set_property("left", &format!("{}px", pos.x))?;
        style.set_property("top", &format!("{}px", pos.y))?;
        _ = dot.set_attribute(
            "title",
            &format!("{} {}", marker.body_part, marker.color),
        );
        self.board.append_child(&dot)?;
        Ok(dot)
    }
}

impl Stage for WebStage {
    fn place_marker(&self, marker: &Marker) {
        if let Err(e) = self.create_dot(marker) {
            log::error!("marker {} render error: {:?}", marker.index, e);
        }
    }

    fn has_clip(&self, cue: Cue) -> bool {
        self.audio.contains(cue)
    }

    fn play_and_forget(&self, cue: Cue) {
        self.audio.play_and_forget(cue);
    }

    async fn play_to_end(&self, cue: Cue) {
        self.audio.play_to_end(cue).await;
    }

    async fn unlock_audio(&self) {
        self.audio.unlock().await;
    }

    async fn sleep_ms(&self, ms: u32) {
        dom::sleep_ms(ms).await;
    }

    fn show_count(&self, remaining: u32, style: CountdownStyle) {
        display::show_count(&self.timer, remaining, style);
    }

    fn clear_count(&self) {
        display::clear(&self.timer);
    }

    fn show_ready(&self) {
        display::show_ready(&self.timer);
    }

    fn rotate_needle(&self, angle_deg: f64, duration_ms: u32) {
        let style = self.needle.style();
        _ = style.set_property("transition", &needle_transition(duration_ms));
        _ = style.set_property("transform", &needle_transform(angle_deg));
    }

    fn settle_needle(&self) {
        _ = self.needle.style().set_property("transition", "");
    }

    fn reset_needle(&self) {
        let style = self.needle.style();
        _ = style.set_property("transition", "none");
        _ = style.set_property("transform", &needle_transform(0.0));
    }

    fn set_start_enabled(&self, enabled: bool) {
        self.start_button.set_disabled(!enabled);
    }

    fn set_fullscreen(&self, on: bool) {
        if let Some(body) = self.document.body() {
            let cl = body.class_list();
            _ = if on {
                cl.add_1(FULLSCREEN_CLASS)
            } else {
                cl.remove_1(FULLSCREEN_CLASS)
            };
        }
    }
}
