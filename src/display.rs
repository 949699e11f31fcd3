use crate::constants::{EMPHASIZED_CLASS, PLAIN_CLASS};
use crate::game::{CountdownStyle, READY_TEXT};
use web_sys as web;

#[inline]
fn style_class(style: CountdownStyle) -> &'static str {
    match style {
        CountdownStyle::Emphasized => EMPHASIZED_CLASS,
        CountdownStyle::Plain => PLAIN_CLASS,
    }
}

#[inline]
pub fn show_count(timer: &web::HtmlElement, remaining: u32, style: CountdownStyle) {
    let cl = timer.class_list();
    _ = cl.remove_2(EMPHASIZED_CLASS, PLAIN_CLASS);
    _ = cl.add_1(style_class(style));
    timer.set_text_content(Some(&remaining.to_string()));
}

/// Blank the timer. The zoom style goes with the text; the fixed style stays
/// so the next plain countdown does not jump.
#[inline]
pub fn clear(timer: &web::HtmlElement) {
    _ = timer.class_list().remove_1(EMPHASIZED_CLASS);
    timer.set_text_content(Some(""));
}

#[inline]
pub fn show_ready(timer: &web::HtmlElement) {
    _ = timer.class_list().remove_2(EMPHASIZED_CLASS, PLAIN_CLASS);
    timer.set_text_content(Some(READY_TEXT));
}
