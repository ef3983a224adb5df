use fltk::{frame::Frame, image::SvgImage, prelude::*};

/// Render SVG text into the preview frame, scaled to fit.
pub fn show_svg(frame: &mut Frame, svg: &str) -> Result<(), String> {
    let mut image = SvgImage::from_data(svg).map_err(|e| format!("Cannot display SVG: {}", e))?;
    let (w, h) = (frame.w().max(1), frame.h().max(1));
    image.scale(w, h, true, false);
    frame.set_label("");
    frame.set_image(Some(image));
    frame.redraw();
    Ok(())
}

/// Replace the preview with a text notice.
pub fn show_notice(frame: &mut Frame, text: &str) {
    frame.set_image(None::<SvgImage>);
    frame.set_label(text);
    frame.redraw();
}
