//! Where everything goes on the cover
//!
//! Layout is plain arithmetic on fixed constants and measured widths.
//! Nothing is measured twice and nothing checks for overflow: a title with
//! too many lines simply runs off the bottom of the canvas.

use tcover_core::{
    consts::*,
    types::{Color, CoverStyle},
    Face,
};

use crate::canvas::Canvas;

/// A line of text and its origin on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Placement of every piece of text on a cover
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoverLayout {
    pub title: Vec<PlacedLine>,
    pub subtitle: Option<PlacedLine>,
}

/// Top of the first title line
pub const TITLE_TOP: u32 = CANVAS_HEIGHT / 3;

/// Wraps a subtitle in corner brackets
pub fn decorate_subtitle(subtitle: &str) -> String {
    format!("「{subtitle}」")
}

fn centered(text: String, y: f32, face: &dyn Face) -> PlacedLine {
    let width = face.bbox(&text).width();
    PlacedLine {
        x: (CANVAS_WIDTH as f32 - width) / 2.0,
        y,
        width,
        text,
    }
}

/// Places wrapped title lines and the optional subtitle
///
/// Title lines step down by `font_size + 15`. The subtitle sits below the
/// title at `lines × (font_size + 20) + 60`, so its gap grows a little with
/// every title line. An empty subtitle is not drawn.
pub fn layout_cover(
    lines: &[String],
    subtitle: Option<&str>,
    face: &dyn Face,
    font_size: u32,
) -> CoverLayout {
    let top = TITLE_TOP as f32;
    let font_size = font_size as f32;
    let title_step = font_size + TITLE_LINE_PADDING as f32;

    let title = lines
        .iter()
        .enumerate()
        .map(|(i, line)| centered(line.clone(), top + i as f32 * title_step, face))
        .collect();

    let subtitle = subtitle.filter(|s| !s.is_empty()).map(|s| {
        let offset =
            lines.len() as f32 * (font_size + SUBTITLE_LINE_PADDING as f32) + SUBTITLE_GAP as f32;
        centered(decorate_subtitle(s), top + offset, face)
    });

    CoverLayout { title, subtitle }
}

/// Paper ruling and the accent bar, drawn under the text
pub fn draw_background(canvas: &mut Canvas, style: &CoverStyle) {
    let (width, height) = (canvas.width(), canvas.height());

    let rules_end = height.saturating_sub(RULE_END_INSET);
    for y in (RULE_START_Y..rules_end).step_by(RULE_SPACING as usize) {
        canvas.hline(
            y,
            RULE_LEFT,
            width.saturating_sub(RULE_RIGHT_INSET),
            Color::RULE,
            RULE_WIDTH,
        );
    }

    canvas.vline(
        ACCENT_X,
        ACCENT_INSET,
        height.saturating_sub(ACCENT_INSET),
        style.accent,
        ACCENT_WIDTH,
    );
}

/// Draws every placed line in `color`
pub fn draw_layout(canvas: &mut Canvas, layout: &CoverLayout, face: &dyn Face, color: Color) {
    for line in layout.title.iter().chain(layout.subtitle.iter()) {
        canvas.draw_text(line.x, line.y, &line.text, face, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::tests::MockFace;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_title_lines_step_down_from_a_third() {
        let layout = layout_cover(&lines(&["abc", "de"]), None, &MockFace, 90);
        assert_eq!(layout.title.len(), 2);
        assert_eq!(layout.title[0].y, 533.0);
        assert_eq!(layout.title[1].y, 533.0 + 105.0);
        assert!(layout.subtitle.is_none());
    }

    #[test]
    fn test_lines_are_centered() {
        let layout = layout_cover(&lines(&["abc", "标题"]), None, &MockFace, 90);
        assert_eq!(layout.title[0].width, 30.0);
        assert_eq!(layout.title[0].x, 435.0);
        assert_eq!(layout.title[1].x, 430.0);
    }

    #[test]
    fn test_subtitle_sits_below_title() {
        let layout = layout_cover(&lines(&["a", "b", "c"]), Some("sub"), &MockFace, 90);
        let subtitle = layout.subtitle.unwrap();
        assert_eq!(subtitle.text, "「sub」");
        assert_eq!(subtitle.y, 533.0 + 3.0 * 110.0 + 60.0);
        // Two 20 px brackets around three 10 px letters
        assert_eq!(subtitle.width, 70.0);
        assert_eq!(subtitle.x, 415.0);
    }

    #[test]
    fn test_empty_subtitle_is_skipped() {
        let layout = layout_cover(&lines(&["a"]), Some(""), &MockFace, 90);
        assert!(layout.subtitle.is_none());
    }

    #[test]
    fn test_subtitle_without_title() {
        let layout = layout_cover(&[], Some("only"), &MockFace, 90);
        assert!(layout.title.is_empty());
        assert_eq!(layout.subtitle.unwrap().y, 593.0);
    }

    #[test]
    fn test_huge_font_size_does_not_overflow() {
        let layout = layout_cover(&lines(&["a", "b"]), Some("s"), &MockFace, u32::MAX);
        assert!(layout.title[1].y > CANVAS_HEIGHT as f32);
        assert!(layout.subtitle.unwrap().y > layout.title[1].y);
    }

    #[test]
    fn test_background_decoration() {
        let style = CoverStyle::default();
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, style.background).unwrap();
        draw_background(&mut canvas, &style);

        // Rulings every 45 px from 140, last one at 1490
        assert_eq!(canvas.pixel(400, 140), Some(Color::RULE));
        assert_eq!(canvas.pixel(400, 185), Some(Color::RULE));
        assert_eq!(canvas.pixel(400, 1490), Some(Color::RULE));
        assert_eq!(canvas.pixel(400, 1535), Some(style.background));
        assert_eq!(canvas.pixel(400, 160), Some(style.background));
        assert_eq!(canvas.pixel(99, 140), Some(style.background));
        assert_eq!(canvas.pixel(851, 140), Some(style.background));

        // Accent bar, 5 px wide around x=90
        assert_eq!(canvas.pixel(90, 110), Some(style.accent));
        assert_eq!(canvas.pixel(92, 1490), Some(style.accent));
        assert_eq!(canvas.pixel(90, 1491), Some(style.background));
        assert_eq!(canvas.pixel(90, 109), Some(style.background));
    }
}
