use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into header, body and footer.
///
/// On short terminals the header is kept first, then the footer; the body
/// may end up zero rows tall.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = area.height.saturating_sub(header_height).min(FOOTER_HEIGHT);
    let body_height = area.height - header_height - footer_height;

    let header = Rect {
        height: header_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: body_height,
        ..area
    };
    let footer = Rect {
        y: body.y + body_height,
        height: footer_height,
        ..area
    };
    (header, body, footer)
}
