use ratatui::layout::Rect;

const BUTTON_WIDTH: u16 = 28;
const BUTTON_HEIGHT: u16 = 9;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Centers a `width` x `height` box in `area`, clamped to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Hit area of the tap button for a terminal of size `area`.
pub fn button_rect(area: Rect) -> Rect {
    let body = body_rect(area);
    // Leave two rows under the button for the name and the error banner.
    let above = Rect {
        height: body.height.saturating_sub(4),
        ..body
    };
    centered_rect_by_size(BUTTON_WIDTH, BUTTON_HEIGHT, above)
}
