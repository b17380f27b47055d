//! Scroll geometry for the Header. Kept free of `web-sys` so the selection
//! rule is testable on the host; the component feeds it bounding-box spans.

/// Vertical offset past which the header switches to its elevated chrome.
pub const ELEVATION_THRESHOLD: f64 = 50.0;

/// Distance from the viewport top of the probe line used to pick the
/// active section.
pub const ACTIVE_PROBE_Y: f64 = 100.0;

pub fn elevated(scroll_y: f64) -> bool {
    scroll_y > ELEVATION_THRESHOLD
}

/// First section whose `(top, bottom)` span straddles the probe line, in
/// the order given. `None` means no section straddles it; the caller keeps
/// whatever was active before.
pub fn section_at<'a>(
    probe: f64,
    spans: impl IntoIterator<Item = (&'a str, f64, f64)>,
) -> Option<&'a str> {
    spans
        .into_iter()
        .find(|&(_, top, bottom)| top <= probe && bottom >= probe)
        .map(|(id, _, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(offset: f64) -> Vec<(&'static str, f64, f64)> {
        // four 600px sections stacked from the top of the document,
        // shifted up by the scroll offset
        ["home", "about", "projects", "contact"]
            .into_iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * 600.0 - offset;
                (id, top, top + 600.0)
            })
            .collect()
    }

    #[test]
    fn section_straddling_probe_line_wins() {
        // "about" spans 600..1200; scrolled down 700px its box is -100..500
        // and straddles the 100px line
        assert_eq!(section_at(ACTIVE_PROBE_Y, page(700.0)), Some("about"));
    }

    #[test]
    fn first_straddler_wins_in_order() {
        // adjacent sections share an edge exactly on the probe line
        let spans = [("home", -500.0, 100.0), ("about", 100.0, 700.0)];
        assert_eq!(section_at(100.0, spans), Some("home"));
    }

    #[test]
    fn no_straddler_yields_none() {
        // probe line sits in a gap between sections
        let spans = [("home", -500.0, 50.0), ("about", 300.0, 900.0)];
        assert_eq!(section_at(100.0, spans), None);
    }

    #[test]
    fn top_of_page_selects_home() {
        assert_eq!(section_at(ACTIVE_PROBE_Y, page(0.0)), Some("home"));
    }

    #[test]
    fn elevation_flips_past_threshold() {
        assert!(!elevated(0.0));
        assert!(!elevated(ELEVATION_THRESHOLD));
        assert!(elevated(ELEVATION_THRESHOLD + 1.0));
    }
}
