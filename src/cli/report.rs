//! One-shot output for `show` and `json`

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use serde::Serialize;

use crate::tui::theme::Theme;
use crate::tui::widgets::layout::GridLayout;
use crate::tui::widgets::panel::{PanelContent, RhythmPanel};
use crate::types::{BinWarning, RhythmCell};

/// Render the panel into an off-screen buffer and return it as plain text
pub fn render_text(content: &PanelContent, layout: GridLayout, source: &str) -> String {
    let area = Rect::new(0, 0, layout.width(), RhythmPanel::height(&layout));
    let mut buf = Buffer::empty(area);
    RhythmPanel::new(content, layout, Theme::default())
        .with_source(source)
        .render(area, &mut buf);

    let mut lines: Vec<String> = (0..area.height)
        .map(|y| {
            let row: String = (0..area.width)
                .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// `json` command output
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonReport {
    Available {
        available: bool,
        max_count: u64,
        total: u64,
        peak: Option<RhythmCell>,
        cells: Vec<RhythmCell>,
        warnings: Vec<BinWarning>,
    },
    Unavailable {
        available: bool,
        reason: Option<String>,
    },
}

impl JsonReport {
    pub fn from_content(content: &PanelContent) -> Self {
        match content {
            PanelContent::Grid(binned) => Self::Available {
                available: true,
                max_count: binned.grid.max_count(),
                total: binned.grid.total(),
                peak: binned.grid.peak(),
                cells: binned.grid.cells().collect(),
                warnings: binned.warnings.clone(),
            },
            PanelContent::Unavailable(reason) => Self::Unavailable {
                available: false,
                reason: reason.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::RhythmBinner;
    use crate::tui::widgets::panel::FALLBACK_TEXT;
    use serde_json::json;

    fn content(payload: serde_json::Value) -> PanelContent {
        PanelContent::from_result(RhythmBinner::bin_payload(&payload)).unwrap()
    }

    #[test]
    fn test_render_text_fallback() {
        let text = render_text(
            &content(json!({"data": {}})),
            GridLayout::default(),
            "stdin",
        );
        assert_eq!(text, format!("Review Rhythm  stdin\n\n{}", FALLBACK_TEXT));
    }

    #[test]
    fn test_render_text_grid() {
        let text = render_text(
            &content(json!({"data": {"1": {"9": 5}}})),
            GridLayout::default(),
            "stdin",
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Review Rhythm  stdin");
        assert!(lines[2].starts_with("    00"));
        assert!(lines[4].starts_with("Mon ██ ██"));
        assert!(lines.last().unwrap().starts_with("5 reviews"));
    }

    #[test]
    fn test_json_report_available() {
        let report = JsonReport::from_content(&content(json!({"data": {"1": {"9": 5}}})));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["available"], true);
        assert_eq!(value["max_count"], 5);
        assert_eq!(value["total"], 5);
        assert_eq!(value["cells"].as_array().unwrap().len(), 168);
        assert_eq!(value["cells"][9], json!({"day": 0, "hour": 9, "count": 5}));
        assert_eq!(value["peak"]["hour"], 9);
    }

    #[test]
    fn test_json_report_unavailable() {
        let report = JsonReport::from_content(&PanelContent::Unavailable(Some("boom".into())));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, json!({"available": false, "reason": "boom"}));
    }
}
