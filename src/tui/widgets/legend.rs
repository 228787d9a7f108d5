//! Legend widget for the heatmap colour gradient

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::color_scale::ColorScale;

/// Gradient samples drawn between the two bounds
const STEPS: u64 = 5;

/// Legend widget showing `0 ██ ██ ██ ██ ██ <max>`
pub struct Legend {
    scale: ColorScale,
    label_style: Style,
}

impl Legend {
    pub fn new(scale: ColorScale, label_style: Style) -> Self {
        Self { scale, label_style }
    }

    /// Counts sampled evenly across the domain, both ends included
    pub fn sample_counts(&self) -> Vec<u64> {
        let domain = self.scale.domain();
        let span = (domain.hi - domain.lo) as u128;
        (0..STEPS)
            .map(|i| domain.lo + (span * i as u128 / (STEPS - 1) as u128) as u64)
            .collect()
    }

    /// Width needed to render the legend
    pub fn width(&self) -> u16 {
        let domain = self.scale.domain();
        let lo = domain.lo.to_string().len() as u16;
        let hi = domain.hi.to_string().len() as u16;
        // "<lo> " + STEPS cells of "██ " + "<hi>"
        lo + 1 + STEPS as u16 * 3 + hi
    }
}

impl Widget for Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < self.width() || area.height == 0 {
            return;
        }

        // Right-align the legend
        let start_x = area.x + area.width.saturating_sub(self.width());
        let y = area.y;
        let domain = self.scale.domain();

        let lo = format!("{} ", domain.lo);
        buf.set_string(start_x, y, &lo, self.label_style);
        let mut x = start_x + lo.len() as u16;

        for count in self.sample_counts() {
            let style = Style::default().fg(self.scale.color(count).into());
            buf.set_string(x, y, "██", style);
            x += 3;
        }

        buf.set_string(x, y, domain.hi.to_string(), self.label_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::color_scale::{ColorDomain, Rgb};
    use ratatui::style::Color;

    fn legend(max: u64) -> Legend {
        let scale = ColorScale::new(
            ColorDomain::new(0, max),
            Rgb::new(0, 0, 0),
            Rgb::new(200, 200, 200),
        );
        Legend::new(scale, Style::default())
    }

    #[test]
    fn test_sample_counts_cover_domain() {
        assert_eq!(legend(8).sample_counts(), vec![0, 2, 4, 6, 8]);
        assert_eq!(legend(1).sample_counts(), vec![0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_sample_counts_at_u64_max() {
        let samples = legend(u64::MAX).sample_counts();
        assert_eq!(samples.len(), STEPS as usize);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[2], u64::MAX / 2);
        assert_eq!(samples[4], u64::MAX);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_legend_width() {
        // "0 " + 5 * 3 + "12"
        assert_eq!(legend(12).width(), 19);
    }

    #[test]
    fn test_legend_render_endpoints() {
        let l = legend(8);
        let width = l.width();
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        l.render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "0");
        assert_eq!(buf.cell((2, 0)).unwrap().fg, Color::Rgb(0, 0, 0));
        assert_eq!(buf.cell((14, 0)).unwrap().fg, Color::Rgb(200, 200, 200));
        assert_eq!(buf.cell((width - 1, 0)).unwrap().symbol(), "8");
    }

    #[test]
    fn test_legend_skips_narrow_area() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        legend(8).render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }
}
