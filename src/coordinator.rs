// SPDX-License-Identifier: MPL-2.0
//! Stacking policy for visible toasts.
//!
//! The coordinator walks the attached toasts from the most recently attached
//! to the oldest and accumulates offsets from the anchor edge (bottom-right):
//! the newest toast sits closest to the anchor and older ones are pushed
//! outward, separated by a fixed gap. Hidden toasts take no room.

use crate::config::ToastConfig;
use crate::toast::{Toast, ToastId};
use crate::ui::design_tokens::{border, sizing, spacing, typography};

/// Measures the rendered height of a toast along the anchor axis.
pub trait Measure {
    fn height(&self, toast: &Toast) -> f32;
}

/// Every toast has the same height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHeight(pub f32);

impl Measure for FixedHeight {
    fn height(&self, _toast: &Toast) -> f32 {
        self.0
    }
}

/// Estimates the height of the rendered toast widget from its message.
///
/// The estimate mirrors the toast layout: `[icon] [message] [dismiss]` inside
/// a padded card of fixed width, with the message wrapping onto new lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMeasure {
    /// Width available to the message text.
    pub text_width: f32,
    /// Average glyph advance of the body font.
    pub glyph_width: f32,
    pub line_height: f32,
    /// Height of the card without any text line.
    pub chrome: f32,
    /// Minimum height of the content row (icon and dismiss button).
    pub min_content: f32,
}

impl Default for TextMeasure {
    fn default() -> Self {
        let icon_box = sizing::ICON_MD + 2.0 * spacing::XXS;
        let dismiss_box = sizing::ICON_SM + 2.0 * spacing::XXS;
        Self {
            text_width: sizing::TOAST_WIDTH
                - 2.0 * spacing::SM
                - icon_box
                - dismiss_box
                - 2.0 * spacing::SM,
            glyph_width: typography::BODY * 0.55,
            line_height: typography::BODY * 1.3,
            chrome: 2.0 * spacing::SM + 2.0 * border::WIDTH_MD,
            min_content: icon_box,
        }
    }
}

impl TextMeasure {
    /// Number of wrapped lines the message occupies (at least one).
    #[must_use]
    pub fn line_count(&self, message: &str) -> usize {
        let per_line = (self.text_width / self.glyph_width).floor().max(1.0) as usize;
        message
            .split('\n')
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum()
    }
}

impl Measure for TextMeasure {
    fn height(&self, toast: &Toast) -> f32 {
        let text = self.line_count(toast.message()) as f32 * self.line_height;
        text.max(self.min_content) + self.chrome
    }
}

/// Position assigned to one visible toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub id: ToastId,
    /// Distance from the anchor edge to the near side of the toast.
    pub offset: f32,
    pub height: f32,
}

impl Placement {
    /// Distance from the anchor edge to the far side of the toast.
    #[must_use]
    pub fn end(&self) -> f32 {
        self.offset + self.height
    }

    /// Returns whether two placements share space along the anchor axis.
    #[must_use]
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

/// Computes stacking offsets for the attached toasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinator {
    gap: f32,
    base_offset: f32,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default())
    }
}

impl Coordinator {
    /// Creates a coordinator; negative or non-finite values are treated as zero.
    #[must_use]
    pub fn new(gap: f32, base_offset: f32) -> Self {
        Self {
            gap: sanitize(gap),
            base_offset: sanitize(base_offset),
        }
    }

    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::new(config.clamped_gap(), config.clamped_base_offset())
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    #[must_use]
    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    /// Lays out `toasts`, given in attach order.
    ///
    /// Only visible toasts are placed. The result is ordered newest first,
    /// which is also the order of increasing offset.
    pub fn layout<'a, I>(&self, toasts: I, measure: &dyn Measure) -> Vec<Placement>
    where
        I: IntoIterator<Item = &'a Toast>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut cumulative = 0.0;
        toasts
            .into_iter()
            .rev()
            .filter(|toast| toast.is_visible())
            .map(|toast| {
                let height = sanitize(measure.height(toast));
                let placement = Placement {
                    id: toast.id(),
                    offset: self.base_offset + cumulative,
                    height,
                };
                cumulative += height + self.gap;
                placement
            })
            .collect()
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn visible(message: &str) -> Toast {
        let mut toast = Toast::new().with_message(message);
        toast.mark_visible();
        toast
    }

    #[test]
    fn newest_toast_sits_at_base_offset() {
        let toasts = vec![visible("first"), visible("second"), visible("third")];
        let coordinator = Coordinator::new(8.0, 16.0);
        let placements = coordinator.layout(&toasts, &FixedHeight(50.0));

        assert_eq!(placements.len(), 3);
        assert_eq!(placements[0].id, toasts[2].id());
        assert_abs_diff_eq!(placements[0].offset, 16.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(placements[1].offset, 74.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(placements[2].offset, 132.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn hidden_toasts_take_no_room() {
        let mut toasts = vec![visible("a"), visible("b"), visible("c")];
        toasts[1].mark_hidden();
        let placements = Coordinator::new(8.0, 0.0).layout(&toasts, &FixedHeight(40.0));

        let ids: Vec<_> = placements.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![toasts[2].id(), toasts[0].id()]);
        assert_abs_diff_eq!(placements[1].offset, 48.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn placements_never_overlap_and_keep_gap() {
        let toasts: Vec<_> = (0..6)
            .map(|i| visible(&"word ".repeat(i * 15)))
            .collect();
        let coordinator = Coordinator::new(8.0, 16.0);
        let placements = coordinator.layout(&toasts, &TextMeasure::default());

        for pair in placements.windows(2) {
            assert!(!pair[0].overlaps(&pair[1]));
            assert!(pair[1].offset - pair[0].end() >= 8.0 - F32_EPSILON);
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let toasts = vec![visible("one"), visible("two")];
        let coordinator = Coordinator::default();
        let measure = TextMeasure::default();
        assert_eq!(
            coordinator.layout(&toasts, &measure),
            coordinator.layout(&toasts, &measure)
        );
    }

    #[test]
    fn invalid_heights_are_clamped() {
        let toasts = vec![visible("a"), visible("b")];
        let placements = Coordinator::new(4.0, 0.0).layout(&toasts, &FixedHeight(f32::NAN));
        assert_abs_diff_eq!(placements[1].offset, 4.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn long_messages_wrap_onto_more_lines() {
        let measure = TextMeasure::default();
        assert_eq!(measure.line_count(""), 1);
        assert_eq!(measure.line_count("a\nb"), 2);
        assert!(measure.line_count(&"x".repeat(500)) > 3);

        let short = measure.height(&Toast::new().with_message("Saved"));
        let long = measure.height(&Toast::new().with_message("x".repeat(500)));
        assert!(long > short);
    }
}
