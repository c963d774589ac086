//! Content of the detail overlay, laid out for a given width.
//!
//! Shared by the renderer (to draw it) and by hit testing (to size the overlay box).

use crate::app::state::DetailView;
use crate::render::text::{ellipsize, truncate, wrap};

pub const DESCRIPTION_HEADING: &str = "School Description:";
pub const READING_LABEL: &str = "Avg. Reading Score:";
pub const WRITING_LABEL: &str = "Avg. Writing Score:";
pub const MATH_LABEL: &str = "Avg. Math Score:";
pub const SCORES_MISSING: &str = "Unable to find SAT scores for this school!";

/// Overview lines shown before the text is cut with an ellipsis.
pub const OVERVIEW_MAX_LINES: usize = 5;

/// One line of overlay body text, tagged with its role for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Title(String),
    Heading(String),
    Text(String),
    Score { label: &'static str, value: String },
    Blank,
}

/// Lay out the overlay body for an inner width of `width` columns and at most
/// `max_lines` rows.
///
/// The scores (or the fallback message) always come last and are kept visible: on
/// short screens the overview gives up lines first, then the title is cut to one
/// line.
pub fn detail_lines(detail: &DetailView<'_>, width: u16, max_lines: u16) -> Vec<DetailLine> {
    let width = width as usize;
    let max_lines = max_lines as usize;

    let scores: Vec<DetailLine> = match detail.scores {
        Some(scores) => [
            (READING_LABEL, &scores.reading),
            (WRITING_LABEL, &scores.writing),
            (MATH_LABEL, &scores.math),
        ]
        .into_iter()
        .map(|(label, value)| DetailLine::Score {
            label,
            value: value.clone(),
        })
        .collect(),
        None => wrap(SCORES_MISSING, width)
            .into_iter()
            .map(DetailLine::Heading)
            .collect(),
    };

    // Blank, heading, blank
    let frame_lines = 3 + scores.len();
    let mut title = wrap(&detail.school.school_name, width);
    if title.len() > 1 && title.len() + frame_lines > max_lines {
        title = vec![truncate(&detail.school.school_name, width)];
    }
    let overview_budget =
        OVERVIEW_MAX_LINES.min(max_lines.saturating_sub(title.len() + frame_lines));

    let mut lines: Vec<DetailLine> = title.into_iter().map(DetailLine::Title).collect();
    lines.push(DetailLine::Blank);
    lines.push(DetailLine::Heading(DESCRIPTION_HEADING.to_string()));
    lines.extend(
        ellipsize(
            wrap(&detail.school.overview_paragraph, width),
            overview_budget,
            width,
        )
        .into_iter()
        .map(DetailLine::Text),
    );
    lines.push(DetailLine::Blank);
    lines.extend(scores);

    lines
}
