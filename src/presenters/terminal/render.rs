use crate::core::config::visual_mode::VisualMode;
use crate::core::data::element::{Element, ElementState};

const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Draws one element per column, scaled against the largest value.
#[must_use]
pub fn render_values(elements: &[Element], mode: VisualMode) -> String {
    let max = elements.iter().map(|e| e.value).max().unwrap_or(0).max(1);

    elements
        .iter()
        .map(|element| {
            let level = (element.value as usize * (BAR_GLYPHS.len() - 1)) / max as usize;
            match mode {
                VisualMode::Bars => BAR_GLYPHS[level],
                VisualMode::Dots => {
                    if level >= BAR_GLYPHS.len() / 2 {
                        '•'
                    } else {
                        '·'
                    }
                }
                VisualMode::Blocks => '█',
                VisualMode::Particles => {
                    if level == 0 {
                        '.'
                    } else {
                        '*'
                    }
                }
            }
        })
        .collect()
}

/// One marker per element so state changes are visible without colour.
#[must_use]
pub fn render_states(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| match element.state {
            ElementState::Default => ' ',
            ElementState::Comparing => 'c',
            ElementState::Swapping => 's',
            ElementState::Sorted => '=',
            ElementState::Pivot => 'p',
        })
        .collect()
}
