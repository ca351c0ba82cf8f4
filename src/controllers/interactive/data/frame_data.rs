use crate::controllers::run_controller::RunToken;
use crate::core::config::visual_mode::VisualMode;
use crate::core::data::element::Element;

/// One rendered state of the array. `token` is the run that produced it, or
/// the current token for frames caused by generate/reset.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub token: RunToken,
    pub elements: Vec<Element>,
    pub visual_mode: VisualMode,
}
