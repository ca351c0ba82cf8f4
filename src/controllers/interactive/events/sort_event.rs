use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::run_controller::RunToken;
use crate::core::metrics::tracker::MetricsSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum SortEvent {
    Frame(FrameData),
    Tone { frequency: f64 },
    Metrics(MetricsSnapshot),
    RunFinished { token: RunToken },
}
