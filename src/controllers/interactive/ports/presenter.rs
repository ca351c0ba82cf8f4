use crate::controllers::interactive::errors::presenter::PresenterError;
use crate::controllers::interactive::events::sort_event::SortEvent;

/// Receives frames, tones and metrics from the worker thread.
///
/// Failures are logged and dropped by the controller; a presenter can never
/// abort a run.
pub trait SortPresenterPort: Send + Sync {
    fn present(&self, event: SortEvent) -> Result<(), PresenterError>;
}
