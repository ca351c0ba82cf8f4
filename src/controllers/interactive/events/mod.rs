pub mod sort_event;
