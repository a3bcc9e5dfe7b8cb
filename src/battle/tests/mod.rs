pub mod common;

mod test_accuracy_pipeline;
mod test_end_to_end;
mod test_power_pipeline;
mod test_status_moves;
