//! TUI dialog components

mod task_input;

pub use task_input::{InputPurpose, TaskInputDialog};

#[derive(Debug, PartialEq)]
pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}
