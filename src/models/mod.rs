pub mod answer;
pub mod samples;

pub use answer::Answer;
pub use samples::SAMPLE_QUESTIONS;
