pub mod size;

pub use size::execute_size;
