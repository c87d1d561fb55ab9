pub mod class;

pub use class::ClassRecord;
