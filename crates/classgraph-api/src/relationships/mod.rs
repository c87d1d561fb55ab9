pub mod inheritance;

pub use inheritance::InheritanceRelation;
