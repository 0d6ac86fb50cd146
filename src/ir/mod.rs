pub mod temp;

pub use temp::TempNames;
