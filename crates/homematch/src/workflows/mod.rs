pub mod intake;
pub mod placement;
