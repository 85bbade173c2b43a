pub mod artifact;
pub mod intake;
pub mod plan;
pub mod session;
pub mod suggestion;
