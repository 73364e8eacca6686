//! numerical routines
/// square root with exact perfect squares: fixed 10-step Newton (reference) or converged Newton
pub mod square_root;
