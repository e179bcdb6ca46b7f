//! Elliptic-curve signature schemes over binary fields

pub mod dstu4145;
