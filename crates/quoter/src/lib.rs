//! Command line harness around the `equilibrium` quote model.

pub mod arguments;
mod run;

pub use run::{run, start};
