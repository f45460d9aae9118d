pub mod cli;
pub mod ctx;
pub mod io;
pub mod math;
pub mod peptide;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod sequence;
