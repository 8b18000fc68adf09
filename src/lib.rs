pub mod error;
pub mod net;
pub mod queue;
pub mod report;
pub mod rng;
pub mod runner;
pub mod sim;
pub mod topo;

#[cfg(test)]
mod test;
