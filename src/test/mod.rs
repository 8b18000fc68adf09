mod config;
mod queues;
mod report;
mod rng;
