mod runner;

pub use runner::Feeds;
