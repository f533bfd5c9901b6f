mod executor;
mod flatten;
mod output;

pub use executor::Executor;

#[cfg(test)]
mod tests;
