pub mod jobs;
pub mod profiles;

#[cfg(test)]
pub mod memory;
