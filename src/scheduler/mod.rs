//! Scheduled jobs.
//!
//! - `inactivity` - Periodic sweep that revives quiet channels

pub mod inactivity;

#[cfg(test)]
mod test;
