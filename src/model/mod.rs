//! Domain models shared by the service, scheduler and bot layers.
//!
//! These types carry no I/O. Prompt content, parsed commands and the replies
//! that commands produce are all plain values so the services that build them
//! can be tested without a Discord connection.

pub mod activity;
pub mod command;
pub mod prompt;
pub mod reply;
