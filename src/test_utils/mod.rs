//! Shared testing utilities.
//!
//! Provides a builder for assembling an [`AppState`](crate::state::AppState)
//! wired to fakes instead of Discord and the wall clock:
//!
//! - **TestBuilder** (`builder`) - Fluent configuration of a test environment
//! - **TestContext** (`context`) - The assembled state plus handles to the fakes
//! - **MockPlatform** (`platform`) - Recording in-memory `ChatPlatform`
//! - **ManualClock** (`clock`) - Clock that only moves when told to
//!
//! ```rust,ignore
//! let test = TestBuilder::new()
//!     .monitored(&[100])
//!     .platform(MockPlatform::new().with_channel(100, "general"))
//!     .build();
//!
//! test.clock.set(3600);
//! let report = test.sweeper().tick().await;
//! ```

pub mod builder;
pub mod clock;
pub mod context;
pub mod platform;

pub use builder::TestBuilder;
pub use clock::ManualClock;
pub use context::TestContext;
pub use platform::{MockPlatform, SentMessage};
