//! Pure page controller.
//!
//! The controller never touches the DOM. The browser adapter turns events
//! into [`Message`]s, feeds them through [`PageController::update`], and
//! applies the returned [`Effect`]s. Everything in here runs natively, which
//! is how it is tested.

pub mod messages;
mod state;
mod update;

pub use messages::{Extent, LinkChannel, Message, ScrollSnapshot};
pub use state::{Capabilities, MobileMenu, PageController, PageInventory};
pub use update::{Effect, ScrollMode, Target};
