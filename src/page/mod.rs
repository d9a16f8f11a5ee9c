//! The page controller: view state, intents and the fetch-and-render cycle.

mod controller;
mod intent;
mod model;
mod reducer;
mod state;

pub use controller::{DispatchOutcome, Storefront};
pub use intent::PageIntent;
pub use model::{LoadPhase, PageModel};
pub use reducer::ViewReducer;
pub use state::{ViewState, PAGE_SIZE};
