//! Client application state for the Nucless storefront
//!
//! Holds the state a storefront UI shell needs: the current route, the
//! in-memory cart, and the authenticated session mirrored to durable local
//! storage so it survives reloads. The checkout module builds the WhatsApp
//! handoff that confirms an order with the shop's admin.
//!
//! The state is an explicit struct passed to whatever renders it; there are
//! no ambient globals, and persistence is a scoped load-at-start /
//! save-on-change pair.

pub mod checkout;
pub mod state;
pub mod storage;

pub use checkout::{DEFAULT_ADMIN_WHATSAPP, OrderLine, OrderSummary, whatsapp_url};
pub use state::{AppState, CartItem, Route, StoredSession, StoredUser};
pub use storage::SessionStore;
