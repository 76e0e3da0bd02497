// Session state and the transitions over it: paywall gate, page router,
// premium upgrade. Transition functions are synchronous and take the state
// by `&mut`; the store serialises access per session.

pub mod gate;
pub mod handlers;
pub mod model;
pub mod navigation;
pub mod premium;
pub mod store;
