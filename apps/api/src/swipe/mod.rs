// Swipe deck: the card-by-card flow over the catalog, with the toxicity
// interceptor in front of right-swipes on red-flagged postings.
// Session state travels with the client; the server stores nothing.

pub mod handlers;
pub mod session;

pub use session::{SwipeDirection, SwipeError, SwipeOutcome, SwipeSession};
