//! LiveKit adapter.
//!
//! Signs the access tokens browsers present when joining a live classroom.

mod token;

pub use token::{LiveKitClaims, LiveKitTokenIssuer, VideoGrant};
