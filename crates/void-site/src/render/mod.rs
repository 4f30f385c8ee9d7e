//! HTML rendering for the site.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation with automatic XSS protection (all dynamic values are escaped).
//! Every renderer is a pure function of its inputs.

pub mod cards;
pub mod components;
pub mod entry;
pub mod home;
pub mod subscribe;
