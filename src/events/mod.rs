//! Event types and observers used by the movement core.
//!
//! Buffered messages carry input streams (touch samples, decoded intents);
//! observer events carry reactions (contacts, phase transitions).
//!
//! Submodules:
//! - [`contact`] – contact notifications and the contact landing observer
//! - [`intent`] – touch samples and decoded player intents
//! - [`phase`] – phase transition notifications for the render host
pub mod contact;
pub mod intent;
pub mod phase;
