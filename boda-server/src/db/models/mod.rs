//! Database models
//!
//! Row structs mirror the SQLite schema; wire names stay Spanish because the
//! dashboard consumes them as-is.

pub mod account;
pub mod guest;
pub mod hotel;
pub mod payment;
pub mod room;
pub mod wedding_config;

pub use account::Account;
pub use guest::{Guest, GuestCreate, GuestUpdate, GuestWithBalance};
pub use hotel::{Hotel, HotelRow, HotelUpsert};
pub use payment::{Payment, PaymentCreate, PaymentWithGuest};
pub use room::{Room, RoomCreate, RoomUpdate};
pub use wedding_config::{WeddingConfig, WeddingConfigUpsert};
