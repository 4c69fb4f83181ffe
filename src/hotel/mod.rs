// hotel - listing domain: persisted model, editable draft, validator, form controller

pub mod draft;
pub mod form;
pub mod model;
pub mod validation;

pub use draft::{FieldValue, HotelDraft, HotelField};
pub use form::HotelForm;
pub use model::{Hotel, HotelWithRooms, Room};
pub use validation::{validate, validate_field, FieldErrors};
