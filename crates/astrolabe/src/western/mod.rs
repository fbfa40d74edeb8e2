pub mod zodiac;

pub use zodiac::{degree_in_sign, normalize_degrees, Element, Quality, Sign, SIGN_SPAN};
