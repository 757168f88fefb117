pub mod button;

pub use button::{Button, default_buttons, dispatch, pointer_over};
