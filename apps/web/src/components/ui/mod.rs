mod alert;
mod button;
mod input;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use input::TextField;
pub(crate) use spinner::Spinner;
