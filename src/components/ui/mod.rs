mod alert;
mod button;
mod spinner;
mod toaster;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use spinner::Spinner;
pub(crate) use toaster::Toaster;
