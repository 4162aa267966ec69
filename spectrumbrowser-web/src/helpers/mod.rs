pub mod alert;
pub mod form_fields;
pub mod navigation;
