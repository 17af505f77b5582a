pub mod csv;
pub mod form_fields;
