// Contact form: boundary validation, storage backends, POST handler.

pub mod handlers;
pub mod store;
pub mod validation;
