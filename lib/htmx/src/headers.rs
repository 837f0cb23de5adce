pub use htmx_headers::{request, response};
