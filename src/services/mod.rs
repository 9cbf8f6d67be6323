pub mod backend;
pub mod http_backend;
#[cfg(test)]
pub mod mock;

pub use backend::Backend;
pub use http_backend::HttpBackend;
