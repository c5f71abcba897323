//! CodeCamp API Routes
//!
//! - /api/camps - Camp management (list, search, create, update, delete)
//! - /swagger-ui - OpenAPI documentation

pub mod camps;
pub mod swagger;
