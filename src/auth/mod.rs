pub mod claims;
pub mod extract;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;

pub use claims::Claims;
pub use jwt::TokenService;
pub use middleware::AuthenticatedUser;
pub use policy::{require_admin, require_owner_or_admin};
