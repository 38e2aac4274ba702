use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
};

/// Admin policy: gates every mutation on Project, Qualification and Contact,
/// which carry no owner of their own. Failure is 403, never 401; callers
/// reach a policy only with a verified identity.
pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if !claims.is_admin {
        return Err(AppError::Forbidden(
            "Admin resource. Access denied.".to_string(),
        ));
    }
    Ok(())
}

/// Composed gate for the User resource: the profile owner may act on their
/// own record, an admin may act on anyone's.
pub fn require_owner_or_admin(claims: &Claims, resource_owner_id: &str) -> AppResult<()> {
    if !claims.is_admin && claims.sub != resource_owner_id {
        return Err(AppError::Forbidden("User is not authorized".to_string()));
    }
    Ok(())
}
