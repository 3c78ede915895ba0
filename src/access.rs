//! Identity and role gates. Purely predicates over the session user; there is
//! no escalation path.

use crate::{
    error::AppError,
    models::{Product, User},
};

pub fn can_sell(user: Option<&User>) -> bool {
    user.is_some()
}

pub fn can_access_admin(user: Option<&User>) -> bool {
    user.is_some_and(User::is_admin)
}

/// Only the owner may edit, admins included.
pub fn can_edit(user: Option<&User>, product: &Product) -> bool {
    user.is_some_and(|u| u.email == product.owner)
}

pub fn can_delete(user: Option<&User>, product: &Product) -> bool {
    can_edit(user, product) || can_access_admin(user)
}

pub fn ensure_user(user: Option<&User>) -> Result<&User, AppError> {
    user.ok_or(AppError::AuthRequired)
}

pub fn ensure_admin(user: Option<&User>) -> Result<&User, AppError> {
    let user = ensure_user(user)?;
    if !user.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

pub fn ensure_can_edit(user: Option<&User>, product: &Product) -> Result<(), AppError> {
    ensure_user(user)?;
    if !can_edit(user, product) {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_can_delete(user: Option<&User>, product: &Product) -> Result<(), AppError> {
    ensure_user(user)?;
    if !can_delete(user, product) {
        return Err(AppError::Forbidden);
    }
    Ok(())
}
