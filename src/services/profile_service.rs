use crate::{
    access::ensure_user,
    dto::profile::ProfileView,
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
    views::{my_listings, my_orders},
};

pub async fn get_profile(state: &AppState) -> AppResult<ApiResponse<ProfileView>> {
    let session = state.session().await;
    let user = ensure_user(session.user())?;

    let listings: Vec<_> = my_listings(session.products(), Some(user))
        .into_iter()
        .cloned()
        .collect();
    let orders: Vec<_> = my_orders(session.orders(), Some(user))
        .into_iter()
        .cloned()
        .collect();

    Ok(ApiResponse::success(
        "Profile",
        ProfileView {
            user: user.clone(),
            listings,
            orders,
        },
        Some(Meta::empty()),
    ))
}
