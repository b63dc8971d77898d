//! Record a location assignment into the history log

use tracing::info;

use crate::common::ApiError;
use crate::domains::scanner::actions::resolve_code::normalize_code;
use crate::domains::scanner::models::{DetailHistory, Location};
use crate::kernel::ServerDeps;

/// Append a location assignment for a code.
///
/// The supplied location must already exist in the reference table; its
/// description is translated to the location code before the row is
/// written. There is no free-text location creation path.
pub async fn assign_location(
    raw_code: &str,
    location_description: &str,
    remarks: [String; 3],
    acting_user: &str,
    deps: &ServerDeps,
) -> Result<(), ApiError> {
    if raw_code.trim().is_empty() {
        return Err(ApiError::Validation("Code is required".to_string()));
    }

    let code = normalize_code(raw_code);

    let Some(location_code) =
        Location::code_for_description(location_description, &deps.db_pool).await?
    else {
        return Err(ApiError::LocationNotFound(
            location_description.trim().to_string(),
        ));
    };

    let row = DetailHistory::append(
        &code,
        location_code.trim(),
        &remarks,
        acting_user,
        &deps.db_pool,
    )
    .await?;

    info!(
        "Recorded location assignment {} for code {} by {}",
        row.autokey, code, acting_user
    );
    Ok(())
}
