//! Resolve a scanned code to its description and current location

use tracing::{debug, info};

use crate::common::ApiError;
use crate::domains::scanner::models::{CatalogItem, DetailHistory, ItemTemplate, Location};
use crate::kernel::ServerDeps;

/// Outcome of resolving a scanned code.
///
/// Empty strings stand in for "not yet assigned" at each optional stage;
/// the fields are never null.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub exists: bool,
    pub description: String,
    pub location_code: String,
    pub location: String,
}

impl Resolution {
    fn absent() -> Self {
        Self {
            exists: false,
            description: String::new(),
            location_code: String::new(),
            location: String::new(),
        }
    }
}

/// Normalize a scanned code: trim, uppercase, and fold non-breaking spaces
/// (handheld scanners paste them in) into regular spaces.
pub fn normalize_code(raw: &str) -> String {
    raw.replace('\u{00A0}', " ").trim().to_uppercase()
}

/// Resolve a scanned code against the master catalog, provisioning the
/// template row on first sight and translating the latest assigned
/// location code to its description.
pub async fn resolve_code(raw_code: &str, deps: &ServerDeps) -> Result<Resolution, ApiError> {
    if raw_code.trim().is_empty() {
        return Err(ApiError::Validation("Scanned code is missing.".to_string()));
    }

    let code = normalize_code(raw_code);

    // Unknown codes never provision anything
    let Some(item) = CatalogItem::find_by_code(&code, &deps.db_pool).await? else {
        debug!("Code not in master catalog: {}", code);
        return Ok(Resolution::absent());
    };

    // Lazy template provisioning; the primary key collapses concurrent
    // first resolutions into a single row
    if !ItemTemplate::exists(&code, &deps.db_pool).await? {
        ItemTemplate::insert_if_absent(&code, item.description.trim(), &deps.db_pool).await?;
        info!("Provisioned template for code {}", code);
    }

    let location_code = match DetailHistory::latest_for_code(&code, &deps.db_pool).await? {
        Some(row) => row.location_code.trim().to_string(),
        None => String::new(),
    };

    let location = if location_code.is_empty() {
        String::new()
    } else {
        Location::description_for_code(&location_code, &deps.db_pool)
            .await?
            .unwrap_or_default()
    };

    Ok(Resolution {
        exists: true,
        description: item.description.trim().to_string(),
        location_code,
        location,
    })
}
