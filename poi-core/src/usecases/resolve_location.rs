use super::prelude::*;

pub async fn resolve_location(
    gw: &dyn GeoCodingGateway,
    query: &str,
) -> Result<ResolvedLocation> {
    let query = query.trim();
    if query.is_empty() {
        return Err(InvalidInput::EmptyLocation.into());
    }
    log::debug!("Resolving location '{query}'");
    match gw.resolve_place(query).await? {
        Some(location) => {
            log::debug!(
                "Resolved '{query}' to '{}' at {}",
                location.display_name,
                location.coordinate
            );
            Ok(location)
        }
        None => {
            log::info!("No location found for '{query}'");
            Err(Error::NotFound)
        }
    }
}
