use crate::models::{FilterQuery, PreferenceProfile};

/// Search radius (miles) used when a profile has a location but no radius
pub const DEFAULT_RADIUS_MILES: f64 = 50.0;

/// Translate a preference profile into a catalog filter query
///
/// Geography is always included when the profile has a location — the
/// catalog applies it as a pre-filter, it is never scored locally. With
/// `strict_filter` set, the attribute constraints (color, age bounds,
/// sex, breed) are pushed down as well, each only if present on the
/// profile. Without it the query is geography-only and attribute
/// matching is left to the scorer.
///
/// Pure function; a profile with nothing set yields an empty query,
/// meaning "all candidates".
pub fn build_query(profile: &PreferenceProfile, strict_filter: bool) -> FilterQuery {
    let mut query = FilterQuery::default();

    if let Some(location) = profile.location {
        query.lat = Some(location.latitude);
        query.lon = Some(location.longitude);
        query.radius = Some(profile.radius.unwrap_or(DEFAULT_RADIUS_MILES));
    }

    if strict_filter {
        query.color = profile.color.clone();
        query.min_age = profile.min_age();
        query.max_age = profile.max_age();
        query.sex = profile.sex.clone();
        query.breed = profile.breed.clone();
    }

    query
}
