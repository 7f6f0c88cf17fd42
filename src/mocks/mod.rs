//! Test fixtures for common iconik types.
//!
//! Wire-level stubbing belongs to `wiremock` in the integration tests;
//! these builders just produce plausible domain objects and paginated
//! bodies.

/// Fixture builders.
pub mod fixtures {
    use crate::pagination::PaginatedResponse;
    use crate::types::{Asset, Collection, SearchObject, User};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// Base timestamp fixtures count from.
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
    }

    /// Creates a test asset.
    pub fn asset(id: &str, title: &str) -> Asset {
        Asset {
            id: id.to_string(),
            title: title.to_string(),
            status: None,
            asset_type: None,
            external_id: None,
            date_created: Some(base_time()),
            date_modified: Some(base_time()),
            created_by_user: Some("user-1".to_string()),
            in_collections: Vec::new(),
            is_archived: false,
            is_online: true,
        }
    }

    /// Creates a test collection.
    pub fn collection(id: &str, title: &str) -> Collection {
        Collection {
            id: id.to_string(),
            title: title.to_string(),
            status: None,
            custom_order_status: None,
            parent_id: None,
            external_id: None,
            date_created: Some(base_time()),
            date_modified: Some(base_time()),
            created_by_user: Some("user-1".to_string()),
            is_root: false,
        }
    }

    /// Creates a test user.
    pub fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: Some(email.to_string()),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            status: None,
            user_type: None,
            groups: Vec::new(),
            photo_url: None,
            date_created: Some(base_time()),
            date_modified: None,
        }
    }

    /// Creates `count` search hits with ascending `date_created`, starting
    /// at `offset` seconds past the base time.
    pub fn search_objects(count: usize, offset: i64) -> Vec<SearchObject> {
        (0..count)
            .map(|i| SearchObject {
                id: format!("obj-{}", offset + i as i64),
                object_type: Some("assets".to_string()),
                title: Some(format!("Object {}", offset + i as i64)),
                date_created: Some(base_time() + Duration::seconds(offset + i as i64)),
                extra: serde_json::Map::new(),
            })
            .collect()
    }

    /// Wraps objects into one page of a multi-page listing.
    pub fn page<T>(objects: Vec<T>, page: u32, pages: u32, total: u64) -> PaginatedResponse<T> {
        let per_page = objects.len() as u32;
        PaginatedResponse {
            objects,
            page: Some(page),
            pages: Some(pages),
            per_page: Some(per_page),
            total: Some(total),
            first_url: None,
            last_url: None,
            next_url: None,
            prev_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures;

    #[test]
    fn test_fixtures() {
        let asset = fixtures::asset("a1", "Clip");
        assert_eq!(asset.id, "a1");

        let objects = fixtures::search_objects(3, 10);
        assert_eq!(objects.len(), 3);
        assert!(objects[0].date_created < objects[2].date_created);

        let page = fixtures::page(objects, 1, 2, 6);
        assert_eq!(page.per_page, Some(3));
        assert_eq!(page.total, Some(6));
    }
}
