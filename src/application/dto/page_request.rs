use crate::hierarchy::services::{PageQuery, PaginationConfig, SortDirection, SortOrder};
use crate::shared::{HiveError, Result};
use serde::Deserialize;
use std::str::FromStr;

/// PageRequest - raw listing parameters shared by all three listings
///
/// Every field is optional. Defaults: page 1, page size 10, the entity's
/// default sort field, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_dir: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_dir = Some(sort_dir.into());
        self
    }

    /// Normalizes the request into a runnable query for sort field type `F`.
    ///
    /// This is the single normalization path used by every listing, so
    /// out-of-range pages and sizes are coerced the same way everywhere.
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown sort field or direction. Blank
    /// values fall back to the defaults.
    pub fn to_query<F>(&self, config: &PaginationConfig) -> Result<PageQuery<F>>
    where
        F: Copy + Default + FromStr<Err = HiveError>,
    {
        let field = match non_blank(self.sort_by.as_deref()) {
            Some(raw) => raw.parse::<F>()?,
            None => F::default(),
        };
        let direction = match non_blank(self.sort_dir.as_deref()) {
            Some(raw) => raw.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        Ok(PageQuery::normalize(
            config,
            self.page_number,
            self.page_size,
            self.search.as_deref(),
            SortOrder::new(field, direction),
        ))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
