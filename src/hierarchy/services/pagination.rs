//! Generic filter / sort / count / slice engine shared by every listing.
//!
//! Records are filtered by a case-sensitive substring search over a fixed
//! per-entity field set, ordered by the requested sort field with the entity
//! id as final tie-breaker, counted, and then sliced into one page. The id
//! tie-breaker makes the order total, so consecutive pages over an unchanged
//! set neither repeat nor skip records.

use crate::shared::{HiveError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Page defaults and bounds, passed explicitly to every use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page: u32,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl PaginationConfig {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const MAX_PAGE_SIZE: u32 = 100;

    pub fn new(default_page_size: u32, max_page_size: u32) -> Result<Self> {
        if default_page_size == 0 {
            return Err(HiveError::invalid(
                "default_page_size",
                "must be at least 1",
            ));
        }
        if max_page_size < default_page_size {
            return Err(HiveError::invalid(
                "max_page_size",
                format!(
                    "must be at least the default page size ({})",
                    default_page_size
                ),
            ));
        }
        Ok(Self {
            default_page: Self::DEFAULT_PAGE,
            default_page_size,
            max_page_size,
        })
    }

    /// Any page below 1 becomes the first page.
    pub fn normalize_page(&self, page: Option<i64>) -> u32 {
        match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => self.default_page,
        }
    }

    /// Sizes below 1 fall back to the default, sizes above the max are capped.
    pub fn normalize_page_size(&self, page_size: Option<i64>) -> u32 {
        match page_size {
            Some(size) if size < 1 => self.default_page_size,
            Some(size) if size > i64::from(self.max_page_size) => self.max_page_size,
            Some(size) => size as u32,
            None => self.default_page_size,
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: Self::DEFAULT_PAGE,
            default_page_size: Self::DEFAULT_PAGE_SIZE,
            max_page_size: Self::MAX_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(HiveError::invalid(
                "sort_dir",
                format!("'{}' is not one of Asc, Desc", s),
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "Asc"),
            SortDirection::Desc => write!(f, "Desc"),
        }
    }
}

/// Requested ordering: one entity-specific field plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortOrder<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Projection of an entity into the engine: searchable text fields,
/// a comparison per sort field, and a stable tie-breaker.
pub trait Pageable {
    type SortField: Copy + Default + FromStr<Err = HiveError> + fmt::Debug;

    /// Text fields the search term is matched against. Absent optional
    /// fields are simply left out.
    fn search_fields(&self) -> Vec<&str>;

    fn compare_by(&self, other: &Self, field: Self::SortField) -> Ordering;

    fn tie_breaker(&self) -> Uuid;

    /// True when any configured field contains `term` (case-sensitive).
    fn matches(&self, term: &str) -> bool {
        self.search_fields().iter().any(|field| field.contains(term))
    }
}

impl<T: Pageable + ?Sized> Pageable for &T {
    type SortField = T::SortField;

    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }

    fn compare_by(&self, other: &Self, field: Self::SortField) -> Ordering {
        (**self).compare_by(*other, field)
    }

    fn tie_breaker(&self) -> Uuid {
        (**self).tie_breaker()
    }
}

/// Normalized listing parameters, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery<F> {
    page: u32,
    page_size: u32,
    search: Option<String>,
    sort: SortOrder<F>,
}

impl<F: Copy> PageQuery<F> {
    /// Applies the page rules from `config` and drops blank search terms.
    pub fn normalize(
        config: &PaginationConfig,
        page: Option<i64>,
        page_size: Option<i64>,
        search: Option<&str>,
        sort: SortOrder<F>,
    ) -> Self {
        let search = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);

        Self {
            page: config.normalize_page(page),
            page_size: config.normalize_page_size(page_size),
            search,
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sort(&self) -> SortOrder<F> {
        self.sort
    }

    /// Number of matching records that precede this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1).saturating_mul(self.page_size as usize)
    }
}

/// One page of a filtered, sorted collection plus its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> PageResult<T> {
    /// `ceil(total / page_size)`, and 0 for an empty set or a zero size.
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Converts the items while keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }

    /// Like [`PageResult::map`], stopping at the first failed conversion.
    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> std::result::Result<U, E>,
    ) -> std::result::Result<PageResult<U>, E> {
        Ok(PageResult {
            items: self
                .items
                .into_iter()
                .map(f)
                .collect::<std::result::Result<_, _>>()?,
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        })
    }
}

/// Runs the query over `records`: filter, sort, count, slice.
pub fn paginate<T: Pageable>(
    records: impl IntoIterator<Item = T>,
    query: &PageQuery<T::SortField>,
) -> PageResult<T> {
    let mut matching: Vec<T> = match query.search() {
        Some(term) => records.into_iter().filter(|r| r.matches(term)).collect(),
        None => records.into_iter().collect(),
    };

    let sort = query.sort();
    matching.sort_by(|a, b| {
        let by_field = a.compare_by(b, sort.field);
        let by_field = match sort.direction {
            SortDirection::Asc => by_field,
            SortDirection::Desc => by_field.reverse(),
        };
        by_field.then_with(|| a.tie_breaker().cmp(&b.tie_breaker()))
    });

    let total = matching.len() as u64;
    let items = matching
        .into_iter()
        .skip(query.offset())
        .take(query.page_size() as usize)
        .collect();

    PageResult {
        items,
        page: query.page(),
        page_size: query.page_size(),
        total,
    }
}

/// Compares optional text so that absent values sort first.
pub fn compare_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.cmp(&b)
}
