pub mod pagination;

pub use pagination::{
    paginate, PageQuery, PageResult, Pageable, PaginationConfig, SortDirection, SortOrder,
};
