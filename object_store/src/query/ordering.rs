//! Query ordering vocabulary

/// Sort direction for a query ordering entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}
