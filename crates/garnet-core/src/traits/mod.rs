//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    BanRepository, LabelCount, ReportQuery, ReportRepository, RepoResult, SearchFilter, SortField,
    SortOrder, YearMonth,
};
