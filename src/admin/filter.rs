use sea_orm::Select;

use crate::{SoftDeleteSelectExt, SoftDeleteTrait};

/// A three-state list filter over the deletion state of the rows shown
/// in an administrative listing.
///
/// The state is carried in a request parameter and lives only for the
/// current request; nothing is persisted between listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeletedStateFilter {
    /// No filtering; every row regardless of deletion state. The default
    /// when the parameter is absent or unrecognized.
    #[default]
    All,
    /// Only rows that have not been soft deleted
    ExcludeDeleted,
    /// Only soft deleted rows
    DeletedOnly,
}

impl DeletedStateFilter {
    /// Title of the filter control
    pub const TITLE: &'static str = "Deleted";

    /// Request parameter the filter reads its state from
    pub const PARAMETER_NAME: &'static str = "deleted_at";

    /// The selectable states as `(value, label)` pairs, for rendering the
    /// filter control. The unset default is not listed.
    pub fn lookups() -> [(&'static str, &'static str); 2] {
        [
            ("exclude_deleted", "Exclude deleted"),
            ("deleted_only", "Deleted Only"),
        ]
    }

    /// Parse the submitted parameter value
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("exclude_deleted") => Self::ExcludeDeleted,
            Some("deleted_only") => Self::DeletedOnly,
            _ => Self::All,
        }
    }

    /// Rewrite a listing queryset with the predicate for this state
    pub fn apply<E>(self, select: Select<E>) -> Select<E>
    where
        E: SoftDeleteTrait,
    {
        match self {
            Self::All => select,
            Self::ExcludeDeleted => select.exclude_deleted(),
            Self::DeletedOnly => select.deleted_only(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeletedStateFilter;
    use crate::admin;
    use crate::tests_cfg::post;
    use pretty_assertions::assert_eq;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn from_value() {
        assert_eq!(DeletedStateFilter::from_value(None), DeletedStateFilter::All);
        assert_eq!(
            DeletedStateFilter::from_value(Some("exclude_deleted")),
            DeletedStateFilter::ExcludeDeleted
        );
        assert_eq!(
            DeletedStateFilter::from_value(Some("deleted_only")),
            DeletedStateFilter::DeletedOnly
        );
        // unrecognized values leave the listing unfiltered
        assert_eq!(
            DeletedStateFilter::from_value(Some("gibberish")),
            DeletedStateFilter::All
        );
    }

    #[test]
    fn apply_rewrites_the_listing() {
        let all = "SELECT `post`.`id`, `post`.`title`, `post`.`text`, `post`.`deleted_at` FROM `post`";

        assert_eq!(
            DeletedStateFilter::All
                .apply(admin::listing::<post::Entity>())
                .build(DbBackend::MySql)
                .to_string(),
            all
        );
        assert_eq!(
            DeletedStateFilter::ExcludeDeleted
                .apply(admin::listing::<post::Entity>())
                .build(DbBackend::MySql)
                .to_string(),
            format!("{all} WHERE `post`.`deleted_at` IS NULL")
        );
        assert_eq!(
            DeletedStateFilter::DeletedOnly
                .apply(admin::listing::<post::Entity>())
                .build(DbBackend::MySql)
                .to_string(),
            format!("{all} WHERE `post`.`deleted_at` IS NOT NULL")
        );
    }
}
