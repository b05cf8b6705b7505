pub mod error;
pub mod formset;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use formset::{Formset, FormsetPrefix, RowId, RowMode, SubForm};
pub use ids::SubjectId;
pub use value_objects::{
    poolable_from_selection, FieldGroup, FieldVisibility, OptionEntry, SpendCategory,
    PLACEHOLDER_LABEL,
};
