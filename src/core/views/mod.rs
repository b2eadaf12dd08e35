mod cursor;
mod dataset_view;
mod indexed_view;
mod predicate_view;

pub use cursor::{CursorItem, ViewCursor};
pub use dataset_view::{DatasetView, DatasetViewExt};
pub(crate) use dataset_view::write_view;
pub use indexed_view::IndexedView;
pub use predicate_view::{PredicateView, select_instances};
