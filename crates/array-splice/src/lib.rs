//! Minimal splice diffs for arrays.
//!
//! Turns either two array snapshots or a stream of raw change records into an
//! ordered list of non-overlapping [`Splice`]s describing how the array
//! changed.
//!
//! # Example
//!
//! ```
//! use array_splice::{calculate_splices, project_array_splices, ChangeRecord, Splice};
//!
//! // Diff two snapshots.
//! let splices = calculate_splices(&["a", "b", "x", "z"], &["a", "b", "c", "z"]);
//! assert_eq!(splices, vec![Splice::new(2, vec!["c"], 1)]);
//!
//! // Project raw records: insert one element at 0, then overwrite index 2.
//! let array = vec!["new", "a", "B"];
//! let records = vec![
//!     ChangeRecord::splice(0, vec![], 1),
//!     ChangeRecord::update("2", "b"),
//! ];
//! assert_eq!(
//!     project_array_splices(&array, &records),
//!     vec![Splice::new(0, vec![], 1), Splice::new(2, vec!["b"], 1)],
//! );
//! ```

pub mod apply;
pub mod calc;
pub mod cli;
pub mod edit_distance;
pub mod edit_script;
pub mod equality;
pub mod fuzzer;
pub mod merge;
pub mod observer;
pub mod project;
pub mod splice;

pub use apply::{apply_splices, ApplyError};
pub use calc::{calculate_splices, ArraySplice};
pub use edit_distance::{calc_edit_distances, DistanceMatrix};
pub use edit_script::splice_operations_from_edit_distances;
pub use equality::{DefaultEquals, Equals};
pub use fuzzer::MutationFuzzer;
pub use merge::{intersect, merge_splice};
pub use observer::ArrayObserver;
pub use project::{array_index, create_initial_splices, project_array_splices, ChangeRecord};
pub use splice::{EditOp, Splice};
