//! Task domain: types, status resolution, and draft assembly.

mod assembler;
mod status;
mod types;

pub use assembler::{
    assemble_for_create, assemble_for_create_at, assemble_for_edit, assemble_for_edit_at,
};
pub use status::{resolve_status, Status};
pub use types::{CreateTaskRequest, EditTaskRequest, Priority, TaskDraft, MIN_TITLE_LEN};
