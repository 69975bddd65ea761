pub mod task;
pub mod user;

pub use task::{NewTask, Task, TaskUpdate, DEFAULT_CATEGORY};
pub use user::User;
