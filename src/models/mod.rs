pub mod schedule;
pub mod todo;

pub use schedule::{ClassSession, DayOfWeek, ScheduleDay, SessionKind};
pub use todo::{NewTodoRequest, TodoCategory, TodoItem, TodoList};
