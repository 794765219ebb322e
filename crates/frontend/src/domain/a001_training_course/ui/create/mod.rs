//! Course Create Form
//!
//! MVVM:
//! - view_model.rs: команды формы поверх состояния портала
//! - view.rs: Leptos-компонент (только разметка)

mod view;
mod view_model;

pub use view::CourseCreateForm;
pub use view_model::CourseCreateViewModel;
