pub mod calculator;
pub mod flow;
pub mod selection;
pub mod tracker;
pub mod view;
pub mod view_model;

pub use view::AddOnCalculatorPage;
