mod boot;
mod hooks;
mod input;
mod output;
#[allow(clippy::module_inception)]
mod terminal;

pub use terminal::Terminal;
