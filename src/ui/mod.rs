//! Terminal UI: the interactive two-player game view.

mod app;
mod game_view;

pub use app::App;
