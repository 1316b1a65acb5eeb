pub mod app;
pub mod events;
pub mod screens;
pub mod session;

pub use app::App;
pub use events::{map_key, Event, EventHandler};
pub use session::{Effect, Message, Session, TableMotion};
