pub mod session;

pub use session::{RoomPlayer, RoomSession};
