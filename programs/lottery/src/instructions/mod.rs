pub use enter::*;
pub use get_players::*;
pub use initialize::*;
pub use pick_winner::*;

pub mod enter;
pub mod get_players;
pub mod initialize;
pub mod pick_winner;
