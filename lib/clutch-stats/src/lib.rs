pub mod act;
pub mod aggregate;
pub mod rank;
pub mod season;

pub use act::filter_current_act;
pub use aggregate::{aggregate, find_player, headshot_pct, lobby_placement, AggregateStats};
pub use rank::rank_color;
pub use season::display_season;
