//! The seven phases, in solving order.

mod orient_yellow_corners;
mod position_yellow_corners;
mod second_layer;
mod white_corners;
mod white_cross;
mod yellow_cross;
mod yellow_edges;

pub use orient_yellow_corners::OrientYellowCorners;
pub use position_yellow_corners::PositionYellowCorners;
pub use second_layer::SecondLayer;
pub use white_corners::WhiteCorners;
pub use white_cross::WhiteCross;
pub use yellow_cross::YellowCross;
pub use yellow_edges::YellowEdges;
