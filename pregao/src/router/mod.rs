pub mod batch;
pub mod gains;
pub mod history;
pub mod quote;

pub mod util;
