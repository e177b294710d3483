mod restore;
mod statistics;
mod todo;

pub(super) use self::restore::{RestoreSection, RestoreView};
pub(super) use self::statistics::StatisticsView;
pub(super) use self::todo::TodoView;
