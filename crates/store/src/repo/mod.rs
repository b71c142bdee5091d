pub mod films;
pub mod shows;
