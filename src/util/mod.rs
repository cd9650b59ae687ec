pub mod logging;
pub mod testing;
