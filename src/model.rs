pub mod window_list;

pub use window_list::{RenderEntry, WindowList, WindowVisual};

#[cfg(test)]
pub(crate) mod testing;
