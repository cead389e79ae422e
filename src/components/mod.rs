//! UI Components for Punchdeck.

mod carousel;

pub use carousel::CarouselStage;
