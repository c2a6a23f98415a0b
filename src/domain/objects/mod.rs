mod display_ad;

pub use display_ad::*;
