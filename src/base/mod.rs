mod range;

pub use self::range::Range;
