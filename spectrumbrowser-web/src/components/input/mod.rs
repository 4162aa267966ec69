mod bounded_integer_box;

pub use bounded_integer_box::BoundedIntegerBox;
