mod bounded_integer;

pub use bounded_integer::{
    evaluate_commit, is_integer, is_non_negative, BoundedIntegerField,
    CommitOutcome, DayCountOwner,
};
