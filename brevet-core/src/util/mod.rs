pub mod datetime_ops;
