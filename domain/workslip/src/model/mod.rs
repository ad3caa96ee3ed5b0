pub mod entity;
pub mod vo;

/// An entity addressed by a string identifier in its repository.
pub trait AggregateRoot {
    fn id(&self) -> &str;
}
