/// Anything that carries an optional home city (typically a user record).
///
/// The weather service only needs this accessor, so it does not depend on
/// the persistence layer.
pub trait HasCity {
    fn city(&self) -> Option<&str>;
}
