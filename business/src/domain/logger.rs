/// Logging port used by the application layer.
///
/// Implemented by the infrastructure logger so use cases stay free of any
/// concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
