/// Logging port used by use cases and the diagnostic driver.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Records a failed smoke-test step along with its error.
    fn step_failed(&self, step: &str, error: &dyn std::error::Error) {
        self.error(&format!("{} failed: {}", step, error));
    }
}
