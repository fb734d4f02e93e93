//! User-facing error reporting.

/// Receiver of user-facing error messages.
///
/// Navigation, selection and batch runs report recoverable problems here
/// instead of returning them, one message per problem.
pub trait ErrorSink {
    fn report_error(&mut self, message: &str);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &mut S {
    fn report_error(&mut self, message: &str) {
        (**self).report_error(message);
    }
}

/// Collects messages in order.
impl ErrorSink for Vec<String> {
    fn report_error(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
