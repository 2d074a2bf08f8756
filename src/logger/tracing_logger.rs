//! Adapter that forwards scope calls to the `tracing` ecosystem.

use std::sync::Arc;

use super::Logger;
use crate::record::{Args, Value};

/// Emits one `tracing` event per call, tagged with the scope id.
///
/// A leading string argument becomes the event message as given; placeholders
/// in it are not expanded. Every other argument is recorded, in order, in the
/// `args` field. `fatal` has no `tracing` counterpart and is emitted at
/// `ERROR` with `fatal = true`.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    scope: Arc<str>,
}

impl TracingLogger {
    pub fn new(scope: impl Into<Arc<str>>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

fn split(args: &Args) -> (&str, &[Value]) {
    match args.as_slice() {
        [Value::Str(message), rest @ ..] => (message.as_str(), rest),
        all => ("", all),
    }
}

impl Logger for TracingLogger {
    fn fatal(&self, args: &Args) {
        let (message, rest) = split(args);
        tracing::error!(scope = %self.scope, fatal = true, args = ?rest, "{}", message);
    }

    fn error(&self, args: &Args) {
        let (message, rest) = split(args);
        tracing::error!(scope = %self.scope, args = ?rest, "{}", message);
    }

    fn warn(&self, args: &Args) {
        let (message, rest) = split(args);
        tracing::warn!(scope = %self.scope, args = ?rest, "{}", message);
    }

    fn info(&self, args: &Args) {
        let (message, rest) = split(args);
        tracing::info!(scope = %self.scope, args = ?rest, "{}", message);
    }

    fn debug(&self, args: &Args) {
        let (message, rest) = split(args);
        tracing::debug!(scope = %self.scope, args = ?rest, "{}", message);
    }

    fn trace(&self, args: &Args) {
        let (message, rest) = split(args);
        tracing::trace!(scope = %self.scope, args = ?rest, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_message_and_args_are_kept_apart() {
        let logger = TracingLogger::new("svc-one");
        let output = capture(|| logger.warn(&Args::from(("disk at %d%%", 87))));
        assert!(output.contains("WARN"));
        assert!(output.contains("disk at %d%%"));
        assert!(output.contains("args=[I64(87)]"));
        assert!(output.contains("scope=svc-one"));
    }

    #[test]
    fn test_non_string_first_argument_stays_in_args() {
        let logger = TracingLogger::new("svc-one");
        let context = serde_json::json!({"a": 1});
        let output = capture(|| logger.info(&Args::from((context, "watch %s", "out"))));
        assert!(output.contains(r#"Str("watch %s"), Str("out")"#));
        assert!(!output.contains("watch out"));
    }

    #[test]
    fn test_fatal_is_flagged() {
        let logger = TracingLogger::new("svc-one");
        let output = capture(|| logger.fatal(&Args::from("run!!!")));
        assert!(output.contains("ERROR"));
        assert!(output.contains("fatal=true"));
    }

    #[test]
    fn test_every_level_emits_once() {
        let logger = TracingLogger::new("levels");
        let output = capture(|| {
            for level in crate::record::Level::ALL {
                logger.log(level, &Args::from(level.as_str()));
            }
        });
        assert_eq!(output.lines().count(), 6);
    }
}
