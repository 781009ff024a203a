//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

pub trait Appender: Send {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Flush and release the underlying resource. Further appends may fail.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}
