use queues::customer::Customer;

use std::fs::File;
use std::io::prelude::*;
use std::io::Result;

// Buffered CSV dump of customer records. Columns: t0, t1, t2, seat_id,
// server_id, waiting time, sojourn time.
pub struct FileLogger {
    buffer: Vec<Customer>,
    buffer_size: usize,
    file: File,
    init: bool,
}

impl FileLogger {
    pub fn new(buffer_size: usize, filename: &str) -> Result<FileLogger> {
        Ok(FileLogger {
            buffer: Vec::with_capacity(buffer_size),
            buffer_size,
            file: File::create(filename)?,
            init: true,
        })
    }

    pub fn log(&mut self, cus: Customer) {
        self.buffer.push(cus);
        if self.buffer.len() >= self.buffer_size {
            self.dump_log().expect("Failed to write log");
        }
    }

    fn dump_log(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        if self.init {
            self.init = false;
        } else {
            // Lines have been dumped before, close them off first.
            self.file.write_all("\n".as_bytes())?;
        }
        let s: Vec<String> = self
            .buffer
            .drain(..)
            .map(|cus: Customer| {
                format!(
                    "{},{},{},{},{},{},{}",
                    cus.t0,
                    cus.t1,
                    cus.t2,
                    cus.seat_id,
                    cus.server_id,
                    cus.waiting_time(),
                    cus.sojourn_time()
                )
            })
            .collect();
        self.file.write_all(s.join("\n").as_bytes())
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.dump_log().expect("Failed to write log on drop");
    }
}
