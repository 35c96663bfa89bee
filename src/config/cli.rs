use crate::core::Sink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalSink {
    target: Option<PathBuf>,
}

impl LocalSink {
    pub fn new(target: Option<PathBuf>) -> Self {
        Self { target }
    }
}

impl Sink for LocalSink {
    async fn write_output(&self, output: &str) -> Result<()> {
        match &self.target {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }

                fs::write(path, output)?;
            }
            None => {
                // 鎖住 stdout，並發寫入時逐份序列化
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(output.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    fn describe(&self) -> String {
        match &self.target {
            Some(path) => path.display().to_string(),
            None => "stdout".to_string(),
        }
    }
}
