use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 單次 reporter 呼叫的參數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub count: i64,
    pub emit_end_marker: bool,
}

impl Invocation {
    pub fn new(count: i64, emit_end_marker: bool) -> Self {
        Self {
            count,
            emit_end_marker,
        }
    }

    /// 負數視為零次迭代
    pub fn iterations(&self) -> i64 {
        self.count.max(0)
    }

    pub fn line_count(&self) -> usize {
        1 + 2 * self.iterations() as usize + usize::from(self.emit_end_marker)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(index: i64) -> Self {
        if index % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Even number"),
            Parity::Odd => write!(f, "Odd number"),
        }
    }
}

/// 報告輸出的單行，渲染後即為最終文字
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Greeting,
    Index(i64),
    Parity(Parity),
    EndMarker,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Greeting => write!(f, "Hello, World!"),
            ReportLine::Index(i) => write!(f, "This is line {}", i),
            ReportLine::Parity(p) => write!(f, "{}", p),
            ReportLine::EndMarker => write!(f, "End of function"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub invocations: Vec<Invocation>,
    pub lines: Vec<String>,
    pub text_output: String,
    pub json_output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub generated_at: DateTime<Utc>,
    pub line_count: usize,
    pub lines: Vec<String>,
}
