use crate::domain::model::{Invocation, Parity, ReportLine};

pub struct LineReporter;

impl LineReporter {
    /// 產生一次報告的所有行，依序：問候、每個索引的行號與奇偶行、結尾標記。
    /// 每次呼叫都建立新的迭代器，呼叫之間不共享狀態。
    pub fn report(count: i64, emit_end_marker: bool) -> impl Iterator<Item = ReportLine> {
        let iterations = count.max(0);

        std::iter::once(ReportLine::Greeting)
            .chain(
                (0..iterations)
                    .flat_map(|i| [ReportLine::Index(i), ReportLine::Parity(Parity::of(i))]),
            )
            .chain(emit_end_marker.then_some(ReportLine::EndMarker))
    }

    pub fn render(invocation: &Invocation) -> Vec<String> {
        Self::report(invocation.count, invocation.emit_end_marker)
            .map(|line| line.to_string())
            .collect()
    }
}
