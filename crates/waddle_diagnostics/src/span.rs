//! Span - 源码位置信息

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 收缩到 `source` 内部，并落在字符边界上
    ///
    /// 文件末尾的空 span（例如 Eof token）会扩成最后一个字符，
    /// 这样源码片段里总有东西可以标注。
    fn fit_to(&self, source: &str) -> Span;
}

impl SpanExt for Span {
    fn fit_to(&self, source: &str) -> Span {
        let len = source.len();
        let end = floor_boundary(source, self.end.min(len));
        let start = floor_boundary(source, self.start.min(end));
        if start < end || len == 0 {
            return start..end;
        }

        // 空 span：向后取一个字符，已在末尾则取最后一个字符
        match source[start..].chars().next() {
            Some(c) => start..start + c.len_utf8(),
            None => {
                let last = source.chars().next_back().map_or(0, char::len_utf8);
                len - last..len
            }
        }
    }
}

fn floor_boundary(source: &str, mut index: usize) -> usize {
    while !source.is_char_boundary(index) {
        index -= 1;
    }
    index
}
