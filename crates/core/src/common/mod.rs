use serde::{Deserialize, Serialize};

/// # Summary
/// 分页请求参数，描述调用方期望的页码与页大小。
///
/// # Invariants
/// - `page` 从 0 开始计数。
/// - `size` 必须大于 0；非法值应在 API 边界被拒绝，存储层不再校验。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    // 页码 (0-based)
    pub page: u32,
    // 每页记录数
    pub size: u32,
}

impl PageRequest {
    /// 默认页大小
    pub const DEFAULT_SIZE: u32 = 50;

    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// 换算为 SQL OFFSET 值
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// # Summary
/// 分页查询结果，携带当前页内容与总记录数。
///
/// # Invariants
/// - `content.len() <= size`。
/// - `total_elements` 是过滤条件下的全量计数，与当前页无关。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    // 当前页内容
    pub content: Vec<T>,
    // 页码 (0-based)
    pub page: u32,
    // 每页记录数
    pub size: u32,
    // 满足条件的总记录数
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
        }
    }

    /// 总页数 (向上取整)
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            0
        } else {
            self.total_elements.div_ceil(u64::from(self.size))
        }
    }

    /// 逐项转换页内容，保留分页元数据
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_offset() {
        let req = PageRequest::new(3, 20);
        assert_eq!(req.offset(), 60);
    }

    #[test]
    fn page_total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(0, 3), 10);
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 5);
        let mapped = page.map(|v| v.to_string());
        assert_eq!(mapped.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_elements, 5);
    }
}
