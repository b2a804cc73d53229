//! User-facing strings. Kept in one table so the UI and tests agree on them.

use crate::search::Failure;

pub const HEADING: &str = "Tìm kiếm hình ảnh xe hơi";
pub const PLACEHOLDER: &str = "Nhập tên xe (ví dụ: Toyota, BMW, Honda)...";
pub const SUBMIT_IDLE: &str = "Tìm kiếm";
pub const SUBMIT_LOADING: &str = "Đang tìm...";
pub const LOADING: &str = "Đang tải hình ảnh...";
pub const VIEW_LINK: &str = "Xem trên Giphy";
pub const CLEAR: &str = "×";

pub const EMPTY_QUERY: &str = "Vui lòng nhập từ khóa tìm kiếm";
pub const NO_RESULTS: &str = "Không tìm thấy hình ảnh nào. Vui lòng thử từ khóa khác.";
pub const TIMEOUT: &str = "Kết nối quá chậm. Vui lòng kiểm tra đường truyền mạng và thử lại.";
pub const REQUEST_FAILED: &str = "Có lỗi xảy ra khi tải hình ảnh. Vui lòng thử lại sau.";

/// Look up the fixed message shown for a failure kind.
pub fn failure_message(failure: Failure) -> &'static str {
    match failure {
        Failure::EmptyQuery => EMPTY_QUERY,
        Failure::NoResults => NO_RESULTS,
        Failure::Timeout => TIMEOUT,
        Failure::Request => REQUEST_FAILED,
    }
}

/// Label for the submit button.
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        SUBMIT_LOADING
    } else {
        SUBMIT_IDLE
    }
}
