const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// 格式化字节数：B / KB / MB，MB 以上不再进位
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
